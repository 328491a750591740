//! Release version resolution
//!
//! This module turns user supplied version requests (`v1.10.3`, `stable-1`,
//! `ci/latest-1.10`) into canonical release versions, consulting the release
//! bucket for labels.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Pattern   │◀────│  Resolver   │────▶│   Fetcher   │
//! │ (classify)  │     │ (recursive) │     │   (HTTP)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   Bucket    │     │  Fallback   │
//! │ (base URL)  │     │(client ver.)│
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`pattern`]: Literal version, label and bucket-prefix rules
//! - [`bucket`]: Bucket URL derivation and CI classification
//! - [`fetcher`]: Fetcher trait for label files
//! - [`fetchers`]: Concrete fetcher implementations (HTTP)
//! - [`resolver`]: Recursive resolution with offline fallback
//! - [`fallback`]: Fallback version derived from the client's own version
//! - [`image_tag`]: Conversion of versions into image tags
//! - [`error`]: Error types for fetching and resolution

pub mod bucket;
pub mod error;
pub mod fallback;
pub mod fetcher;
pub mod fetchers;
pub mod image_tag;
pub mod pattern;
pub mod resolver;

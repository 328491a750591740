//! Kubernetes release version resolution
//!
//! Resolves literal versions and release labels such as `stable`, `latest-1`
//! or `ci/latest-1.10` into canonical `vX.Y.Z[-pre]` versions.

pub mod config;
pub mod version;

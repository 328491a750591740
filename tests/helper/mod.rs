//! Shared test utilities

mod fetcher;

pub use fetcher::MockFetcher;

/// Data layer: catalog listing, recording parsing, caching, statistics.
///
/// Architecture:
/// ```text
///   data directory
///        │
///        ▼
///   ┌──────────┐
///   │ catalog   │  list entries → filenames (memoized per directory)
///   └──────────┘
///        │ selected file
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Recording
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  memoize Arc<Recording> per path
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  per-channel describe() for the summary table
///   └──────────┘
/// ```
pub mod cache;
pub mod catalog;
pub mod error;
pub mod loader;
pub mod model;
pub mod stats;

#[cfg(test)]
pub mod testutil;

pub use error::DataError;

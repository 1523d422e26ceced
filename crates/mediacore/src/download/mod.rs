//! Download routing and fetching

pub mod error;
pub mod router;
pub mod source;

// Re-exports for convenience
pub use error::DownloadError;
pub use router::{classify, Route};
pub use source::{DownloadRequest, DownloadResult, Fetchers, MediaKind, MediaSource};

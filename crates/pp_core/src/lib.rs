pub mod categorize;
pub mod date;
pub mod error;
pub mod export;
pub mod fetch;
pub mod recency;
pub mod types;
pub mod links;

pub use categorize::{Categorizer, CategoryRule};
pub use date::DateParser;
pub use error::{Error, Result};
pub use export::{ExportOptions, ReleaseExporter};
pub use fetch::{FetchRequest, PageFetcher};
pub use recency::RecencyWindow;
pub use types::{Category, PressRelease, SourceMetadata};

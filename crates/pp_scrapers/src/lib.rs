pub mod cli;
pub mod driver;
pub mod fetch;
pub mod logging;
pub mod manager;
pub mod scrapers;

pub use cli::{handle_command, ScrapeArgs, ScraperCommands};
pub use driver::{PaginationDriver, SourceRun, StopReason};
pub use manager::{aggregate, RunConfig, ScraperManager};
pub use scrapers::Scraper;

pub mod prelude {
    pub use super::scrapers::{ExtractContext, Scraper};
    pub use pp_core::{Error, PressRelease, Result};
}

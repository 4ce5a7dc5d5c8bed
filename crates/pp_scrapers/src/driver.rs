//! Pagination driver: walks a source's listing pages until one comes back
//! empty, a fetch fails, or the page bound is reached.

use pp_core::{PageFetcher, PressRelease, SourceMetadata};
use std::time::Duration;

use crate::logging::Logger;
use crate::scrapers::{ExtractContext, Scraper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A page produced zero releases.
    EmptyPage,
    /// A page could not be fetched; it is not retried.
    FetchFailed,
    /// `max_pages` pages were fetched.
    MaxPages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Advancing { page: u32 },
    Stopped(StopReason),
}

/// Everything one source produced.
#[derive(Debug, Clone)]
pub struct SourceRun {
    pub source: SourceMetadata,
    pub releases: Vec<PressRelease>,
    pub pages_fetched: u32,
    pub stop: StopReason,
}

pub struct PaginationDriver<'a> {
    scraper: &'a dyn Scraper,
    fetcher: &'a dyn PageFetcher,
    ctx: &'a ExtractContext,
    page_delay: Duration,
    state: DriverState,
    releases: Vec<PressRelease>,
    pages_fetched: u32,
    logger: Logger,
}

impl<'a> PaginationDriver<'a> {
    pub fn new(scraper: &'a dyn Scraper, fetcher: &'a dyn PageFetcher, ctx: &'a ExtractContext) -> Self {
        let logger = Logger::new().with_prefix(scraper.source_metadata().to_string());
        Self {
            scraper,
            fetcher,
            ctx,
            page_delay: Duration::ZERO,
            state: DriverState::Advancing { page: 0 },
            releases: Vec::new(),
            pages_fetched: 0,
            logger,
        }
    }

    /// Pause between consecutive page fetches.
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Performs one transition. A stopped driver stays stopped.
    pub async fn step(&mut self) -> DriverState {
        let page = match self.state {
            DriverState::Advancing { page } => page,
            stopped @ DriverState::Stopped(_) => return stopped,
        };

        if page >= self.scraper.source().config.pagination.max_pages {
            self.logger.debug(&format!("Reached the page limit ({})", page));
            self.state = DriverState::Stopped(StopReason::MaxPages);
            return self.state;
        }

        if page > 0 && !self.page_delay.is_zero() {
            tokio::time::sleep(self.page_delay).await;
        }

        let request = self.scraper.listing_request(page);
        let html = match self.fetcher.fetch(&request).await {
            Ok(html) => html,
            Err(e) => {
                self.logger.error(&format!("Failed to retrieve page: {} ({})", request.url, e));
                self.state = DriverState::Stopped(StopReason::FetchFailed);
                return self.state;
            }
        };
        self.pages_fetched += 1;

        let mut releases = self.scraper.extract(&html, self.ctx);
        if releases.is_empty() {
            self.logger.debug(&format!("No releases on {}, stopping", request.url));
            self.state = DriverState::Stopped(StopReason::EmptyPage);
        } else {
            self.logger.info(&format!("📄 {} releases from {}", releases.len(), request.url));
            self.releases.append(&mut releases);
            self.state = DriverState::Advancing { page: page + 1 };
        }
        self.state
    }

    /// Steps until stopped and hands back the accumulated releases.
    pub async fn run(mut self) -> SourceRun {
        loop {
            if let DriverState::Stopped(stop) = self.step().await {
                return SourceRun {
                    source: self.scraper.source_metadata(),
                    releases: self.releases,
                    pages_fetched: self.pages_fetched,
                    stop,
                };
            }
        }
    }
}

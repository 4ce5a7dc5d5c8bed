use pp_core::recency;
use pp_core::{Categorizer, Error, PageFetcher, PressRelease, RecencyWindow, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::driver::{PaginationDriver, SourceRun};
use crate::scrapers::{get_scraper_factories, BoxedScraper, ExtractContext, FetchMode, ScraperFactory};

/// Knobs shared by every source in one run.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub window: RecencyWindow,
    pub page_delay: Duration,
    pub categorizer: Categorizer,
}

pub struct ScraperManager {
    factories: Vec<ScraperFactory>,
    http: Arc<dyn PageFetcher>,
    rendered: Arc<dyn PageFetcher>,
    config: RunConfig,
}

impl ScraperManager {
    /// A manager with every known source registered.
    pub fn new(http: Arc<dyn PageFetcher>, rendered: Arc<dyn PageFetcher>, config: RunConfig) -> Self {
        Self::with_factories(http, rendered, config, get_scraper_factories())
    }

    pub fn with_factories(
        http: Arc<dyn PageFetcher>,
        rendered: Arc<dyn PageFetcher>,
        config: RunConfig,
        factories: Vec<ScraperFactory>,
    ) -> Self {
        Self {
            factories,
            http,
            rendered,
            config,
        }
    }

    pub fn get_scrapers(&self) -> Result<Vec<BoxedScraper>> {
        self.factories.iter().map(|f| f()).collect()
    }

    /// Scrapers whose CLI names appear in `names`, in declaration order.
    /// An empty selection means every source.
    pub fn get_scrapers_for_sources(&self, names: &[String]) -> Result<Vec<BoxedScraper>> {
        let scrapers = self.get_scrapers()?;
        if names.is_empty() {
            return Ok(scrapers);
        }

        let wanted: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
        if let Some(unknown) = wanted
            .iter()
            .find(|name| !scrapers.iter().any(|s| s.cli_names().contains(&name.as_str())))
        {
            return Err(Error::UnknownSource(unknown.clone()));
        }

        Ok(scrapers
            .into_iter()
            .filter(|s| s.cli_names().iter().any(|n| wanted.iter().any(|w| w == n)))
            .collect())
    }

    fn fetcher_for(&self, mode: FetchMode) -> &dyn PageFetcher {
        match mode {
            FetchMode::Http => self.http.as_ref(),
            FetchMode::Rendered { .. } => self.rendered.as_ref(),
        }
    }

    /// Runs every selected source one after the other.
    ///
    /// "Today" is fixed once for the whole run so every source is judged
    /// against the same recency cutoff.
    pub async fn scrape(&self, sources: &[String]) -> Result<Vec<SourceRun>> {
        let scrapers = self.get_scrapers_for_sources(sources)?;
        let ctx = ExtractContext {
            today: recency::today(),
            window: self.config.window,
            categorizer: self.config.categorizer.clone(),
        };
        info!(
            cutoff = %self.config.window.cutoff(ctx.today),
            sources = scrapers.len(),
            "🦗 Starting scrape"
        );

        let mut runs = Vec::with_capacity(scrapers.len());
        for scraper in &scrapers {
            let metadata = scraper.source_metadata();
            info!("🦗 Scraping {}", metadata);
            let fetcher = self.fetcher_for(scraper.source().config.fetch);
            let run = PaginationDriver::new(scraper.as_ref(), fetcher, &ctx)
                .with_page_delay(self.config.page_delay)
                .run()
                .await;
            if let Err(e) = fetcher.finish().await {
                warn!(error = %e, "Failed to release fetcher for {}", metadata);
            }
            info!(
                releases = run.releases.len(),
                pages = run.pages_fetched,
                stop = ?run.stop,
                "✨ Finished {}",
                metadata
            );
            runs.push(run);
        }
        Ok(runs)
    }
}

/// Concatenates every run in order and sorts newest first.
///
/// The sort is stable, so releases sharing a date keep source, page and
/// document order.
pub fn aggregate(runs: Vec<SourceRun>) -> Vec<PressRelease> {
    let mut releases: Vec<PressRelease> = runs.into_iter().flat_map(|run| run.releases).collect();
    releases.sort_by(|a, b| b.date.cmp(&a.date));
    releases
}

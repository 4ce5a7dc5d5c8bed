//! Merck renders its news listing client-side, so pages are fetched through
//! the browser fetcher and read once the results container has appeared.
//!
//! The fragment selectors below have not been checked against the live site.

use pp_core::{Result, SourceMetadata};

use super::config::{CompiledSource, FetchMode, FieldSelectors, Pagination, SourceConfig};
use super::Scraper;

const RESULTS_CONTAINER: &str = "div.d8-results-container";

#[derive(Debug, Clone)]
pub struct MerckScraper {
    source: CompiledSource,
}

impl MerckScraper {
    const METADATA: SourceMetadata = SourceMetadata {
        name: "Merck",
        emoji: "🧪",
        cli_name: "merck",
        base_url: "https://www.merck.com",
    };

    pub fn new() -> Result<Self> {
        Ok(Self {
            source: CompiledSource::compile(&Self::METADATA, Self::config())?,
        })
    }

    pub fn config() -> SourceConfig {
        SourceConfig {
            listing_url: "https://www.merck.com/media/news/?page={page}",
            pagination: Pagination::pages(1, 10),
            fetch: FetchMode::Rendered {
                ready_selector: RESULTS_CONTAINER,
            },
            scope: Some(RESULTS_CONTAINER),
            container: "div.d8-results-item",
            fields: FieldSelectors {
                date: "span.release-date",
                title: "h3",
                link: "a",
                tags: None,
            },
            date_formats: &["%B %d, %Y", "%b %d, %Y"],
        }
    }
}

impl Scraper for MerckScraper {
    fn source_metadata(&self) -> SourceMetadata {
        Self::METADATA
    }

    fn source(&self) -> &CompiledSource {
        &self.source
    }
}

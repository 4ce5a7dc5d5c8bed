//! Eli Lilly's investor site pages its press releases by item offset.
//!
//! The fragment selectors below have not been checked against the live site.

use pp_core::{Result, SourceMetadata};

use super::config::{CompiledSource, FetchMode, FieldSelectors, Pagination, SourceConfig};
use super::Scraper;

/// Releases per listing page; the offset advances by this much.
const PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone)]
pub struct LillyScraper {
    source: CompiledSource,
}

impl LillyScraper {
    const METADATA: SourceMetadata = SourceMetadata {
        name: "Eli Lilly",
        emoji: "🩺",
        cli_name: "lilly",
        base_url: "https://investor.lilly.com",
    };

    pub fn new() -> Result<Self> {
        Ok(Self {
            source: CompiledSource::compile(&Self::METADATA, Self::config())?,
        })
    }

    pub fn config() -> SourceConfig {
        SourceConfig {
            listing_url: "https://investor.lilly.com/press-releases?offset={page}",
            pagination: Pagination::offsets(0, PAGE_SIZE, 20),
            fetch: FetchMode::Http,
            scope: None,
            container: "article.press-release",
            fields: FieldSelectors {
                date: ".press-release__date",
                title: ".press-release__title a",
                link: "a",
                tags: None,
            },
            date_formats: &["%B %d, %Y", "%m/%d/%Y"],
        }
    }
}

impl Scraper for LillyScraper {
    fn source_metadata(&self) -> SourceMetadata {
        Self::METADATA
    }

    fn source(&self) -> &CompiledSource {
        &self.source
    }

    fn cli_names(&self) -> Vec<&str> {
        vec!["lilly", "eli-lilly"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::test_support::context;
    use pp_core::Category;

    #[test]
    fn test_offset_pagination() {
        let config = LillyScraper::config();
        assert_eq!(
            config.listing_url(0),
            "https://investor.lilly.com/press-releases?offset=0"
        );
        assert_eq!(
            config.listing_url(3),
            "https://investor.lilly.com/press-releases?offset=30"
        );
    }

    #[test]
    fn test_extracts_both_date_formats() {
        let scraper = LillyScraper::new().unwrap();
        let html = r#"
            <html><body>
            <article class="press-release">
                <div class="press-release__date">October 2, 2024</div>
                <h2 class="press-release__title"><a href="/news-releases/news-release-details/lilly-appoints-new-cfo">Lilly Appoints New CFO and Executive Vice President</a></h2>
            </article>
            <article class="press-release">
                <div class="press-release__date">09/12/2024</div>
                <h2 class="press-release__title"><a href="news-releases/phase-3">Tirzepatide Phase 3 Trial Meets Endpoint</a></h2>
            </article>
            </body></html>
        "#;

        let releases = scraper.extract(html, &context());
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].company, "Eli Lilly");
        assert_eq!(releases[0].date.to_string(), "2024-10-02");
        assert_eq!(releases[0].category, Category::ManagementUpdate);
        assert_eq!(
            releases[0].url,
            "https://investor.lilly.com/news-releases/news-release-details/lilly-appoints-new-cfo"
        );
        assert_eq!(releases[1].date.to_string(), "2024-09-12");
        assert_eq!(releases[1].url, "https://investor.lilly.com/news-releases/phase-3");
        assert_eq!(releases[1].category, Category::ClinicalTrialUpdate);
    }

    #[test]
    fn test_cli_names() {
        let scraper = LillyScraper::new().unwrap();
        assert!(scraper.cli_names().contains(&"eli-lilly"));
    }
}

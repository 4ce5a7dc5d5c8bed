use pp_core::{Result, SourceMetadata};

use super::config::{CompiledSource, FetchMode, FieldSelectors, Pagination, SourceConfig};
use super::tags::TagSelectors;
use super::Scraper;

#[derive(Debug, Clone)]
pub struct PfizerScraper {
    source: CompiledSource,
}

impl PfizerScraper {
    const METADATA: SourceMetadata = SourceMetadata {
        name: "Pfizer",
        emoji: "💊",
        cli_name: "pfizer",
        base_url: "https://www.pfizer.com",
    };

    pub fn new() -> Result<Self> {
        Ok(Self {
            source: CompiledSource::compile(&Self::METADATA, Self::config())?,
        })
    }

    pub fn config() -> SourceConfig {
        SourceConfig {
            listing_url: "https://www.pfizer.com/newsroom/press-releases?field_tags_target_id%5B22256%5D=22256&page={page}",
            pagination: Pagination::pages(0, 10),
            fetch: FetchMode::Http,
            scope: None,
            container: "ul.result-list li.grid-x",
            fields: FieldSelectors {
                date: "div.cell.small-12.medium-12.lmedium-2 p.date",
                title: "div.cell.small-12.medium-12.lmedium-10 h5 a",
                link: "a",
                tags: Some(TagSelectors {
                    list: "div.cell.small-12.medium-12.lmedium-10 ul.filter-list__list",
                    item: "li",
                    label: "a.tag",
                }),
            },
            date_formats: &["%m.%d.%Y"],
        }
    }
}

impl Scraper for PfizerScraper {
    fn source_metadata(&self) -> SourceMetadata {
        Self::METADATA
    }

    fn source(&self) -> &CompiledSource {
        &self.source
    }
}

//! Per-source configuration: where the listing lives, how it pages, and
//! which selectors pick the fields out of each release fragment.

use pp_core::{DateParser, Result, SourceMetadata};
use scraper::Selector;
use url::Url;

use super::tags::{CompiledTags, TagSelectors};
use super::utils::selector;

/// Placeholder substituted with the page index or offset.
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Maps the n-th fetched page to the value put into the listing URL.
///
/// Page-number schemes use `step: 1`; offset schemes use the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub first: u32,
    pub step: u32,
    pub max_pages: u32,
}

impl Pagination {
    pub const fn pages(first: u32, max_pages: u32) -> Self {
        Self { first, step: 1, max_pages }
    }

    pub const fn offsets(first: u32, step: u32, max_pages: u32) -> Self {
        Self { first, step, max_pages }
    }

    pub fn index(&self, page: u32) -> u32 {
        self.first + page * self.step
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Http,
    /// Client-side rendered listing; the page is read once `ready_selector` exists.
    Rendered { ready_selector: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSelectors {
    pub date: &'static str,
    pub title: &'static str,
    /// Matched against the title element itself, then its descendants.
    pub link: &'static str,
    pub tags: Option<TagSelectors>,
}

#[derive(Debug, Clone, Copy)]
pub struct SourceConfig {
    pub listing_url: &'static str,
    pub pagination: Pagination,
    pub fetch: FetchMode,
    pub scope: Option<&'static str>,
    pub container: &'static str,
    pub fields: FieldSelectors,
    pub date_formats: &'static [&'static str],
}

impl SourceConfig {
    pub fn listing_url(&self, page: u32) -> String {
        self.listing_url
            .replace(PAGE_PLACEHOLDER, &self.pagination.index(page).to_string())
    }
}

/// A [`SourceConfig`] with every selector parsed once.
#[derive(Debug, Clone)]
pub struct CompiledSource {
    pub config: SourceConfig,
    pub base_url: Url,
    pub scope: Option<Selector>,
    pub container: Selector,
    pub date: Selector,
    pub title: Selector,
    pub link: Selector,
    pub tags: Option<CompiledTags>,
    pub dates: DateParser,
}

impl CompiledSource {
    pub fn compile(metadata: &SourceMetadata, config: SourceConfig) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(metadata.base_url)?,
            scope: config.scope.map(selector).transpose()?,
            container: selector(config.container)?,
            date: selector(config.fields.date)?,
            title: selector(config.fields.title)?,
            link: selector(config.fields.link)?,
            tags: config.fields.tags.as_ref().map(CompiledTags::compile).transpose()?,
            dates: DateParser::new(config.date_formats),
            config,
        })
    }
}

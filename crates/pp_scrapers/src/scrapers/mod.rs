use chrono::NaiveDate;
use pp_core::links::absolutize;
use pp_core::{Categorizer, FetchRequest, PressRelease, RecencyWindow, Result, SourceMetadata};
use scraper::{ElementRef, Html};
use tracing::{trace, warn};
use url::Url;

pub mod config;
pub mod lilly;
pub mod merck;
pub mod pfizer;
pub mod tags;

pub use config::{CompiledSource, FetchMode, FieldSelectors, Pagination, SourceConfig};
pub use lilly::LillyScraper;
pub use merck::MerckScraper;
pub use pfizer::PfizerScraper;

/// Everything an extractor needs besides the page itself.
#[derive(Debug, Clone)]
pub struct ExtractContext {
    pub today: NaiveDate,
    pub window: RecencyWindow,
    pub categorizer: Categorizer,
}

impl ExtractContext {
    pub fn new(today: NaiveDate, window: RecencyWindow) -> Self {
        Self {
            today,
            window,
            categorizer: Categorizer::default(),
        }
    }
}

pub trait Scraper: Send + Sync {
    /// Returns the metadata of the press-release source
    fn source_metadata(&self) -> SourceMetadata;

    /// Compiled selectors and paging rules for this source
    fn source(&self) -> &CompiledSource;

    /// Returns true if the URL belongs to this source's site
    fn can_handle(&self, url: &str) -> bool {
        let host = |u: &str| Url::parse(u).ok().and_then(|u| u.host_str().map(str::to_owned));
        match (host(url), host(self.source_metadata().base_url)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Returns a list of CLI shorthand names for this scraper
    fn cli_names(&self) -> Vec<&str> {
        vec![self.source_metadata().cli_name]
    }

    /// The request for the n-th listing page (0-based count of pages fetched so far)
    fn listing_request(&self, page: u32) -> FetchRequest {
        let config = &self.source().config;
        let request = FetchRequest::new(config.listing_url(page));
        match config.fetch {
            FetchMode::Http => request,
            FetchMode::Rendered { ready_selector } => request.wait_for(ready_selector),
        }
    }

    /// Normalized releases found on one listing page
    fn extract(&self, html: &str, ctx: &ExtractContext) -> Vec<PressRelease> {
        extract_releases(&self.source_metadata(), self.source(), html, ctx)
    }
}

pub type BoxedScraper = Box<dyn Scraper>;
pub type ScraperFactory = Box<dyn Fn() -> Result<BoxedScraper> + Send + Sync>;

/// Factories for every known source, in declaration order.
pub fn get_scraper_factories() -> Vec<ScraperFactory> {
    vec![
        Box::new(|| Ok(Box::new(PfizerScraper::new()?) as BoxedScraper)),
        Box::new(|| Ok(Box::new(MerckScraper::new()?) as BoxedScraper)),
        Box::new(|| Ok(Box::new(LillyScraper::new()?) as BoxedScraper)),
    ]
}

/// Runs the shared extraction contract over every container fragment.
///
/// A fragment with a missing element, an unparseable date, or a date outside
/// the recency window is skipped; its siblings are still processed.
pub fn extract_releases(
    metadata: &SourceMetadata,
    source: &CompiledSource,
    html: &str,
    ctx: &ExtractContext,
) -> Vec<PressRelease> {
    let document = Html::parse_document(html);
    let root = match &source.scope {
        Some(scope) => match document.select(scope).next() {
            Some(region) => region,
            None => {
                warn!(
                    source = metadata.name,
                    scope = source.config.scope.unwrap_or_default(),
                    "Could not find the results region in the page"
                );
                return Vec::new();
            }
        },
        None => document.root_element(),
    };

    root.select(&source.container)
        .filter_map(|fragment| {
            let release = extract_release(metadata, source, fragment, ctx);
            if release.is_none() {
                trace!(source = metadata.name, "Skipped release fragment");
            }
            release
        })
        .collect()
}

fn extract_release(
    metadata: &SourceMetadata,
    source: &CompiledSource,
    fragment: ElementRef<'_>,
    ctx: &ExtractContext,
) -> Option<PressRelease> {
    let raw_date = utils::element_text(fragment.select(&source.date).next()?);
    let date = source.dates.parse(&raw_date)?;
    if !ctx.window.contains_at(date, ctx.today) {
        return None;
    }

    let title_element = fragment.select(&source.title).next()?;
    let title = utils::element_text(title_element);
    if title.is_empty() {
        return None;
    }
    // the link must belong to the title, never to a sibling heading
    let link = if source.link.matches(&title_element) {
        title_element
    } else {
        title_element.select(&source.link).next()?
    };
    let href = link.value().attr("href")?;
    let url = absolutize(&source.base_url, href)?;

    let tags = source
        .tags
        .as_ref()
        .map(|t| tags::extract_tags(fragment, t))
        .unwrap_or_default();
    let category = ctx.categorizer.categorize(&title);

    Some(PressRelease {
        date,
        company: metadata.name.to_string(),
        title,
        url,
        tags,
        category,
    })
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use pp_core::{Error, Result};
    use scraper::{ElementRef, Selector};

    pub fn selector(css: &str) -> Result<Selector> {
        Selector::parse(css).map_err(|e| Error::Selector(format!("{}: {}", css, e)))
    }

    /// Element text with runs of whitespace collapsed to single spaces.
    pub fn element_text(element: ElementRef<'_>) -> String {
        element
            .text()
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

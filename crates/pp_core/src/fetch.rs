use async_trait::async_trait;
use crate::Result;

/// A listing page to load, plus the element that marks it as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub ready_selector: Option<String>,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ready_selector: None,
        }
    }

    pub fn wait_for(mut self, selector: impl Into<String>) -> Self {
        self.ready_selector = Some(selector.into());
        self
    }
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the final page body, or an error for transport failures
    /// and non-success responses.
    async fn fetch(&self, request: &FetchRequest) -> Result<String>;

    /// Called once a source has fetched its last page; releases anything
    /// kept alive between pages of the same source.
    async fn finish(&self) -> Result<()> {
        Ok(())
    }
}

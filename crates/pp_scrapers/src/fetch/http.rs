use async_trait::async_trait;
use pp_core::{Error, FetchRequest, PageFetcher, Result};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("pharma-press/", env!("CARGO_PKG_VERSION"));

/// Plain GET of server-rendered listing pages.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<String> {
        debug!(url = %request.url, "Fetching listing page");
        let response = self.client.get(&request.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: request.url.clone(),
            });
        }
        Ok(response.text().await?)
    }
}

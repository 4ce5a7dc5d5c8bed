use async_trait::async_trait;
use pp_core::{Error, FetchRequest, PageFetcher, Result};
use std::fmt;
use std::time::Duration;
use thirtyfour::prelude::*;
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(15);
const POLL_INTERVAL: Duration = Duration::from_millis(250);

const CHROME_ARGS: [&str; 3] = ["--headless", "--no-sandbox", "--disable-dev-shm-usage"];

/// Loads pages in headless Chrome through a running chromedriver and
/// returns the DOM once the request's ready selector is present.
///
/// One browser session is opened on the first fetch and reused for every
/// following page until [`PageFetcher::finish`] quits it.
pub struct BrowserFetcher {
    webdriver_url: String,
    ready_timeout: Duration,
    session: Mutex<Option<WebDriver>>,
}

impl BrowserFetcher {
    pub fn new(webdriver_url: impl Into<String>, ready_timeout: Duration) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
            ready_timeout,
            session: Mutex::new(None),
        }
    }

    async fn start(&self) -> Result<WebDriver> {
        debug!(webdriver = %self.webdriver_url, "Starting browser session");
        let mut caps = DesiredCapabilities::chrome();
        caps.add_chrome_option("args", CHROME_ARGS.to_vec())
            .map_err(browser_error)?;
        WebDriver::new(&self.webdriver_url, caps)
            .await
            .map_err(browser_error)
    }

    async fn load(&self, driver: &WebDriver, request: &FetchRequest) -> Result<String> {
        driver.goto(&request.url).await.map_err(browser_error)?;

        if let Some(selector) = &request.ready_selector {
            let ready = driver
                .query(By::Css(selector.as_str()))
                .wait(self.ready_timeout, POLL_INTERVAL)
                .first()
                .await;
            match ready {
                Ok(_) => debug!(%selector, "Page is ready"),
                Err(e) => warn!(
                    url = %request.url,
                    %selector,
                    error = %e,
                    "Ready element did not appear, reading the page as is"
                ),
            }
        }

        driver.source().await.map_err(browser_error)
    }
}

impl Default for BrowserFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_WEBDRIVER_URL, DEFAULT_READY_TIMEOUT)
    }
}

impl fmt::Debug for BrowserFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserFetcher")
            .field("webdriver_url", &self.webdriver_url)
            .field("ready_timeout", &self.ready_timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PageFetcher for BrowserFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<String> {
        debug!(url = %request.url, "Rendering listing page");
        let mut session = self.session.lock().await;
        if session.is_none() {
            *session = Some(self.start().await?);
        }
        let Some(driver) = session.as_ref() else {
            return Err(Error::Browser("browser session was not started".to_string()));
        };

        let result = self.load(driver, request).await;
        if result.is_err() {
            // a broken session is not reused
            if let Some(driver) = session.take() {
                quit(driver).await;
            }
        }
        result
    }

    async fn finish(&self) -> Result<()> {
        let driver = self.session.lock().await.take();
        if let Some(driver) = driver {
            debug!("Closing browser session");
            quit(driver).await;
        }
        Ok(())
    }
}

async fn quit(driver: WebDriver) {
    if let Err(e) = driver.quit().await {
        warn!(error = %e, "Failed to quit browser session");
    }
}

fn browser_error(e: WebDriverError) -> Error {
    Error::Browser(e.to_string())
}

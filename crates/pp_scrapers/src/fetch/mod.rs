//! Page fetchers: plain HTTP for server-rendered listings, a headless
//! browser for listings that only exist after client-side rendering.

pub mod browser;
pub mod http;

pub use browser::BrowserFetcher;
pub use http::HttpFetcher;

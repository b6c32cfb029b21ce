use crate::ports::outbound::PageFetcher;
use crate::shared::error::TevCatError;
use crate::shared::Result;
use std::time::Duration;

/// Public TeVCat home page carrying the embedded catalog
pub const DEFAULT_TEVCAT_URL: &str = "http://tevcat.uchicago.edu/";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HttpPageFetcher adapter for downloading the TeVCat page
///
/// Implements the PageFetcher port with a single blocking GET; failures are
/// not retried.
pub struct HttpPageFetcher {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpPageFetcher {
    /// Creates a fetcher for the public TeVCat page
    pub fn new() -> Result<Self> {
        Self::with_url(DEFAULT_TEVCAT_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_url(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = url.into();
        Self::validate_url(&url)?;

        let user_agent = format!("tevcat/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, url })
    }

    /// Only plain HTTP(S) URLs are accepted
    fn validate_url(url: &str) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(TevCatError::Validation {
                message: format!("TeVCat URL must start with http:// or https://, got '{}'", url),
            }
            .into());
        }
        Ok(())
    }

    fn network_error(&self, details: impl ToString) -> anyhow::Error {
        TevCatError::Network {
            url: self.url.clone(),
            details: details.to_string(),
        }
        .into()
    }
}

impl PageFetcher for HttpPageFetcher {
    fn fetch_page(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| self.network_error(e))?;

        if !response.status().is_success() {
            return Err(self.network_error(format!(
                "server returned status code {}",
                response.status()
            )));
        }

        response.text().map_err(|e| self.network_error(e))
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

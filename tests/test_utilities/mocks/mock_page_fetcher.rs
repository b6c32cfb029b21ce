use tevcat::prelude::*;

/// Mock PageFetcher serving a fixed page or failing like an unreachable host
pub struct MockPageFetcher {
    page: Option<String>,
}

impl MockPageFetcher {
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: Some(page.into()),
        }
    }

    /// Page in `tests/fixtures/sample_page.html`
    pub fn sample() -> Self {
        Self::new(include_str!("../../fixtures/sample_page.html"))
    }

    pub fn unreachable() -> Self {
        Self { page: None }
    }
}

impl PageFetcher for MockPageFetcher {
    fn fetch_page(&self) -> Result<String> {
        self.page.clone().ok_or_else(|| {
            TevCatError::Network {
                url: self.location(),
                details: "connection refused".to_string(),
            }
            .into()
        })
    }

    fn location(&self) -> String {
        "http://tevcat.test/".to_string()
    }
}

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use reqwest::blocking::Client;

use super::DataSource;

/// Remote data source rooted at a base URL, e.g. "https://example.org/data".
pub struct HttpSource {
    base: String,
    client: Client,
}

impl HttpSource {
    pub fn new(base: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("scoremap/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        let base = base.into();
        Ok(Self { base: base.trim_end_matches('/').to_string(), client })
    }

    fn url(&self, rel: &str) -> String { format!("{}/{}", self.base, rel) }
}

impl DataSource for HttpSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        let url = self.url(rel);
        let resp = self.client.get(&url).send()
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url} returned error status"))?;

        let bytes = resp.bytes().with_context(|| format!("read body of {url}"))?;
        Ok(Arc::from(bytes.to_vec()))
    }

    fn has(&self, rel: &str) -> bool {
        self.client.head(self.url(rel)).send()
            .map(|resp| resp.status().is_success())
            .unwrap_or(false)
    }
}

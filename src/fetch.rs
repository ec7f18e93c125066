use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::settings::Settings;

/// Anything that can turn an absolute URL into page markup.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher. Non-2xx responses are errors; no retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(Error::Client)?;
        Ok(HttpFetcher { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let wrap = |e: reqwest::Error| Error::Fetch {
            url: url.to_string(),
            source: e.into(),
        };

        info!("Fetching {}", url);
        let start = Instant::now();
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(wrap)?;
        debug!(url, bytes = body.len(), latency_ms = start.elapsed().as_millis() as u64, "fetched");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_settings() {
        assert!(HttpFetcher::new(&Settings::default()).is_ok());
    }

    #[test]
    fn bad_user_agent_is_a_client_error() {
        let settings = Settings {
            user_agent: "dataroma\nscraper".to_string(),
            ..Settings::default()
        };
        let err = HttpFetcher::new(&settings).err().unwrap();
        assert!(matches!(err, Error::Client(_)));
        assert_eq!(err.to_string(), "failed to build HTTP client");
    }
}

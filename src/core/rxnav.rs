use crate::core::ConfigProvider;
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://rxnav.nlm.nih.gov/REST";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Connection settings shared by the resolver and the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RxNavSettings {
    pub base_url: String,
    pub timeout: Duration,
}

impl RxNavSettings {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.api_base_url(), config.timeout())
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Every request made with this client is bounded by `timeout`.
    pub fn build_client(&self) -> Result<Client> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("rxcheck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(client)
    }
}

impl Default for RxNavSettings {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }
}

use std::time::Duration;

use dash_logging::dash_warn;

/// Environment variable naming the job service base URL.
pub const BASE_URL_ENV: &str = "FLARE_API_URL";

/// Fallback base URL when the environment does not provide one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_secs(1),
        }
    }
}

impl ServiceSettings {
    /// Builds settings from the environment, falling back to the default
    /// base URL when the variable is unset or not a valid URL.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) => Self::default().with_base_url(&value),
            Err(_) => Self::default(),
        }
    }

    /// Replaces the base URL after validating it; an unparsable URL keeps the
    /// previous one so a typo in the environment cannot brick the client.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        match url::Url::parse(base_url) {
            Ok(_) => {
                self.base_url = base_url.trim_end_matches('/').to_string();
            }
            Err(err) => {
                dash_warn!("Ignoring invalid base URL {base_url:?}: {err}");
            }
        }
        self
    }

    /// Full URL for an endpoint path such as `scrape/`.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

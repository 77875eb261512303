use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, PRAGMA};
use reqwest::StatusCode;

use crate::{ProbeError, ProbeSignal, ProbeTarget};

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub connect_timeout: Duration,
    /// Upper bound for one whole probe. Keep it below the poll interval so
    /// an unresponsive host cannot stall a tick indefinitely.
    pub request_timeout: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(3),
            request_timeout: Duration::from_secs(4),
        }
    }
}

#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, target: &ProbeTarget) -> Result<ProbeSignal, ProbeError>;
}

/// HEAD-based existence prober. Caching is disabled so a deleted file is
/// noticed on the next tick, and any content type is accepted.
#[derive(Debug, Clone)]
pub struct ReqwestProber {
    client: reqwest::Client,
}

impl ReqwestProber {
    pub fn new(settings: &ProbeSettings) -> Result<Self, ProbeError> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| ProbeError::Network(err.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Prober for ReqwestProber {
    async fn probe(&self, target: &ProbeTarget) -> Result<ProbeSignal, ProbeError> {
        let parsed = reqwest::Url::parse(&target.file_url)
            .map_err(|err| ProbeError::InvalidUrl(err.to_string()))?;

        let response = self
            .client
            .head(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        Ok(classify_status(response.status()))
    }
}

fn classify_status(status: StatusCode) -> ProbeSignal {
    if status.is_success() {
        ProbeSignal::Present
    } else if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
        ProbeSignal::Absent
    } else {
        ProbeSignal::OtherStatus(status.as_u16())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ProbeError {
    if err.is_timeout() {
        return ProbeError::Timeout(err.to_string());
    }
    ProbeError::Network(err.to_string())
}

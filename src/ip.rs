use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::error::ApiError;

pub const DEFAULT_IP_URL: &str = "http://ifconfig.me/ip";

#[async_trait]
pub trait IpSource: Send + Sync {
    /// Best-effort public address of this host, as reported by some outside party.
    async fn resolve(&self) -> Result<String, ApiError>;
}

/// Asks a plain-text "what is my IP" echo service.
pub struct HttpIpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpIpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            url: url.into(),
            client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }
}

#[async_trait]
impl IpSource for HttpIpSource {
    // The body is returned as-is (trimmed); it is not checked to be an address.
    async fn resolve(&self) -> Result<String, ApiError> {
        let transport = |source| ApiError::Transport {
            url: self.url.clone(),
            source,
        };
        let response = self.client.get(&self.url).send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            return Err(ApiError::Status {
                url: self.url.clone(),
                status,
                body,
            });
        }

        let ip = body.trim().to_string();
        debug!("Public IP from {}: {}", self.url, ip);
        Ok(ip)
    }
}

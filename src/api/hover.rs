use std::time::Duration;

use super::{client::DnsApiClient, models::*};
use crate::error::ApiError;
use async_trait::async_trait;
use log::debug;
use reqwest::{header::COOKIE, Method};
use serde_json::Value;

pub const DEFAULT_API_URL: &str = "https://www.hover.com/api";

/// Client for the registrar's cookie-authenticated JSON API.
pub struct HoverClient {
    client: reqwest::Client,
    base_url: String,
}

#[async_trait]
impl DnsApiClient for HoverClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let url = format!("{}/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .query(&[
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let token = response
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string());
        debug!("Login response: {} (session cookie: {})", status, token.is_some());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { url, status, body });
        }

        token
            .map(Session::new)
            .ok_or(ApiError::MissingSessionCookie(status))
    }

    async fn list_domains(&self, session: &Session) -> Result<DnsZoneList, ApiError> {
        let body = self
            .call(session, Method::GET, "dns", None)
            .await?
            .ok_or_else(|| ApiError::Envelope("empty DNS zone list".to_string()))?;

        serde_json::from_value(body)
            .map_err(|e| ApiError::Envelope(format!("malformed DNS zone list: {}", e)))
    }

    async fn update_entry(
        &self,
        session: &Session,
        id: &str,
        content: &str,
    ) -> Result<(), ApiError> {
        let resource = format!("dns/{}", id);
        let form = [("content", content)];
        match self
            .call(session, Method::PUT, &resource, Some(&form[..]))
            .await?
        {
            Some(_) => Ok(()),
            None => Err(ApiError::Envelope("empty update response".to_string())),
        }
    }
}

impl HoverClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Issue an authenticated request against `<base_url>/<resource>`.
    ///
    /// Returns `None` for an empty body. A non-empty body must be JSON with
    /// `"succeeded": true`, anything else is an [`ApiError::Envelope`].
    pub async fn call(
        &self,
        session: &Session,
        method: Method,
        resource: &str,
        form: Option<&[(&str, &str)]>,
    ) -> Result<Option<Value>, ApiError> {
        let url = format!("{}/{}", self.base_url, resource);
        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(COOKIE, session.cookie_header());
        if let Some(form) = form {
            request = request.form(form);
        }

        let transport = |source| ApiError::Transport {
            url: url.clone(),
            source,
        };
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        debug!("{} {} -> {}: {}", method, url, status, body);

        if !status.is_success() {
            return Err(ApiError::Status { url, status, body });
        }
        if body.is_empty() {
            return Ok(None);
        }

        let parsed: Value = serde_json::from_str(&body)
            .map_err(|e| ApiError::Envelope(format!("{}. Response: {}", e, body)))?;
        if parsed.get("succeeded") != Some(&Value::Bool(true)) {
            return Err(ApiError::Envelope(parsed.to_string()));
        }

        Ok(Some(parsed))
    }
}

use super::models::*;
use crate::error::ApiError;
use async_trait::async_trait;

#[async_trait]
pub trait DnsApiClient: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, ApiError>;
    async fn list_domains(&self, session: &Session) -> Result<DnsZoneList, ApiError>;
    async fn update_entry(&self, session: &Session, id: &str, content: &str)
        -> Result<(), ApiError>;
}

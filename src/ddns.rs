use log::{debug, info, warn};
use std::fmt;

use crate::api::models::{Credentials, DnsZoneList};
use crate::api::DnsApiClient;
use crate::error::{ApiError, HoverError};
use crate::ip::IpSource;

/// Only A records are ever candidates. The comparison is exact, so "a" is skipped.
const RECORD_TYPE: &str = "A";

#[derive(Debug, PartialEq, Eq)]
pub struct RecordMatch {
    /// The requested name, rewritten to `@.<domain>` when it named a domain apex.
    pub fqdn: String,
    pub id: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub fqdn: String,
    pub ip: String,
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Updated record for {} to: {}", self.fqdn, self.ip)
    }
}

/// Scan every domain, in API order, for the A entry named `fqdn`.
///
/// Asking for a bare domain name rewrites the working name to `@.<domain>` so
/// it matches the apex entry. Only the first entry per domain is considered,
/// and the first match overall wins. Later domains are still scanned; their
/// matches are logged and ignored.
pub fn find_a_record(zones: &DnsZoneList, fqdn: &str) -> Result<RecordMatch, HoverError> {
    let mut fqdn = fqdn.to_string();
    let mut found: Option<&str> = None;

    for domain in &zones.domains {
        if fqdn == domain.domain_name {
            fqdn = format!("@.{}", domain.domain_name);
        }
        for entry in &domain.entries {
            debug!("Checking entry {:?} in {}", entry, domain.domain_name);
            if entry.r#type != RECORD_TYPE {
                continue;
            }
            if entry.full_name(&domain.domain_name) == fqdn {
                match found {
                    None => found = Some(entry.id.as_str()),
                    Some(first) => warn!(
                        "{} also matches entry {} in {}, keeping {}",
                        fqdn, entry.id, domain.domain_name, first
                    ),
                }
                break;
            }
        }
    }

    match found {
        Some(id) => Ok(RecordMatch {
            id: id.to_string(),
            fqdn,
        }),
        None => Err(HoverError::RecordNotFound(fqdn)),
    }
}

pub struct HoverDdns<A, S> {
    api: A,
    ip_source: S,
}

impl<A: DnsApiClient, S: IpSource> HoverDdns<A, S> {
    pub fn new(api: A, ip_source: S) -> Self {
        Self { api, ip_source }
    }

    /// Point the A record for `fqdn` at `ip`, or at the public IP when `ip` is `None`.
    pub async fn update_dns(
        &self,
        credentials: &Credentials,
        fqdn: &str,
        ip: Option<String>,
    ) -> Result<UpdateOutcome, HoverError> {
        let ip = match ip {
            Some(ip) => ip,
            None => self
                .ip_source
                .resolve()
                .await
                .map_err(HoverError::PublicIpUnavailable)?,
        };
        info!("Updating {} to {}", fqdn, ip);

        let session = self.api.authenticate(credentials).await.map_err(|e| {
            debug!("Login failed: {}", e);
            HoverError::AuthenticationFailed
        })?;

        let zones = self.api.list_domains(&session).await?;
        let record = find_a_record(&zones, fqdn)?;
        info!("Found entry {} for {}", record.id, record.fqdn);

        match self.api.update_entry(&session, &record.id, &ip).await {
            Ok(()) => Ok(UpdateOutcome {
                fqdn: record.fqdn,
                ip,
            }),
            Err(ApiError::Envelope(body)) => Err(HoverError::UpdateRejected(body)),
            Err(e) => Err(HoverError::ApiRequestFailed(e)),
        }
    }
}

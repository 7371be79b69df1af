use serde::{Deserialize, Deserializer};
use std::fmt;

/// Name of the cookie the registrar uses to carry the login session.
pub const SESSION_COOKIE: &str = "hoverauth";

pub struct Credentials {
    pub username: String,
    pub password: String,
}

// Keep the password out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

/// Session token obtained from login, valid for one invocation.
#[derive(Clone)]
pub struct Session(String);

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Value for the `Cookie` request header.
    pub fn cookie_header(&self) -> String {
        format!("{}={}", SESSION_COOKIE, self.0)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Session(<REDACTED>)")
    }
}

#[derive(Debug, Deserialize)]
pub struct DnsZoneList {
    pub domains: Vec<Domain>,
}

#[derive(Debug, Deserialize)]
pub struct Domain {
    pub domain_name: String,
    #[serde(default)]
    pub entries: Vec<DnsEntry>,
}

#[derive(Debug, Deserialize)]
pub struct DnsEntry {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub r#type: String,
}

impl DnsEntry {
    /// Fully qualified name of this entry inside `domain_name`, `@` for the apex.
    pub fn full_name(&self, domain_name: &str) -> String {
        format!("{}.{}", self.name, domain_name)
    }
}

// Entry ids are usually strings ("dns1234") but numbers show up too.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}

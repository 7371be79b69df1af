use ini::Properties;

pub const SECTION: &str = "hover";

/// The `[hover]` section of a credentials file.
pub struct HoverSection {
    pub username: String,
    pub password: String,
}

impl HoverSection {
    /// `None` unless both `username` and `password` are present.
    pub fn from_properties(properties: &Properties) -> Option<Self> {
        Some(Self {
            username: properties.get("username")?.to_string(),
            password: properties.get("password")?.to_string(),
        })
    }
}

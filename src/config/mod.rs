pub mod models;

use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use ini::{Ini, ParseOption};

use crate::api::models::Credentials;
use crate::cli::Args;
use models::{HoverSection, SECTION};

/// Credentials from `--username`/`--password`, falling back to `--config`.
pub fn credentials(args: &Args) -> Result<Credentials> {
    let credentials = match (&args.username, &args.password, &args.config) {
        (Some(username), Some(password), _) => Credentials {
            username: username.clone(),
            password: password.clone(),
        },
        (_, _, Some(path)) => load_credentials(path)?,
        _ => bail!("Either --username and --password or --config is required"),
    };

    ensure!(!credentials.username.is_empty(), "Username cannot be empty");
    ensure!(!credentials.password.is_empty(), "Password cannot be empty");
    Ok(credentials)
}

/// Read the `[hover]` section (`username`, `password`) of an INI file.
///
/// Values are taken literally: no quote stripping and no backslash escapes.
pub fn load_credentials(path: &Path) -> Result<Credentials> {
    let literal = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..Default::default()
    };
    let ini = Ini::load_from_file_opt(path, literal)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let section = ini
        .section(Some(SECTION))
        .and_then(HoverSection::from_properties)
        .with_context(|| {
            format!(
                "Config file {} needs a [{}] section with username and password",
                path.display(),
                SECTION
            )
        })?;

    Ok(Credentials {
        username: section.username,
        password: section.password,
    })
}

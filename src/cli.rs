use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::api::hover::DEFAULT_API_URL;
use crate::ip::DEFAULT_IP_URL;

/// Dynamic DNS for Hover: point an A record at this host's public IP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("credentials").required(true).args(["username", "config"])))]
pub struct Args {
    /// Your username on hover.com
    #[arg(long, requires = "password")]
    pub username: Option<String>,

    /// Your password on hover.com
    #[arg(long, requires = "username")]
    pub password: Option<String>,

    /// Read username and password from the [hover] section of an INI file
    #[arg(long, visible_alias = "conf", conflicts_with_all = ["username", "password"])]
    pub config: Option<PathBuf>,

    /// Domain to update, e.g. www.example.com or example.com for the apex
    pub domain: String,

    /// IP to set; looked up from --ip-url when omitted
    #[arg(long)]
    pub ip: Option<String>,

    /// Base URL of the registrar API
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Plain-text service that echoes the caller's public IP
    #[arg(long, default_value = DEFAULT_IP_URL)]
    pub ip_url: String,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,
}

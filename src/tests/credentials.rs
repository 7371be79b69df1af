use std::fs;

use clap::{CommandFactory, Parser};
use tempfile::NamedTempFile;

use crate::api::hover::DEFAULT_API_URL;
use crate::cli::Args;
use crate::config::{credentials, load_credentials};
use crate::ip::DEFAULT_IP_URL;

fn write_config(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    fs::write(&file, contents).unwrap();
    file
}

#[test]
fn test_explicit_credentials() {
    let args =
        Args::try_parse_from(["hoverdns", "--username", "alice", "--password", "pw", "example.com"])
            .unwrap();

    let creds = credentials(&args).unwrap();
    assert_eq!(creds.username, "alice");
    assert_eq!(creds.password, "pw");
    assert_eq!(args.domain, "example.com");
    assert_eq!(args.ip, None);
    assert_eq!(args.api_url, DEFAULT_API_URL);
    assert_eq!(args.ip_url, DEFAULT_IP_URL);
    assert_eq!(args.timeout, 30);
}

#[test]
fn test_credentials_from_ini_file() {
    let file = write_config(
        r#"
[other]
username = bob

[hover]
username = alice
password = s3cret
"#,
    );
    let path = file.path().to_str().unwrap();

    let args = Args::try_parse_from([
        "hoverdns",
        "--conf",
        path,
        "www.example.com",
        "--ip",
        "203.0.113.9",
    ])
    .unwrap();
    assert_eq!(args.ip.as_deref(), Some("203.0.113.9"));

    let creds = credentials(&args).unwrap();
    assert_eq!(creds.username, "alice");
    assert_eq!(creds.password, "s3cret");
}

#[test]
fn test_ini_without_hover_section() {
    let file = write_config("[other]\nusername = alice\npassword = pw\n");

    assert!(load_credentials(file.path()).is_err());
}

#[test]
fn test_ini_missing_password() {
    let file = write_config("[hover]\nusername = alice\n");

    assert!(load_credentials(file.path()).is_err());
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();

    assert!(load_credentials(&dir.path().join("absent.ini")).is_err());
}

#[test]
fn test_empty_password_rejected() {
    let args =
        Args::try_parse_from(["hoverdns", "--username", "alice", "--password", "", "example.com"])
            .unwrap();

    assert!(credentials(&args).is_err());
}

#[test]
fn test_cli_requires_some_credentials() {
    assert!(Args::try_parse_from(["hoverdns", "example.com"]).is_err());
    assert!(Args::try_parse_from(["hoverdns", "--username", "alice", "example.com"]).is_err());
    assert!(Args::try_parse_from([
        "hoverdns",
        "--username",
        "alice",
        "--password",
        "pw",
        "--config",
        "creds.ini",
        "example.com"
    ])
    .is_err());
}

#[test]
fn test_cli_requires_domain() {
    assert!(Args::try_parse_from(["hoverdns", "--username", "alice", "--password", "pw"]).is_err());
}

#[test]
fn test_ini_values_are_taken_literally() {
    let file = write_config(
        "[hover]\nusername = \"alice\"\npassword = back\\sla\"sh#no;comment\n",
    );

    let creds = load_credentials(file.path()).unwrap();
    assert_eq!(creds.username, "\"alice\"");
    assert_eq!(creds.password, r#"back\sla"sh#no;comment"#);
}

#[test]
fn test_cli_rejects_zero_timeout() {
    let parse = |timeout| {
        Args::try_parse_from([
            "hoverdns",
            "--username",
            "alice",
            "--password",
            "pw",
            "--timeout",
            timeout,
            "example.com",
        ])
    };

    assert!(parse("0").is_err());
    assert_eq!(parse("1").unwrap().timeout, 1);
}

#[test]
fn test_help_documents_endpoint_options() {
    let help = Args::command().render_help().to_string();

    assert!(help.contains("Base URL of the registrar API"), "{}", help);
    assert!(help.contains("echoes the caller's public IP"), "{}", help);
}

mod api;
mod cli;
mod config;
mod ddns;
mod error;
mod ip;
#[cfg(test)]
mod tests;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use api::HoverClient;
use cli::Args;
use ddns::{HoverDdns, UpdateOutcome};
use ip::HttpIpSource;

#[tokio::main]
async fn main() -> ExitCode {
    // Quiet unless RUST_LOG says otherwise
    env_logger::Builder::from_env(Env::default().default_filter_or("error")).init();

    let args = Args::parse();
    let (line, code) = report(run(args).await);
    println!("{}", line);
    ExitCode::from(code)
}

/// The one line printed for an invocation, and its exit status.
fn report(result: Result<UpdateOutcome>) -> (String, u8) {
    match result {
        Ok(outcome) => (outcome.to_string(), 0),
        Err(e) => (format!("Unable to update DNS: {:#}", e), 1),
    }
}

async fn run(args: Args) -> Result<UpdateOutcome> {
    let credentials = config::credentials(&args)?;
    let timeout = Duration::from_secs(args.timeout);

    let ddns = HoverDdns::new(
        HoverClient::new(args.api_url, timeout)?,
        HttpIpSource::new(args.ip_url, timeout)?,
    );

    Ok(ddns.update_dns(&credentials, &args.domain, args.ip).await?)
}

pub mod client;
pub mod hover;
pub mod models;

pub use client::DnsApiClient;
pub use hover::HoverClient;

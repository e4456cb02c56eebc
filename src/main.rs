#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;
use velocis_core::{config, ContactConfig, HttpContactClient, SITE};

/// Global contact client, built from command line args before launch
static CONTACT_CLIENT: OnceLock<HttpContactClient> = OnceLock::new();

/// Get the contact client (set at startup, or built from defaults)
pub fn get_contact_client() -> HttpContactClient {
    CONTACT_CLIENT
        .get_or_init(|| {
            HttpContactClient::new(ContactConfig::default())
                .expect("default HTTP client configuration is valid")
        })
        .clone()
}

/// Velocis - Speed-focused web development
#[derive(Parser, Debug)]
#[command(name = "velocis")]
#[command(about = "Velocis landing page")]
struct Args {
    /// Contact form submission endpoint
    #[arg(long, default_value = config::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Response status value that counts as a successful submission
    #[arg(long, default_value = config::DEFAULT_SUCCESS_STATUS)]
    success_status: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,
}

impl Args {
    fn contact_config(&self) -> ContactConfig {
        ContactConfig::default()
            .with_endpoint(self.endpoint.clone())
            .with_success_status(self.success_status.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let contact_config = args.contact_config();

    tracing::info!("Starting {} with endpoint: {}", SITE.name, contact_config.endpoint);

    let client = HttpContactClient::new(contact_config).context("failed to build HTTP client")?;
    let _ = CONTACT_CLIENT.set(client);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(format!("{} | Web Development Company", SITE.name))
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#![allow(non_snake_case)]

mod app;
mod clipboard;
mod components;
pub mod context;
mod intake;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use photodrop_core::UploaderConfig;

/// Global configuration, set from command line
static CONFIG: OnceLock<UploaderConfig> = OnceLock::new();

/// Get the uploader configuration (set from command line or default)
pub fn get_config() -> UploaderConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Photodrop - send an image to a Telegram channel
#[derive(Parser, Debug)]
#[command(name = "photodrop-desktop")]
#[command(about = "Photodrop - drop, paste or pick an image and post it to a Telegram channel")]
struct Args {
    /// Bot API base URL (for a local Bot API server)
    #[arg(long)]
    api_base: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn,photodrop=info,photodrop_core=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();

    setup_logging(args.verbose);

    let config = UploaderConfig::from_override(args.api_base);
    tracing::info!("Starting Photodrop against {}", config.api_base);
    let _ = CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Telegram Image Uploader")
            .with_inner_size(dioxus::desktop::LogicalSize::new(760.0, 940.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

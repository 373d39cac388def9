//! Photodrop CLI
//!
//! Headless front end over photodrop-core: the same intake and submission
//! path as the desktop view, driven from arguments.
//!
//! ## Usage
//!
//! ```bash
//! # Send a photo to a channel
//! photodrop send --token 123456:AAE... --chat-id @mychannel cat.png
//!
//! # Check whether a file would be accepted
//! photodrop inspect cat.png
//!
//! # Talk to a local Bot API server
//! photodrop --api-base http://127.0.0.1:8081 send --token ... --chat-id ... cat.png
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use photodrop_core::{
    prepare_preview, submit, ImageCandidate, IntakeSource, TelegramClient, UploaderConfig,
    UploaderState,
};
use tracing::{info, warn};

/// Photodrop - send an image to a Telegram channel
#[derive(Parser)]
#[command(name = "photodrop")]
#[command(version = "0.1.0")]
#[command(about = "Photodrop - send an image to a Telegram channel")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Bot API base URL (default: https://api.telegram.org)
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send an image file to a channel
    Send {
        /// Bot token from @BotFather
        #[arg(long, default_value = "")]
        token: String,

        /// Channel ID (with @) or numeric chat id
        #[arg(long, default_value = "")]
        chat_id: String,

        /// Image file to send
        file: PathBuf,
    },

    /// Show how a file would be treated without sending it
    Inspect {
        /// File to inspect
        file: PathBuf,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_candidate(file: &Path) -> Result<ImageCandidate> {
    ImageCandidate::from_path(file).with_context(|| format!("Failed to read {}", file.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = UploaderConfig::from_override(cli.api_base);

    match cli.command {
        Commands::Send {
            token,
            chat_id,
            file,
        } => {
            let candidate = load_candidate(&file)?;
            if !candidate.is_image() {
                anyhow::bail!(
                    "Not an image: {} ({})",
                    file.display(),
                    candidate.media_type
                );
            }

            let mut state = UploaderState::new();
            state.set_bot_token(token);
            state.set_channel_id(chat_id);

            let ticket = state.begin_intake(IntakeSource::Path);
            let image = prepare_preview(candidate).await?;
            state.finish_intake(ticket, image);

            info!(file = %file.display(), api_base = %config.api_base, "sending");

            let client = TelegramClient::new(&config);
            match submit(&mut state, &client).await {
                Some(Ok(delivered)) => {
                    info!(chat_id = %delivered.chat_id, bytes = delivered.bytes, "send finished");
                    println!("{}", state.message());
                    Ok(())
                }
                Some(Err(failure)) => {
                    warn!("send failed: {}", failure);
                    anyhow::bail!("{}", state.message())
                }
                None => anyhow::bail!("A submission is already in flight"),
            }
        }

        Commands::Inspect { file } => {
            let candidate = load_candidate(&file)?;
            info!(?candidate, accepted = candidate.is_image(), "inspected");

            println!("File: {}", candidate.file_name);
            println!("Media type: {}", candidate.media_type);
            println!("Size: {} bytes", candidate.bytes.len());
            println!(
                "Accepted: {}",
                if candidate.is_image() { "yes" } else { "no" }
            );
            Ok(())
        }
    }
}

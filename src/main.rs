//! portal-sync CLI - sync Leadership Portal data with a remote document host

use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portal_sync::{
    config::{Args, Command},
    credentials::{CredentialStore, FileKvStore},
    derive::generate_alerts,
    model::{default_snapshot, PortalSnapshot},
    remote::{DocumentClient, HttpDocumentHost},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("portal_sync={},warn", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let host = Arc::new(HttpDocumentHost::new(
        &args.api_url,
        Duration::from_secs(args.timeout_secs),
    )?);
    let credentials = CredentialStore::new(FileKvStore::open(&args.credentials_path)?);
    let client = DocumentClient::new(host, credentials);

    match args.command {
        Command::Login { token } => {
            if client.verify(&token).await? {
                client.set_token(&token)?;
                info!("Token verified and stored");
            } else {
                error!("Token rejected by the document host");
                std::process::exit(1);
            }
        }
        Command::Logout => {
            client.clear_credentials()?;
            info!("Credentials cleared");
        }
        Command::Status => {
            println!("authenticated: {}", client.is_authenticated());
            println!(
                "document id:   {}",
                client.document_id().as_deref().unwrap_or("(none)")
            );
        }
        Command::Pull => {
            let snapshot = match client.load().await? {
                Some(snapshot) => snapshot,
                None => {
                    warn!("No remote data found, using default dataset");
                    default_snapshot()
                }
            };
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Command::Push { file } => {
            let contents = std::fs::read_to_string(&file)?;
            let snapshot: PortalSnapshot = serde_json::from_str(&contents)?;
            let id = client.save(&snapshot).await?;
            info!(id = %id, "Snapshot saved");
        }
        Command::Alerts => {
            let snapshot = match client.load().await? {
                Some(snapshot) => snapshot,
                None => default_snapshot(),
            };
            let alerts = generate_alerts(&snapshot, chrono::Utc::now());
            if alerts.is_empty() {
                println!("No alerts.");
            } else {
                for alert in alerts {
                    println!("[{}] {}: {}", alert.priority, alert.title, alert.message);
                }
            }
        }
    }

    Ok(())
}

//! Configuration for the portal CLI
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;

/// portal-sync - cloud persistence for the Leadership Portal
#[derive(Parser, Debug, Clone)]
#[command(name = "portal-sync")]
#[command(about = "Sync Leadership Portal data with a remote document host")]
pub struct Args {
    /// Base URL of the document host API
    #[arg(long, env = "PORTAL_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// Path of the credential file (bearer token + document identifier)
    #[arg(long, env = "PORTAL_CREDENTIALS", default_value = "portal-credentials.json")]
    pub credentials_path: String,

    /// Request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Verify a token against the host and store it
    Login { token: String },
    /// Clear the stored token and document identifier
    Logout,
    /// Show authentication and document state
    Status,
    /// Load the remote snapshot (or the default dataset) and print it
    Pull,
    /// Save a snapshot read from a local JSON file
    Push { file: String },
    /// Print the alerts derived from the current snapshot
    Alerts,
}

impl Args {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.trim().is_empty() {
            return Err("PORTAL_API_URL must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("REQUEST_TIMEOUT_SECS must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let args = Args::parse_from(["portal-sync", "status"]);
        assert!(args.validate().is_ok());
        assert_eq!(args.api_url, "https://api.github.com");
        assert_eq!(args.timeout_secs, 30);
    }

    #[test]
    fn test_empty_api_url_rejected() {
        let args = Args::parse_from(["portal-sync", "--api-url", "  ", "status"]);
        assert!(args.validate().is_err());
    }
}

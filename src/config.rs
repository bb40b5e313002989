//! Host configuration from flags and environment variables.
//!
//! Every flag falls back to an environment variable (loaded from `.env` when
//! present) and then to a default. Leptos site options are read separately
//! from `[workspace.metadata.leptos]`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use clap::{Parser, Subcommand};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug)]
#[command(name = "chatrooms", about = "Serve the chat rooms web client and proxy /api/ to the backend")]
pub struct Cli {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Backend origin that `/api/` requests are forwarded to.
    #[arg(long, env = "BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Fixed asset stamp; defaults to the current UNIX time in seconds.
    #[arg(long, env = "ASSET_STAMP")]
    pub asset_stamp: Option<u64>,

    /// Upstream request timeout for proxied calls.
    #[arg(long, env = "PROXY_TIMEOUT_SECS", default_value_t = DEFAULT_PROXY_TIMEOUT_SECS)]
    pub proxy_timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Prepare stamped assets and serve the client (default).
    #[default]
    Serve,
    /// Prepare stamped assets and exit.
    Stamp,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid BACKEND_URL `{0}`: expected an http:// or https:// origin")]
    InvalidBackendUrl(String),
    #[error("PROXY_TIMEOUT_SECS must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub command: Command,
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub backend_url: String,
    pub asset_stamp: u64,
    pub proxy_timeout: Duration,
}

impl HostConfig {
    /// Validate parsed flags. `now_stamp` is used when no stamp is pinned.
    pub fn from_cli(cli: Cli, now_stamp: u64) -> Result<Self, ConfigError> {
        if cli.proxy_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self {
            command: cli.command.unwrap_or_default(),
            port: cli.port,
            backend_url: normalize_backend_url(&cli.backend_url)?,
            asset_stamp: cli.asset_stamp.unwrap_or(now_stamp),
            proxy_timeout: Duration::from_secs(cli.proxy_timeout_secs),
        })
    }
}

/// Trim whitespace and trailing slashes and require an http(s) scheme with a
/// non-empty authority.
pub fn normalize_backend_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let authority = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::InvalidBackendUrl(raw.to_owned()))?;
    if authority.is_empty() || authority.starts_with('/') {
        return Err(ConfigError::InvalidBackendUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

// Server configuration loaded from the command line and environment variables.
// Decision: Default bind address matches the Flask development server (127.0.0.1:5000)
// Decision: Default database is a SQLite file in the working directory

use clap::Parser;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://webCalendar.db";

#[derive(Parser, Debug)]
#[command(name = "webcal-api")]
#[command(about = "Web Calendar API server")]
#[command(version)]
pub struct Cli {
    /// Address to listen on
    #[arg(value_name = "HOST:PORT", env = "WEBCAL_ADDR")]
    pub addr: Option<BindAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindAddressError {
    #[error("expected HOST:PORT, got {0:?}")]
    MissingPort(String),
    #[error("invalid port {0:?}")]
    InvalidPort(String),
    #[error("host must not be empty")]
    EmptyHost,
}

/// Listen address given as `HOST:PORT`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindAddress {
    pub host: String,
    pub port: u16,
}

impl Default for BindAddress {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl FromStr for BindAddress {
    type Err = BindAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port) = s
            .rsplit_once(':')
            .ok_or_else(|| BindAddressError::MissingPort(s.to_string()))?;
        if host.is_empty() {
            return Err(BindAddressError::EmptyHost);
        }
        let port = port
            .parse()
            .map_err(|_| BindAddressError::InvalidPort(port.to_string()))?;
        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl fmt::Display for BindAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: BindAddress,
    pub database_url: String,
    /// Origins allowed by CORS; empty means same-origin only
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Combine the parsed command line with environment variables
    pub fn from_env(cli: Cli) -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        // Example: CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
        let cors_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .map(|s| parse_origins(&s))
            .unwrap_or_default();

        Self {
            bind: cli.addr.unwrap_or_default(),
            database_url,
            cors_origins,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

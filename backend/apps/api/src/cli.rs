//! Command Line / Environment Configuration
//!
//! Every option can also come from the environment (after `.env` is loaded).

use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;
use clap::{Arg, ArgMatches, Command};

pub const ARG_PORT: &str = "port";
pub const ARG_DSN: &str = "dsn";
pub const ARG_MAX_CONNECTIONS: &str = "max-connections";
pub const ARG_TOKEN_TTL_HOURS: &str = "token-ttl-hours";
pub const ARG_CORS_ORIGINS: &str = "cors-origins";
pub const ARG_PASSWORD_PEPPER: &str = "password-pepper";

/// Longest accepted token lifetime (ten years)
pub const MAX_TOKEN_TTL_HOURS: u64 = 87_600;

/// Listener, pool and CORS settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub dsn: String,
    pub max_connections: u32,
    pub cors_origins: Vec<HeaderValue>,
}

#[must_use]
pub fn new() -> Command {
    Command::new("api")
        .about("Workout tracker REST API")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_DSN)
                .short('d')
                .long("dsn")
                .help("Database connection string")
                .env("DATABASE_URL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_MAX_CONNECTIONS)
                .long("max-connections")
                .help("Maximum number of pooled database connections")
                .default_value("5")
                .env("DATABASE_MAX_CONNECTIONS")
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new(ARG_TOKEN_TTL_HOURS)
                .long("token-ttl-hours")
                .help("Lifetime of an authentication token in hours")
                .default_value("24")
                .env("TOKEN_TTL_HOURS")
                .value_parser(clap::value_parser!(u64).range(1..=MAX_TOKEN_TTL_HOURS)),
        )
        .arg(
            Arg::new(ARG_CORS_ORIGINS)
                .long("cors-origins")
                .help("Comma-separated list of allowed browser origins")
                .default_value("http://localhost:3000,http://127.0.0.1:3000")
                .env("FRONTEND_ORIGINS"),
        )
        .arg(
            Arg::new(ARG_PASSWORD_PEPPER)
                .long("password-pepper")
                .help("Base64-encoded secret mixed into every password hash")
                .env("PASSWORD_PEPPER")
                .hide_env_values(true),
        )
}

/// Build server and auth settings from parsed arguments
///
/// # Errors
/// Returns an error if the pepper is not valid base64 or an origin is not a
/// valid header value.
pub fn settings(matches: &ArgMatches) -> anyhow::Result<(ServerConfig, AuthConfig)> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);
    let Some(dsn) = matches.get_one::<String>(ARG_DSN).cloned() else {
        bail!("missing required argument: --{ARG_DSN}");
    };
    let max_connections = matches
        .get_one::<u32>(ARG_MAX_CONNECTIONS)
        .copied()
        .unwrap_or(5);
    let ttl_hours = matches
        .get_one::<u64>(ARG_TOKEN_TTL_HOURS)
        .copied()
        .unwrap_or(24);

    let cors_origins = matches
        .get_one::<String>(ARG_CORS_ORIGINS)
        .map(|origins| parse_origins(origins))
        .transpose()?
        .unwrap_or_default();

    let password_pepper = matches
        .get_one::<String>(ARG_PASSWORD_PEPPER)
        .map(|encoded| {
            platform::crypto::from_base64(encoded.trim())
                .context("PASSWORD_PEPPER must be valid base64")
        })
        .transpose()?;

    let server = ServerConfig {
        port,
        dsn,
        max_connections,
        cors_origins,
    };
    let Some(ttl_secs) = ttl_hours.checked_mul(3600) else {
        bail!("--{ARG_TOKEN_TTL_HOURS} is out of range");
    };
    let auth = AuthConfig {
        token_ttl: Duration::from_secs(ttl_secs),
        password_pepper,
    };

    Ok((server, auth))
}

fn parse_origins(origins: &str) -> anyhow::Result<Vec<HeaderValue>> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin: {origin}"))
        })
        .collect()
}

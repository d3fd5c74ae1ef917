//! Host configuration from environment variables.
//!
//! `.env` files are honoured via `dotenvy` before this runs. Leptos build
//! options are loaded separately from `[package.metadata.leptos]`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::HostError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MARKET_API_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Backend base URL handed to the browser through the HTML shell.
    pub api_base: String,
}

impl HostConfig {
    /// Load the host configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] when `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, HostError> {
        Ok(Self {
            host: parse_host(std::env::var("HOST").ok()),
            port: parse_port(std::env::var("PORT").ok())?,
            api_base: parse_api_base(std::env::var("MARKET_API_URL").ok()),
        })
    }

    /// Socket address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_host(raw: Option<String>) -> String {
    non_blank(raw).unwrap_or_else(|| DEFAULT_HOST.to_owned())
}

fn parse_port(raw: Option<String>) -> Result<u16, HostError> {
    match non_blank(raw) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| HostError::Config { name: "PORT", value }),
    }
}

fn parse_api_base(raw: Option<String>) -> String {
    let base = non_blank(raw).unwrap_or_else(|| DEFAULT_MARKET_API_URL.to_owned());
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_MARKET_API_URL.to_owned() } else { trimmed.to_owned() }
}

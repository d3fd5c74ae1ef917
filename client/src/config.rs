//! Backend base URL resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host writes its runtime `MARKET_API_URL` into the HTML shell as a
//! `<meta>` tag. The hydrated client prefers that value, then the value baked
//! in at compile time, then the local development default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default backend used during local development.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Name of the `<meta>` tag carrying the runtime API base.
pub const API_BASE_META: &str = "market-api-url";

/// Resolved backend location, provided to every page through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL, normalizing trailing slashes.
    pub fn new(base_url: &str) -> Self {
        Self { base_url: normalize_base(base_url) }
    }

    /// Resolve the config for the current environment.
    ///
    /// In the browser this reads the host-provided meta tag. On the server it
    /// uses the compile-time value or the default.
    pub fn detect() -> Self {
        Self::new(&resolve_api_base(read_meta_base(), option_env!("MARKET_API_URL")))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Pick the first non-blank candidate in precedence order.
pub fn resolve_api_base(runtime: Option<String>, compiled: Option<&str>) -> String {
    runtime
        .filter(|v| !v.trim().is_empty())
        .or_else(|| compiled.filter(|v| !v.trim().is_empty()).map(str::to_owned))
        .map_or_else(|| DEFAULT_API_BASE.to_owned(), |v| normalize_base(&v))
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn read_meta_base() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let doc = web_sys::window()?.document()?;
        let el = doc
            .query_selector(&format!("meta[name=\"{API_BASE_META}\"]"))
            .ok()
            .flatten()?;
        el.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

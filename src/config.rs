//! Page configuration and endpoint resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosting page may hand a JSON object to the browser crate's `mount`.
//! Every field is optional; the defaults match the stock page markup and the
//! same-origin `/api/answer` endpoint.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_ANSWER_PATH: &str = "/api/answer";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Stable ids of the page elements the controller binds to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementIds {
    pub form: String,
    pub input: String,
    pub submit: String,
    pub container: String,
    pub error: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "qaForm".to_owned(),
            input: "questionInput".to_owned(),
            submit: "submitBtn".to_owned(),
            container: "qaContainer".to_owned(),
            error: "errorMessage".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChatConfig {
    /// Endpoint override: an absolute `http(s)` URL or an origin-relative path.
    pub endpoint: Option<String>,
    pub elements: ElementIds,
    /// Selector for preset example buttons.
    pub example_selector: String,
    /// `data-*` key holding an example button's question.
    pub example_data_key: String,
    /// Selector (inside the container) of the block removed once messages exist.
    pub welcome_selector: String,
    pub log_level: String,
    /// Return a diagnostic handle from `mount`.
    pub debug_handle: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            elements: ElementIds::default(),
            example_selector: ".example-btn".to_owned(),
            example_data_key: "example".to_owned(),
            welcome_selector: ".welcome-message".to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            debug_handle: false,
        }
    }
}

impl ChatConfig {
    /// Parse page configuration. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for names `log` does not know.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .trim()
            .parse::<log::Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Endpoint for a page served from `origin`, honoring the override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] for an unusable override.
    pub fn endpoint(&self, origin: &str) -> Result<Endpoint, ConfigError> {
        match self.endpoint.as_deref() {
            Some(raw) => Endpoint::resolve(origin, raw),
            None => Ok(Endpoint::same_origin(origin)),
        }
    }
}

/// Target URL for question submissions, remembered with the page origin so
/// later path overrides resolve against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    origin: String,
    url: String,
}

impl Endpoint {
    /// `<origin>/api/answer`.
    #[must_use]
    pub fn same_origin(origin: &str) -> Self {
        let origin = normalize_origin(origin);
        let url = format!("{origin}{DEFAULT_ANSWER_PATH}");
        Self { origin, url }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] unless `raw` is an `http(s)`
    /// URL or starts with `/`.
    pub fn resolve(origin: &str, raw: &str) -> Result<Self, ConfigError> {
        let origin = normalize_origin(origin);
        let url = resolve_url(&origin, raw)?;
        Ok(Self { origin, url })
    }

    /// Point at a new URL, keeping the origin.
    ///
    /// # Errors
    ///
    /// Same rules as [`Endpoint::resolve`]; the endpoint is unchanged on error.
    pub fn retarget(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.url = resolve_url(&self.origin, raw)?;
        Ok(())
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

// Opaque origins (`file://` pages report "null") fall back to relative paths.
fn normalize_origin(origin: &str) -> String {
    let origin = origin.trim();
    if origin == "null" {
        return String::new();
    }
    origin.trim_end_matches('/').to_owned()
}

fn resolve_url(origin: &str, raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim();
    let absolute = ["http://", "https://"]
        .iter()
        .any(|scheme| raw.len() > scheme.len() && raw.starts_with(scheme));
    if absolute {
        Ok(raw.to_owned())
    } else if raw.starts_with('/') {
        Ok(format!("{origin}{raw}"))
    } else {
        Err(ConfigError::InvalidEndpoint(raw.to_owned()))
    }
}

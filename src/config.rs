//! Route selection and run options.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, Result};

pub const DEFAULT_ORIGIN: &str = "Владивосток";
pub const DEFAULT_DESTINATION: &str = "Тель-Авив";

pub const ORIGIN_ENV: &str = "TICKET_ORIGIN";
pub const DESTINATION_ENV: &str = "TICKET_DESTINATION";

/// The origin/destination city pair every ticket is matched against.
///
/// Stored on disk as a plain JSON object:
/// ```json
/// { "origin": "Владивосток", "destination": "Тель-Авив" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Default for Route {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN, DEFAULT_DESTINATION)
    }
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Loads a route from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| AnalyzerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Default route with `TICKET_ORIGIN` / `TICKET_DESTINATION` applied on top.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Route::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut route = Self::default();
        if let Some(origin) = lookup(ORIGIN_ENV).filter(|v| !v.is_empty()) {
            route.origin = origin;
        }
        if let Some(destination) = lookup(DESTINATION_ENV).filter(|v| !v.is_empty()) {
            route.destination = destination;
        }
        route
    }

    /// Replaces either end of the route when an override is given.
    pub fn with_overrides(mut self, origin: Option<String>, destination: Option<String>) -> Self {
        if let Some(origin) = origin {
            self.origin = origin;
        }
        if let Some(destination) = destination {
            self.destination = destination;
        }
        self
    }
}

/// How negative flight durations are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DurationPolicy {
    /// Report them as computed.
    #[default]
    PassThrough,
    /// Abort the run with [`AnalyzerError::NegativeDuration`].
    RejectNegative,
}

/// Everything a single analysis run needs besides the input document.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    pub route: Route,
    pub duration_policy: DurationPolicy,
}

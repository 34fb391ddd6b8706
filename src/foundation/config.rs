use std::{fs::File, io::BufReader, path::Path, path::PathBuf, time::Duration};

use crate::{
    foundation::error::{AnimatorError, AnimatorResult},
    provider::kind::Provider,
};

/// Default simulated provider latency, in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 1500;

/// Runtime settings for the editor core.
///
/// Every field has a default, so an empty JSON object (`{}`) is a valid config file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimatorConfig {
    /// Provider selected when the session starts (and after a reset).
    pub default_provider: Provider,
    /// Simulated round-trip latency of the stub gateway.
    pub latency_ms: u64,
    /// File holding the credential blob. `None` lets the front end pick its default location.
    pub storage_path: Option<PathBuf>,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            default_provider: Provider::default(),
            latency_ms: DEFAULT_LATENCY_MS,
            storage_path: None,
        }
    }
}

impl AnimatorConfig {
    /// Read a config file (JSON).
    pub fn from_path(path: &Path) -> AnimatorResult<Self> {
        let f = File::open(path).map_err(|e| {
            AnimatorError::validation(format!("open config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a config from any reader.
    pub fn from_reader(r: impl std::io::Read) -> AnimatorResult<Self> {
        Ok(serde_json::from_reader(r)?)
    }

    /// Gateway latency as a [`Duration`].
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_SIDES};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared across slices.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KataConfigInner {
    pub dice: DiceConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into slices.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct KataConfig {
    #[serde(flatten, default)]
    inner: Arc<KataConfigInner>,
}

impl Deref for KataConfig {
    type Target = KataConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for KataConfig {
    fn deref_mut(&mut self) -> &mut KataConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Die construction parameters.
///
/// `sides` is signed on purpose: validation (and the negative-count error)
/// belongs to the dice slice, not to deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiceConfig {
    pub sides: i64,
    /// `None` seeds every die from OS entropy.
    pub seed: Option<u64>,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    pub console: bool,
    /// Directory for rolling log files; no file output when absent.
    pub path: Option<PathBuf>,
    /// Emit JSON lines to the log files.
    pub json: bool,
    /// Extra `EnvFilter` directives, e.g. `kata_dice=trace`.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for DiceConfig {
    fn default() -> Self {
        Self { sides: DEFAULT_SIDES, seed: None }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_owned(),
            console: true,
            path: None,
            json: false,
            filter: None,
        }
    }
}

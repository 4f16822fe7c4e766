use contentkit_types::Locale;
use serde::{Deserialize, Serialize};

use crate::{EngineError, EngineResult};

/// Default number of undo steps an [`EditSession`](crate::EditSession) keeps.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// What to do when an edit targets a field whose kind this build does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKindPolicy {
    /// Log a warning and return the field unchanged.
    #[default]
    Ignore,
    /// Fail with [`EngineError::UnsupportedKind`].
    Reject,
}

/// Configuration for the resolution engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Locale consulted when the requested one has no translation.
    pub default_locale: Locale,
    /// Behavior for unrecognized field kinds on write.
    pub unknown_kind_policy: UnknownKindPolicy,
    /// Maximum undo depth per session (0 = unlimited).
    pub history_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            unknown_kind_policy: UnknownKindPolicy::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Parses a JSON config; absent keys take their defaults.
    ///
    /// Locale tags are canonicalized on load (`"EN_us"` becomes `"en-US"`).
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the config is usable.
    pub fn validate(&self) -> EngineResult<()> {
        if self.default_locale.as_str().trim().is_empty() {
            return Err(EngineError::InvalidConfig("default_locale must not be empty".into()));
        }
        Ok(())
    }
}

//! Error types for the resolution engine.

use contentkit_model::FieldKind;
use contentkit_types::{FieldKey, VariantKey};
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur when writing to a schema.
///
/// Resolution (locale fallback, variant overlay, disabled sets) never fails;
/// only writes do.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The write targets a field key that does not exist.
    #[error("field not found: {field_key}")]
    FieldNotFound { field_key: FieldKey },

    /// The payload shape does not belong to the field's kind.
    #[error("cannot apply {shape} payload to {kind} field")]
    PayloadMismatch { kind: FieldKind, shape: &'static str },

    /// Unknown field kind under the `Reject` policy.
    #[error("unsupported field kind: {0}")]
    UnsupportedKind(String),

    /// A JSON payload could not be decoded for the field's kind.
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// Engine configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Variant management named a variant that does not exist.
    #[error("variant not found: {0}")]
    VariantNotFound(VariantKey),
}

impl EngineError {
    pub(crate) fn field_not_found(key: &str) -> Self {
        Self::FieldNotFound {
            field_key: FieldKey::from(key),
        }
    }
}

use contentkit_types::VariantKey;
use serde::{Deserialize, Serialize};

/// Identifies which variant, if any, a viewer is resolved against.
///
/// Produced by whatever segments the audience; the engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<VariantKey>,
}

impl PersonalizationContext {
    /// A viewer with no resolved segment; sees the base schema.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A viewer resolved to `segment`.
    #[must_use]
    pub fn for_segment(segment: impl Into<VariantKey>) -> Self {
        Self {
            segment: Some(segment.into()),
        }
    }
}

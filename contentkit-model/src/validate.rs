//! Non-fatal consistency checks over a schema.
//!
//! Nothing here is enforced on write; the report exists so authoring tools
//! can surface drift (stale overrides, missing translations) to a human.

use contentkit_types::{FieldKey, Locale, VariantKey};
use std::fmt;

use crate::{ComponentSchema, FieldKind, FieldMap};

/// A single finding from [`ComponentSchema::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaIssue {
    /// A variant overrides a field that does not exist at base level.
    OverrideWithoutBase { variant: VariantKey, field: FieldKey },
    /// A variant override has a different kind than the base field.
    OverrideKindMismatch {
        variant: VariantKey,
        field: FieldKey,
        base: FieldKind,
        overridden: FieldKind,
    },
    /// A disabled-field entry names no field. `variant` is `None` at base level.
    DisabledUnknownField { variant: Option<VariantKey>, field: FieldKey },
    /// Some localized content of the field lacks the default locale.
    MissingDefaultLocale {
        variant: Option<VariantKey>,
        field: FieldKey,
        locale: Locale,
    },
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverrideWithoutBase { variant, field } => {
                write!(f, "variant '{variant}' overrides unknown field '{field}'")
            }
            Self::OverrideKindMismatch {
                variant,
                field,
                base,
                overridden,
            } => write!(
                f,
                "variant '{variant}' overrides '{field}' as {overridden}, base is {base}"
            ),
            Self::DisabledUnknownField { variant: Some(v), field } => {
                write!(f, "variant '{v}' disables unknown field '{field}'")
            }
            Self::DisabledUnknownField { variant: None, field } => {
                write!(f, "unknown field '{field}' is disabled")
            }
            Self::MissingDefaultLocale { variant, field, locale } => match variant {
                Some(v) => write!(f, "variant '{v}' field '{field}' has no '{locale}' text"),
                None => write!(f, "field '{field}' has no '{locale}' text"),
            },
        }
    }
}

impl ComponentSchema {
    /// Reports every consistency issue found, in a stable order:
    /// base fields, then each variant in insertion order.
    #[must_use]
    pub fn validate(&self, default_locale: &Locale) -> Vec<SchemaIssue> {
        let mut issues = Vec::new();

        missing_translations(&self.fields, None, default_locale, &mut issues);
        for key in self.disabled_fields.iter() {
            if !self.fields.contains_key(key) {
                issues.push(SchemaIssue::DisabledUnknownField {
                    variant: None,
                    field: key.clone(),
                });
            }
        }

        for (variant, overrides) in self.variants.iter() {
            for (key, field) in overrides.iter() {
                match self.fields.get(key) {
                    None => issues.push(SchemaIssue::OverrideWithoutBase {
                        variant: variant.clone(),
                        field: key.clone(),
                    }),
                    Some(base) if base.kind() != field.kind() => {
                        issues.push(SchemaIssue::OverrideKindMismatch {
                            variant: variant.clone(),
                            field: key.clone(),
                            base: base.kind(),
                            overridden: field.kind(),
                        });
                    }
                    Some(_) => {}
                }
            }
            missing_translations(overrides, Some(variant), default_locale, &mut issues);
        }

        for (variant, set) in self.variant_disabled_fields.iter() {
            for key in set.iter() {
                if !self.fields.contains_key(key) && self.override_field(variant.as_str(), key.as_str()).is_none() {
                    issues.push(SchemaIssue::DisabledUnknownField {
                        variant: Some(variant.clone()),
                        field: key.clone(),
                    });
                }
            }
        }

        issues
    }
}

fn missing_translations(
    fields: &FieldMap,
    variant: Option<&VariantKey>,
    default_locale: &Locale,
    issues: &mut Vec<SchemaIssue>,
) {
    for (key, field) in fields {
        let missing = field
            .localized_contents()
            .iter()
            .any(|content| !content.contains(default_locale.as_str()));
        if missing {
            issues.push(SchemaIssue::MissingDefaultLocale {
                variant: variant.cloned(),
                field: key.clone(),
                locale: default_locale.clone(),
            });
        }
    }
}

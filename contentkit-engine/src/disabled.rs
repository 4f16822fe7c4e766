//! Disabled-field resolution and toggles.
//!
//! Base disables always apply. A variant may hide additional fields but can
//! never re-show a field hidden at base level, so the set for any variant is
//! a superset of the base set.

use contentkit_model::{ComponentSchema, FieldSet, VariantFieldSets};
use contentkit_types::{FieldKey, VariantKey};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

use crate::{EngineError, EngineResult};

/// The effective set of hidden field keys for base (`None`) or a variant.
#[must_use]
pub fn resolve_disabled_fields<'a>(schema: &'a ComponentSchema, variant: Option<&VariantKey>) -> Cow<'a, FieldSet> {
    let extra = variant.and_then(|v| schema.variant_disabled_fields.get(v));
    match extra {
        Some(extra) if !extra.is_empty() => {
            let mut union = FieldSet::clone(&schema.disabled_fields);
            union.extend(extra.iter().cloned());
            Cow::Owned(union)
        }
        _ => Cow::Borrowed(&*schema.disabled_fields),
    }
}

/// Whether `field_key` is shown for base (`None`) or a variant.
#[must_use]
pub fn is_field_enabled(schema: &ComponentSchema, field_key: &str, variant: Option<&VariantKey>) -> bool {
    if schema.disabled_fields.contains(field_key) {
        return false;
    }
    !variant
        .and_then(|v| schema.variant_disabled_fields.get(v))
        .is_some_and(|set| set.contains(field_key))
}

/// Hides or shows a field.
///
/// With an editing variant only that variant's set is written; otherwise the
/// base set. Setting the state that already holds returns a schema sharing
/// every collection with the input.
pub fn set_field_disabled(
    schema: &ComponentSchema,
    editing_variant: Option<&VariantKey>,
    field_key: &str,
    disabled: bool,
) -> EngineResult<ComponentSchema> {
    ensure_field_exists(schema, editing_variant, field_key)?;

    match editing_variant {
        None => {
            if schema.disabled_fields.contains(field_key) == disabled {
                return Ok(schema.clone());
            }
            let mut set = FieldSet::clone(&schema.disabled_fields);
            if disabled {
                set.insert(FieldKey::from(field_key));
            } else {
                set.shift_remove(field_key);
            }
            debug!(field_key, disabled, "base disabled set updated");
            Ok(ComponentSchema {
                disabled_fields: Arc::new(set),
                ..schema.clone()
            })
        }
        Some(variant) => {
            let current = schema.variant_disabled_fields.get(variant);
            if current.is_some_and(|set| set.contains(field_key)) == disabled {
                return Ok(schema.clone());
            }

            let mut set = current.map(|s| FieldSet::clone(s)).unwrap_or_default();
            if disabled {
                set.insert(FieldKey::from(field_key));
            } else {
                set.shift_remove(field_key);
            }

            let mut sets = VariantFieldSets::clone(&schema.variant_disabled_fields);
            if set.is_empty() {
                sets.shift_remove(variant);
            } else {
                sets.insert(variant.clone(), Arc::new(set));
            }
            debug!(field_key, %variant, disabled, "variant disabled set updated");
            Ok(ComponentSchema {
                variant_disabled_fields: Arc::new(sets),
                ..schema.clone()
            })
        }
    }
}

/// Flips the field's membership in the targeted disabled set.
///
/// Targets the same set as [`set_field_disabled`]; a field hidden at base
/// level stays hidden whatever a variant toggle does.
pub fn toggle_field_disabled(
    schema: &ComponentSchema,
    editing_variant: Option<&VariantKey>,
    field_key: &str,
) -> EngineResult<ComponentSchema> {
    let currently = match editing_variant {
        None => schema.disabled_fields.contains(field_key),
        Some(variant) => schema
            .variant_disabled_fields
            .get(variant)
            .is_some_and(|set| set.contains(field_key)),
    };
    set_field_disabled(schema, editing_variant, field_key, !currently)
}

fn ensure_field_exists(
    schema: &ComponentSchema,
    editing_variant: Option<&VariantKey>,
    field_key: &str,
) -> EngineResult<()> {
    let in_variant = editing_variant.is_some_and(|v| schema.override_field(v.as_str(), field_key).is_some());
    if schema.fields.contains_key(field_key) || in_variant {
        Ok(())
    } else {
        Err(EngineError::field_not_found(field_key))
    }
}

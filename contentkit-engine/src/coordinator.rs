//! Schema mutation coordinator.
//!
//! Entry point for every edit. Decides whether a write lands in the base
//! `fields` or in one variant's overrides, computes the new field through the
//! dispatcher and returns a new schema. Only the path from the root to the
//! written field is reallocated; every sibling field is shared with the
//! input, so earlier schema values stay valid snapshots.

use contentkit_model::{ComponentSchema, Field, FieldMap, FieldPatch, VariantFieldSets, VariantMap};
use contentkit_types::{FieldKey, VariantKey};
use std::sync::Arc;
use tracing::debug;

use crate::dispatcher::apply_field_update_with;
use crate::{EngineError, EngineResult, UnknownKindPolicy};

/// Writes `patch` into `field_key`, ignoring unknown kinds.
///
/// See [`update_field_with`].
pub fn update_field(
    schema: &ComponentSchema,
    editing_variant: Option<&VariantKey>,
    field_key: &str,
    patch: &FieldPatch,
) -> EngineResult<ComponentSchema> {
    update_field_with(schema, editing_variant, field_key, patch, UnknownKindPolicy::Ignore)
}

/// Writes `patch` into `field_key`.
///
/// With an editing variant the write goes to that variant's overrides. A
/// field the variant has not overridden yet starts from the base field, so
/// the first edit preserves every attribute but the changed one; base
/// `fields` is untouched. Without a variant the base field is rewritten.
///
/// Fails with [`EngineError::FieldNotFound`] when no template field exists.
pub fn update_field_with(
    schema: &ComponentSchema,
    editing_variant: Option<&VariantKey>,
    field_key: &str,
    patch: &FieldPatch,
    policy: UnknownKindPolicy,
) -> EngineResult<ComponentSchema> {
    let template = template_field(schema, editing_variant, field_key)?;
    let updated = apply_field_update_with(template, patch, policy)?;
    if Arc::ptr_eq(template, &updated) {
        return Ok(schema.clone());
    }

    Ok(match editing_variant {
        Some(variant) => {
            debug!(field_key, %variant, shape = patch.shape(), "writing variant override");
            write_override(schema, variant, FieldKey::from(field_key), updated)
        }
        None => {
            debug!(field_key, shape = patch.shape(), "writing base field");
            write_base(schema, FieldKey::from(field_key), updated)
        }
    })
}

/// Like [`update_field_with`], decoding a loosely typed JSON payload for the
/// target field's kind first.
pub fn update_field_json(
    schema: &ComponentSchema,
    editing_variant: Option<&VariantKey>,
    field_key: &str,
    payload: serde_json::Value,
    policy: UnknownKindPolicy,
) -> EngineResult<ComponentSchema> {
    let template = template_field(schema, editing_variant, field_key)?;
    let patch = FieldPatch::from_json(&template.kind(), payload)?;
    update_field_with(schema, editing_variant, field_key, &patch, policy)
}

/// Materializes an empty override map for `variant`. No-op if it exists.
#[must_use]
pub fn create_variant(schema: &ComponentSchema, variant: &VariantKey) -> ComponentSchema {
    if schema.variants.contains_key(variant) {
        return schema.clone();
    }
    let mut variants = VariantMap::clone(&schema.variants);
    variants.insert(variant.clone(), Arc::default());
    debug!(%variant, "variant created");
    ComponentSchema {
        variants: Arc::new(variants),
        ..schema.clone()
    }
}

/// Drops the variant's override for `field_key`, so it falls through to base.
///
/// The variant itself stays materialized even when its last override goes.
#[must_use]
pub fn reset_variant_field(schema: &ComponentSchema, variant: &VariantKey, field_key: &str) -> ComponentSchema {
    let Some(overrides) = schema.variants.get(variant) else {
        return schema.clone();
    };
    if !overrides.contains_key(field_key) {
        return schema.clone();
    }

    let mut overrides = FieldMap::clone(overrides);
    overrides.shift_remove(field_key);
    let mut variants = VariantMap::clone(&schema.variants);
    variants.insert(variant.clone(), Arc::new(overrides));
    debug!(field_key, %variant, "variant override reset");
    ComponentSchema {
        variants: Arc::new(variants),
        ..schema.clone()
    }
}

/// Deletes a variant's overrides and its disabled set.
pub fn remove_variant(schema: &ComponentSchema, variant: &VariantKey) -> EngineResult<ComponentSchema> {
    let has_overrides = schema.variants.contains_key(variant);
    let has_disables = schema.variant_disabled_fields.contains_key(variant);
    if !has_overrides && !has_disables {
        return Err(EngineError::VariantNotFound(variant.clone()));
    }

    let mut next = schema.clone();
    if has_overrides {
        let mut variants = VariantMap::clone(&schema.variants);
        variants.shift_remove(variant);
        next.variants = Arc::new(variants);
    }
    if has_disables {
        let mut sets = VariantFieldSets::clone(&schema.variant_disabled_fields);
        sets.shift_remove(variant);
        next.variant_disabled_fields = Arc::new(sets);
    }
    debug!(%variant, "variant removed");
    Ok(next)
}

fn template_field<'a>(
    schema: &'a ComponentSchema,
    editing_variant: Option<&VariantKey>,
    field_key: &str,
) -> EngineResult<&'a Arc<Field>> {
    editing_variant
        .and_then(|v| schema.override_field(v.as_str(), field_key))
        .or_else(|| schema.base_field(field_key))
        .ok_or_else(|| EngineError::field_not_found(field_key))
}

fn write_base(schema: &ComponentSchema, key: FieldKey, field: Arc<Field>) -> ComponentSchema {
    let mut fields = FieldMap::clone(&schema.fields);
    fields.insert(key, field);
    ComponentSchema {
        fields: Arc::new(fields),
        ..schema.clone()
    }
}

fn write_override(schema: &ComponentSchema, variant: &VariantKey, key: FieldKey, field: Arc<Field>) -> ComponentSchema {
    let mut overrides = schema
        .variants
        .get(variant)
        .map(|existing| FieldMap::clone(existing))
        .unwrap_or_default();
    overrides.insert(key, field);

    let mut variants = VariantMap::clone(&schema.variants);
    variants.insert(variant.clone(), Arc::new(overrides));
    ComponentSchema {
        variants: Arc::new(variants),
        ..schema.clone()
    }
}

//! Variant overlay resolution.
//!
//! Produces the display schema: the base fields with one variant's explicit
//! overrides laid on top, key by key. Keys the variant does not override keep
//! the base field, sharing its allocation.

use contentkit_model::{ComponentSchema, FieldMap, PersonalizationContext};
use contentkit_types::VariantKey;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::trace;

/// Resolves the display schema for a viewer's personalization context.
///
/// Borrowed (the input itself) when the context has no segment or the
/// segment names no materialized variant.
#[must_use]
pub fn resolve_display<'a>(schema: &'a ComponentSchema, context: &PersonalizationContext) -> Cow<'a, ComponentSchema> {
    resolve_display_for(schema, context.segment.as_ref())
}

/// Resolves the display schema for an editor-selected variant.
///
/// Same merge as [`resolve_display`], with the variant taken from editing
/// state instead of a personalization context.
#[must_use]
pub fn resolve_display_for<'a>(schema: &'a ComponentSchema, variant: Option<&VariantKey>) -> Cow<'a, ComponentSchema> {
    let Some(variant) = variant else {
        return Cow::Borrowed(schema);
    };
    let Some(overrides) = schema.variants.get(variant) else {
        trace!(%variant, "variant has no overrides, using base");
        return Cow::Borrowed(schema);
    };
    if overrides.is_empty() {
        return Cow::Borrowed(schema);
    }

    let mut merged: FieldMap = FieldMap::clone(&schema.fields);
    for (key, field) in overrides.iter() {
        merged.insert(key.clone(), Arc::clone(field));
    }
    trace!(%variant, overrides = overrides.len(), "merged variant overrides");

    Cow::Owned(ComponentSchema {
        fields: Arc::new(merged),
        ..schema.clone()
    })
}

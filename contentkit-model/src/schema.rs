use contentkit_types::{ComponentId, FieldKey, VariantKey};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::Field;

/// Field key → field. Entries are `Arc`s so schema versions share untouched fields.
pub type FieldMap = IndexMap<FieldKey, Arc<Field>>;

/// Variant key → that variant's explicit overrides.
pub type VariantMap = IndexMap<VariantKey, Arc<FieldMap>>;

/// An insertion-ordered set of field keys.
pub type FieldSet = IndexSet<FieldKey>;

/// Variant key → fields that variant additionally hides.
pub type VariantFieldSets = IndexMap<VariantKey, Arc<FieldSet>>;

/// A component's declarative content tree plus its personalization overlays.
///
/// Treated as an immutable value: every engine operation returns a new
/// schema. Cloning is cheap because every collection sits behind an `Arc`,
/// so a clone shares all fields with the original.
///
/// A variant's map holds only fields explicitly overridden for it; a key
/// absent from the variant resolves to the base field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSchema {
    pub id: ComponentId,
    #[serde(rename = "type")]
    pub component_type: String,
    pub fields: Arc<FieldMap>,
    #[serde(default, skip_serializing_if = "map_is_empty")]
    pub variants: Arc<VariantMap>,
    #[serde(default, skip_serializing_if = "set_is_empty")]
    pub disabled_fields: Arc<FieldSet>,
    #[serde(default, skip_serializing_if = "map_is_empty")]
    pub variant_disabled_fields: Arc<VariantFieldSets>,
}

fn map_is_empty<K, V>(map: &Arc<IndexMap<K, V>>) -> bool {
    map.is_empty()
}

fn set_is_empty(set: &Arc<FieldSet>) -> bool {
    set.is_empty()
}

impl ComponentSchema {
    /// Creates an empty schema of the given component type with a fresh id.
    #[must_use]
    pub fn new(component_type: impl Into<String>) -> Self {
        Self::with_id(ComponentId::new(), component_type)
    }

    /// Creates an empty schema with an explicit id (e.g. when loading).
    #[must_use]
    pub fn with_id(id: ComponentId, component_type: impl Into<String>) -> Self {
        Self {
            id,
            component_type: component_type.into(),
            fields: Arc::default(),
            variants: Arc::default(),
            disabled_fields: Arc::default(),
            variant_disabled_fields: Arc::default(),
        }
    }

    /// Builder: adds or replaces a base field.
    #[must_use]
    pub fn field(mut self, key: impl Into<FieldKey>, field: Field) -> Self {
        Arc::make_mut(&mut self.fields).insert(key.into(), Arc::new(field));
        self
    }

    /// Builder: adds or replaces a variant override.
    #[must_use]
    pub fn variant_field(mut self, variant: impl Into<VariantKey>, key: impl Into<FieldKey>, field: Field) -> Self {
        let overrides = Arc::make_mut(&mut self.variants).entry(variant.into()).or_default();
        Arc::make_mut(overrides).insert(key.into(), Arc::new(field));
        self
    }

    /// Builder: hides a field at base level.
    #[must_use]
    pub fn disabled(mut self, key: impl Into<FieldKey>) -> Self {
        Arc::make_mut(&mut self.disabled_fields).insert(key.into());
        self
    }

    /// Builder: hides a field for one variant only.
    #[must_use]
    pub fn variant_disabled(mut self, variant: impl Into<VariantKey>, key: impl Into<FieldKey>) -> Self {
        let set = Arc::make_mut(&mut self.variant_disabled_fields).entry(variant.into()).or_default();
        Arc::make_mut(set).insert(key.into());
        self
    }

    /// Returns the base field for `key`.
    #[must_use]
    pub fn base_field(&self, key: &str) -> Option<&Arc<Field>> {
        self.fields.get(key)
    }

    /// Returns the variant's explicit override for `key`, if one exists.
    #[must_use]
    pub fn override_field(&self, variant: &str, key: &str) -> Option<&Arc<Field>> {
        self.variants.get(variant).and_then(|overrides| overrides.get(key))
    }

    /// Returns the variant's override map, if the variant has been materialized.
    #[must_use]
    pub fn overrides(&self, variant: &str) -> Option<&Arc<FieldMap>> {
        self.variants.get(variant)
    }

    /// Every variant named by either overrides or variant-level disables,
    /// in first-seen order.
    #[must_use]
    pub fn variant_keys(&self) -> Vec<&VariantKey> {
        let mut keys: IndexSet<&VariantKey> = self.variants.keys().collect();
        keys.extend(self.variant_disabled_fields.keys());
        keys.into_iter().collect()
    }
}

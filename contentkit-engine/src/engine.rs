//! Config-bound facade over the engine's free functions.

use contentkit_model::{ComponentSchema, Field, FieldPatch, FieldSet, PersonalizationContext};
use contentkit_types::{Locale, LocalizedContent, VariantKey};
use std::borrow::Cow;
use std::sync::Arc;

use crate::{EditSession, EngineConfig, EngineResult};
use crate::{coordinator, disabled, dispatcher, locale, overlay};

/// The resolution engine with an [`EngineConfig`] applied.
///
/// Holds no state beyond its config; every call takes a schema value and
/// returns a new one.
#[derive(Debug, Clone, Default)]
pub struct SchemaEngine {
    config: EngineConfig,
}

impl SchemaEngine {
    /// Creates an engine after validating `config`.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolves `content` for `locale` using the configured default locale.
    pub fn resolve_localized<'a>(&self, content: &'a LocalizedContent, locale: &Locale) -> &'a str {
        locale::resolve_localized_with(content, locale.as_str(), self.config.default_locale.as_str())
    }

    pub fn display_text(&self, field: &Field, locale: &Locale) -> Option<String> {
        locale::display_text(field, locale.as_str(), self.config.default_locale.as_str())
    }

    pub fn display_list(&self, field: &Field, locale: &Locale) -> Option<Vec<String>> {
        locale::display_list(field, locale.as_str(), self.config.default_locale.as_str())
    }

    pub fn resolve_display<'a>(
        &self,
        schema: &'a ComponentSchema,
        context: &PersonalizationContext,
    ) -> Cow<'a, ComponentSchema> {
        overlay::resolve_display(schema, context)
    }

    pub fn resolve_display_for<'a>(
        &self,
        schema: &'a ComponentSchema,
        variant: Option<&VariantKey>,
    ) -> Cow<'a, ComponentSchema> {
        overlay::resolve_display_for(schema, variant)
    }

    pub fn resolve_disabled_fields<'a>(
        &self,
        schema: &'a ComponentSchema,
        variant: Option<&VariantKey>,
    ) -> Cow<'a, FieldSet> {
        disabled::resolve_disabled_fields(schema, variant)
    }

    pub fn is_field_enabled(&self, schema: &ComponentSchema, field_key: &str, variant: Option<&VariantKey>) -> bool {
        disabled::is_field_enabled(schema, field_key, variant)
    }

    pub fn apply_field_update(&self, current: &Arc<Field>, patch: &FieldPatch) -> EngineResult<Arc<Field>> {
        dispatcher::apply_field_update_with(current, patch, self.config.unknown_kind_policy)
    }

    pub fn update_field(
        &self,
        schema: &ComponentSchema,
        editing_variant: Option<&VariantKey>,
        field_key: &str,
        patch: &FieldPatch,
    ) -> EngineResult<ComponentSchema> {
        coordinator::update_field_with(schema, editing_variant, field_key, patch, self.config.unknown_kind_policy)
    }

    pub fn update_field_json(
        &self,
        schema: &ComponentSchema,
        editing_variant: Option<&VariantKey>,
        field_key: &str,
        payload: serde_json::Value,
    ) -> EngineResult<ComponentSchema> {
        coordinator::update_field_json(schema, editing_variant, field_key, payload, self.config.unknown_kind_policy)
    }

    pub fn set_field_disabled(
        &self,
        schema: &ComponentSchema,
        editing_variant: Option<&VariantKey>,
        field_key: &str,
        disabled: bool,
    ) -> EngineResult<ComponentSchema> {
        disabled::set_field_disabled(schema, editing_variant, field_key, disabled)
    }

    pub fn toggle_field_disabled(
        &self,
        schema: &ComponentSchema,
        editing_variant: Option<&VariantKey>,
        field_key: &str,
    ) -> EngineResult<ComponentSchema> {
        disabled::toggle_field_disabled(schema, editing_variant, field_key)
    }

    /// Opens an editing session over `schema` in the default locale.
    pub fn session(&self, schema: ComponentSchema) -> EditSession {
        EditSession::new(self.clone(), schema)
    }
}

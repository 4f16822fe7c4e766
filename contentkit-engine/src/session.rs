//! # Edit Session
//!
//! The editing state a presentation layer keeps for one schema: the current
//! value, which variant the editor has selected, which locale is being
//! edited, and undo/redo history.
//!
//! Every edit goes through the engine and, when it changes the schema,
//! records the previous value. A failed edit changes nothing.

use contentkit_model::{ComponentSchema, FieldPatch, FieldSet};
use contentkit_types::{Locale, VariantKey};
use std::borrow::Cow;
use std::sync::Arc;

use crate::{EngineResult, SchemaEngine, SchemaHistory, coordinator};

/// One editor's view of a schema.
#[derive(Debug)]
pub struct EditSession {
    engine: SchemaEngine,
    schema: ComponentSchema,
    /// Variant selected in the editor; `None` edits base.
    editing_variant: Option<VariantKey>,
    locale: Locale,
    history: SchemaHistory,
}

impl EditSession {
    /// Creates a session editing base in the engine's default locale.
    pub fn new(engine: SchemaEngine, schema: ComponentSchema) -> Self {
        let history = SchemaHistory::with_max_levels(engine.config().history_limit);
        let locale = engine.config().default_locale.clone();
        Self {
            engine,
            schema,
            editing_variant: None,
            locale,
            history,
        }
    }

    /// The current schema, for the storage adapter to persist.
    pub fn schema(&self) -> &ComponentSchema {
        &self.schema
    }

    pub fn into_schema(self) -> ComponentSchema {
        self.schema
    }

    pub fn editing_variant(&self) -> Option<&VariantKey> {
        self.editing_variant.as_ref()
    }

    /// Selects the variant subsequent edits target (`None` = base).
    ///
    /// Selecting a variant that does not exist yet is fine; it is
    /// materialized by the first write.
    pub fn select_variant(&mut self, variant: Option<VariantKey>) {
        self.editing_variant = variant;
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn history(&self) -> &SchemaHistory {
        &self.history
    }

    /// The display schema for the selected variant.
    pub fn display(&self) -> Cow<'_, ComponentSchema> {
        self.engine.resolve_display_for(&self.schema, self.editing_variant.as_ref())
    }

    /// Display string of a field in the session locale, as the selected variant shows it.
    pub fn text(&self, field_key: &str) -> Option<String> {
        let display = self.display();
        let field = display.fields.get(field_key)?;
        self.engine.display_text(field, &self.locale)
    }

    /// Resolved items of a List field in the session locale.
    pub fn list(&self, field_key: &str) -> Option<Vec<String>> {
        let display = self.display();
        let field = display.fields.get(field_key)?;
        self.engine.display_list(field, &self.locale)
    }

    pub fn disabled_fields(&self) -> Cow<'_, FieldSet> {
        self.engine.resolve_disabled_fields(&self.schema, self.editing_variant.as_ref())
    }

    pub fn is_enabled(&self, field_key: &str) -> bool {
        self.engine.is_field_enabled(&self.schema, field_key, self.editing_variant.as_ref())
    }

    /// Applies a typed patch to the selected variant (or base).
    pub fn update(&mut self, field_key: &str, patch: &FieldPatch) -> EngineResult<()> {
        let next = self
            .engine
            .update_field(&self.schema, self.editing_variant.as_ref(), field_key, patch)?;
        self.commit(next, format!("edit {field_key}"));
        Ok(())
    }

    /// Applies a loosely typed JSON payload to the selected variant (or base).
    pub fn update_json(&mut self, field_key: &str, payload: serde_json::Value) -> EngineResult<()> {
        let next = self
            .engine
            .update_field_json(&self.schema, self.editing_variant.as_ref(), field_key, payload)?;
        self.commit(next, format!("edit {field_key}"));
        Ok(())
    }

    pub fn set_disabled(&mut self, field_key: &str, disabled: bool) -> EngineResult<()> {
        let next = self
            .engine
            .set_field_disabled(&self.schema, self.editing_variant.as_ref(), field_key, disabled)?;
        let verb = if disabled { "hide" } else { "show" };
        self.commit(next, format!("{verb} {field_key}"));
        Ok(())
    }

    pub fn toggle_disabled(&mut self, field_key: &str) -> EngineResult<()> {
        let next = self
            .engine
            .toggle_field_disabled(&self.schema, self.editing_variant.as_ref(), field_key)?;
        self.commit(next, format!("toggle {field_key}"));
        Ok(())
    }

    /// Drops the selected variant's override of `field_key`. No-op when editing base.
    pub fn reset_field(&mut self, field_key: &str) {
        let Some(variant) = self.editing_variant.as_ref() else {
            return;
        };
        let next = coordinator::reset_variant_field(&self.schema, variant, field_key);
        self.commit(next, format!("reset {field_key}"));
    }

    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.schema) {
            Some(previous) => {
                self.schema = previous;
                true
            }
            None => false,
        }
    }

    /// Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.schema) {
            Some(next) => {
                self.schema = next;
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, next: ComponentSchema, description: String) {
        if same_version(&self.schema, &next) {
            return;
        }
        let previous = std::mem::replace(&mut self.schema, next);
        self.history.record(previous, Some(description));
    }
}

/// True when both values share every collection, i.e. nothing was written.
fn same_version(a: &ComponentSchema, b: &ComponentSchema) -> bool {
    a.id == b.id
        && Arc::ptr_eq(&a.fields, &b.fields)
        && Arc::ptr_eq(&a.variants, &b.variants)
        && Arc::ptr_eq(&a.disabled_fields, &b.disabled_fields)
        && Arc::ptr_eq(&a.variant_disabled_fields, &b.variant_disabled_fields)
}

use contentkit_engine::{
    EngineError, is_field_enabled, resolve_disabled_fields, set_field_disabled, toggle_field_disabled,
};
use contentkit_model::{ComponentSchema, Field, FieldSet};
use contentkit_types::{FieldKey, LocalizedContent, VariantKey};
use pretty_assertions::assert_eq;
use std::borrow::Cow;
use std::sync::Arc;

fn en(text: &str) -> LocalizedContent {
    LocalizedContent::single("en", text)
}

fn make_schema() -> ComponentSchema {
    ComponentSchema::new("features")
        .field("heading", Field::text(en("Features")))
        .field("subtitle", Field::text(en("Everything you need")))
        .field("badge", Field::text(en("Beta")))
        .field("cta", Field::button("/start", en("Start")))
        .disabled("badge")
        .variant_disabled("premium", "cta")
}

fn keys(set: &FieldSet) -> Vec<&str> {
    set.iter().map(FieldKey::as_str).collect()
}

// ── Resolution ───────────────────────────────────────────────────

#[test]
fn base_resolution_is_the_base_set() {
    let schema = make_schema();
    let resolved = resolve_disabled_fields(&schema, None);
    assert!(matches!(resolved, Cow::Borrowed(_)));
    assert_eq!(keys(&resolved), vec!["badge"]);
}

#[test]
fn variant_resolution_is_the_union() {
    let schema = make_schema();
    let resolved = resolve_disabled_fields(&schema, Some(&VariantKey::from("premium")));
    assert_eq!(keys(&resolved), vec!["badge", "cta"]);
}

#[test]
fn variant_without_disables_sees_base_set() {
    let schema = make_schema();
    let resolved = resolve_disabled_fields(&schema, Some(&VariantKey::from("trial")));
    assert_eq!(keys(&resolved), vec!["badge"]);
}

#[test]
fn variant_cannot_unhide_base_disabled_field() {
    let schema = make_schema();
    let premium = VariantKey::from("premium");
    assert!(!is_field_enabled(&schema, "badge", Some(&premium)));
    assert!(!is_field_enabled(&schema, "cta", Some(&premium)));
    assert!(is_field_enabled(&schema, "cta", None));
    assert!(is_field_enabled(&schema, "heading", Some(&premium)));
}

#[test]
fn empty_schema_disables_nothing() {
    let schema = ComponentSchema::new("empty");
    assert!(resolve_disabled_fields(&schema, None).is_empty());
    assert!(is_field_enabled(&schema, "anything", Some(&VariantKey::from("x"))));
}

// ── Writes ───────────────────────────────────────────────────────

#[test]
fn base_write_touches_only_base_set() {
    let schema = make_schema();
    let next = set_field_disabled(&schema, None, "subtitle", true).unwrap();
    assert_eq!(keys(&next.disabled_fields), vec!["badge", "subtitle"]);
    assert!(Arc::ptr_eq(&next.variant_disabled_fields, &schema.variant_disabled_fields));
    assert!(Arc::ptr_eq(&next.fields, &schema.fields));
    assert_eq!(keys(&schema.disabled_fields), vec!["badge"], "input must not change");
}

#[test]
fn variant_write_touches_only_variant_set() {
    let schema = make_schema();
    let premium = VariantKey::from("premium");
    let next = set_field_disabled(&schema, Some(&premium), "subtitle", true).unwrap();
    assert!(Arc::ptr_eq(&next.disabled_fields, &schema.disabled_fields));
    assert_eq!(keys(&next.variant_disabled_fields["premium"]), vec!["cta", "subtitle"]);
}

#[test]
fn variant_set_is_materialized_lazily_and_dropped_when_empty() {
    let schema = make_schema();
    let trial = VariantKey::from("trial");
    assert!(!schema.variant_disabled_fields.contains_key("trial"));

    let hidden = set_field_disabled(&schema, Some(&trial), "heading", true).unwrap();
    assert_eq!(keys(&hidden.variant_disabled_fields["trial"]), vec!["heading"]);

    let shown = set_field_disabled(&hidden, Some(&trial), "heading", false).unwrap();
    assert!(!shown.variant_disabled_fields.contains_key("trial"));
}

#[test]
fn setting_current_state_shares_everything() {
    let schema = make_schema();
    let next = set_field_disabled(&schema, None, "badge", true).unwrap();
    assert!(Arc::ptr_eq(&next.disabled_fields, &schema.disabled_fields));
    assert_eq!(next, schema);
}

#[test]
fn toggle_flips_targeted_set() {
    let schema = make_schema();
    let premium = VariantKey::from("premium");

    let shown = toggle_field_disabled(&schema, None, "badge").unwrap();
    assert!(is_field_enabled(&shown, "badge", None));

    let premium_shown = toggle_field_disabled(&schema, Some(&premium), "cta").unwrap();
    assert!(is_field_enabled(&premium_shown, "cta", Some(&premium)));

    let twice = toggle_field_disabled(&premium_shown, Some(&premium), "cta").unwrap();
    assert!(!is_field_enabled(&twice, "cta", Some(&premium)));
}

#[test]
fn toggling_base_hidden_field_in_variant_keeps_it_hidden() {
    let schema = make_schema();
    let premium = VariantKey::from("premium");
    let next = toggle_field_disabled(&schema, Some(&premium), "badge").unwrap();
    assert!(!is_field_enabled(&next, "badge", Some(&premium)));
}

#[test]
fn unknown_field_is_rejected() {
    let err = set_field_disabled(&make_schema(), None, "footer", true).unwrap_err();
    assert!(matches!(err, EngineError::FieldNotFound { field_key } if field_key.as_str() == "footer"));
}

#[test]
fn variant_only_field_can_be_disabled_in_that_variant() {
    let schema = make_schema().variant_field("premium", "ribbon", Field::text(en("VIP")));
    let premium = VariantKey::from("premium");
    let next = set_field_disabled(&schema, Some(&premium), "ribbon", true).unwrap();
    assert!(!is_field_enabled(&next, "ribbon", Some(&premium)));
    assert!(set_field_disabled(&schema, None, "ribbon", true).is_err());
}

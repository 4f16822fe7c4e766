use contentkit_engine::{
    EngineError, UnknownKindPolicy, create_variant, remove_variant, reset_variant_field, update_field,
    update_field_json, update_field_with,
};
use contentkit_model::{ButtonField, ButtonPatch, ComponentSchema, Field, FieldPatch, UnknownField};
use contentkit_types::{LocalizedContent, VariantKey};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn en(text: &str) -> LocalizedContent {
    LocalizedContent::single("en", text)
}

fn make_hero_schema() -> ComponentSchema {
    ComponentSchema::new("hero")
        .field("heading", Field::text(en("Base Heading")))
        .field("description", Field::text(en("Base Description")))
        .field("cta", Field::button("/signup", en("Sign up")))
        .disabled("description")
}

fn premium() -> VariantKey {
    VariantKey::from("premium")
}

// ── Base writes ──────────────────────────────────────────────────

#[test]
fn base_write_replaces_only_target() {
    let schema = make_hero_schema();
    let next = update_field(&schema, None, "heading", &FieldPatch::Localized(en("New Heading"))).unwrap();

    assert_eq!(*next.fields["heading"], Field::text(en("New Heading")));
    assert!(Arc::ptr_eq(&next.fields["description"], &schema.fields["description"]));
    assert!(Arc::ptr_eq(&next.fields["cta"], &schema.fields["cta"]));
    assert!(Arc::ptr_eq(&next.variants, &schema.variants));
    assert!(Arc::ptr_eq(&next.disabled_fields, &schema.disabled_fields));
    assert_eq!(next.id, schema.id);
    assert_eq!(*schema.fields["heading"], Field::text(en("Base Heading")), "input must not change");
}

#[test]
fn base_write_keeps_field_order() {
    let schema = make_hero_schema();
    let next = update_field(&schema, None, "description", &FieldPatch::Localized(en("x"))).unwrap();
    assert_eq!(next.fields.get_index_of("description"), Some(1));
}

// ── Variant writes ───────────────────────────────────────────────

#[test]
fn variant_write_leaves_base_untouched() {
    let schema = make_hero_schema();
    let next = update_field(&schema, Some(&premium()), "heading", &FieldPatch::Localized(en("Premium Heading"))).unwrap();

    assert!(Arc::ptr_eq(&next.fields, &schema.fields));
    assert_eq!(
        next.override_field("premium", "heading").map(|f| (**f).clone()),
        Some(Field::text(en("Premium Heading")))
    );
    assert_eq!(next.overrides("premium").map(|o| o.len()), Some(1));
}

#[test]
fn first_variant_edit_starts_from_base_field() {
    let schema = make_hero_schema();
    let patch = FieldPatch::Button(ButtonPatch {
        text: Some(en("Upgrade")),
        ..ButtonPatch::default()
    });
    let next = update_field(&schema, Some(&premium()), "cta", &patch).unwrap();

    let Some(Field::Button(ButtonField { href, text, .. })) = next.override_field("premium", "cta").map(|f| &**f)
    else {
        panic!("expected button override");
    };
    assert_eq!(href, "/signup");
    assert_eq!(text, &en("Upgrade"));
    assert_eq!(*next.fields["cta"], Field::button("/signup", en("Sign up")));
}

#[test]
fn second_variant_edit_starts_from_override() {
    let schema = make_hero_schema();
    let first = update_field(
        &schema,
        Some(&premium()),
        "cta",
        &FieldPatch::Button(ButtonPatch {
            href: Some("/upgrade".into()),
            ..ButtonPatch::default()
        }),
    )
    .unwrap();
    let second = update_field(
        &first,
        Some(&premium()),
        "cta",
        &FieldPatch::Button(ButtonPatch {
            text: Some(en("Upgrade")),
            ..ButtonPatch::default()
        }),
    )
    .unwrap();

    let Some(Field::Button(button)) = second.override_field("premium", "cta").map(|f| &**f) else {
        panic!("expected button override");
    };
    assert_eq!(button.href, "/upgrade");
    assert_eq!(button.text, en("Upgrade"));
}

#[test]
fn variant_write_shares_other_variants() {
    let schema = make_hero_schema().field("sub", Field::text(en("s")));
    let with_trial = update_field(&schema, Some(&VariantKey::from("trial")), "heading", &FieldPatch::Localized(en("t")))
        .unwrap();
    let next = update_field(&with_trial, Some(&premium()), "heading", &FieldPatch::Localized(en("p"))).unwrap();

    assert!(Arc::ptr_eq(&next.variants["trial"], &with_trial.variants["trial"]));
    assert!(Arc::ptr_eq(&next.fields, &schema.fields));
}

#[test]
fn variant_only_field_is_editable_in_that_variant() {
    let schema = make_hero_schema().variant_field("premium", "ribbon", Field::text(en("VIP")));
    let next = update_field(&schema, Some(&premium()), "ribbon", &FieldPatch::Localized(en("Gold"))).unwrap();
    assert_eq!(
        next.override_field("premium", "ribbon").map(|f| (**f).clone()),
        Some(Field::text(en("Gold")))
    );
    assert!(!next.fields.contains_key("ribbon"));
}

// ── Failures ─────────────────────────────────────────────────────

#[test]
fn missing_field_is_rejected() {
    let schema = make_hero_schema();
    let err = update_field(&schema, None, "footer", &FieldPatch::Localized(en("x"))).unwrap_err();
    assert_eq!(err.to_string(), "field not found: footer");

    let err = update_field(&schema, Some(&premium()), "footer", &FieldPatch::Localized(en("x"))).unwrap_err();
    assert!(matches!(err, EngineError::FieldNotFound { .. }));
}

#[test]
fn mismatched_payload_is_rejected_without_materializing_variant() {
    let schema = make_hero_schema();
    let err = update_field(&schema, Some(&premium()), "cta", &FieldPatch::Localized(en("x"))).unwrap_err();
    assert!(matches!(err, EngineError::PayloadMismatch { shape: "localized", .. }));
    assert!(schema.variants.is_empty());
}

#[test]
fn unknown_kind_write_is_a_no_op_by_default() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let schema = make_hero_schema().field(
        "carousel",
        Field::Unknown(UnknownField {
            kind: "carousel".into(),
            raw: json!({"kind": "carousel"}),
        }),
    );
    let patch = FieldPatch::Raw(json!({"slides": 2}));

    let next = update_field(&schema, Some(&premium()), "carousel", &patch).unwrap();
    assert!(Arc::ptr_eq(&next.variants, &schema.variants));
    assert!(next.overrides("premium").is_none());

    let err = update_field_with(&schema, None, "carousel", &patch, UnknownKindPolicy::Reject).unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedKind(kind) if kind == "carousel"));
}

// ── JSON payloads ────────────────────────────────────────────────

#[test]
fn json_payload_is_decoded_for_target_kind() {
    let schema = make_hero_schema().field("hero_image", Field::image("/a.png", en("A")));

    let next = update_field_json(&schema, None, "heading", json!({"en": "Hi", "fr": "Salut"}), UnknownKindPolicy::Ignore)
        .unwrap();
    assert_eq!(*next.fields["heading"], Field::text(en("Hi").with("fr", "Salut")));

    let next = update_field_json(&next, None, "hero_image", json!({"en": "B"}), UnknownKindPolicy::Ignore).unwrap();
    assert_eq!(*next.fields["hero_image"], Field::image("/a.png", en("B")));

    let next = update_field_json(
        &next,
        None,
        "hero_image",
        json!({"src": "/b.png", "alt": {"en": "C"}}),
        UnknownKindPolicy::Ignore,
    )
    .unwrap();
    assert_eq!(*next.fields["hero_image"], Field::image("/b.png", en("C")));
}

#[test]
fn json_payload_of_wrong_shape_is_invalid() {
    let schema = make_hero_schema();
    let err = update_field_json(&schema, None, "heading", json!([1, 2]), UnknownKindPolicy::Ignore).unwrap_err();
    assert!(matches!(err, EngineError::InvalidPayload(_)));
}

// ── Variant management ───────────────────────────────────────────

#[test]
fn create_variant_materializes_empty_overrides() {
    let schema = make_hero_schema();
    let next = create_variant(&schema, &premium());
    assert_eq!(next.overrides("premium").map(|o| o.len()), Some(0));
    assert!(Arc::ptr_eq(&next.fields, &schema.fields));

    let again = create_variant(&next, &premium());
    assert!(Arc::ptr_eq(&again.variants, &next.variants));
}

#[test]
fn reset_variant_field_falls_back_to_base() {
    let schema = make_hero_schema();
    let edited = update_field(&schema, Some(&premium()), "heading", &FieldPatch::Localized(en("P"))).unwrap();
    let reset = reset_variant_field(&edited, &premium(), "heading");

    assert!(reset.override_field("premium", "heading").is_none());
    assert_eq!(reset.overrides("premium").map(|o| o.len()), Some(0));

    let untouched = reset_variant_field(&reset, &premium(), "heading");
    assert!(Arc::ptr_eq(&untouched.variants, &reset.variants));
}

#[test]
fn remove_variant_drops_overrides_and_disables() {
    let schema = make_hero_schema()
        .variant_field("premium", "heading", Field::text(en("P")))
        .variant_disabled("premium", "cta")
        .variant_disabled("trial", "cta");

    let next = remove_variant(&schema, &premium()).unwrap();
    assert!(next.overrides("premium").is_none());
    assert!(!next.variant_disabled_fields.contains_key("premium"));
    assert!(next.variant_disabled_fields.contains_key("trial"));

    let disables_only = remove_variant(&next, &VariantKey::from("trial")).unwrap();
    assert!(disables_only.variant_disabled_fields.is_empty());
}

#[test]
fn remove_unknown_variant_is_rejected() {
    let err = remove_variant(&make_hero_schema(), &premium()).unwrap_err();
    assert_eq!(err.to_string(), "variant not found: premium");
}

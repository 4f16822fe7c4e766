use contentkit_types::{DEFAULT_LOCALE, Locale, LocalizedContent};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ── Locale ────────────────────────────────────────────────────────

#[test]
fn default_locale_is_english() {
    assert_eq!(Locale::default().as_str(), DEFAULT_LOCALE);
    assert_eq!(DEFAULT_LOCALE, "en");
}

#[test]
fn parse_canonicalizes_case_and_separator() {
    assert_eq!(Locale::parse("EN_us").unwrap().as_str(), "en-US");
    assert_eq!(Locale::parse(" es ").unwrap().as_str(), "es");
    assert_eq!(Locale::parse("zh-Hant-tw").unwrap().as_str(), "zh-Hant-TW");
}

#[test]
fn parse_rejects_garbage() {
    assert!(Locale::parse("").is_err());
    assert!(Locale::parse("en US").is_err());
    assert!(Locale::parse("en--US").is_err());
    assert!(Locale::parse("-en").is_err());
}

#[test]
fn new_keeps_tag_verbatim() {
    assert_eq!(Locale::new("EN_us").as_str(), "EN_us");
}

// ── LocalizedContent ──────────────────────────────────────────────

#[test]
fn preserves_insertion_order() {
    let content = LocalizedContent::from([("fr", "Bonjour"), ("en", "Hello"), ("de", "Hallo")]);
    let locales: Vec<&str> = content.locales().map(Locale::as_str).collect();
    assert_eq!(locales, vec!["fr", "en", "de"]);
    assert_eq!(content.first().map(|(l, s)| (l.as_str(), s)), Some(("fr", "Bonjour")));
}

#[test]
fn with_overwrites_in_place() {
    let content = LocalizedContent::from([("en", "Hello"), ("es", "Hola")]).with("en", "Hi");
    let pairs: Vec<(&str, &str)> = content.iter().map(|(l, s)| (l.as_str(), s)).collect();
    assert_eq!(pairs, vec![("en", "Hi"), ("es", "Hola")]);
}

#[test]
fn insert_returns_previous() {
    let mut content = LocalizedContent::single("en", "Hello");
    assert_eq!(content.insert("en", "Hi"), Some("Hello".to_string()));
    assert_eq!(content.insert("es", "Hola"), None);
    assert_eq!(content.len(), 2);
}

#[test]
fn get_and_contains() {
    let content = LocalizedContent::single("es", "Hola");
    assert_eq!(content.get("es"), Some("Hola"));
    assert_eq!(content.get("en"), None);
    assert!(!content.contains("en"));
    assert!(content.contains("es"));
}

#[test]
fn empty_content() {
    let content = LocalizedContent::new();
    assert!(content.is_empty());
    assert!(content.first().is_none());
}

#[test]
fn json_is_a_plain_object_in_order() {
    let content = LocalizedContent::from([("es", "Hola"), ("en", "Hello")]);
    let json = serde_json::to_string(&content).unwrap();
    assert_eq!(json, r#"{"es":"Hola","en":"Hello"}"#);

    let back: LocalizedContent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, content);
}

#[test]
fn deserialize_canonicalizes_tags() {
    let locale: Locale = serde_json::from_str(r#""EN_us""#).unwrap();
    assert_eq!(locale.as_str(), "en-US");
    assert_eq!(serde_json::to_string(&locale).unwrap(), r#""en-US""#);

    let content: LocalizedContent = serde_json::from_str(r#"{"EN": "Hello", "es_mx": "Hola"}"#).unwrap();
    assert_eq!(content.get("en"), Some("Hello"));
    assert_eq!(content.get("es-MX"), Some("Hola"));
}

#[test]
fn deserialize_rejects_invalid_tags() {
    assert!(serde_json::from_str::<Locale>(r#""""#).is_err());
    assert!(serde_json::from_str::<LocalizedContent>(r#"{"en US": "x"}"#).is_err());
}

proptest! {
    #[test]
    fn parse_is_idempotent(lang in "[a-zA-Z]{2,3}", region in "[a-zA-Z]{2}") {
        let once = Locale::parse(&format!("{lang}_{region}")).unwrap();
        let twice = Locale::parse(once.as_str()).unwrap();
        prop_assert_eq!(once, twice);
    }
}

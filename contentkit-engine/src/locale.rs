//! Locale resolution: picks one display string out of a [`LocalizedContent`].
//!
//! The fallback chain is fixed: requested locale, then the default locale,
//! then the earliest-inserted translation, then the empty string. It never
//! fails, so every leaf of a schema always renders something.

use contentkit_model::Field;
use contentkit_types::{DEFAULT_LOCALE, Locale, LocalizedContent};
use tracing::trace;

/// Resolves `content` for `locale`, falling back to [`DEFAULT_LOCALE`].
#[must_use]
pub fn resolve_localized<'a>(content: &'a LocalizedContent, locale: &Locale) -> &'a str {
    resolve_localized_with(content, locale.as_str(), DEFAULT_LOCALE)
}

/// Resolves `content` for `locale` with an explicit default locale.
#[must_use]
pub fn resolve_localized_with<'a>(content: &'a LocalizedContent, locale: &str, default_locale: &str) -> &'a str {
    if let Some(text) = content.get(locale) {
        return text;
    }
    if let Some(text) = content.get(default_locale) {
        trace!(locale, default_locale, "falling back to default locale");
        return text;
    }
    match content.first() {
        Some((first, text)) => {
            trace!(locale, fallback = %first, "falling back to first translation");
            text
        }
        None => "",
    }
}

/// The primary human-readable string of a field, resolved for `locale`.
///
/// `None` for lists (see [`display_list`]) and unknown kinds.
#[must_use]
pub fn display_text(field: &Field, locale: &str, default_locale: &str) -> Option<String> {
    let content = match field {
        Field::Text(f) | Field::RichText(f) => &f.value,
        Field::Image(f) => &f.alt,
        Field::Badge(f) => &f.label,
        Field::Button(f) => &f.text,
        Field::Mockup(f) => &f.alt,
        Field::LogoItem(f) => return Some(f.name.clone()),
        Field::List(_) | Field::Unknown(_) => return None,
    };
    Some(resolve_localized_with(content, locale, default_locale).to_string())
}

/// Every item of a List field, resolved for `locale`. `None` for other kinds.
#[must_use]
pub fn display_list(field: &Field, locale: &str, default_locale: &str) -> Option<Vec<String>> {
    match field {
        Field::List(list) => Some(
            list.value
                .iter()
                .map(|item| resolve_localized_with(item, locale, default_locale).to_string())
                .collect(),
        ),
        _ => None,
    }
}

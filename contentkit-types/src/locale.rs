//! Locales and per-locale content.
//!
//! A [`Locale`] is an opaque language/region tag. [`LocalizedContent`] maps
//! locales to strings and remembers insertion order, which the engine's
//! fallback chain relies on when neither the requested nor the default
//! locale is present.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Tag of the locale content authors are expected to always fill in.
pub const DEFAULT_LOCALE: &str = "en";

/// Identifier for a language/region variant of text content (e.g. `"en"`, `"es-MX"`).
///
/// Serializes as a plain string. Deserializing goes through [`Locale::parse`],
/// so tags read from JSON (config, content maps) are always canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(String);

impl Locale {
    /// Wraps a tag verbatim, without normalization.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Parses a user-supplied tag into canonical form.
    ///
    /// Underscores become hyphens, the language subtag is lowercased and a
    /// two-letter region subtag is uppercased: `"EN_us"` → `"en-US"`.
    pub fn parse(tag: &str) -> crate::Result<Self> {
        let tag = tag.trim();
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(Error::InvalidLocale(tag.to_string()));
        }

        let mut parts = tag.split(['-', '_']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        if language.is_empty() {
            return Err(Error::InvalidLocale(tag.to_string()));
        }

        let mut canonical = language;
        for part in parts {
            if part.is_empty() {
                return Err(Error::InvalidLocale(tag.to_string()));
            }
            canonical.push('-');
            if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                canonical.push_str(&part.to_ascii_uppercase());
            } else {
                canonical.push_str(part);
            }
        }
        Ok(Self(canonical))
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }
}

impl From<&str> for Locale {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Locale {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for Locale {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Self::parse(&tag).map_err(serde::de::Error::custom)
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An insertion-ordered mapping from [`Locale`] to display string.
///
/// Should contain an entry for the default locale, but nothing here enforces
/// that; readers must tolerate its absence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedContent(IndexMap<Locale, String>);

impl LocalizedContent {
    /// Creates an empty content map.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Creates a content map holding a single translation.
    #[must_use]
    pub fn single(locale: impl Into<Locale>, text: impl Into<String>) -> Self {
        let mut map = IndexMap::with_capacity(1);
        map.insert(locale.into(), text.into());
        Self(map)
    }

    /// Returns a copy with `locale` set to `text`.
    ///
    /// An existing locale keeps its position; a new one is appended.
    #[must_use]
    pub fn with(mut self, locale: impl Into<Locale>, text: impl Into<String>) -> Self {
        self.0.insert(locale.into(), text.into());
        self
    }

    /// Sets a translation in place, returning the previous one.
    pub fn insert(&mut self, locale: impl Into<Locale>, text: impl Into<String>) -> Option<String> {
        self.0.insert(locale.into(), text.into())
    }

    /// Returns the translation for `locale`, if present.
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Returns true if a translation exists for `locale`.
    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        self.0.contains_key(locale)
    }

    /// Returns the earliest-inserted translation.
    #[must_use]
    pub fn first(&self) -> Option<(&Locale, &str)> {
        self.0.first().map(|(l, s)| (l, s.as_str()))
    }

    /// Number of translations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no translations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates translations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Locale, &str)> {
        self.0.iter().map(|(l, s)| (l, s.as_str()))
    }

    /// Iterates locales in insertion order.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.0.keys()
    }
}

impl<L: Into<Locale>, S: Into<String>> FromIterator<(L, S)> for LocalizedContent {
    fn from_iter<I: IntoIterator<Item = (L, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(l, s)| (l.into(), s.into())).collect())
    }
}

impl<L: Into<Locale>, S: Into<String>, const N: usize> From<[(L, S); N]> for LocalizedContent {
    fn from(pairs: [(L, S); N]) -> Self {
        pairs.into_iter().collect()
    }
}

//! Core type definitions for ContentKit.
//!
//! This crate defines the fundamental, schema-agnostic types used throughout
//! the engine:
//! - Component identifiers (UUID v7)
//! - Field and variant keys
//! - Locales and per-locale content maps
//!
//! Field kinds, schemas and everything that interprets them live in
//! `contentkit-model`; resolution and mutation logic lives in
//! `contentkit-engine`.

mod ids;
mod locale;

pub use ids::{ComponentId, FieldKey, VariantKey};
pub use locale::{DEFAULT_LOCALE, Locale, LocalizedContent};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("empty {0} key")]
    EmptyKey(&'static str),

    #[error("invalid locale: {0:?}")]
    InvalidLocale(String),
}

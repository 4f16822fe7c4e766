//! Personalization and localization resolution engine for ContentKit.
//!
//! Five components, leaves first:
//!
//! - **Locale resolver** ([`resolve_localized`]): one display string out of
//!   a multi-locale map, with a fixed fallback chain
//! - **Field update dispatcher** ([`apply_field_update`]): the per-kind
//!   update contract, in one exhaustive match
//! - **Variant overlay resolver** ([`resolve_display`]): a variant's
//!   overrides laid over the base fields
//! - **Disabled-field resolver** ([`resolve_disabled_fields`]): base hides
//!   plus variant hides
//! - **Schema mutation coordinator** ([`update_field`]): routes an edit to
//!   base or to a variant and returns a new schema
//!
//! Everything is synchronous and pure: schemas are immutable values, every
//! operation returns a new one, and only the path from the root to the
//! written field is reallocated. Locale and editing variant are explicit
//! parameters; there is no ambient context.
//!
//! [`SchemaEngine`] binds an [`EngineConfig`]; [`EditSession`] adds the
//! editor-side state (selected variant, locale, undo/redo).

mod config;
mod coordinator;
mod disabled;
mod dispatcher;
mod engine;
mod error;
mod history;
mod locale;
mod overlay;
mod session;

pub use config::{DEFAULT_HISTORY_LIMIT, EngineConfig, UnknownKindPolicy};
pub use coordinator::{
    create_variant, remove_variant, reset_variant_field, update_field, update_field_json, update_field_with,
};
pub use disabled::{is_field_enabled, resolve_disabled_fields, set_field_disabled, toggle_field_disabled};
pub use dispatcher::{apply_field_update, apply_field_update_with};
pub use engine::SchemaEngine;
pub use error::{EngineError, EngineResult};
pub use history::{SchemaHistory, Snapshot};
pub use locale::{display_list, display_text, resolve_localized, resolve_localized_with};
pub use overlay::{resolve_display, resolve_display_for};
pub use session::EditSession;

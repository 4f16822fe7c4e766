//! Content schema model for ContentKit.
//!
//! Defines the value types the resolution engine operates on:
//! - [`Field`]: a closed, kind-tagged union of editable content units
//! - [`FieldPatch`]: the partial update payloads each kind accepts
//! - [`ComponentSchema`]: base fields, per-variant overrides and disabled sets
//! - [`PersonalizationContext`]: the viewer's resolved segment
//! - [`SchemaIssue`]: findings of the non-fatal [`ComponentSchema::validate`]
//!
//! Every type here is plain data. Resolution and mutation live in
//! `contentkit-engine`; persistence belongs to whatever storage the host uses,
//! which exchanges schemas as JSON through the serde impls.

mod context;
mod field;
mod patch;
mod schema;
mod validate;

pub use context::PersonalizationContext;
pub use field::{
    BadgeField, BadgeLink, ButtonField, ButtonVariant, Field, FieldKind, IconPosition, ImageField, ListField,
    LogoItemField, MockupField, TextField, UnknownField,
};
pub use patch::{BadgePatch, ButtonPatch, FieldPatch, LogoItemPatch, MockupPatch};
pub use schema::{ComponentSchema, FieldMap, FieldSet, VariantFieldSets, VariantMap};
pub use validate::SchemaIssue;

//! Field update dispatcher.
//!
//! The single place that knows which payload shapes each field kind accepts
//! and how a payload turns into a new field value:
//!
//! | kind                            | payload                 | result                      |
//! |---------------------------------|-------------------------|-----------------------------|
//! | Text / RichText                 | `Localized`             | `value` replaced            |
//! | List                            | `List`                  | `value` replaced            |
//! | Image                           | `Localized`             | `alt` replaced, `src` kept  |
//! | Image                           | `ImageSource`           | `src` and `alt` replaced    |
//! | Badge / Button / Mockup / LogoItem | matching partial     | shallow merge onto current  |
//! | unknown                         | any                     | policy: unchanged or error  |
//!
//! Every other combination is a [`EngineError::PayloadMismatch`]. Updates
//! replace attributes rather than accumulate, so applying the same payload
//! twice gives the same field.

use contentkit_model::{
    BadgeField, BadgePatch, ButtonField, ButtonPatch, Field, FieldPatch, ImageField, LogoItemField, LogoItemPatch,
    MockupField, MockupPatch,
};
use std::sync::Arc;
use tracing::warn;

use crate::{EngineError, EngineResult, UnknownKindPolicy};

/// Applies `patch` to `current` with the default (ignore) unknown-kind policy.
pub fn apply_field_update(current: &Arc<Field>, patch: &FieldPatch) -> EngineResult<Arc<Field>> {
    apply_field_update_with(current, patch, UnknownKindPolicy::Ignore)
}

/// Applies `patch` to `current`, returning a fresh field.
///
/// `current` is never modified. The returned `Arc` is the same allocation as
/// `current` only when an unknown kind is ignored.
pub fn apply_field_update_with(
    current: &Arc<Field>,
    patch: &FieldPatch,
    policy: UnknownKindPolicy,
) -> EngineResult<Arc<Field>> {
    let updated = match (current.as_ref(), patch) {
        (Field::Text(_), FieldPatch::Localized(value)) => Field::text(value.clone()),
        (Field::RichText(_), FieldPatch::Localized(value)) => Field::rich_text(value.clone()),
        (Field::List(_), FieldPatch::List(items)) => Field::list(items.clone()),
        (Field::Image(image), FieldPatch::Localized(alt)) => Field::Image(ImageField {
            src: image.src.clone(),
            alt: alt.clone(),
        }),
        (Field::Image(_), FieldPatch::ImageSource { src, alt }) => Field::image(src.clone(), alt.clone()),
        (Field::Badge(badge), FieldPatch::Badge(p)) => Field::Badge(merge_badge(badge, p)),
        (Field::Button(button), FieldPatch::Button(p)) => Field::Button(merge_button(button, p)),
        (Field::Mockup(mockup), FieldPatch::Mockup(p)) => Field::Mockup(merge_mockup(mockup, p)),
        (Field::LogoItem(logo), FieldPatch::LogoItem(p)) => Field::LogoItem(merge_logo_item(logo, p)),
        (Field::Unknown(unknown), _) => {
            return match policy {
                UnknownKindPolicy::Ignore => {
                    warn!(kind = %unknown.kind, "ignoring update to unrecognized field kind");
                    Ok(Arc::clone(current))
                }
                UnknownKindPolicy::Reject => Err(EngineError::UnsupportedKind(unknown.kind.clone())),
            };
        }
        (field, patch) => {
            return Err(EngineError::PayloadMismatch {
                kind: field.kind(),
                shape: patch.shape(),
            });
        }
    };
    Ok(Arc::new(updated))
}

fn merge_badge(current: &BadgeField, patch: &BadgePatch) -> BadgeField {
    BadgeField {
        label: patch.label.clone().unwrap_or_else(|| current.label.clone()),
        link: patch.link.clone().unwrap_or_else(|| current.link.clone()),
    }
}

fn merge_button(current: &ButtonField, patch: &ButtonPatch) -> ButtonField {
    ButtonField {
        href: patch.href.clone().unwrap_or_else(|| current.href.clone()),
        text: patch.text.clone().unwrap_or_else(|| current.text.clone()),
        variant: patch.variant.unwrap_or(current.variant),
        icon: patch.icon.clone().unwrap_or_else(|| current.icon.clone()),
        icon_position: patch.icon_position.unwrap_or(current.icon_position),
    }
}

fn merge_mockup(current: &MockupField, patch: &MockupPatch) -> MockupField {
    MockupField {
        src_light: patch.src_light.clone().unwrap_or_else(|| current.src_light.clone()),
        src_dark: patch.src_dark.clone().unwrap_or_else(|| current.src_dark.clone()),
        alt: patch.alt.clone().unwrap_or_else(|| current.alt.clone()),
        width: patch.width.unwrap_or(current.width),
        height: patch.height.unwrap_or(current.height),
    }
}

fn merge_logo_item(current: &LogoItemField, patch: &LogoItemPatch) -> LogoItemField {
    LogoItemField {
        name: patch.name.clone().unwrap_or_else(|| current.name.clone()),
        image_key: patch.image_key.clone().unwrap_or_else(|| current.image_key.clone()),
        version: patch.version.clone().unwrap_or_else(|| current.version.clone()),
        badge: patch.badge.clone().unwrap_or_else(|| current.badge.clone()),
    }
}

//! Update payloads.
//!
//! A [`FieldPatch`] is what an editable presentation component hands to the
//! engine on edit. Which shapes a field accepts depends on its kind; the
//! engine's dispatcher enforces that, this module only describes the shapes
//! and decodes loosely typed JSON into them.

use contentkit_types::LocalizedContent;
use serde::{Deserialize, Deserializer, Serialize};

use crate::field::{BadgeLink, ButtonVariant, FieldKind, IconPosition};

/// A partial update for a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "data", rename_all = "camelCase")]
pub enum FieldPatch {
    /// New `value` of a Text/RichText field, or new `alt` of an Image.
    Localized(LocalizedContent),
    /// New `value` of a List field.
    List(Vec<LocalizedContent>),
    /// Explicit image replacement; both attributes are required together.
    ImageSource { src: String, alt: LocalizedContent },
    Badge(BadgePatch),
    Button(ButtonPatch),
    Mockup(MockupPatch),
    LogoItem(LogoItemPatch),
    /// Undecoded payload for a field kind this build does not know.
    Raw(serde_json::Value),
}

impl FieldPatch {
    /// Short name of the payload shape, used in error messages.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Localized(_) => "localized",
            Self::List(_) => "list",
            Self::ImageSource { .. } => "imageSource",
            Self::Badge(_) => "badge",
            Self::Button(_) => "button",
            Self::Mockup(_) => "mockup",
            Self::LogoItem(_) => "logoItem",
            Self::Raw(_) => "raw",
        }
    }

    /// Decodes a loosely typed payload for a field of the given kind.
    ///
    /// An Image payload that carries a `src` key is the explicit
    /// `{src, alt}` replacement shape; any other Image payload is the new
    /// alt text.
    pub fn from_json(kind: &FieldKind, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            FieldKind::Text | FieldKind::RichText => Self::Localized(serde_json::from_value(value)?),
            FieldKind::List => Self::List(serde_json::from_value(value)?),
            FieldKind::Image => {
                if value.get("src").is_some() {
                    let ImageSourceRepr { src, alt } = serde_json::from_value(value)?;
                    Self::ImageSource { src, alt }
                } else {
                    Self::Localized(serde_json::from_value(value)?)
                }
            }
            FieldKind::Badge => Self::Badge(serde_json::from_value(value)?),
            FieldKind::Button => Self::Button(serde_json::from_value(value)?),
            FieldKind::Mockup => Self::Mockup(serde_json::from_value(value)?),
            FieldKind::LogoItem => Self::LogoItem(serde_json::from_value(value)?),
            FieldKind::Unknown(_) => Self::Raw(value),
        })
    }
}

#[derive(Deserialize)]
struct ImageSourceRepr {
    src: String,
    alt: LocalizedContent,
}

/// Partial badge. The link is replaced as a whole when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LocalizedContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<BadgeLink>,
}

/// Partial button.
///
/// `icon: None` leaves the icon alone, `Some(None)` removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<LocalizedContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub icon: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_position: Option<IconPosition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockupPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_light: Option<String>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub src_dark: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<LocalizedContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_key: Option<String>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub version: Option<Option<String>>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub badge: Option<Option<String>>,
}

/// Distinguishes an absent attribute (outer `None`, via `#[serde(default)]`)
/// from an explicit `null` (`Some(None)`).
fn clearable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

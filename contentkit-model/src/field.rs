use contentkit_types::LocalizedContent;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One typed, editable unit of content inside a schema.
///
/// The JSON form is internally tagged by `kind`. A `kind` this build does
/// not know is kept as [`Field::Unknown`] so documents written by newer
/// versions survive a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(TextField),
    RichText(TextField),
    Image(ImageField),
    List(ListField),
    Badge(BadgeField),
    Button(ButtonField),
    Mockup(MockupField),
    LogoItem(LogoItemField),
    Unknown(UnknownField),
}

/// Discriminant of a [`Field`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    RichText,
    Image,
    List,
    Badge,
    Button,
    Mockup,
    LogoItem,
    Unknown(String),
}

impl FieldKind {
    /// The `kind` tag used in JSON.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::RichText => "richText",
            Self::Image => "image",
            Self::List => "list",
            Self::Badge => "badge",
            Self::Button => "button",
            Self::Mockup => "mockup",
            Self::LogoItem => "logoItem",
            Self::Unknown(kind) => kind,
        }
    }

    /// Maps a JSON `kind` tag back to a kind. Never fails.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "richText" => Self::RichText,
            "image" => Self::Image,
            "list" => Self::List,
            "badge" => Self::Badge,
            "button" => Self::Button,
            "mockup" => Self::Mockup,
            "logoItem" => Self::LogoItem,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of `Text` and `RichText` fields. Rich text is stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextField {
    pub value: LocalizedContent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageField {
    pub src: String,
    pub alt: LocalizedContent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListField {
    pub value: Vec<LocalizedContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeField {
    pub label: LocalizedContent,
    pub link: BadgeLink,
}

/// Link target shown next to a badge label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeLink {
    pub href: String,
    pub text: LocalizedContent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonField {
    pub href: String,
    pub text: LocalizedContent,
    #[serde(default)]
    pub variant: ButtonVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub icon_position: IconPosition,
}

/// Visual style of a button. Unrelated to personalization variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconPosition {
    Left,
    #[default]
    Right,
}

/// A device/screenshot mockup with optional dark-mode source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockupField {
    pub src_light: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_dark: Option<String>,
    pub alt: LocalizedContent,
    pub width: u32,
    pub height: u32,
}

/// An entry of a logo wall. `image_key` refers to an asset registry entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoItemField {
    pub name: String,
    pub image_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// A field whose `kind` is not recognized. `raw` is the full JSON object,
/// `kind` tag included.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownField {
    pub kind: String,
    pub raw: serde_json::Value,
}

impl Field {
    /// Creates a plain text field.
    #[must_use]
    pub fn text(value: LocalizedContent) -> Self {
        Self::Text(TextField { value })
    }

    /// Creates a rich text field.
    #[must_use]
    pub fn rich_text(value: LocalizedContent) -> Self {
        Self::RichText(TextField { value })
    }

    /// Creates an image field.
    #[must_use]
    pub fn image(src: impl Into<String>, alt: LocalizedContent) -> Self {
        Self::Image(ImageField { src: src.into(), alt })
    }

    /// Creates a list field.
    #[must_use]
    pub fn list(value: Vec<LocalizedContent>) -> Self {
        Self::List(ListField { value })
    }

    /// Creates a button with default style and no icon.
    #[must_use]
    pub fn button(href: impl Into<String>, text: LocalizedContent) -> Self {
        Self::Button(ButtonField {
            href: href.into(),
            text,
            ..ButtonField::default()
        })
    }

    /// Returns this field's kind.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::RichText(_) => FieldKind::RichText,
            Self::Image(_) => FieldKind::Image,
            Self::List(_) => FieldKind::List,
            Self::Badge(_) => FieldKind::Badge,
            Self::Button(_) => FieldKind::Button,
            Self::Mockup(_) => FieldKind::Mockup,
            Self::LogoItem(_) => FieldKind::LogoItem,
            Self::Unknown(u) => FieldKind::Unknown(u.kind.clone()),
        }
    }

    /// Every localized string group carried by this field, in declaration order.
    #[must_use]
    pub fn localized_contents(&self) -> Vec<&LocalizedContent> {
        match self {
            Self::Text(f) | Self::RichText(f) => vec![&f.value],
            Self::Image(f) => vec![&f.alt],
            Self::List(f) => f.value.iter().collect(),
            Self::Badge(f) => vec![&f.label, &f.link.text],
            Self::Button(f) => vec![&f.text],
            Self::Mockup(f) => vec![&f.alt],
            Self::LogoItem(_) | Self::Unknown(_) => Vec::new(),
        }
    }
}

// ── Serde ────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum FieldRef<'a> {
    Text(&'a TextField),
    RichText(&'a TextField),
    Image(&'a ImageField),
    List(&'a ListField),
    Badge(&'a BadgeField),
    Button(&'a ButtonField),
    Mockup(&'a MockupField),
    LogoItem(&'a LogoItemField),
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum FieldRepr {
    Text(TextField),
    RichText(TextField),
    Image(ImageField),
    List(ListField),
    Badge(BadgeField),
    Button(ButtonField),
    Mockup(MockupField),
    LogoItem(LogoItemField),
}

impl From<FieldRepr> for Field {
    fn from(repr: FieldRepr) -> Self {
        match repr {
            FieldRepr::Text(f) => Self::Text(f),
            FieldRepr::RichText(f) => Self::RichText(f),
            FieldRepr::Image(f) => Self::Image(f),
            FieldRepr::List(f) => Self::List(f),
            FieldRepr::Badge(f) => Self::Badge(f),
            FieldRepr::Button(f) => Self::Button(f),
            FieldRepr::Mockup(f) => Self::Mockup(f),
            FieldRepr::LogoItem(f) => Self::LogoItem(f),
        }
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match self {
            Self::Text(f) => FieldRef::Text(f),
            Self::RichText(f) => FieldRef::RichText(f),
            Self::Image(f) => FieldRef::Image(f),
            Self::List(f) => FieldRef::List(f),
            Self::Badge(f) => FieldRef::Badge(f),
            Self::Button(f) => FieldRef::Button(f),
            Self::Mockup(f) => FieldRef::Mockup(f),
            Self::LogoItem(f) => FieldRef::LogoItem(f),
            Self::Unknown(u) => return u.raw.serialize(serializer),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let kind = raw
            .get("kind")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| D::Error::missing_field("kind"))?;

        if let FieldKind::Unknown(kind) = FieldKind::from_tag(kind) {
            return Ok(Self::Unknown(UnknownField { kind, raw }));
        }
        FieldRepr::deserialize(raw)
            .map(Self::from)
            .map_err(D::Error::custom)
    }
}

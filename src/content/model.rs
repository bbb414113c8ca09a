/*!
 * Concept document model.
 *
 * A concept is an ordered list of typed sections authored in every
 * supported locale. The JSON form keys localized values by locale code and
 * discriminates sections by their `type` field.
 */

use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::ContentError;
use crate::language_utils::Locale;

/// A value authored once per locale.
///
/// Lookups never fall back on their own; fallback policy belongs to
/// [`LocalizedTextResolver`](crate::content::LocalizedTextResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized<T> {
    values: BTreeMap<Locale, T>,
}

/// Localized display string
pub type LocalizedString = Localized<String>;

/// Localized ordered list of strings
pub type LocalizedStringList = Localized<Vec<String>>;

impl<T> Default for Localized<T> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<T> Localized<T> {
    /// Create an empty value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a value holding both the Spanish and English versions.
    pub fn bilingual(es: impl Into<T>, en: impl Into<T>) -> Self {
        Self::new().with(Locale::Es, es).with(Locale::En, en)
    }

    /// Set the value for a locale.
    pub fn with(mut self, locale: Locale, value: impl Into<T>) -> Self {
        self.values.insert(locale, value.into());
        self
    }

    /// Value stored for exactly this locale.
    pub fn get(&self, locale: Locale) -> Option<&T> {
        self.values.get(&locale)
    }

    /// Locales that hold a value.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.values.keys().copied()
    }

    /// Iterate over `(locale, value)` pairs in locale order.
    pub fn iter(&self) -> impl Iterator<Item = (Locale, &T)> {
        self.values.iter().map(|(locale, value)| (*locale, value))
    }

    /// Supported locales with no value.
    pub fn missing_locales(&self) -> Vec<Locale> {
        Locale::ALL
            .iter()
            .copied()
            .filter(|locale| !self.values.contains_key(locale))
            .collect()
    }

    /// Whether every supported locale holds a value.
    pub fn is_complete(&self) -> bool {
        self.missing_locales().is_empty()
    }

    /// Whether no locale holds a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Explanatory text with an optional code block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSection {
    pub title: LocalizedString,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub content: LocalizedString,
}

/// Bullet list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSection {
    pub title: LocalizedString,
    pub content: LocalizedStringList,
}

/// Comparison table
///
/// Row widths are expected to match the header width for each locale but
/// nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSection {
    pub title: LocalizedString,

    #[serde(default)]
    pub headers: LocalizedStringList,

    #[serde(default)]
    pub rows: Vec<LocalizedStringList>,
}

/// Worked example: a case, its code and what it shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleSection {
    pub title: LocalizedString,
    pub case_title: LocalizedString,
    pub case_description: LocalizedString,
    pub code: String,
    pub conclusion: LocalizedString,
}

/// One content block of a concept, discriminated by `type`.
///
/// Tags this crate does not know are kept as [`Section::Unsupported`] so the
/// renderer can reject exactly that section instead of failing the whole
/// document at load time. The section's JSON object is kept verbatim in
/// `raw` and written back unchanged on serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Text(TextSection),
    List(ListSection),
    Table(TableSection),
    Example(ExampleSection),
    Unsupported { kind: String, raw: serde_json::Value },
}

impl Section {
    /// An unsupported section carrying nothing but its tag.
    pub fn unsupported(kind: impl Into<String>) -> Self {
        let kind = kind.into();
        let raw = serde_json::json!({ "type": kind.as_str() });
        Self::Unsupported { kind, raw }
    }

    /// The `type` tag of this section.
    pub fn kind(&self) -> &str {
        match self {
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Table(_) => "table",
            Self::Example(_) => "example",
            Self::Unsupported { kind, .. } => kind.as_str(),
        }
    }

    /// Localized title, absent for unsupported sections.
    pub fn title(&self) -> Option<&LocalizedString> {
        match self {
            Self::Text(s) => Some(&s.title),
            Self::List(s) => Some(&s.title),
            Self::Table(s) => Some(&s.title),
            Self::Example(s) => Some(&s.title),
            Self::Unsupported { .. } => None,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedSection<'a> {
    Text(&'a TextSection),
    List(&'a ListSection),
    Table(&'a TableSection),
    Example(&'a ExampleSection),
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => TaggedSection::Text(s).serialize(serializer),
            Self::List(s) => TaggedSection::List(s).serialize(serializer),
            Self::Table(s) => TaggedSection::Table(s).serialize(serializer),
            Self::Example(s) => TaggedSection::Example(s).serialize(serializer),
            Self::Unsupported { raw, .. } if raw.is_object() => raw.serialize(serializer),
            Self::Unsupported { kind, .. } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", kind)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| D::Error::missing_field("type"))?
            .to_string();

        let section = match kind.as_str() {
            "text" => Self::Text(serde_json::from_value(value).map_err(D::Error::custom)?),
            "list" => Self::List(serde_json::from_value(value).map_err(D::Error::custom)?),
            "table" => Self::Table(serde_json::from_value(value).map_err(D::Error::custom)?),
            "example" => Self::Example(serde_json::from_value(value).map_err(D::Error::custom)?),
            _ => Self::Unsupported { kind, raw: value },
        };

        Ok(section)
    }
}

/// One documentation entry describing a single programming concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptDocument {
    pub title: LocalizedString,

    /// Unique across the registry
    pub slug: String,

    pub description: LocalizedString,

    #[serde(default)]
    pub sections: Vec<Section>,

    #[serde(default)]
    pub conclusion: LocalizedStringList,
}

impl ConceptDocument {
    /// Parse a document from its JSON form.
    ///
    /// `source_name` only labels the error.
    pub fn from_json(source_name: &str, json: &str) -> Result<Self, ContentError> {
        serde_json::from_str(json).map_err(|e| ContentError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ContentError> {
        serde_json::to_string_pretty(self).map_err(|e| ContentError::Parse {
            source_name: self.slug.clone(),
            message: e.to_string(),
        })
    }

    /// Table sections paired with their index in `sections`.
    pub fn tables(&self) -> impl Iterator<Item = (usize, &TableSection)> {
        self.sections.iter().enumerate().filter_map(|(index, section)| match section {
            Section::Table(table) => Some((index, table)),
            _ => None,
        })
    }
}

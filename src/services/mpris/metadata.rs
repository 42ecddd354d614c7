use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

use zbus::zvariant::{self, Value};

/// Placeholder shown when a track has no usable title or artist
pub const UNKNOWN_METADATA: &str = "[Unknown]";

/// Metadata key for the track title
pub const TITLE_KEY: &str = "xesam:title";
/// Metadata key for the track URL
pub const URL_KEY: &str = "xesam:url";
/// Metadata key for the artist list
pub const ARTIST_KEY: &str = "xesam:artist";
/// Metadata key for the track length in microseconds
pub const LENGTH_KEY: &str = "mpris:length";

/// A single metadata value, tagged by the shape the client cares about
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    /// String or object path
    Text(String),

    /// Any integer type that fits in an `i64`
    Integer(i64),

    /// Floating point value such as `xesam:autoRating`
    Float(f64),

    /// Boolean value
    Boolean(bool),

    /// Array of strings such as `xesam:artist`
    TextList(Vec<String>),

    /// Anything else, kept as its debug rendering for raw listings
    Other(String),
}

impl MetadataValue {
    /// The value as text, if it is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The value as an integer, if it is one
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&Value<'_>> for MetadataValue {
    fn from(value: &Value<'_>) -> Self {
        match value {
            Value::Str(s) => Self::Text(s.to_string()),
            Value::ObjectPath(path) => Self::Text(path.to_string()),
            Value::Bool(b) => Self::Boolean(*b),
            Value::U8(n) => Self::Integer(i64::from(*n)),
            Value::I16(n) => Self::Integer(i64::from(*n)),
            Value::U16(n) => Self::Integer(i64::from(*n)),
            Value::I32(n) => Self::Integer(i64::from(*n)),
            Value::U32(n) => Self::Integer(i64::from(*n)),
            Value::I64(n) => Self::Integer(*n),
            Value::U64(n) => match i64::try_from(*n) {
                Ok(n) => Self::Integer(n),
                Err(_) => Self::Other(n.to_string()),
            },
            Value::F64(f) => Self::Float(*f),
            Value::Value(inner) => Self::from(&**inner),
            Value::Array(array) => {
                let texts: Option<Vec<String>> = array
                    .iter()
                    .map(|item| match item {
                        Value::Str(s) => Some(s.to_string()),
                        _ => None,
                    })
                    .collect();

                match texts {
                    Some(list) => Self::TextList(list),
                    None => Self::Other(format!("{value:?}")),
                }
            }
            other => Self::Other(format!("{other:?}")),
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::TextList(list) => write!(f, "[{}]", list.join(", ")),
            Self::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// Track metadata as published in the player's `Metadata` property
///
/// Keys are kept sorted so raw listings are stable between runs. Every
/// accessor treats a missing key as a normal outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    entries: BTreeMap<String, MetadataValue>,
}

impl Metadata {
    /// Looks up a raw metadata value
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    /// Iterates over every key/value pair in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the player sent no metadata at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `xesam:title`
    pub fn title(&self) -> Option<&str> {
        self.get(TITLE_KEY).and_then(MetadataValue::as_text)
    }

    /// `xesam:url`
    pub fn url(&self) -> Option<&str> {
        self.get(URL_KEY).and_then(MetadataValue::as_text)
    }

    /// `xesam:artist`; a bare string counts as a single artist
    pub fn artists(&self) -> Option<Vec<&str>> {
        match self.get(ARTIST_KEY)? {
            MetadataValue::TextList(list) => Some(list.iter().map(String::as_str).collect()),
            MetadataValue::Text(artist) => Some(vec![artist.as_str()]),
            _ => None,
        }
    }

    /// `mpris:length` in microseconds
    pub fn length(&self) -> Option<i64> {
        self.get(LENGTH_KEY).and_then(MetadataValue::as_integer)
    }

    /// Track length, only when it is known and positive
    ///
    /// Live streams usually omit the length or report zero.
    pub fn known_length(&self) -> Option<u64> {
        self.length()
            .and_then(|length| u64::try_from(length).ok())
            .filter(|length| *length > 0)
    }

    /// Title for display: the title, else the URL, else a placeholder
    pub fn display_title(&self) -> &str {
        self.title()
            .filter(|title| !title.is_empty())
            .or_else(|| self.url().filter(|url| !url.is_empty()))
            .unwrap_or(UNKNOWN_METADATA)
    }

    /// Artist list joined with `", "`, or a placeholder when there is none
    pub fn display_artist(&self) -> String {
        match self.artists() {
            Some(artists) if !artists.is_empty() => artists.join(", "),
            _ => UNKNOWN_METADATA.to_string(),
        }
    }
}

impl<'a> From<HashMap<String, Value<'a>>> for Metadata {
    fn from(map: HashMap<String, Value<'a>>) -> Self {
        let entries = map
            .iter()
            .map(|(key, value)| (key.clone(), MetadataValue::from(value)))
            .collect();

        Self { entries }
    }
}

impl FromIterator<(String, MetadataValue)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, MetadataValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<&Value<'_>> for Metadata {
    type Error = zvariant::Error;

    fn try_from(value: &Value<'_>) -> Result<Self, Self::Error> {
        if let Value::Value(inner) = value {
            return Self::try_from(&**inner);
        }

        let map: HashMap<String, Value> = value.try_clone()?.try_into()?;
        Ok(Self::from(map))
    }
}

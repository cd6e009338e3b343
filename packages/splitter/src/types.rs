//! Core data types for the azkar and hadith documents.
//!
//! Records are deliberately lenient: every field is held as raw JSON, fields
//! the splitter does not inspect are carried through untouched, and a field
//! of an unexpected type reads as absent instead of failing the whole load.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One category of the azkar document.
///
/// Built from any JSON value; a non-object yields a record with every field
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct CategoryRecord {
    /// Category identifier, exactly as found in the source.
    pub id: Option<Value>,

    /// Display name, exactly as found in the source.
    pub category: Option<Value>,

    /// Supplications belonging to this category.
    ///
    /// A missing, `null` or non-array `array` reads as empty.
    pub array: Vec<DhikrRecord>,
}

impl CategoryRecord {
    /// The identifier, if it is a non-zero integer.
    ///
    /// Only categories with such an identifier are ever split into files.
    #[must_use]
    pub fn split_id(&self) -> Option<i64> {
        self.id.as_ref().and_then(Value::as_i64).filter(|id| *id != 0)
    }
}

impl From<Value> for CategoryRecord {
    fn from(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::default();
        };

        Self {
            id: fields.remove("id"),
            category: fields.remove("category"),
            array: list_or_empty(fields.remove("array"))
                .into_iter()
                .map(DhikrRecord)
                .collect(),
        }
    }
}

/// A single supplication record.
///
/// Stored as raw JSON so that every field, and the field order, survives a
/// load/write cycle. Only the `audio` field of an object is interpreted;
/// any other value passes through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DhikrRecord(Value);

impl DhikrRecord {
    /// Key of the audio path field.
    pub const AUDIO_KEY: &'static str = "audio";

    /// The audio path, if present and a string.
    #[must_use]
    pub fn audio(&self) -> Option<&str> {
        self.0.get(Self::AUDIO_KEY).and_then(Value::as_str)
    }

    /// Replace the audio path in place, keeping the field's position.
    ///
    /// Does nothing when the record is not an object.
    pub fn set_audio(&mut self, audio: String) {
        if let Value::Object(fields) = &mut self.0 {
            fields.insert(Self::AUDIO_KEY.to_string(), Value::String(audio));
        }
    }

    /// Look up any field; `None` for non-objects.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Projection of a category written to the summary file.
///
/// Values are copied verbatim; absent source fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummaryEntry {
    pub id: Option<Value>,
    pub category: Option<Value>,
}

impl From<&CategoryRecord> for CategorySummaryEntry {
    fn from(record: &CategoryRecord) -> Self {
        Self {
            id: record.id.clone(),
            category: record.category.clone(),
        }
    }
}

/// One hadith collection as stored in the source directory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct HadithBook {
    /// Chapter listing, passed through verbatim whatever its shape.
    pub chapters: Option<Value>,

    /// Hadith records; a missing or non-array `hadiths` reads as empty.
    pub hadiths: Vec<Value>,
}

impl HadithBook {
    /// Key linking a hadith to its chapter.
    pub const CHAPTER_KEY: &'static str = "chapterId";

    /// Content of `chapters.json`: the chapter listing, or `[]` when it is
    /// missing or falsy.
    #[must_use]
    pub fn chapters_listing(&self) -> Value {
        match &self.chapters {
            Some(chapters) if !is_falsy(chapters) => chapters.clone(),
            _ => Value::Array(Vec::new()),
        }
    }

    /// Chapter key of a hadith as used in output filenames.
    ///
    /// Numbers and strings are accepted; anything else, or a string that
    /// could escape the book directory, counts as absent.
    #[must_use]
    pub fn chapter_key(hadith: &Value) -> Option<String> {
        match hadith.get(Self::CHAPTER_KEY)? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s)
                if !s.is_empty() && s != ".." && !s.contains(['/', '\\']) =>
            {
                Some(s.clone())
            }
            _ => None,
        }
    }
}

impl From<Value> for HadithBook {
    fn from(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::default();
        };

        Self {
            chapters: fields.remove("chapters"),
            hadiths: list_or_empty(fields.remove("hadiths")),
        }
    }
}

/// Elements of an array value; anything else is an empty list.
fn list_or_empty(value: Option<Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

/// `null`, `false`, `0` and `""`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

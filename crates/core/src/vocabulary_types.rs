//! Contains the types of the vocabulary data and the flashcards derived from it.

use crate::Article;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single dictionary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    /// The German term itself.
    pub word: String,
    /// Part of speech, such as "noun" or "verb".
    pub pos: String,
    /// CEFR proficiency level, such as "A1" or "B1".
    pub cefr_level: String,
    /// Grammatical gender, only set for nouns. Not necessarily lowercase.
    /// `Some(None)` if the entry has the field but it is null.
    #[serde(default, deserialize_with = "nullable")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Option<String>>,
    /// `Some(None)` if the entry has the field but it is null.
    #[serde(default, deserialize_with = "nullable")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english_translation: Option<Option<String>>,
    /// Any other fields of the entry, kept so that records can be written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VocabularyRecord {
    pub fn new(word: &str, pos: &str, cefr_level: &str) -> Self {
        Self {
            word: word.to_string(),
            pos: pos.to_string(),
            cefr_level: cefr_level.to_string(),
            gender: None,
            english_translation: None,
            extra: Map::new(),
        }
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = Some(Some(gender.to_string()));
        self
    }

    pub fn with_translation(mut self, english: &str) -> Self {
        self.english_translation = Some(Some(english.to_string()));
        self
    }

    /// The gender, if the entry has one that is not null.
    pub fn gender(&self) -> Option<&str> {
        self.gender.as_ref().and_then(Option::as_deref)
    }

    /// The English translation, if the entry has one that is not null.
    pub fn translation(&self) -> Option<&str> {
        self.english_translation.as_ref().and_then(Option::as_deref)
    }

    pub fn is_noun(&self) -> bool {
        self.pos == crate::NOUN
    }

    /// The article matching this record's gender, if it has a recognised one.
    pub fn article(&self) -> Option<Article> {
        self.gender().and_then(Article::for_gender)
    }
}

// only called when the field is present, so a null value becomes `Some(None)` instead of `None`
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A simplified study card pairing a noun with its article and translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Starts from 1, in the order the nouns appear in the input.
    pub id: u32,
    pub noun: String,
    /// Empty if the gender of the noun was missing or unrecognised.
    pub article: String,
    pub english: Option<String>,
}

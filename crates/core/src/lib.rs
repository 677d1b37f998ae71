//! artikel core types and functions.

pub mod vocabulary_types;

use std::fmt;

/// Part of speech label of nouns in the vocabulary data.
pub const NOUN: &str = "noun";

/// Grammatical gender of a German noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    /// Parses a gender from its name, ignoring case as the data is not consistent with it.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "masculine" => Some(Self::Masculine),
            "feminine" => Some(Self::Feminine),
            "neuter" => Some(Self::Neuter),
            _ => None,
        }
    }

    /// The definite article used with nouns of this gender.
    pub fn article(self) -> Article {
        match self {
            Self::Masculine => Article::Der,
            Self::Feminine => Article::Die,
            Self::Neuter => Article::Das,
        }
    }
}

/// A German definite article in the nominative singular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Article {
    Der,
    Die,
    Das,
}

impl Article {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Der => "der",
            Self::Die => "die",
            Self::Das => "das",
        }
    }

    /// Looks up the article for a free-form gender value.
    /// Returns `None` for unrecognised values.
    pub fn for_gender(gender: &str) -> Option<Self> {
        Gender::from_name(gender).map(Gender::article)
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

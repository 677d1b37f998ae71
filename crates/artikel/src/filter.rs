//! Selecting vocabulary records by exact field matches.

use crate::{Error, Result, VocabularyRecord};
use serde_json::Value;
use std::{fmt, str::FromStr};

/// A field of a vocabulary record that a condition can refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Word,
    Pos,
    CefrLevel,
    Gender,
    EnglishTranslation,
    /// Any field not modeled by [`VocabularyRecord`], looked up from its extra fields.
    Other(String),
}

impl Field {
    /// Parses a field from its name in the JSON data.
    pub fn from_name(name: &str) -> Self {
        match name {
            "word" => Self::Word,
            "pos" => Self::Pos,
            "cefr_level" => Self::CefrLevel,
            "gender" => Self::Gender,
            "english_translation" => Self::EnglishTranslation,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Word => "word",
            Self::Pos => "pos",
            Self::CefrLevel => "cefr_level",
            Self::Gender => "gender",
            Self::EnglishTranslation => "english_translation",
            Self::Other(name) => name,
        }
    }

    // None if the record doesn't have the field at all,
    // Some(None) if it does but the value is null or not a string
    fn value<'a>(&self, record: &'a VocabularyRecord) -> Option<Option<&'a str>> {
        match self {
            Self::Word => Some(Some(record.word.as_str())),
            Self::Pos => Some(Some(record.pos.as_str())),
            Self::CefrLevel => Some(Some(record.cefr_level.as_str())),
            Self::Gender => record.gender.as_ref().map(Option::as_deref),
            Self::EnglishTranslation => record.english_translation.as_ref().map(Option::as_deref),
            Self::Other(name) => record.extra.get(name).map(Value::as_str),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requires a field to be exactly equal to a value. Case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub field: Field,
    pub value: String,
}

impl Condition {
    pub fn new(field: Field, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl FromStr for Condition {
    type Err = Error;

    /// Parses a condition of the form `field=value`.
    /// Whitespace around both the field and the value is ignored.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((field, value)) if !field.trim().is_empty() => {
                Ok(Self::new(Field::from_name(field.trim()), value.trim()))
            }
            _ => Err(Error::InvalidCondition(s.to_string())),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.field, self.value)
    }
}

/// A conjunction of conditions. The empty predicate matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Checks whether the record satisfies every condition.
    /// Conditions are checked in order and checking stops at the first mismatch.
    ///
    /// # Errors
    /// If a checked condition refers to a field the record doesn't have.
    pub fn matches(&self, index: usize, record: &VocabularyRecord) -> Result<bool> {
        for condition in &self.conditions {
            let value = condition
                .field
                .value(record)
                .ok_or_else(|| Error::MissingField {
                    index,
                    word: record.word.clone(),
                    field: condition.field.name().to_string(),
                })?;
            if value != Some(condition.value.as_str()) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditions.is_empty() {
            return f.write_str("(everything)");
        }
        for (idx, condition) in self.conditions.iter().enumerate() {
            if idx > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}

/// Commonly used predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    A1Nouns,
    B1Nouns,
}

impl Preset {
    pub fn predicate(self) -> Predicate {
        let level = match self {
            Self::A1Nouns => "A1",
            Self::B1Nouns => "B1",
        };
        Predicate::default()
            .and(Condition::new(Field::Pos, artikel_core::NOUN))
            .and(Condition::new(Field::CefrLevel, level))
    }
}

/// Returns the records that satisfy the predicate, in their original order.
///
/// # Errors
/// On the first record that is missing a field the predicate refers to.
pub fn filter(
    records: Vec<VocabularyRecord>,
    predicate: &Predicate,
) -> Result<Vec<VocabularyRecord>> {
    tracing::debug!("filtering {} records by {predicate}", records.len());
    let mut matching = vec![];
    for (index, record) in records.into_iter().enumerate() {
        if predicate.matches(index, &record)? {
            tracing::trace!("record {index} '{}' matches", record.word);
            matching.push(record);
        }
    }
    Ok(matching)
}

#[cfg(test)]
mod test {
    use super::*;

    fn records() -> Vec<VocabularyRecord> {
        vec![
            VocabularyRecord::new("Haus", "noun", "A1").with_gender("neuter"),
            VocabularyRecord::new("laufen", "verb", "A1"),
            VocabularyRecord::new("Erfahrung", "noun", "B1").with_gender("feminine"),
            VocabularyRecord::new("Tisch", "noun", "A1").with_gender("masculine"),
            VocabularyRecord::new("Umwelt", "noun", "b1").with_gender("feminine"),
        ]
    }

    fn words(records: &[VocabularyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.word.as_str()).collect()
    }

    #[test]
    fn keeps_matching_in_order() {
        let predicate = Predicate::default()
            .and(Condition::new(Field::Pos, "noun"))
            .and(Condition::new(Field::CefrLevel, "A1"));
        let filtered = filter(records(), &predicate).unwrap();
        assert_eq!(words(&filtered), &["Haus", "Tisch"]);
    }

    #[test]
    fn matches_case_sensitively() {
        let filtered = filter(records(), &Preset::B1Nouns.predicate()).unwrap();
        assert_eq!(words(&filtered), &["Erfahrung"]);
    }

    #[test]
    fn empty_predicate_matches_everything() {
        let filtered = filter(records(), &Predicate::default()).unwrap();
        assert_eq!(filtered, records());
    }

    #[test]
    fn fails_on_missing_field() {
        let predicate = Predicate::default().and(Condition::new(Field::Gender, "neuter"));
        let err = filter(records(), &predicate).unwrap_err();
        match err {
            Error::MissingField { index, word, field } => {
                assert_eq!(index, 1);
                assert_eq!(word, "laufen");
                assert_eq!(field, "gender");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn null_field_does_not_match() {
        let input = r#"[
            {"word": "Leute", "pos": "noun", "cefr_level": "A1", "gender": null, "english_translation": null},
            {"word": "Haus", "pos": "noun", "cefr_level": "A1", "gender": "neuter", "english_translation": "house"}
        ]"#;
        let records = crate::io::from_reader(input.as_bytes()).unwrap();

        let predicate = Predicate::default().and(Condition::new(Field::Gender, "neuter"));
        let filtered = filter(records.clone(), &predicate).unwrap();
        assert_eq!(words(&filtered), &["Haus"]);

        let predicate =
            Predicate::default().and(Condition::new(Field::EnglishTranslation, "house"));
        let filtered = filter(records, &predicate).unwrap();
        assert_eq!(words(&filtered), &["Haus"]);
    }

    #[test]
    fn stops_at_first_mismatch() {
        // the verb has no gender but is rejected by the first condition
        let predicate = Predicate::default()
            .and(Condition::new(Field::Pos, "noun"))
            .and(Condition::new(Field::Gender, "neuter"));
        let filtered = filter(records(), &predicate).unwrap();
        assert_eq!(words(&filtered), &["Haus"]);
    }

    #[test]
    fn matches_extra_fields() {
        let mut plural = VocabularyRecord::new("Haus", "noun", "A1");
        plural.extra.insert("plural".to_string(), "Häuser".into());
        let mut numeric = VocabularyRecord::new("Haus", "noun", "A1");
        numeric.extra.insert("plural".to_string(), 2.into());
        let predicate: Predicate = Predicate::new(vec!["plural=Häuser".parse().unwrap()]);

        assert!(predicate.matches(0, &plural).unwrap());
        assert!(!predicate.matches(1, &numeric).unwrap());
        assert!(predicate
            .matches(2, &VocabularyRecord::new("Haus", "noun", "A1"))
            .is_err());
    }

    #[test]
    fn parses_conditions() {
        let condition: Condition = "cefr_level=B1".parse().unwrap();
        assert_eq!(condition, Condition::new(Field::CefrLevel, "B1"));
        let condition: Condition = "english_translation=a=b".parse().unwrap();
        assert_eq!(condition, Condition::new(Field::EnglishTranslation, "a=b"));
        let condition: Condition = "pos=".parse().unwrap();
        assert_eq!(condition.value, "");

        let condition: Condition = " pos = noun ".parse().unwrap();
        assert_eq!(condition, Condition::new(Field::Pos, "noun"));

        assert!("pos".parse::<Condition>().is_err());
        assert!("=noun".parse::<Condition>().is_err());
    }

    #[test]
    fn displays_predicate() {
        assert_eq!(
            Preset::A1Nouns.predicate().to_string(),
            "pos=noun and cefr_level=A1"
        );
        assert_eq!(Predicate::default().to_string(), "(everything)");
    }
}

//! Counts describing a set of vocabulary records.

use crate::VocabularyRecord;
use std::{
    collections::{BTreeMap, HashSet},
    fmt,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    /// The same word can appear multiple times, e.g. with different translations.
    pub distinct_words: usize,
    pub by_level: BTreeMap<String, usize>,
}

impl Summary {
    pub fn of(records: &[VocabularyRecord]) -> Self {
        let mut words = HashSet::new();
        let mut by_level = BTreeMap::<String, usize>::new();
        for record in records {
            words.insert(record.word.as_str());
            *by_level.entry(record.cefr_level.clone()).or_default() += 1;
        }
        Self {
            total: records.len(),
            distinct_words: words.len(),
            by_level,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "records: {}", self.total)?;
        write!(f, "distinct words: {}", self.distinct_words)?;
        for (level, count) in &self.by_level {
            write!(f, "\n    {level}: {count}")?;
        }
        Ok(())
    }
}

//! Converting vocabulary records into flashcards.

use crate::{Flashcard, VocabularyRecord};

/// Converts the nouns among the records into flashcards.
///
/// Records that are not nouns are skipped without using up an id,
/// so the ids of the returned cards are always `1..=len`.
pub fn to_flashcards(records: &[VocabularyRecord]) -> Vec<Flashcard> {
    let mut cards = vec![];
    let mut next_id = 1;
    for record in records {
        if !record.is_noun() {
            tracing::trace!("skipping '{}' ({})", record.word, record.pos);
            continue;
        }
        cards.push(to_flashcard(next_id, record));
        next_id += 1;
    }
    cards
}

fn to_flashcard(id: u32, record: &VocabularyRecord) -> Flashcard {
    let article = record
        .article()
        .map(|a| a.as_str().to_string())
        .unwrap_or_default();
    Flashcard {
        id,
        noun: record.word.clone(),
        article,
        english: record.translation().map(str::to_string),
    }
}

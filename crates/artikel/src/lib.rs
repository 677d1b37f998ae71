//! Provides all of artikel's core functionality.

pub mod error;
pub mod filter;
pub mod flashcard;
pub mod io;
pub mod summary;

pub use artikel_core::{
    vocabulary_types::{Flashcard, VocabularyRecord},
    Article, Gender,
};
pub use error::{Error, Result};

use artikel::filter::{Condition, Preset};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Writes the vocabulary entries matching the given conditions to a new file.
    Filter {
        /// The path to the input vocabulary file.
        #[arg(short, long, env = "ARTIKEL_INPUT")]
        input: PathBuf,
        /// The path to the output file.
        #[arg(short, long, env = "ARTIKEL_OUTPUT")]
        output: PathBuf,
        #[command(flatten)]
        selection: Selection,
    },
    /// Converts the nouns in a vocabulary file into flashcards.
    Flashcards {
        /// The path to the input vocabulary file.
        #[arg(short, long, env = "ARTIKEL_INPUT")]
        input: PathBuf,
        /// The path to the output flashcard file.
        #[arg(short, long, env = "ARTIKEL_OUTPUT")]
        output: PathBuf,
        #[command(flatten)]
        selection: Selection,
    },
    /// Prints counts of the vocabulary entries matching the given conditions.
    Summary {
        /// The path to the input vocabulary file.
        #[arg(short, long, env = "ARTIKEL_INPUT")]
        input: PathBuf,
        #[command(flatten)]
        selection: Selection,
    },
}

#[derive(Args, Debug, Default)]
pub struct Selection {
    /// A predefined set of conditions, checked before any --where conditions.
    #[arg(short, long)]
    pub preset: Option<PresetArg>,
    /// Only include entries where FIELD is exactly VALUE, e.g. `pos=noun`. Can be repeated.
    #[arg(short = 'w', long = "where", value_name = "FIELD=VALUE")]
    pub conditions: Vec<Condition>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// pos=noun and cefr_level=A1
    A1Nouns,
    /// pos=noun and cefr_level=B1
    B1Nouns,
}

impl From<PresetArg> for Preset {
    fn from(value: PresetArg) -> Self {
        match value {
            PresetArg::A1Nouns => Preset::A1Nouns,
            PresetArg::B1Nouns => Preset::B1Nouns,
        }
    }
}

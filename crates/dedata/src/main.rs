//! Filters German vocabulary files and creates flashcard files from them.

mod cli;

use artikel::{
    filter::{self, Predicate, Preset},
    flashcard, io,
    summary::Summary,
    VocabularyRecord,
};
use clap::Parser;
use cli::{Cli, Command, Selection};
use eyre::WrapErr;
use std::path::Path;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Filter {
            input,
            output,
            selection,
        } => {
            let matched = filter_file(&input, &output, selection)?;
            println!("{matched} records matched");
        }
        Command::Flashcards {
            input,
            output,
            selection,
        } => {
            let converted = create_flashcards(&input, &output, selection)?;
            println!(
                "Converted {converted} nouns to flashcards and saved to {}",
                output.display()
            );
        }
        Command::Summary { input, selection } => {
            let summary = summarise(&input, selection)?;
            println!("{summary}");
        }
    }

    Ok(())
}

fn filter_file(input: &Path, output: &Path, selection: Selection) -> eyre::Result<usize> {
    let records = load_selected(input, selection)?;

    tracing::info!("writing output");
    io::store(output, &records)?;
    Ok(records.len())
}

fn create_flashcards(input: &Path, output: &Path, selection: Selection) -> eyre::Result<usize> {
    let records = load_selected(input, selection)?;

    tracing::info!("producing flashcards");
    let cards = flashcard::to_flashcards(&records);

    tracing::info!("writing output");
    io::store(output, &cards)?;
    Ok(cards.len())
}

fn summarise(input: &Path, selection: Selection) -> eyre::Result<Summary> {
    let records = load_selected(input, selection)?;
    Ok(Summary::of(&records))
}

fn load_selected(input: &Path, selection: Selection) -> eyre::Result<Vec<VocabularyRecord>> {
    let records = io::load(input)?;

    let predicate = to_predicate(selection);
    tracing::info!("filtering by {predicate}");
    let records = filter::filter(records, &predicate)
        .wrap_err_with(|| format!("Failed to filter '{}'", input.display()))?;
    tracing::info!("{} records matched", records.len());
    Ok(records)
}

fn to_predicate(selection: Selection) -> Predicate {
    let predicate = selection
        .preset
        .map(|p| Preset::from(p).predicate())
        .unwrap_or_default();
    selection
        .conditions
        .into_iter()
        .fold(predicate, Predicate::and)
}

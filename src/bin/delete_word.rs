use anyhow::Result;
use clap::Parser;
use vocab_drill::deck::JsonDeck;
use vocab_drill::spaced_repetition::SpacedRepetition;

/// Remove words from the deck
#[derive(Parser)]
#[command(version)]
struct Args {
    #[arg(required = true)]
    words: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let args = Args::parse();

    let mut deck = JsonDeck::default()?;
    for w in &args.words {
        deck.delete(w)?;
    }
    Ok(())
}

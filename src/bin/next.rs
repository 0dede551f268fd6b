use anyhow::anyhow;
use anyhow::Result;
use clap::Parser;
use vocab_drill::deck::JsonDeck;
use vocab_drill::spaced_repetition::SpacedRepetition;

/// Print the next word due for review
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// appended as `word.suffix`
    suffix: Option<String>,

    /// also print the card state
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
    let args = Args::parse();

    let mut deck = JsonDeck::default()?;
    let Some(w) = deck.next_to_review()? else {
        eprintln!("all reviewed");
        return Err(anyhow!("not found"));
    };

    if args.verbose {
        if let Some(card) = deck.card(&w) {
            eprintln!(
                "interval {}d, repetition {}, ease {:.2}, due {}",
                card.interval,
                card.repetition,
                card.ease,
                card.due_iso()
            );
        }
    }

    let w = w.to_lowercase();
    let w = match &args.suffix {
        Some(suffix) => format!("{w}.{suffix}"),
        None => w,
    };
    println!("{w}");

    Ok(())
}

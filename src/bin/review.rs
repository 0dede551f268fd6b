use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use rand::prelude::SliceRandom;
use rand::rng;
use std::io::{self, BufRead, Write};
use vocab_drill::config::Config;
use vocab_drill::deck::JsonDeck;
use vocab_drill::sm2::Quality;
use vocab_drill::spaced_repetition::SpacedRepetition;

#[derive(Parser)]
#[command(version, about = "Review due words in the terminal")]
struct Args {
    /// First review word
    #[arg(long)]
    start: Option<String>,

    /// stop after this many cards, overrides config
    #[arg(long)]
    limit: Option<usize>,

    /// review due words in random order
    #[arg(long, default_value_t = false)]
    random: bool,
}

enum Action {
    Grade(Quality),
    Skip,
    Delete,
    Quit,
}

fn parse_action(line: &str) -> Option<Action> {
    match line.trim() {
        "s" | "skip" => Some(Action::Skip),
        "d" | "delete" => Some(Action::Delete),
        "q" | "quit" => Some(Action::Quit),
        other => other.parse().ok().map(Action::Grade),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
    let args = Args::parse();
    let config = Config::load().context("load config")?;
    let limit = args.limit.or(config.review_limit);

    let mut deck = JsonDeck::default()?;
    if let Some(word) = args.start {
        deck.queue.push_back(word);
    }
    if args.random {
        let mut v = deck.due_words();
        v.shuffle(&mut rng());
        deck.queue.extend(v);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut reviewed = 0;

    'words: while limit.map_or(true, |n| reviewed < n) {
        let Some(word) = deck.next_to_review()? else {
            println!("no words to review");
            break;
        };
        let Some(card) = deck.card(&word).cloned() else {
            println!("{word} is not in the deck, skipped");
            continue;
        };

        let preview = deck.scheduler().preview(&card);
        let choices = Quality::ALL
            .iter()
            .zip(preview)
            .map(|(q, days)| format!("{q}({days}d)"))
            .join(" ");

        println!();
        println!("  {word}");
        loop {
            print!("{choices} | skip delete quit > ");
            io::stdout().flush()?;
            let Some(line) = lines.next().transpose()? else {
                break 'words;
            };
            match parse_action(&line) {
                Some(Action::Grade(q)) => {
                    let next = deck.update(&word, q)?;
                    println!("next review in {} day(s), {}", next.interval, next.due_iso());
                    reviewed += 1;
                    break;
                }
                Some(Action::Skip) => break,
                Some(Action::Delete) => {
                    deck.delete(&word)?;
                    break;
                }
                Some(Action::Quit) => break 'words,
                None => println!("?"),
            }
        }
    }

    println!("{reviewed} reviewed, history {:?}", deck.history);
    Ok(())
}

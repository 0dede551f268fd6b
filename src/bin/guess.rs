use anyhow::{Context, Result};
use clap::Parser;
use rand::prelude::SliceRandom;
use rand::rng;
use std::io::{self, BufRead, Write};
use vocab_drill::config::Config;
use vocab_drill::deck::JsonDeck;
use vocab_drill::game::{is_near_miss, RevealState};
use vocab_drill::sm2::Quality;
use vocab_drill::spaced_repetition::SpacedRepetition;

#[derive(Parser)]
#[command(version, about = "Guess words letter by letter")]
struct Args {
    /// player level, higher levels earn a little less XP per point
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// words to play, due deck words when empty
    words: Vec<String>,
}

/// fewer hints means better recall
fn grade(round: &RevealState) -> Quality {
    match round.letters_taken() {
        0 => Quality::Easy,
        1 | 2 => Quality::Good,
        _ => Quality::Hard,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
    let args = Args::parse();
    let config = Config::load().context("load config")?;

    let mut deck = JsonDeck::default()?;
    let mut words = args.words;
    if words.is_empty() {
        words = deck.due_words();
        words.shuffle(&mut rng());
    }
    if words.is_empty() {
        println!("no words to play");
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut total_xp = 0;

    'words: for word in words {
        let mut round = RevealState::new(word);
        loop {
            print!("{}  [{} pts] ? hint, ! give up > ", round.mask(), round.points());
            io::stdout().flush()?;
            let Some(line) = lines.next().transpose()? else {
                break 'words;
            };
            match line.trim() {
                "?" => {
                    if !round.take_letter() {
                        println!("nothing left to reveal");
                    }
                }
                "!" => {
                    println!("it was {}", round.word());
                    if deck.card(round.word()).is_some() {
                        deck.update(round.word(), Quality::Again)?;
                    }
                    break;
                }
                guess if round.check_guess(guess) => {
                    let xp = round.xp(args.level, &config.xp);
                    total_xp += xp;
                    println!("{} +{xp} XP", round.word());
                    if deck.card(round.word()).is_some() {
                        deck.update(round.word(), grade(&round))?;
                    }
                    break;
                }
                guess if is_near_miss(guess, round.word()) => println!("almost"),
                _ => println!("no"),
            }
        }
    }

    println!("total {total_xp} XP");
    Ok(())
}

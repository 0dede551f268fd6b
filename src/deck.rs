//! Deck kept as one JSON file, word -> card.

use crate::clock::{Clock, SystemClock};
use crate::deck_path;
use crate::error::{Error, Result};
use crate::sm2::{CardState, Quality, Scheduler};
use crate::spaced_repetition::SpacedRepetition;
use log::*;
use std::collections::{BTreeMap, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

pub struct JsonDeck<C = SystemClock> {
    path: PathBuf,
    cards: BTreeMap<String, CardState>,
    scheduler: Scheduler<C>,
    /// words already served this session
    pub history: Vec<String>,
    /// served before anything due in the deck
    pub queue: VecDeque<String>,
}

impl JsonDeck<SystemClock> {
    pub fn default() -> Result<Self> {
        Self::open(deck_path()?, SystemClock)
    }
}

impl<C: Clock> JsonDeck<C> {
    pub fn open(path: impl Into<PathBuf>, clock: C) -> Result<Self> {
        let path = path.into();
        let cards = if path.exists() {
            let s = fs::read_to_string(&path)?;
            serde_json::from_str(&s)?
        } else {
            BTreeMap::new()
        };
        info!("{} cards in {path:?}", cards.len());
        Ok(Self {
            path,
            cards,
            scheduler: Scheduler::new(clock),
            history: Vec::new(),
            queue: VecDeque::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scheduler(&self) -> &Scheduler<C> {
        &self.scheduler
    }

    pub fn card(&self, word: &str) -> Option<&CardState> {
        self.cards.get(word)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// due words, most overdue first
    pub fn due_words(&self) -> Vec<String> {
        let mut due: Vec<_> = self
            .cards
            .iter()
            .filter(|(_, card)| self.scheduler.is_due(card))
            .collect();
        due.sort_by_key(|(_, card)| card.due);
        due.into_iter().map(|(word, _)| word.clone()).collect()
    }

    pub fn should_review(&self, word: &str) -> bool {
        self.cards
            .get(word)
            .is_some_and(|card| self.scheduler.is_due(card))
    }

    /// writes `cards` first and only then swaps them in, so a failed write leaves memory as on disk
    fn commit(&mut self, cards: BTreeMap<String, CardState>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&cards)?)?;
        info!("saved {} cards to {:?}", cards.len(), self.path);
        self.cards = cards;
        Ok(())
    }
}

impl<C: Clock> SpacedRepetition for JsonDeck<C> {
    fn add_fresh_word(&mut self, word: &str) -> Result<()> {
        if self.cards.contains_key(word) {
            return Ok(());
        }
        let mut cards = self.cards.clone();
        cards.insert(word.to_owned(), self.scheduler.init_card());
        self.commit(cards)?;
        info!("added {word}");
        Ok(())
    }

    fn next_to_review(&mut self) -> Result<Option<String>> {
        let from_queue = std::iter::from_fn(|| self.queue.pop_front())
            .find(|word| !self.history.contains(word));
        let word = match from_queue {
            Some(word) => Some(word),
            None => self
                .due_words()
                .into_iter()
                .find(|word| !self.history.contains(word)),
        };
        if let Some(word) = &word {
            self.history.push(word.clone());
        }
        Ok(word)
    }

    fn update(&mut self, question: &str, quality: Quality) -> Result<CardState> {
        let old_card = self
            .cards
            .get(question)
            .ok_or_else(|| Error::UnknownWord(question.to_owned()))?;
        let card = self.scheduler.review(old_card, quality);
        let mut cards = self.cards.clone();
        cards.insert(question.to_owned(), card.clone());
        self.commit(cards)?;
        Ok(card)
    }

    fn delete(&mut self, question: &str) -> Result<()> {
        if self.cards.contains_key(question) {
            let mut cards = self.cards.clone();
            cards.remove(question);
            self.commit(cards)?;
            info!("deleted {question}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn clock(d: u32) -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap())
    }

    #[test]
    fn cards_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");

        let mut deck = JsonDeck::open(&path, clock(1)).unwrap();
        deck.add_fresh_word("perro").unwrap();
        deck.add_fresh_word("gato").unwrap();
        let card = deck.update("perro", Quality::Easy).unwrap();
        assert_eq!(card.interval, 1);

        let deck = JsonDeck::open(&path, clock(1)).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.card("perro"), Some(&card));
        assert_eq!(deck.card("gato").unwrap().repetition, 0);
    }

    #[test]
    fn add_keeps_existing_card() {
        let dir = tempfile::tempdir().unwrap();
        let mut deck = JsonDeck::open(dir.path().join("deck.json"), clock(1)).unwrap();
        deck.add_fresh_word("casa").unwrap();
        deck.update("casa", Quality::Good).unwrap();
        deck.add_fresh_word("casa").unwrap();
        assert_eq!(deck.card("casa").unwrap().repetition, 1);
    }

    #[test]
    fn next_serves_due_words_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut deck = JsonDeck::open(dir.path().join("deck.json"), clock(1)).unwrap();
        deck.add_fresh_word("uno").unwrap();
        deck.add_fresh_word("dos").unwrap();
        deck.update("dos", Quality::Good).unwrap();

        assert_eq!(deck.due_words(), vec!["uno".to_owned()]);
        assert_eq!(deck.next_to_review().unwrap().as_deref(), Some("uno"));
        assert_eq!(deck.next_to_review().unwrap(), None);
    }

    #[test]
    fn queue_comes_first_and_skips_history() {
        let dir = tempfile::tempdir().unwrap();
        let mut deck = JsonDeck::open(dir.path().join("deck.json"), clock(1)).unwrap();
        deck.add_fresh_word("uno").unwrap();
        deck.history.push("tres".to_owned());
        deck.queue.extend(["tres".to_owned(), "cuatro".to_owned()]);

        assert_eq!(deck.next_to_review().unwrap().as_deref(), Some("cuatro"));
        assert_eq!(deck.next_to_review().unwrap().as_deref(), Some("uno"));
        assert_eq!(deck.next_to_review().unwrap(), None);
    }

    #[test]
    fn update_unknown_word_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut deck = JsonDeck::open(dir.path().join("deck.json"), clock(1)).unwrap();
        assert!(matches!(
            deck.update("nada", Quality::Good),
            Err(Error::UnknownWord(w)) if w == "nada"
        ));
    }

    #[test]
    fn delete_removes_card() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let mut deck = JsonDeck::open(&path, clock(1)).unwrap();
        deck.add_fresh_word("sol").unwrap();
        deck.delete("sol").unwrap();
        deck.delete("luna").unwrap();
        assert!(deck.is_empty());
        assert!(JsonDeck::open(&path, clock(1)).unwrap().is_empty());
    }

    #[test]
    fn failed_write_keeps_memory_in_step_with_disk() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        let mut deck = JsonDeck::open(sub.join("deck.json"), clock(1)).unwrap();
        deck.add_fresh_word("pan").unwrap();
        let before = deck.card("pan").cloned();

        // a plain file where the deck directory should be
        fs::remove_dir_all(&sub).unwrap();
        fs::write(&sub, "").unwrap();

        assert!(deck.update("pan", Quality::Easy).is_err());
        assert_eq!(deck.card("pan").cloned(), before);
        assert!(deck.add_fresh_word("leche").is_err());
        assert!(deck.card("leche").is_none());
        assert!(deck.delete("pan").is_err());
        assert!(deck.card("pan").is_some());
    }

    #[test]
    fn should_review_follows_clock() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let mut deck = JsonDeck::open(&path, clock(1)).unwrap();
        deck.add_fresh_word("agua").unwrap();
        deck.update("agua", Quality::Easy).unwrap();
        assert!(!deck.should_review("agua"));
        assert!(!deck.should_review("fuego"));

        let later = JsonDeck::open(&path, clock(2)).unwrap();
        assert!(later.should_review("agua"));
    }
}

use super::{build_mask, calc_points, guess_matches, lower, reveal_random_letter_with, XpCurve};
use rand::Rng;
use std::collections::HashSet;

/// One guessing round over a fixed secret word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    word: String,
    revealed: HashSet<char>,
    letters_taken: u32,
}

impl RevealState {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            revealed: HashSet::new(),
            letters_taken: 0,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn revealed(&self) -> &HashSet<char> {
        &self.revealed
    }

    pub fn letters_taken(&self) -> u32 {
        self.letters_taken
    }

    pub fn points(&self) -> u32 {
        calc_points(self.letters_taken)
    }

    pub fn mask(&self) -> String {
        build_mask(&self.word, &self.revealed)
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.word
            .chars()
            .map(lower)
            .all(|c| self.revealed.contains(&c))
    }

    pub fn take_letter(&mut self) -> bool {
        self.take_letter_with(&mut rand::rng())
    }

    /// Reveals one more letter. A hint on a fully shown word is not charged.
    pub fn take_letter_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let next = reveal_random_letter_with(&self.word, &self.revealed, rng);
        if next.len() == self.revealed.len() {
            return false;
        }
        self.revealed = next;
        self.letters_taken += 1;
        true
    }

    pub fn check_guess(&self, guess: &str) -> bool {
        guess_matches(guess, &self.word)
    }

    pub fn xp(&self, level: u32, curve: &XpCurve) -> u32 {
        curve.gain(level, self.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_round_is_hidden_with_full_points() {
        let round = RevealState::new("gato");
        assert_eq!(round.mask(), "_ _ _ _");
        assert_eq!(round.points(), 100);
        assert_eq!(round.letters_taken(), 0);
        assert!(!round.is_fully_revealed());
    }

    #[test]
    fn hints_cost_points_until_exhausted() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut round = RevealState::new("Mamá");
        let mut taken = 0;
        while round.take_letter_with(&mut rng) {
            taken += 1;
        }
        // m, a, á
        assert_eq!(taken, 3);
        assert_eq!(round.letters_taken(), 3);
        assert_eq!(round.points(), 70);
        assert!(round.is_fully_revealed());
        assert_eq!(round.mask(), "M a m á");

        assert!(!round.take_letter_with(&mut rng));
        assert_eq!(round.points(), 70);
    }

    #[test]
    fn guess_and_xp() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut round = RevealState::new("árbol");
        round.take_letter_with(&mut rng);
        round.take_letter_with(&mut rng);
        assert!(round.check_guess("ARBOL"));
        assert!(!round.check_guess("arbo"));
        assert_eq!(round.xp(2, &XpCurve::default()), 76);
    }
}

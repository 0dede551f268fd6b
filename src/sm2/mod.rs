//! SM-2 scheduling.
//!
//! A failed recall (quality 0) restarts the streak and costs 0.2 ease.
//! A successful one walks the 1 day -> 6 days -> `interval * ease` ladder
//! and nudges ease by `0.1 - (5-q) * (0.08 + (5-q) * 0.02)`.
//! Ease never drops below [`MIN_EASE`].

use crate::clock::{Clock, SystemClock};
use chrono::{DateTime, Duration, Utc};
use log::*;

pub mod card;

pub use card::{CardState, Quality, INITIAL_EASE, MIN_EASE};

const LAPSE_PENALTY: f64 = 0.2;

/// a hundred years; intervals never grow past this
pub const MAX_INTERVAL: u32 = 36500;

#[derive(Debug, Clone, Default)]
pub struct Scheduler<C = SystemClock> {
    clock: C,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn init_card(&self) -> CardState {
        CardState::fresh(self.clock.now())
    }

    pub fn review(&self, card: &CardState, quality: Quality) -> CardState {
        let now = self.clock.now();
        let next = next_state(card, quality, now);
        debug!(
            "{quality}: interval {} -> {}, repetition {} -> {}, ease {:.2} -> {:.2}",
            card.interval, next.interval, card.repetition, next.repetition, card.ease, next.ease
        );
        next
    }

    /// intervals each grade would give, in `Quality::ALL` order
    pub fn preview(&self, card: &CardState) -> [u32; 4] {
        let now = self.clock.now();
        Quality::ALL.map(|q| next_state(card, q, now).interval)
    }

    pub fn is_due(&self, card: &CardState) -> bool {
        card.is_due(self.clock.now())
    }
}

pub fn init_card() -> CardState {
    Scheduler::new(SystemClock).init_card()
}

pub fn review(card: &CardState, quality: Quality) -> CardState {
    Scheduler::new(SystemClock).review(card, quality)
}

fn next_state(card: &CardState, quality: Quality, now: DateTime<Utc>) -> CardState {
    let (interval, repetition, ease) = if quality.is_success() {
        let interval = match card.repetition {
            0 => 1,
            1 => 6,
            _ => ((card.interval as f64 * card.ease).round() as u32).clamp(1, MAX_INTERVAL),
        };
        let q = 5.0 - quality.value() as f64;
        let ease = card.ease + (0.1 - q * (0.08 + q * 0.02));
        (interval, card.repetition.saturating_add(1), ease.max(MIN_EASE))
    } else {
        (1, 0, (card.ease - LAPSE_PENALTY).max(MIN_EASE))
    };

    CardState {
        interval,
        repetition,
        ease,
        due: now
            .checked_add_signed(Duration::days(interval as i64))
            .unwrap_or(DateTime::<Utc>::MAX_UTC),
    }
}

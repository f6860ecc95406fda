//! Memory match
//!
//! Cards are dealt face down from a seeded shuffle. Turning over a second card
//! locks the table until the host calls [`MemoryGame::resolve`] after the
//! reveal delay, which either keeps the pair or turns both back over.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable id (1-based, assigned before shuffling)
    pub id: u32,
    /// Pair value (1-based); two cards share each value
    pub pair: u32,
    pub flipped: bool,
    pub matched: bool,
}

/// Outcome waiting for the reveal delay to pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingPair {
    Match { first: usize, second: usize },
    Mismatch { first: usize, second: usize },
}

impl PendingPair {
    /// How long the host should show the pair before resolving
    pub fn reveal_ms(&self) -> u32 {
        match self {
            PendingPair::Match { .. } => MATCH_REVEAL_MS,
            PendingPair::Mismatch { .. } => MISMATCH_REVEAL_MS,
        }
    }
}

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipResult {
    /// Card turned; waiting for a second one
    First,
    /// Second card turned; resolve after `reveal_ms`
    Second(PendingPair),
    /// Locked table, face-up card, matched card or bad index
    Ignored,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryGame {
    pub deck: Vec<Card>,
    pub moves: u32,
    first: Option<usize>,
    pending: Option<PendingPair>,
}

/// Build `pairs` pairs of cards and shuffle them
pub fn generate_deck(pairs: usize, seed: u64) -> Vec<Card> {
    let pairs = pairs.clamp(1, MEMORY_MAX_PAIRS);
    let mut deck: Vec<Card> = (1..=pairs as u32)
        .chain(1..=pairs as u32)
        .enumerate()
        .map(|(idx, pair)| Card {
            id: idx as u32 + 1,
            pair,
            flipped: false,
            matched: false,
        })
        .collect();

    let mut rng = Pcg32::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

impl MemoryGame {
    pub fn new(pairs: usize, seed: u64) -> Self {
        Self {
            deck: generate_deck(pairs, seed),
            moves: 0,
            first: None,
            pending: None,
        }
    }

    /// Reshuffle and clear all progress
    pub fn reset(&mut self, seed: u64) {
        let pairs = self.deck.len() / 2;
        *self = Self::new(pairs, seed);
        log::info!("Memory game reset ({} pairs)", pairs);
    }

    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<PendingPair> {
        self.pending
    }

    pub fn matched_count(&self) -> usize {
        self.deck.iter().filter(|c| c.matched).count()
    }

    pub fn is_done(&self) -> bool {
        self.matched_count() == self.deck.len()
    }

    /// Turn over the card at `index`
    pub fn flip(&mut self, index: usize) -> FlipResult {
        if self.is_locked() {
            return FlipResult::Ignored;
        }
        let Some(card) = self.deck.get_mut(index) else {
            return FlipResult::Ignored;
        };
        if card.flipped || card.matched {
            return FlipResult::Ignored;
        }
        card.flipped = true;
        let pair = card.pair;

        let Some(first) = self.first else {
            self.first = Some(index);
            return FlipResult::First;
        };

        self.moves += 1;
        let pending = if self.deck.get(first).is_some_and(|c| c.pair == pair) {
            PendingPair::Match {
                first,
                second: index,
            }
        } else {
            PendingPair::Mismatch {
                first,
                second: index,
            }
        };
        self.pending = Some(pending);
        FlipResult::Second(pending)
    }

    /// Settle the pending pair and unlock the table
    pub fn resolve(&mut self) -> Option<PendingPair> {
        let pending = self.pending.take()?;
        match pending {
            PendingPair::Match { first, second } => {
                for idx in [first, second] {
                    if let Some(card) = self.deck.get_mut(idx) {
                        card.matched = true;
                    }
                }
                if self.is_done() {
                    log::info!("Memory game cleared in {} moves", self.moves);
                }
            }
            PendingPair::Mismatch { first, second } => {
                for idx in [first, second] {
                    if let Some(card) = self.deck.get_mut(idx) {
                        card.flipped = false;
                    }
                }
            }
        }
        self.first = None;
        Some(pending)
    }
}

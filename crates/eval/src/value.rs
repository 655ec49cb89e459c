// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card values.
//!
//! Aces count 1, deuces to nines their pip value and tens and face cards 10.
//! Treys and sixes are flexible and count either 3 or 6, the choice is made
//! independently for each card so a hand with k flexible cards has 2^k
//! possible [Assignment]s.
use niuniu_cards::{Card, Rank};

/// The values of a flexible card indexed by its assignment bit.
pub const FLEXIBLE_VALUES: [u8; 2] = [3, 6];

/// Returns the value a rank counts for when it is not flexible.
pub fn base_value(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 1,
        Rank::Deuce => 2,
        Rank::Trey => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
    }
}

/// A value for each card of a hand, in hand order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: Vec<u8>,
}

impl Assignment {
    /// The value of the card at the given hand position.
    #[inline]
    pub fn value(&self, pos: usize) -> u8 {
        self.values[pos]
    }

    /// All the values in hand order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Sum of the values at the given hand positions.
    #[inline]
    pub fn sum(&self, positions: &[usize]) -> u32 {
        positions.iter().map(|&pos| self.values[pos] as u32).sum()
    }
}

/// Returns all the value assignments for the given cards.
///
/// Assignments are generated from a bitmask over the flexible cards
/// positions, for mask in `0..2^k` bit `i` selects the value of the i-th
/// flexible card from [FLEXIBLE_VALUES]. Cards without flexible ranks get
/// their [base_value] in every assignment, so with no flexible cards this
/// returns a single assignment.
///
/// Panics if there are more than 16 flexible cards.
pub fn assignments(cards: &[Card]) -> Vec<Assignment> {
    let flexible = cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.rank().is_flexible())
        .map(|(pos, _)| pos)
        .collect::<Vec<_>>();

    assert!(flexible.len() <= 16, "Too many flexible cards");

    let base = cards
        .iter()
        .map(|card| base_value(card.rank()))
        .collect::<Vec<_>>();

    (0..1u32 << flexible.len())
        .map(|mask| {
            let mut values = base.clone();
            for (bit, &pos) in flexible.iter().enumerate() {
                values[pos] = FLEXIBLE_VALUES[((mask >> bit) & 1) as usize];
            }

            Assignment { values }
        })
        .collect()
}

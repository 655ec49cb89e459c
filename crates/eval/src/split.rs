// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Base and final groups splits.
use niuniu_cards::Card;

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// The number of ways to choose 3 base cards out of 5.
pub const SPLITS_COUNT: usize = 10;

/// Hand positions of the base and final cards of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitIndex {
    /// The base cards positions.
    pub base: [usize; 3],
    /// The final cards positions.
    pub final2: [usize; 2],
}

/// Creates the splits table, bases in lexicographic order i < j < k with
/// the two remaining positions in hand order.
const fn make_splits() -> [SplitIndex; SPLITS_COUNT] {
    let mut t = [SplitIndex {
        base: [0; 3],
        final2: [0; 2],
    }; SPLITS_COUNT];
    let mut n = 0;

    let mut i = 0;
    while i < HAND_SIZE {
        let mut j = i + 1;
        while j < HAND_SIZE {
            let mut k = j + 1;
            while k < HAND_SIZE {
                let mut final2 = [0; 2];
                let mut f = 0;
                let mut p = 0;
                while p < HAND_SIZE {
                    if p != i && p != j && p != k {
                        final2[f] = p;
                        f += 1;
                    }
                    p += 1;
                }

                t[n] = SplitIndex {
                    base: [i, j, k],
                    final2,
                };
                n += 1;
                k += 1;
            }
            j += 1;
        }
        i += 1;
    }

    t
}

/// All the splits of a five cards hand.
pub static SPLITS: [SplitIndex; SPLITS_COUNT] = make_splits();

/// A hand split in a 3 cards base and a 2 cards final group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Split {
    /// The base cards.
    pub base: [Card; 3],
    /// The final cards.
    pub final2: [Card; 2],
}

impl Split {
    /// Creates the split of a hand for the given positions.
    pub fn new(hand: &[Card; HAND_SIZE], index: &SplitIndex) -> Self {
        Self {
            base: index.base.map(|pos| hand[pos]),
            final2: index.final2.map(|pos| hand[pos]),
        }
    }
}

/// Returns the ten splits of a hand in [SPLITS] order.
pub fn splits(hand: &[Card; HAND_SIZE]) -> [Split; SPLITS_COUNT] {
    SPLITS.map(|index| Split::new(hand, &index))
}

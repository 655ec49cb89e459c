// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Niu Niu hand evaluator.
//!
//! Scores a five cards Niu Niu (牛牛) hand. Three cards, the base, must sum
//! to a multiple of 10 for the hand to score, the other two cards set the
//! payout multiplier. Treys and sixes can count as either 3 or 6, so the
//! evaluator tries every value assignment and every split of the hand and
//! keeps the best outcome.
//!
//! To use the evaluator create a hand and use [Evaluation] to evaluate it:
//!
//! ```
//! # use niuniu_eval::*;
//! let hand = ["JS", "QH", "KD", "7C", "7S"].map(|l| l.parse::<Card>().unwrap());
//! let eval = Evaluation::eval(&hand);
//! assert_eq!(eval.category(), Category::Pair);
//! assert_eq!(eval.multiplier(), 3);
//! assert_eq!(eval.to_string(), "3x 對子 (Pair) | base JS QH KD | final 7C 7S");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub mod split;
pub mod value;

pub use eval::{CardValue, Category, Evaluation};
pub use split::{Split, splits};
pub use value::{Assignment, assignments, base_value};

// Reexport cards types.
pub use niuniu_cards::{Card, Deck, Rank, Suit};

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Niu Niu cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use niuniu_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let ts = "10S".parse::<Card>().unwrap();
//! assert_eq!(ts, Card::new(Rank::Ten, Suit::Spades));
//! ```
//!
//! and a [Deck] type for shuffling, dealing, selecting and iterating cards in
//! the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use niuniu_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! or to take a hand out of the deck from card labels:
//!
//! ```
//! # use niuniu_cards::Deck;
//! let mut deck = Deck::default();
//! let hand = deck.select(&["JS", "QH", "KD", "7C", "7S"]).unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.count(), 47);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

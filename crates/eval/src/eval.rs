// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Niu Niu hand evaluator.
//!
//! A hand scores when three of its cards, the base, sum to a multiple of 10.
//! The remaining two cards, the final pair, set the multiplier. With five
//! face cards the hand scores the top multiplier without looking for a base.
//!
//! The evaluator searches all the [value assignments](crate::value) and all
//! the [splits](crate::split) of a hand and keeps the candidate with the
//! highest multiplier, on equal multipliers the one with more final points.
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

use niuniu_cards::Card;

use crate::{
    split::{HAND_SIZE, SPLITS, SplitIndex},
    value::{Assignment, assignments, base_value},
};

/// The hand category, in increasing multiplier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// No three cards sum to a multiple of 10, or the hand is incomplete.
    NoValidBase = 0,
    /// A valid base with no bonus in the final pair.
    ValidBaseNoBonus,
    /// The final pair sums to a multiple of 10.
    SumTen,
    /// The final pair cards have the same rank.
    Pair,
    /// The final pair is a face card and the ace of spades.
    FaceAceSpades,
    /// All five cards are face cards.
    FiveFaceCards,
}

impl Category {
    /// The number of categories.
    pub const COUNT: usize = 6;

    /// Returns all categories.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            NoValidBase,
            ValidBaseNoBonus,
            SumTen,
            Pair,
            FaceAceSpades,
            FiveFaceCards,
        ]
        .into_iter()
    }

    /// The payout multiplier for this category.
    pub fn multiplier(&self) -> u32 {
        match self {
            Category::NoValidBase => 0,
            Category::ValidBaseNoBonus => 1,
            Category::SumTen => 2,
            Category::Pair => 3,
            Category::FaceAceSpades => 5,
            Category::FiveFaceCards => 7,
        }
    }

    /// The category identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Category::NoValidBase => "no_valid_base",
            Category::ValidBaseNoBonus => "valid_base_no_bonus",
            Category::SumTen => "sum_ten",
            Category::Pair => "pair",
            Category::FaceAceSpades => "face_ace_spades",
            Category::FiveFaceCards => "five_face_cards",
        }
    }

    /// The category label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::NoValidBase => "無牛 (No Valid Base)",
            Category::ValidBaseNoBonus => "有牛 (Valid Base)",
            Category::SumTen => "湊十 (Sum to 10)",
            Category::Pair => "對子 (Pair)",
            Category::FaceAceSpades => "公加黑桃A (Face + A♠)",
            Category::FiveFaceCards => "五公 (Five Face Cards)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The value a card counted for in an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardValue {
    /// The card.
    pub card: Card,
    /// The card value.
    pub value: u8,
}

/// The result of evaluating a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    category: Category,
    multiplier: u32,
    label: &'static str,
    base: Vec<Card>,
    final2: Vec<Card>,
    values: Vec<CardValue>,
    points: Option<u8>,
}

impl Evaluation {
    /// Evaluates a hand.
    ///
    /// Hands that don't have exactly five cards evaluate to
    /// [Category::NoValidBase].
    pub fn eval(cards: &[Card]) -> Evaluation {
        let Ok(hand) = <&[Card; HAND_SIZE]>::try_from(cards) else {
            debug!("Incomplete hand with {} cards", cards.len());
            return Self::no_valid_base();
        };

        if hand.iter().all(Card::is_face) {
            return Self::five_face_cards(hand);
        }

        let assignments = assignments(hand);
        let best = assignments
            .iter()
            .flat_map(|assignment| SPLITS.iter().map(move |split| (assignment, split)))
            .filter(|(assignment, split)| assignment.sum(&split.base) % 10 == 0)
            .map(|(assignment, split)| Candidate::new(hand, assignment, split))
            .fold(None, |best: Option<Candidate<'_>>, candidate| match best {
                Some(best) if !candidate.beats(&best) => Some(best),
                _ => Some(candidate),
            });

        match best {
            Some(candidate) => {
                let eval = candidate.into_evaluation(hand);
                debug!("{hand:?} evaluates to {eval}");
                eval
            }
            None => {
                debug!("{hand:?} has no valid base");
                Self::no_valid_base()
            }
        }
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The hand multiplier.
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// The category label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The base cards, empty if there is no valid base.
    pub fn base(&self) -> &[Card] {
        &self.base
    }

    /// The final cards, empty if there is no valid base.
    pub fn final2(&self) -> &[Card] {
        &self.final2
    }

    /// The value each card counted for, in hand order.
    pub fn values(&self) -> &[CardValue] {
        &self.values
    }

    /// Returns the value a card counted for.
    pub fn value_of(&self, card: Card) -> Option<u8> {
        self.values
            .iter()
            .find(|cv| cv.card == card)
            .map(|cv| cv.value)
    }

    /// Checks if a flexible card counted for its alternate value.
    pub fn is_resolved(&self, card: Card) -> bool {
        card.rank().is_flexible()
            && self
                .value_of(card)
                .is_some_and(|value| value != base_value(card.rank()))
    }

    /// The final pair points, the sum of its values modulo 10.
    ///
    /// Only hands with a valid base have points.
    pub fn points(&self) -> Option<u8> {
        self.points
    }

    /// The short name shown for the hand, with the points for hands that
    /// have a valid base and no bonus.
    pub fn hero_name(&self) -> String {
        match self.category {
            Category::NoValidBase => "無牛".to_string(),
            Category::ValidBaseNoBonus => match self.points.unwrap_or_default() {
                0 => "牛牛".to_string(),
                points => format!("牛{points}"),
            },
            Category::SumTen => "湊十".to_string(),
            Category::Pair => "對子".to_string(),
            Category::FaceAceSpades => "公加黑桃A".to_string(),
            Category::FiveFaceCards => "五公".to_string(),
        }
    }

    fn no_valid_base() -> Evaluation {
        Self::new(Category::NoValidBase, Vec::new(), Vec::new(), Vec::new(), None)
    }

    fn five_face_cards(hand: &[Card; HAND_SIZE]) -> Evaluation {
        let values = hand
            .iter()
            .map(|&card| CardValue {
                card,
                value: base_value(card.rank()),
            })
            .collect();

        Self::new(
            Category::FiveFaceCards,
            hand[..3].to_vec(),
            hand[3..].to_vec(),
            values,
            None,
        )
    }

    fn new(
        category: Category,
        base: Vec<Card>,
        final2: Vec<Card>,
        values: Vec<CardValue>,
        points: Option<u8>,
    ) -> Evaluation {
        Evaluation {
            category,
            multiplier: category.multiplier(),
            label: category.label(),
            base,
            final2,
            values,
            points,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x {}", self.multiplier, self.label)?;

        if !self.base.is_empty() {
            f.write_str(" | base")?;
            for card in &self.base {
                write!(f, " {card}")?;
            }

            f.write_str(" | final")?;
            for card in &self.final2 {
                write!(f, " {card}")?;
            }
        }

        Ok(())
    }
}

/// A valid base split under a given assignment.
struct Candidate<'a> {
    category: Category,
    points: u8,
    assignment: &'a Assignment,
    split: &'static SplitIndex,
}

impl<'a> Candidate<'a> {
    fn new(
        hand: &[Card; HAND_SIZE],
        assignment: &'a Assignment,
        split: &'static SplitIndex,
    ) -> Self {
        let [a, b] = split.final2;
        let (va, vb) = (assignment.value(a), assignment.value(b));
        let category = score_final2(hand[a], hand[b], va, vb);
        let points = (va + vb) % 10;

        trace!(
            "Base {:?} final {:?} values {:?} => {category:?} {points}",
            split.base.map(|pos| hand[pos]),
            [hand[a], hand[b]],
            assignment.values(),
        );

        Self {
            category,
            points,
            assignment,
            split,
        }
    }

    /// Checks if this candidate is strictly better than other.
    fn beats(&self, other: &Candidate<'_>) -> bool {
        let (m1, m2) = (self.category.multiplier(), other.category.multiplier());
        m1 > m2 || (m1 == m2 && self.points > other.points)
    }

    fn into_evaluation(self, hand: &[Card; HAND_SIZE]) -> Evaluation {
        let values = hand
            .iter()
            .zip(self.assignment.values())
            .map(|(&card, &value)| CardValue { card, value })
            .collect();

        Evaluation::new(
            self.category,
            self.split.base.iter().map(|&pos| hand[pos]).collect(),
            self.split.final2.iter().map(|&pos| hand[pos]).collect(),
            values,
            Some(self.points),
        )
    }
}

/// Scores the final pair of a valid base split.
fn score_final2(a: Card, b: Card, va: u8, vb: u8) -> Category {
    if (a.is_face() && b.is_ace_of_spades()) || (b.is_face() && a.is_ace_of_spades()) {
        Category::FaceAceSpades
    } else if a.rank() == b.rank() {
        Category::Pair
    } else if (va + vb) % 10 == 0 {
        Category::SumTen
    } else {
        Category::ValidBaseNoBonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use niuniu_cards::{Deck, Rank, Suit};
    use rand::{SeedableRng, rngs::StdRng};

    fn hand(labels: &[&str]) -> Vec<Card> {
        labels.iter().map(|l| l.parse().unwrap()).collect()
    }

    fn eval(labels: &[&str]) -> Evaluation {
        Evaluation::eval(&hand(labels))
    }

    fn card(label: &str) -> Card {
        label.parse().unwrap()
    }

    fn permutations(cards: &[Card]) -> Vec<Vec<Card>> {
        if cards.len() <= 1 {
            return vec![cards.to_vec()];
        }

        let mut out = Vec::new();
        for i in 0..cards.len() {
            let mut rest = cards.to_vec();
            let first = rest.remove(i);
            for mut p in permutations(&rest) {
                p.insert(0, first);
                out.push(p);
            }
        }

        out
    }

    #[test]
    fn category_multipliers() {
        let multipliers = Category::categories()
            .map(|c| c.multiplier())
            .collect::<Vec<_>>();
        assert_eq!(multipliers, [0, 1, 2, 3, 5, 7]);
        assert_eq!(Category::categories().count(), Category::COUNT);

        for (idx, category) in Category::categories().enumerate() {
            assert_eq!(category as usize, idx);
        }
    }

    #[test]
    fn five_face_cards() {
        let e = eval(&["JS", "QH", "KD", "JC", "QS"]);
        assert_eq!(e.category(), Category::FiveFaceCards);
        assert_eq!(e.multiplier(), 7);
        assert_eq!(e.base(), hand(&["JS", "QH", "KD"]));
        assert_eq!(e.final2(), hand(&["JC", "QS"]));
        assert!(e.values().iter().all(|cv| cv.value == 10));
        assert_eq!(e.points(), None);
        assert_eq!(e.hero_name(), "五公");
    }

    #[test]
    fn all_face_hands() {
        let mut deck = Deck::default();
        for card in Deck::default() {
            if !card.is_face() {
                deck.remove(card);
            }
        }
        assert_eq!(deck.count(), 12);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(Evaluation::eval(cards).category(), Category::FiveFaceCards);
            count += 1;
        });
        assert_eq!(count, 792);
    }

    #[test]
    fn face_ace_spades() {
        let e = eval(&["10H", "QD", "KC", "KS", "AS"]);
        assert_eq!(e.category(), Category::FaceAceSpades);
        assert_eq!(e.multiplier(), 5);
        assert_eq!(e.final2(), hand(&["KS", "AS"]));
    }

    #[test]
    fn face_ace_spades_beats_other_splits() {
        // Base K Q 10 with final 10 A♠ is only valid base no bonus.
        let e = eval(&["KS", "QH", "10D", "AS", "JC"]);
        assert_eq!(e.category(), Category::FaceAceSpades);
        assert_eq!(e.multiplier(), 5);
        assert!(e.final2().contains(&card("AS")));
    }

    #[test]
    fn ace_of_hearts_is_not_ace_of_spades() {
        let e = eval(&["JS", "QH", "KD", "10C", "AH"]);
        assert_eq!(e.category(), Category::ValidBaseNoBonus);
        assert_eq!(e.multiplier(), 1);
        assert_eq!(e.points(), Some(1));
        assert_eq!(e.hero_name(), "牛1");
    }

    #[test]
    fn pair() {
        let e = eval(&["JS", "QH", "KD", "7C", "7S"]);
        assert_eq!(e.category(), Category::Pair);
        assert_eq!(e.multiplier(), 3);
        assert_eq!(e.base(), hand(&["JS", "QH", "KD"]));
        assert_eq!(e.final2(), hand(&["7C", "7S"]));
        assert_eq!(e.points(), Some(4));
        assert_eq!(e.label(), "對子 (Pair)");
    }

    #[test]
    fn pair_beats_sum_ten() {
        let e = eval(&["JS", "QH", "KD", "5C", "5S"]);
        assert_eq!(e.category(), Category::Pair);
        assert_eq!(e.multiplier(), 3);
    }

    #[test]
    fn sum_ten() {
        let e = eval(&["JS", "QH", "KD", "AH", "9C"]);
        assert_eq!(e.category(), Category::SumTen);
        assert_eq!(e.multiplier(), 2);
        assert_eq!(e.points(), Some(0));

        // Final pair J Q sums to 20.
        let e = eval(&["AH", "4D", "5C", "JS", "QH"]);
        assert_eq!(e.category(), Category::SumTen);
        assert_eq!(e.multiplier(), 2);
        assert_eq!(e.base(), hand(&["AH", "4D", "5C"]));
        assert_eq!(e.final2(), hand(&["JS", "QH"]));
    }

    #[test]
    fn valid_base_no_bonus() {
        let e = eval(&["JS", "QH", "KD", "2C", "4S"]);
        assert_eq!(e.category(), Category::ValidBaseNoBonus);
        assert_eq!(e.multiplier(), 1);
        assert_eq!(e.points(), Some(6));
        assert_eq!(e.label(), "有牛 (Valid Base)");
        assert_eq!(e.to_string(), "1x 有牛 (Valid Base) | base JS QH KD | final 2C 4S");
    }

    #[test]
    fn no_valid_base() {
        let e = eval(&["AH", "7D", "9C", "5S", "7H"]);
        assert_eq!(e.category(), Category::NoValidBase);
        assert_eq!(e.multiplier(), 0);
        assert!(e.base().is_empty());
        assert!(e.final2().is_empty());
        assert!(e.values().is_empty());
        assert_eq!(e.points(), None);
        assert_eq!(e.hero_name(), "無牛");
        assert_eq!(e.to_string(), "0x 無牛 (No Valid Base)");
    }

    #[test]
    fn incomplete_hands() {
        for labels in [
            vec!["AH", "2H", "3H"],
            vec![],
            vec!["AS", "2S", "3S", "4S", "5S", "6S"],
        ] {
            let e = eval(&labels);
            assert_eq!(e.category(), Category::NoValidBase);
            assert_eq!(e.multiplier(), 0);
            assert!(e.base().is_empty() && e.final2().is_empty() && e.values().is_empty());
        }
    }

    #[test]
    fn flexible_base() {
        // Base 3 + 3 + 4 with the six counting 3.
        let e = eval(&["3H", "6D", "4C", "10S", "10H"]);
        assert_eq!(e.category(), Category::Pair);
        assert_eq!(e.multiplier(), 3);
        assert_eq!(e.base(), hand(&["3H", "6D", "4C"]));
        assert_eq!(e.value_of(card("3H")), Some(3));
        assert_eq!(e.value_of(card("6D")), Some(3));
        assert!(e.is_resolved(card("6D")));
        assert!(!e.is_resolved(card("3H")));
        assert!(!e.is_resolved(card("10S")));
    }

    #[test]
    fn flexible_final2() {
        // The trey counts 3 for 7 + 3.
        let e = eval(&["7S", "3H", "10S", "KS", "QD"]);
        assert_eq!(e.category(), Category::SumTen);
        assert_eq!(e.value_of(card("3H")), Some(3));

        // The trey counts 6 for 6 + 4.
        let e = eval(&["JS", "QH", "KD", "3C", "4S"]);
        assert_eq!(e.category(), Category::SumTen);
        assert_eq!(e.value_of(card("3C")), Some(6));
        assert!(e.is_resolved(card("3C")));
    }

    #[test]
    fn trey_and_six_are_not_a_pair() {
        let e = eval(&["JS", "QH", "KD", "3C", "6S"]);
        assert_eq!(e.category(), Category::ValidBaseNoBonus);
        assert_eq!(e.multiplier(), 1);
        assert_eq!(e.final2(), hand(&["3C", "6S"]));
    }

    #[test]
    fn points_break_ties() {
        // 3 + 3 = 6, 6 + 3 = 9, 3 + 6 = 9, 6 + 6 = 12, the first 9 wins.
        let e = eval(&["JS", "QH", "KD", "3C", "6S"]);
        assert_eq!(e.points(), Some(9));
        assert_eq!(e.value_of(card("3C")), Some(6));
        assert_eq!(e.value_of(card("6S")), Some(3));
        assert_eq!(e.hero_name(), "牛9");
    }

    #[test]
    fn values_in_hand_order() {
        let e = eval(&["AH", "4D", "5C", "JS", "QH"]);
        let values = e.values().iter().map(|cv| cv.value).collect::<Vec<_>>();
        assert_eq!(values, [1, 4, 5, 10, 10]);
        assert_eq!(e.value_of(card("KS")), None);
    }

    #[test]
    fn permutation_invariance() {
        let mut rng = StdRng::seed_from_u64(101);
        let mut hands = vec![
            hand(&["KS", "QH", "10D", "AS", "JC"]),
            hand(&["3H", "6D", "4C", "10S", "10H"]),
            hand(&["JS", "QH", "KD", "3C", "6S"]),
            hand(&["AH", "7D", "9C", "5S", "7H"]),
        ];

        for _ in 0..50 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            hands.push((0..5).filter_map(|_| deck.deal()).collect());
        }

        for cards in hands {
            let expected = Evaluation::eval(&cards);
            let hand_set = cards.iter().copied().collect::<HashSet<_>>();

            for p in permutations(&cards) {
                let e = Evaluation::eval(&p);
                assert_eq!(e.category(), expected.category(), "{p:?}");
                assert_eq!(e.multiplier(), expected.multiplier(), "{p:?}");
                assert_eq!(e.points(), expected.points(), "{p:?}");

                if e.category() != Category::NoValidBase {
                    let split = e.base().iter().chain(e.final2()).copied();
                    assert_eq!(split.collect::<HashSet<_>>(), hand_set);
                }
            }
        }
    }

    #[test]
    fn idempotence() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards = (0..5).filter_map(|_| deck.deal()).collect::<Vec<_>>();
            assert_eq!(Evaluation::eval(&cards), Evaluation::eval(&cards));
        }
    }

    #[test]
    fn valid_base_sums() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards = (0..5).filter_map(|_| deck.deal()).collect::<Vec<_>>();
            let e = Evaluation::eval(&cards);

            match e.category() {
                Category::NoValidBase | Category::FiveFaceCards => {}
                _ => {
                    let base = e.base().iter().map(|&c| e.value_of(c).unwrap() as u32);
                    assert_eq!(base.sum::<u32>() % 10, 0, "{e}");

                    let last = e.final2().iter().map(|&c| e.value_of(c).unwrap());
                    assert_eq!(Some(last.sum::<u8>() % 10), e.points(), "{e}");
                }
            }
        }
    }

    #[test]
    fn serialize_evaluation() {
        let e = Evaluation::eval(&[
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Spades),
        ]);

        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["category"], "pair");
        assert_eq!(json["multiplier"], 3);
        assert_eq!(json["base"], serde_json::json!(["JS", "QH", "KD"]));
        assert_eq!(json["values"][3]["card"], "7C");
        assert_eq!(json["values"][3]["value"], 7);
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation results printing.
use anyhow::Result;
use serde_json::json;
use std::fmt::Write;

use niuniu_eval::{Card, Category, Evaluation};

/// The number of cards to select for a complete hand.
const HAND_SIZE: usize = 5;

/// Prints a hand evaluation.
pub fn hand(hand: &[Card], eval: &Evaluation, as_json: bool) -> Result<()> {
    if as_json {
        let out = json!({
            "hand": hand,
            "evaluation": eval,
            "hero_name": eval.hero_name(),
        });
        println!("{}", serde_json::to_string(&out)?);
    } else {
        print!("{}", format_hand(hand, eval)?);
    }

    Ok(())
}

/// Prints the number of hands for each category.
pub fn stats(counts: &[usize; Category::COUNT], as_json: bool) -> Result<()> {
    let total = counts.iter().sum::<usize>();

    if as_json {
        let categories = Category::categories()
            .map(|c| (c.name().to_string(), json!(counts[c as usize])))
            .collect::<serde_json::Map<_, _>>();
        let out = json!({ "total": total, "categories": categories });
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    println!("Total hands      {total}");
    for category in Category::categories().rev() {
        let count = counts[category as usize];
        println!(
            "{:<24} {}x {:>9} {:>6.2}%",
            category.label(),
            category.multiplier(),
            count,
            100.0 * count as f64 / total.max(1) as f64
        );
    }

    Ok(())
}

fn format_hand(hand: &[Card], eval: &Evaluation) -> Result<String> {
    let mut out = String::new();

    let cards = hand.iter().map(|&c| chip(c, None)).collect::<Vec<_>>();
    writeln!(out, "Hand:   {}", cards.join(" "))?;

    if hand.len() < HAND_SIZE {
        let missing = HAND_SIZE - hand.len();
        let plural = if missing == 1 { "" } else { "s" };
        writeln!(out, "Select {missing} more card{plural}")?;
        return Ok(out);
    } else if hand.len() > HAND_SIZE {
        writeln!(out, "Select only {HAND_SIZE} cards")?;
        return Ok(out);
    }

    writeln!(
        out,
        "Result: {}x {} [{}]",
        eval.multiplier(),
        eval.label(),
        eval.hero_name()
    )?;

    match eval.category() {
        Category::NoValidBase | Category::FiveFaceCards => {}
        _ => {
            let group = |cards: &[Card]| {
                let chips = cards
                    .iter()
                    .map(|&c| chip(c, Some(eval)))
                    .collect::<Vec<_>>();
                let sum = cards
                    .iter()
                    .filter_map(|&c| eval.value_of(c))
                    .map(u32::from)
                    .sum::<u32>();
                (chips.join(" "), sum)
            };

            let (base, sum) = group(eval.base());
            writeln!(out, "Base:   {base} = {sum}")?;

            let (final2, _) = group(eval.final2());
            let points = eval.points().unwrap_or_default();
            writeln!(out, "Final:  {final2} = {points} points")?;
        }
    }

    Ok(out)
}

/// Formats a card with its suit symbol and the value it counted for when
/// it differs from its base value.
fn chip(card: Card, eval: Option<&Evaluation>) -> String {
    let mut s = format!("{}{}", card.rank(), card.suit().symbol());
    if let Some(value) = eval
        .filter(|e| e.is_resolved(card))
        .and_then(|e| e.value_of(card))
    {
        s.push_str(&format!("→{value}"));
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(labels: &[&str]) -> (Vec<Card>, Evaluation) {
        let hand = labels
            .iter()
            .map(|l| l.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        let eval = Evaluation::eval(&hand);
        (hand, eval)
    }

    #[test]
    fn format_scored_hand() {
        let (hand, e) = eval(&["JS", "QH", "KD", "3C", "4S"]);
        let out = format_hand(&hand, &e).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Hand:   J♠ Q♥ K♦ 3♣ 4♠");
        assert_eq!(lines[1], "Result: 2x 湊十 (Sum to 10) [湊十]");
        assert_eq!(lines[2], "Base:   J♠ Q♥ K♦ = 30");
        assert_eq!(lines[3], "Final:  3♣→6 4♠ = 0 points");
    }

    #[test]
    fn format_no_valid_base() {
        let (hand, e) = eval(&["AH", "7D", "9C", "5S", "7H"]);
        let out = format_hand(&hand, &e).unwrap();
        assert_eq!(
            out,
            "Hand:   A♥ 7♦ 9♣ 5♠ 7♥\nResult: 0x 無牛 (No Valid Base) [無牛]\n"
        );
    }

    #[test]
    fn format_incomplete_hand() {
        let (hand, e) = eval(&["AH", "2H", "3H"]);
        let out = format_hand(&hand, &e).unwrap();
        assert_eq!(out, "Hand:   A♥ 2♥ 3♥\nSelect 2 more cards\n");

        let (hand, e) = eval(&["AH", "2H", "3H", "4H"]);
        let out = format_hand(&hand, &e).unwrap();
        assert!(out.ends_with("Select 1 more card\n"));
    }
}

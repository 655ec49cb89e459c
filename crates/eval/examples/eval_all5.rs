// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ```
//
// Prints the number of hands evaluated, the evaluation rate and how many
// hands fall in each category.

use std::time::Instant;

use niuniu_eval::*;

#[rustfmt::skip]
fn main() {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; Category::COUNT];

    Deck::default().for_each(5, |hand| {
        let category = Evaluation::eval(hand).category();
        counts[category as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in Category::categories().rev() {
        let count = counts[category as usize];
        println!(
            "{:<20} {}x {:>9} {:>6.2}%",
            category.name(),
            category.multiplier(),
            count,
            100.0 * count as f64 / total as f64
        );
    }
}

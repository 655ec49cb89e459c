// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Niu Niu hand scorer CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

use niuniu_eval::{Category, Deck, Evaluation};

mod report;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Print results as JSON.
    #[clap(long, global = true)]
    json: bool,
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a hand given as card labels, for example `AS 10H QD 3C 6S`.
    Eval {
        /// The hand cards.
        cards: Vec<String>,
    },
    /// Deal and evaluate random hands.
    Deal {
        /// Number of hands to deal.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=10_000))]
        count: u32,
        /// Seed for reproducible deals.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Print how many five cards hands fall in each category.
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    match cli.command {
        Command::Eval { cards } => {
            let hand = Deck::default().select(&cards)?;
            let eval = Evaluation::eval(&hand);
            report::hand(&hand, &eval, cli.json)?;
        }
        Command::Deal { count, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            for _ in 0..count {
                let mut deck = Deck::new_and_shuffled(&mut rng);
                let hand = (0..5).filter_map(|_| deck.deal()).collect::<Vec<_>>();
                let eval = Evaluation::eval(&hand);
                report::hand(&hand, &eval, cli.json)?;
            }
        }
        Command::Stats => {
            let now = Instant::now();
            let mut counts = [0usize; Category::COUNT];

            Deck::default().for_each(5, |hand| {
                let category = Evaluation::eval(hand).category();
                counts[category as usize] += 1;
            });

            info!("Evaluated all hands in {:.3}s", now.elapsed().as_secs_f64());
            report::stats(&counts, cli.json)?;
        }
    }

    Ok(())
}

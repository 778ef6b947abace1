// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use scrabfeat::{analysis, bag, error, game_config, logging, parse, word_index};

fn main() -> error::Returns<()> {
    logging::init();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        println!(
            "args:
  CSW19.idx [num_boards [seed]]
    analyze seeded random boards and report timing."
        );
        return Ok(());
    }
    let num_boards = match args.get(2) {
        Some(s) => s.parse::<usize>()?,
        None => 10_000,
    };
    let seed = match args.get(3) {
        Some(s) => s.parse::<u64>()?,
        None => 0,
    };
    let game_config = game_config::make_english_game_config();
    let t0 = std::time::Instant::now();
    let index = word_index::WordIndex::load(&args[1])?;
    tracing::info!(words = index.len(), "{:?} for loading {}", t0.elapsed(), args[1]);

    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);
    let boards = (0..num_boards)
        .map(|_| {
            let num_runs = rng.random_range(1..=20);
            bag::random_board(&mut rng, game_config.alphabet(), num_runs)
        })
        .collect::<Vec<_>>();
    if let Some(b) = boards.first() {
        tracing::debug!("first board {}", parse::to_rle(b));
    }

    let t0 = std::time::Instant::now();
    let mut num_rack_lanes = 0;
    let mut num_through_lanes = 0;
    let mut num_cross_checks = 0;
    let mut num_connected_pairs = 0;
    for b in boards {
        let analysis = analysis::Analysis::new(b, &index, &game_config);
        num_rack_lanes += analysis.rack_lanes.len();
        num_through_lanes += analysis.through_lanes.len();
        num_cross_checks +=
            analysis.cross_checks.across.len() + analysis.cross_checks.down.len();
        num_connected_pairs += analysis
            .pair_access
            .statuses
            .iter()
            .map(|x| x.connected)
            .sum::<u32>();
    }
    let elapsed = t0.elapsed();
    println!(
        "{} boards in {:?} ({:?} per board)",
        num_boards,
        elapsed,
        elapsed / (num_boards.max(1) as u32)
    );
    println!(
        "cross-checks {} rack lanes {} through lanes {} connected pairs {}",
        num_cross_checks, num_rack_lanes, num_through_lanes, num_connected_pairs
    );
    Ok(())
}

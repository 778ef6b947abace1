// Copyright (C) 2020-2026 Andy Kurnia.

use scrabfeat::{error, features, game_config, logging, word_index};

fn load_index(path: &str) -> error::Returns<word_index::WordIndex> {
    let t0 = std::time::Instant::now();
    let index = word_index::WordIndex::load(path)?;
    tracing::info!(words = index.len(), "{:?} for loading {}", t0.elapsed(), path);
    Ok(index)
}

// Lines are handed out by index to one worker per cpu. Results come back out
// of order and are slotted into place.
fn featurize_lines(
    lines: &[&str],
    index: &word_index::WordIndex,
    game_config: &game_config::GameConfig<'_>,
) -> Vec<Option<error::Returns<features::Features>>> {
    let num_threads = num_cpus::get();
    let next_line = std::sync::atomic::AtomicUsize::new(0);
    let mut results = Vec::with_capacity(lines.len());
    results.resize_with(lines.len(), || None);
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::scope(|s| {
        for _ in 0..num_threads {
            let tx = tx.clone();
            let next_line = &next_line;
            s.spawn(move || {
                loop {
                    let i = next_line.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                    if i >= lines.len() {
                        break;
                    }
                    let line = lines[i];
                    let result = if line.trim().is_empty() {
                        None
                    } else {
                        Some(features::Features::extract(line, index, game_config))
                    };
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx);
        let t0 = std::time::Instant::now();
        for (num_received, (i, result)) in rx.iter().enumerate() {
            results[i] = result;
            if (num_received + 1) % 100_000 == 0 {
                tracing::info!(
                    "{} of {} lines after {:?}",
                    num_received + 1,
                    lines.len(),
                    t0.elapsed()
                );
            }
        }
    });
    tracing::debug!(num_threads, "workers done");
    results
}

fn main() -> error::Returns<()> {
    logging::init();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 3 {
        println!(
            "args:
  CSW19.idx dataset.txt [features.csv]
    one line per position: board leave opp/player x,winProb,expDiff
    the index may also be a word list ending in .txt.
    writes to stdout without an output file."
        );
        return Ok(());
    }
    let game_config = game_config::make_english_game_config();
    let index = load_index(&args[1])?;
    let data = std::fs::read_to_string(&args[2])?;
    let lines = data.lines().collect::<Vec<_>>();

    let t0 = std::time::Instant::now();
    let results = featurize_lines(&lines, &index, &game_config);
    tracing::info!("{:?} for featurizing {} lines", t0.elapsed(), lines.len());

    let out: Box<dyn std::io::Write> = if args.len() > 3 {
        Box::new(std::io::BufWriter::new(std::fs::File::create(&args[3])?))
    } else {
        Box::new(std::io::stdout().lock())
    };
    let mut csv_out = csv::Writer::from_writer(out);
    csv_out.write_record(features::Features::header())?;
    let mut num_written = 0;
    let mut num_skipped = 0;
    for (line_num, result) in results.into_iter().enumerate() {
        match result {
            None => {}
            Some(Ok(features)) => {
                csv_out.write_record(features.to_record())?;
                num_written += 1;
            }
            Some(Err(err)) => {
                tracing::warn!("line {}: {}", line_num + 1, err);
                num_skipped += 1;
            }
        }
    }
    csv_out.flush()?;
    tracing::info!(num_written, num_skipped, "done");
    Ok(())
}

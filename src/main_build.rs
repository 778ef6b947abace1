// Copyright (C) 2020-2026 Andy Kurnia.

use scrabfeat::{error, logging, word_index};

fn build_index(word_list_path: &str, index_path: &str) -> error::Returns<()> {
    let t0 = std::time::Instant::now();
    let index = word_index::WordIndex::from_word_list(&std::fs::read_to_string(word_list_path)?)?;
    tracing::info!(
        words = index.len(),
        nodes = index.num_nodes(),
        "{:?} for reading+building {}",
        t0.elapsed(),
        word_list_path
    );
    let t0 = std::time::Instant::now();
    let bin = index.serialize();
    std::fs::write(index_path, &bin)?;
    tracing::info!(
        bytes = bin.len(),
        "{:?} for writing {}",
        t0.elapsed(),
        index_path
    );
    Ok(())
}

// reread, and check that the words come back in the same order.
fn verify_index(word_list_path: &str, index_path: &str) -> error::Returns<()> {
    let t0 = std::time::Instant::now();
    let index = word_index::WordIndex::deserialize(&std::fs::read(index_path)?)?;
    tracing::info!("{:?} for rereading {}", t0.elapsed(), index_path);
    let mut expected = std::fs::read_to_string(word_list_path)?
        .lines()
        .map(|s| s.trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();
    expected.sort_unstable();
    expected.dedup();
    let mut num_words = 0;
    for (expected_word, word) in expected.iter().zip(index.words()) {
        if *expected_word != word {
            scrabfeat::return_error!(format!("expected {}, found {}", expected_word, word));
        }
        num_words += 1;
    }
    if num_words != expected.len() || index.len() != expected.len() {
        scrabfeat::return_error!(format!(
            "expected {} words, found {}",
            expected.len(),
            index.len()
        ));
    }
    tracing::info!(words = num_words, "{} matches {}", index_path, word_list_path);
    Ok(())
}

fn main() -> error::Returns<()> {
    logging::init();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 4 {
        println!(
            "args:
  english-index CSW19.txt CSW19.idx
    read word list (one per line), save binary index.
  verify CSW19.txt CSW19.idx
    reread binary index and compare against word list."
        );
        return Ok(());
    }
    let t0 = std::time::Instant::now();
    if args[1] == "english-index" {
        build_index(&args[2], &args[3])?;
    } else if args[1] == "verify" {
        verify_index(&args[2], &args[3])?;
    } else {
        return Err("invalid argument".into());
    }
    println!("time taken: {:?}", t0.elapsed());
    Ok(())
}

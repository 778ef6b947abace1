// Copyright (C) 2020-2026 Andy Kurnia.

use scrabfeat::{analysis, display, error, game_config, logging, parse, word_index};

// board: run-length notation, rows separated by '/', lowercase for blanks.
// strict: reject anything but 15 rows of 15 squares.
#[derive(serde::Deserialize)]
struct Question {
    board: String,
    #[serde(default)]
    strict: bool,
}

fn main() -> error::Returns<()> {
    logging::init();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        println!(
            "args:
  CSW19.idx ['{{\"board\": \"...\", \"strict\": true}}']
    analyze one board and print the analysis as json."
        );
        return Ok(());
    }
    let data = if args.len() > 2 {
        args[2].clone()
    } else {
        r#"
          {
            "board": "15/15/15/15/15/15/15/4QuIZ7/15/15/15/15/15/15/15",
            "strict": true
          }
        "#
        .to_string()
    };
    let question = serde_json::from_str::<Question>(&data)?;

    let game_config = game_config::make_english_game_config();
    let t0 = std::time::Instant::now();
    let index = word_index::WordIndex::load(&args[1])?;
    tracing::info!(words = index.len(), "{:?} for loading {}", t0.elapsed(), args[1]);

    let board_tiles = if question.strict {
        parse::parse_board_strict(&question.board)?
    } else {
        parse::parse_board(&question.board)
    };
    display::print_board(
        game_config.alphabet(),
        game_config.board_layout(),
        &board_tiles,
    );

    let t0 = std::time::Instant::now();
    let analysis = analysis::Analysis::new(board_tiles, &index, &game_config);
    tracing::info!("{:?} for analysis", t0.elapsed());

    let ret = analysis.to_json();
    println!("{}", ret);
    println!("{}", serde_json::to_string_pretty(&ret)?);

    Ok(())
}

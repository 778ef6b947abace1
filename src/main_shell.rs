// Copyright (C) 2020-2026 Andy Kurnia.

use scrabfeat::{
    analysis, board, display, error, game_config, logging, parse, rlhelper, word_index,
};

const HELP: &str = "commands:
  help              this text
  exit              leave
  source FILE       run commands from FILE
  lex FILE          load a word index (.txt word list or binary)
  words WORD...     check words against the index
  board RLE         set the board from run-length notation
  show              print the board
  xc                list cross-checks
  lanes             list 7- and 8-letter bingo lanes
  premium           accessible premium squares and connected pairs
  json              the whole analysis as json";

struct Shell {
    game_config: game_config::GameConfig<'static>,
    index: Option<word_index::WordIndex>,
    board: board::Board,
    analysis: Option<analysis::Analysis>,
}

impl Shell {
    fn new() -> Self {
        Self {
            game_config: game_config::make_english_game_config(),
            index: None,
            board: board::Board::new(),
            analysis: None,
        }
    }

    // analysis is redone only after the board or the index changes.
    fn analysis(&mut self) -> error::Returns<&analysis::Analysis> {
        let Some(index) = &self.index else {
            scrabfeat::return_error!("no word index, use lex first".into());
        };
        if self.analysis.is_none() {
            let t0 = std::time::Instant::now();
            self.analysis = Some(analysis::Analysis::new(
                self.board.clone(),
                index,
                &self.game_config,
            ));
            tracing::debug!("{:?} for analysis", t0.elapsed());
        }
        match &self.analysis {
            Some(x) => Ok(x),
            None => Err("analysis missing".into()),
        }
    }

    fn run(&mut self, strings: &[String]) -> error::Returns<()> {
        match strings[0].as_str() {
            "help" => {
                println!("{}", HELP);
            }
            "lex" => {
                let Some(path) = strings.get(1) else {
                    scrabfeat::return_error!("need another arg".into());
                };
                let t0 = std::time::Instant::now();
                let index = word_index::WordIndex::load(path)?;
                println!("{} words, {:?}", index.len(), t0.elapsed());
                self.index = Some(index);
                self.analysis = None;
            }
            "words" => {
                let Some(index) = &self.index else {
                    scrabfeat::return_error!("no word index, use lex first".into());
                };
                for word in &strings[1..] {
                    println!(
                        "{} {}",
                        word,
                        if index.is_valid(word) {
                            "valid"
                        } else {
                            "invalid"
                        }
                    );
                }
            }
            "board" => {
                let Some(rle) = strings.get(1) else {
                    scrabfeat::return_error!("need another arg".into());
                };
                self.board = parse::parse_board_strict(rle)?;
                self.analysis = None;
                display::print_board(
                    self.game_config.alphabet(),
                    self.game_config.board_layout(),
                    &self.board,
                );
            }
            "show" => {
                display::print_board(
                    self.game_config.alphabet(),
                    self.game_config.board_layout(),
                    &self.board,
                );
                println!("{}", parse::to_rle(&self.board));
            }
            "xc" => {
                let analysis = self.analysis()?;
                display::print_cross_checks("across", &analysis.cross_checks.across);
                display::print_cross_checks("down", &analysis.cross_checks.down);
            }
            "lanes" => {
                let (rack_len, through_len) = self.game_config.bingo_lengths();
                let analysis = self.analysis()?;
                display::print_lanes(&format!("{}-letter", rack_len), &analysis.rack_lanes);
                display::print_lanes(&format!("{}-letter", through_len), &analysis.through_lanes);
            }
            "premium" => {
                let analysis = self.analysis()?;
                display::print_premium(&analysis.premium_access, &analysis.pair_access);
            }
            "json" => {
                let analysis = self.analysis()?;
                println!("{}", serde_json::to_string_pretty(&analysis.to_json())?);
            }
            _ => {
                println!("invalid input, help for help");
            }
        }
        Ok(())
    }
}

fn main() -> error::Returns<()> {
    logging::init();
    let mut rl = rlhelper::new_rl_editor()?;
    let mut shell = Shell::new();
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if !strings.is_empty() {
                        match strings[0].as_str() {
                            "exit" => {
                                break;
                            }
                            "source" => {
                                if strings.len() > 1 {
                                    match std::fs::read_to_string(&strings[1]) {
                                        Ok(whole_file) => {
                                            let v = cmd_stack.len();
                                            for (line_num, line) in whole_file.lines().enumerate() {
                                                cmd_stack.push((
                                                    line.to_string(),
                                                    Some((strings[1].clone(), line_num + 1)),
                                                ));
                                            }
                                            cmd_stack[v..].reverse();
                                        }
                                        Err(err) => {
                                            println!("cannot open file: {:?}", err);
                                        }
                                    }
                                } else {
                                    println!("need another arg");
                                }
                            }
                            _ => {
                                if let Err(err) = shell.run(&strings) {
                                    println!("{}", err);
                                }
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}

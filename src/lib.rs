// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod analysis;
pub mod bag;
pub mod bingo;
pub mod board;
pub mod board_layout;
pub mod cross_check;
pub mod display;
pub mod features;
pub mod game_config;
pub mod logging;
pub mod matrix;
pub mod parse;
pub mod premium;
pub mod rlhelper;
pub mod tally;
pub mod word_index;

// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, bingo, board, board_layout, cross_check, premium};

#[inline(always)]
pub fn empty_label(board_layout: &board_layout::BoardLayout, row: i8, col: i8) -> &'static str {
    if row == board_layout.star_row() && col == board_layout.star_col() {
        return "*";
    }
    match board_layout.premium_at(row, col).kind() {
        board_layout::PremiumKind::TripleWord => "=",
        board_layout::PremiumKind::DoubleWord => "-",
        board_layout::PremiumKind::TripleLetter => "\"",
        board_layout::PremiumKind::DoubleLetter => "\'",
        board_layout::PremiumKind::Plain => " ",
    }
}

#[inline(always)]
pub fn board_label<'a>(
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: &board_layout::BoardLayout,
    board_tiles: &board::Board,
    row: i8,
    col: i8,
) -> &'a str {
    alphabet
        .from_board(board_tiles.at(row, col))
        .unwrap_or_else(|| empty_label(board_layout, row, col))
}

// a1 is the top-left corner, o15 the bottom-right.
pub fn square_label(row: i8, col: i8) -> String {
    format!("{}{}", ((col as u8) + 0x61) as char, row + 1)
}

fn print_col_header(board_layout: &board_layout::BoardLayout) {
    print!("  ");
    for c in 0..board_layout.dim().cols {
        print!(" {}", ((c as u8) + 0x61) as char);
    }
    println!();
    print!("  +");
    for _ in 1..board_layout.dim().cols {
        print!("--");
    }
    println!("-+");
}

pub fn print_board<'a>(
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: &board_layout::BoardLayout,
    board_tiles: &board::Board,
) {
    print_col_header(board_layout);
    for r in 0..board_layout.dim().rows {
        print!("{:2}|", r + 1);
        for c in 0..board_layout.dim().cols {
            if c > 0 {
                print!(" ")
            }
            print!("{}", board_label(alphabet, board_layout, board_tiles, r, c));
        }
        println!("|{}", r + 1);
    }
    print!("  +");
    for _ in 1..board_layout.dim().cols {
        print!("--");
    }
    println!("-+");
}

pub fn fmt_cross_check(cross_check: &cross_check::CrossCheck) -> String {
    if cross_check.is_open() {
        "open".to_string()
    } else if cross_check.is_dead() {
        format!("dead ({})", cross_check.score())
    } else {
        format!(
            "{} ({})",
            cross_check.valid_letters().collect::<String>(),
            cross_check.score()
        )
    }
}

pub fn print_cross_checks(name: &str, cross_check_board: &cross_check::CrossCheckBoard) {
    println!("{} ({} squares):", name, cross_check_board.len());
    for (row, col, x) in cross_check_board.iter() {
        println!("  {:>3} {}", square_label(row, col), fmt_cross_check(x));
    }
}

pub fn print_lanes(name: &str, lanes: &[bingo::BingoLane]) {
    println!(
        "{}: {} lanes, total surplus {}",
        name,
        lanes.len(),
        bingo::total_surplus(lanes)
    );
    for lane in lanes {
        println!(
            "  {:>3} {} +{}",
            square_label(lane.row, lane.col),
            if lane.down { "down" } else { "across" },
            lane.surplus
        );
    }
}

pub fn print_premium(
    premium_access: &premium::PremiumAccess,
    pair_access: &premium::PairAccess,
) {
    print!("accessible:");
    for (label, kind) in [
        ("TWS", board_layout::PremiumKind::TripleWord),
        ("DWS", board_layout::PremiumKind::DoubleWord),
        ("TLS", board_layout::PremiumKind::TripleLetter),
        ("DLS", board_layout::PremiumKind::DoubleLetter),
    ] {
        print!(" {} {}", label, premium_access.get(kind));
    }
    println!();
    for status in &pair_access.statuses {
        print!("{} {}:", status.kind.label(), status.connected);
        for (premium_pair, &connected) in status.kind.pairs().iter().zip(status.flags.iter()) {
            if connected {
                print!(
                    " {}-{}",
                    square_label(premium_pair.start.0, premium_pair.start.1),
                    square_label(premium_pair.end.0, premium_pair.end.1)
                );
            }
        }
        println!();
    }
}

// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, error};

// A..Z then the blank.
pub const NUM_SLOTS: usize = 27;
pub const BLANK_SLOT: usize = 26;

pub type TileCounts = [i16; NUM_SLOTS];

// machine tile (board bit ignored for letters) to its slot.
#[inline(always)]
pub fn slot_of(tile: u8) -> usize {
    if tile & 0x80 != 0 || tile == 0 {
        BLANK_SLOT
    } else {
        (tile - 1) as usize
    }
}

#[inline(always)]
pub fn tile_of_slot(slot: usize) -> u8 {
    if slot == BLANK_SLOT { 0 } else { slot as u8 + 1 }
}

pub fn slot_label(slot: usize) -> char {
    if slot == BLANK_SLOT {
        '?'
    } else {
        alphabet::letter_of(tile_of_slot(slot))
    }
}

// Rack notation: uppercase letters and '?' for blanks. Any '/' is dropped.
pub fn leave_counts(leave: &str) -> error::Returns<TileCounts> {
    let mut ret = [0; NUM_SLOTS];
    for c in leave.bytes() {
        match c {
            b'/' => {}
            b'?' => ret[BLANK_SLOT] += 1,
            b'A'..=b'Z' => ret[slot_of(c & 0x1f)] += 1,
            _ => {
                return_error!(format!(
                    "leave {:?}: unexpected {:?}",
                    leave,
                    c as char
                ));
            }
        }
    }
    Ok(ret)
}

pub fn board_counts(board_tiles: &board::Board) -> TileCounts {
    let mut ret = [0; NUM_SLOTS];
    for &b in board_tiles.tiles() {
        if b != 0 {
            ret[slot_of(b)] += 1;
        }
    }
    ret
}

// The bag plus the opponent's rack, from this player's point of view. Not
// clamped: inconsistent input shows up as negative counts.
pub fn unseen_counts(
    alphabet: &alphabet::Alphabet<'_>,
    board_tiles: &board::Board,
    leave: &TileCounts,
) -> TileCounts {
    let on_board = board_counts(board_tiles);
    let mut ret = [0; NUM_SLOTS];
    for (slot, count) in ret.iter_mut().enumerate() {
        *count = alphabet.freq(tile_of_slot(slot)) as i16 - on_board[slot] - leave[slot];
    }
    ret
}

#[inline(always)]
pub fn total(counts: &TileCounts) -> i32 {
    counts.iter().map(|&x| x as i32).sum()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Quadrants {
    pub upper_left: u32,
    pub upper_right: u32,
    pub lower_left: u32,
    pub lower_right: u32,
}

// the star row and star column belong to no quadrant.
pub fn count_quadrants(board_tiles: &board::Board) -> Quadrants {
    let mut ret = Quadrants::default();
    for (row, col) in board::DIM.squares() {
        if board_tiles.at(row, col) == 0 {
            continue;
        }
        match (row.cmp(&board::STAR_ROW), col.cmp(&board::STAR_COL)) {
            (std::cmp::Ordering::Less, std::cmp::Ordering::Less) => ret.upper_left += 1,
            (std::cmp::Ordering::Less, std::cmp::Ordering::Greater) => ret.upper_right += 1,
            (std::cmp::Ordering::Greater, std::cmp::Ordering::Less) => ret.lower_left += 1,
            (std::cmp::Ordering::Greater, std::cmp::Ordering::Greater) => ret.lower_right += 1,
            _ => {}
        }
    }
    ret
}

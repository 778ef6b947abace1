// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, matrix};

pub const DIM: matrix::Dim = matrix::Dim { rows: 15, cols: 15 };
pub const NUM_SQUARES: usize = 225;
pub const STAR_ROW: i8 = 7;
pub const STAR_COL: i8 = 7;

// 0 = empty, 1..=26 = A..Z, 0x81..=0x9a = blank designated as a..z.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [u8; NUM_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..DIM.rows {
            for col in 0..DIM.cols {
                let b = self.at(row, col);
                let c = if b == 0 {
                    '.'
                } else if b & 0x80 != 0 {
                    alphabet::letter_of(b).to_ascii_lowercase()
                } else {
                    alphabet::letter_of(b)
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            tiles: [0; NUM_SQUARES],
        }
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    // callers guarantee (row, col) is on the board.
    #[inline(always)]
    pub fn at(&self, row: i8, col: i8) -> u8 {
        self.tiles[DIM.at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn get(&self, row: i8, col: i8) -> Option<u8> {
        if DIM.contains(row, col) {
            Some(self.at(row, col))
        } else {
            None
        }
    }

    // off-board squares are never occupied.
    #[inline(always)]
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(b) if b != 0)
    }

    pub fn set(&mut self, row: i8, col: i8, tile: u8) -> error::Returns<()> {
        if !DIM.contains(row, col) {
            return_error!(format!("square ({}, {}) is off the board", row, col));
        }
        if tile != 0 && !matches!(tile & 0x7f, 1..=26) {
            return_error!(format!("invalid tile {}", tile));
        }
        self.tiles[DIM.at_row_col(row, col)] = tile;
        Ok(())
    }

    // used by the parser, which drops what does not fit.
    #[inline(always)]
    pub(crate) fn put_if_on_board(&mut self, row: i8, col: i8, tile: u8) {
        if DIM.contains(row, col) {
            self.tiles[DIM.at_row_col(row, col)] = tile;
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|&b| b == 0)
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> usize {
        self.tiles.iter().filter(|&&b| b != 0).count()
    }

    pub fn transpose(&self) -> Self {
        let mut ret = Self::new();
        for (row, col) in DIM.squares() {
            ret.tiles[DIM.at_row_col(col, row)] = self.at(row, col);
        }
        ret
    }

    #[inline(always)]
    pub fn has_adjacent_tile(&self, row: i8, col: i8) -> bool {
        self.is_occupied(row - 1, col)
            || self.is_occupied(row + 1, col)
            || self.is_occupied(row, col - 1)
            || self.is_occupied(row, col + 1)
    }

    pub fn num_adjacent_tiles(&self, row: i8, col: i8) -> usize {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .iter()
            .filter(|&&(dr, dc)| self.is_occupied(row + dr, col + dc))
            .count()
    }
}

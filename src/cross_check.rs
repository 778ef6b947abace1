// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, word_index};

// bits 1..=26 for A..Z, bit 0 unused.
const ALL_LETTERS: u32 = ((1 << 26) - 1) << 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrossCheck {
    bits: u32,
    score: i16,
    is_open: bool,
}

impl CrossCheck {
    // no perpendicular neighbour: every letter goes, nothing constrains.
    pub const OPEN: CrossCheck = CrossCheck {
        bits: ALL_LETTERS,
        score: 0,
        is_open: true,
    };

    pub fn constrained(bits: u32, score: i16) -> Self {
        Self {
            bits: bits & ALL_LETTERS,
            score,
            is_open: false,
        }
    }

    // face value of the perpendicular tiles touching this square.
    #[inline(always)]
    pub fn score(&self) -> i16 {
        self.score
    }

    #[inline(always)]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[inline(always)]
    pub fn allows(&self, tile: u8) -> bool {
        self.bits & (1 << (tile & 0x1f)) != 0
    }

    #[inline(always)]
    pub fn num_valid(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline(always)]
    pub fn has_valid_letters(&self) -> bool {
        self.bits != 0
    }

    // constrained, and nothing fits.
    #[inline(always)]
    pub fn is_dead(&self) -> bool {
        !self.is_open && self.bits == 0
    }

    // constrained, and something fits.
    #[inline(always)]
    pub fn is_live(&self) -> bool {
        !self.is_open && self.bits != 0
    }

    pub fn valid_letters(&self) -> impl Iterator<Item = char> + use<> {
        let bits = self.bits;
        (1..=26u8)
            .filter(move |&tile| bits & (1 << tile) != 0)
            .map(alphabet::letter_of)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct CrossCheckBoard {
    cells: [Option<CrossCheck>; board::NUM_SQUARES],
}

impl Default for CrossCheckBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossCheckBoard {
    pub fn new() -> Self {
        Self {
            cells: [None; board::NUM_SQUARES],
        }
    }

    // None for squares without an entry, and for squares off the board.
    #[inline(always)]
    pub fn get(&self, row: i8, col: i8) -> Option<&CrossCheck> {
        if board::DIM.contains(row, col) {
            self.cells[board::DIM.at_row_col(row, col)].as_ref()
        } else {
            None
        }
    }

    #[inline(always)]
    fn set(&mut self, row: i8, col: i8, cross_check: CrossCheck) {
        self.cells[board::DIM.at_row_col(row, col)] = Some(cross_check);
    }

    pub fn len(&self) -> usize {
        self.cells.iter().filter(|x| x.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|x| x.is_none())
    }

    pub fn iter(&self) -> impl Iterator<Item = (i8, i8, &CrossCheck)> {
        board::DIM
            .squares()
            .filter_map(move |(row, col)| self.get(row, col).map(|x| (row, col, x)))
    }

    pub fn transpose(&self) -> Self {
        let mut ret = Self::new();
        for (row, col, &cross_check) in self.iter() {
            ret.set(col, row, cross_check);
        }
        ret
    }
}

// Cross-checks for across plays: the perpendicular words run vertically.
pub fn gen_cross_checks(
    board_tiles: &board::Board,
    word_index: &word_index::WordIndex,
    alphabet: &alphabet::Alphabet,
) -> CrossCheckBoard {
    let mut ret = CrossCheckBoard::new();
    if board_tiles.is_empty() {
        ret.set(board::STAR_ROW, board::STAR_COL, CrossCheck::OPEN);
        return ret;
    }
    let mut prefix = Vec::with_capacity(board::DIM.rows as usize);
    let mut suffix = Vec::with_capacity(board::DIM.rows as usize);
    for (row, col) in board::DIM.squares() {
        if board_tiles.at(row, col) != 0 || !board_tiles.has_adjacent_tile(row, col) {
            continue;
        }
        let mut score = 0i16;
        prefix.clear();
        let mut r = row - 1;
        while r >= 0 && board_tiles.at(r, col) != 0 {
            let b = board_tiles.at(r, col);
            prefix.push(b);
            score += alphabet.score(b) as i16;
            r -= 1;
        }
        prefix.reverse();
        suffix.clear();
        let mut r = row + 1;
        while r < board::DIM.rows && board_tiles.at(r, col) != 0 {
            let b = board_tiles.at(r, col);
            suffix.push(b);
            score += alphabet.score(b) as i16;
            r += 1;
        }
        if prefix.is_empty() && suffix.is_empty() {
            ret.set(row, col, CrossCheck::OPEN);
            continue;
        }
        let mut bits = 0u32;
        // walk the prefix once, then try each letter that can follow it.
        if let Some(p) = word_index.seek_all(word_index.root(), prefix.iter().copied()) {
            for &(tile, q) in word_index.arcs(p) {
                if word_index
                    .seek_all(q, suffix.iter().copied())
                    .is_some_and(|q| word_index.accepts(q))
                {
                    bits |= 1 << tile;
                }
            }
        }
        ret.set(row, col, CrossCheck::constrained(bits, score));
    }
    ret
}

// Both directions for one board snapshot.
pub struct CrossChecks {
    // for across plays, constrained by vertical words.
    pub across: CrossCheckBoard,
    // for down plays, constrained by horizontal words.
    pub down: CrossCheckBoard,
}

impl CrossChecks {
    pub fn new(
        board_tiles: &board::Board,
        word_index: &word_index::WordIndex,
        alphabet: &alphabet::Alphabet,
    ) -> Self {
        Self {
            across: gen_cross_checks(board_tiles, word_index, alphabet),
            down: gen_cross_checks(&board_tiles.transpose(), word_index, alphabet).transpose(),
        }
    }

    #[inline(always)]
    pub fn lane(&self, down: bool) -> &CrossCheckBoard {
        if down { &self.down } else { &self.across }
    }
}

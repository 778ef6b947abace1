// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, matrix};
use rand::prelude::*;

pub struct Bag(pub Vec<u8>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        for tile in 0..alphabet.len() {
            for _ in 0..alphabet.freq(tile) {
                bag.push(tile);
            }
        }
        Bag(bag)
    }

    pub fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.0.shuffle(rng);
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.0.pop()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// A tile-legal (not word-legal) position: runs of 2 to 7 tiles drawn from one
// bag, the first through the star, each later one crossing an existing tile.
// Drawn blanks stand for a random letter.
pub fn random_board(
    rng: &mut dyn RngCore,
    alphabet: &alphabet::Alphabet,
    num_runs: usize,
) -> board::Board {
    let mut bag = Bag::new(alphabet);
    bag.shuffle(rng);
    let mut ret = board::Board::new();
    let mut occupied = Vec::new();
    for _ in 0..num_runs {
        let (row, col) = if occupied.is_empty() {
            (board::STAR_ROW, board::STAR_COL)
        } else {
            occupied[rng.random_range(0..occupied.len())]
        };
        let (_, step) = matrix::Step::along(rng.random_bool(0.5));
        let len = rng.random_range(2..=7i8);
        let first = -rng.random_range(0..len);
        for i in first..first + len {
            let (r, c) = step.apply(row, col, i);
            if ret.get(r, c) != Some(0) {
                continue;
            }
            let Some(tile) = bag.pop() else {
                return ret;
            };
            let tile = if tile == 0 {
                0x80 | rng.random_range(1..=26u8)
            } else {
                tile
            };
            ret.put_if_on_board(r, c, tile);
            occupied.push((r, c));
        }
    }
    ret
}

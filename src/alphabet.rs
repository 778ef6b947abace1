// Copyright (C) 2020-2026 Andy Kurnia.

// Machine tiles: 0 is the blank (or an empty square on the board), 1..=26 are
// A..Z. On the board, bit 0x80 marks a blank designated as that letter.

pub struct Tile<'a> {
    label: &'a str,
    blank_label: &'a str,
    freq: u8,
    score: i8,
}

pub struct Alphabet<'a> {
    tiles: &'a [Tile<'a>],
    num_tiles: u16,
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        self.tiles.len() as u8
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, idx: u8) -> &'a Tile<'a> {
        &self.tiles[idx as usize]
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> u16 {
        self.num_tiles
    }

    #[inline(always)]
    pub fn from_board(&self, idx: u8) -> Option<&'a str> {
        let c = idx & 0x7f;
        if c == 0 || c >= self.len() {
            None
        } else if idx & 0x80 == 0 {
            Some(self.get(c).label)
        } else {
            Some(self.get(c).blank_label)
        }
    }

    // blanks on the board score zero.
    #[inline(always)]
    pub fn score(&self, idx: u8) -> i8 {
        if idx & 0x80 != 0 {
            0
        } else {
            self.get(idx).score
        }
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.get(idx).freq
    }
}

// 'A' -> 1, 'a' -> 0x81 (blank as A). Anything else is not a board tile.
#[inline(always)]
pub fn board_tile_of(c: u8) -> Option<u8> {
    match c {
        b'A'..=b'Z' => Some(c & 0x3f),
        b'a'..=b'z' => Some(0x80 | (c & 0x1f)),
        _ => None,
    }
}

// case-insensitive letter to machine tile 1..=26.
#[inline(always)]
pub fn letter_tile_of(c: u8) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c & 0x1f)
    } else {
        None
    }
}

#[inline(always)]
pub fn letter_of(tile: u8) -> char {
    (0x40 | (tile & 0x1f)) as char
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet {
    tiles: &[
        Tile {
            label: "?",
            blank_label: "?",
            freq: 2,
            score: 0,
        },
        Tile {
            label: "A",
            blank_label: "a",
            freq: 9,
            score: 1,
        },
        Tile {
            label: "B",
            blank_label: "b",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "C",
            blank_label: "c",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "D",
            blank_label: "d",
            freq: 4,
            score: 2,
        },
        Tile {
            label: "E",
            blank_label: "e",
            freq: 12,
            score: 1,
        },
        Tile {
            label: "F",
            blank_label: "f",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "G",
            blank_label: "g",
            freq: 3,
            score: 2,
        },
        Tile {
            label: "H",
            blank_label: "h",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "I",
            blank_label: "i",
            freq: 9,
            score: 1,
        },
        Tile {
            label: "J",
            blank_label: "j",
            freq: 1,
            score: 8,
        },
        Tile {
            label: "K",
            blank_label: "k",
            freq: 1,
            score: 5,
        },
        Tile {
            label: "L",
            blank_label: "l",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "M",
            blank_label: "m",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "N",
            blank_label: "n",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "O",
            blank_label: "o",
            freq: 8,
            score: 1,
        },
        Tile {
            label: "P",
            blank_label: "p",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "Q",
            blank_label: "q",
            freq: 1,
            score: 10,
        },
        Tile {
            label: "R",
            blank_label: "r",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "S",
            blank_label: "s",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "T",
            blank_label: "t",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "U",
            blank_label: "u",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "V",
            blank_label: "v",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "W",
            blank_label: "w",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "X",
            blank_label: "x",
            freq: 1,
            score: 8,
        },
        Tile {
            label: "Y",
            blank_label: "y",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "Z",
            blank_label: "z",
            freq: 1,
            score: 10,
        },
    ],
    num_tiles: 100,
};

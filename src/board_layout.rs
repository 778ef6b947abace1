// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, matrix};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum PremiumKind {
    TripleWord,
    DoubleWord,
    TripleLetter,
    DoubleLetter,
    Plain,
}

#[derive(Clone, Copy)]
pub struct Premium {
    pub word_multiplier: i8,
    pub tile_multiplier: i8,
}

impl Premium {
    #[inline(always)]
    pub fn kind(&self) -> PremiumKind {
        match (self.word_multiplier, self.tile_multiplier) {
            (3, _) => PremiumKind::TripleWord,
            (2, _) => PremiumKind::DoubleWord,
            (_, 3) => PremiumKind::TripleLetter,
            (_, 2) => PremiumKind::DoubleLetter,
            _ => PremiumKind::Plain,
        }
    }
}

const TWS: Premium = Premium {
    word_multiplier: 3,
    tile_multiplier: 1,
};
const DWS: Premium = Premium {
    word_multiplier: 2,
    tile_multiplier: 1,
};
const TLS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 3,
};
const DLS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 2,
};
const FVS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 1,
};

pub struct BoardLayout<'a> {
    premiums: &'a [Premium],
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

impl BoardLayout<'_> {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        self.star_row
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        self.star_col
    }

    // off-board squares are plain.
    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Premium {
        if self.dim.contains(row, col) {
            self.premiums[self.dim.at_row_col(row, col)]
        } else {
            FVS
        }
    }

    pub fn squares_of(&self, kind: PremiumKind) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.dim
            .squares()
            .filter(move |&(row, col)| self.premium_at(row, col).kind() == kind)
    }
}

// The star square doubles the word, as in every standard 15x15 game.
pub static STANDARD_BOARD_LAYOUT: BoardLayout = BoardLayout {
    premiums: &[
        TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS,
        FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS,
        FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS,
        DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS,
        FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS,
        FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS,
        FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS,
        TWS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS,
        FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS,
        FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS,
        FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS,
        DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS,
        FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS,
        FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS,
        TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS,
    ],
    dim: board::DIM,
    star_row: board::STAR_ROW,
    star_col: board::STAR_COL,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_symmetric_under_rotation() {
        let layout = &STANDARD_BOARD_LAYOUT;
        for (row, col) in layout.dim().squares() {
            let kind = layout.premium_at(row, col).kind();
            assert_eq!(kind, layout.premium_at(col, 14 - row).kind());
            assert_eq!(kind, layout.premium_at(col, row).kind());
        }
    }

    #[test]
    fn premium_counts_are_standard() {
        let layout = &STANDARD_BOARD_LAYOUT;
        assert_eq!(layout.squares_of(PremiumKind::TripleWord).count(), 8);
        assert_eq!(layout.squares_of(PremiumKind::DoubleWord).count(), 17);
        assert_eq!(layout.squares_of(PremiumKind::TripleLetter).count(), 12);
        assert_eq!(layout.squares_of(PremiumKind::DoubleLetter).count(), 24);
        assert_eq!(
            layout.premium_at(layout.star_row(), layout.star_col()).kind(),
            PremiumKind::DoubleWord
        );
        assert_eq!(layout.premium_at(-1, 3).kind(), PremiumKind::Plain);
    }

    #[test]
    fn layout_shares_the_board_geometry() {
        let layout = &STANDARD_BOARD_LAYOUT;
        assert_eq!(layout.dim().rows, board::DIM.rows);
        assert_eq!(layout.dim().cols, board::DIM.cols);
        assert_eq!(
            (layout.star_row(), layout.star_col()),
            (board::STAR_ROW, board::STAR_COL)
        );
    }
}

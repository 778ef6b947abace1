// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout, cross_check, matrix};

// A premium square can be reached by some play without needing a long
// tile-hugging detour: it is hooked directly, or a lone tile or a live
// cross-check lies within reach along a row or column.

const MAX_REACH: i8 = 7;

// both squares one and two steps away in one direction.
const BLOCKING_GROUPS: [[(i8, i8); 2]; 4] = [
    [(0, -1), (0, -2)],
    [(0, 1), (0, 2)],
    [(-1, 0), (-2, 0)],
    [(1, 0), (2, 0)],
];

fn can_reach(
    board_tiles: &board::Board,
    cross_check_board: &cross_check::CrossCheckBoard,
    row: i8,
    col: i8,
    step: matrix::Step,
) -> bool {
    for i in 1..=MAX_REACH {
        let (r, c) = step.apply(row, col, i);
        if !board::DIM.contains(r, c) {
            return false;
        }
        if board_tiles.at(r, c) != 0 {
            let (r1, c1) = step.apply(r, c, 1);
            return !board_tiles.is_occupied(r1, c1);
        }
        match cross_check_board.get(r, c) {
            Some(x) if x.is_open() => {}
            Some(x) if x.is_dead() => return false,
            Some(_) => {
                let (r1, c1) = step.apply(r, c, 1);
                let (r2, c2) = step.apply(r, c, 2);
                return !(board_tiles.is_occupied(r1, c1) && board_tiles.is_occupied(r2, c2));
            }
            None => {}
        }
    }
    false
}

pub fn is_accessible(
    board_tiles: &board::Board,
    cross_checks: &cross_check::CrossChecks,
    row: i8,
    col: i8,
) -> bool {
    if !board::DIM.contains(row, col) {
        return false;
    }
    if [&cross_checks.across, &cross_checks.down]
        .iter()
        .any(|x| x.get(row, col).is_some_and(|x| x.has_valid_letters()))
    {
        return true;
    }
    if board_tiles.at(row, col) != 0 {
        return false;
    }
    if BLOCKING_GROUPS.iter().any(|group| {
        group
            .iter()
            .all(|&(dr, dc)| board_tiles.is_occupied(row + dr, col + dc))
    }) {
        return false;
    }
    if board_tiles.num_adjacent_tiles(row, col) >= 2 {
        return false;
    }
    can_reach(board_tiles, &cross_checks.across, row, col, matrix::Step::LEFT)
        || can_reach(board_tiles, &cross_checks.across, row, col, matrix::Step::RIGHT)
        || can_reach(board_tiles, &cross_checks.down, row, col, matrix::Step::UP)
        || can_reach(board_tiles, &cross_checks.down, row, col, matrix::Step::DOWN)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PremiumAccess {
    pub triple_word: u32,
    pub double_word: u32,
    pub triple_letter: u32,
    pub double_letter: u32,
}

impl PremiumAccess {
    #[inline(always)]
    pub fn get(&self, kind: board_layout::PremiumKind) -> u32 {
        match kind {
            board_layout::PremiumKind::TripleWord => self.triple_word,
            board_layout::PremiumKind::DoubleWord => self.double_word,
            board_layout::PremiumKind::TripleLetter => self.triple_letter,
            board_layout::PremiumKind::DoubleLetter => self.double_letter,
            board_layout::PremiumKind::Plain => 0,
        }
    }
}

pub fn count_accessible(
    board_tiles: &board::Board,
    cross_checks: &cross_check::CrossChecks,
    board_layout: &board_layout::BoardLayout<'_>,
) -> PremiumAccess {
    let mut ret = PremiumAccess::default();
    for (row, col) in board_layout.dim().squares() {
        let slot = match board_layout.premium_at(row, col).kind() {
            board_layout::PremiumKind::TripleWord => &mut ret.triple_word,
            board_layout::PremiumKind::DoubleWord => &mut ret.double_word,
            board_layout::PremiumKind::TripleLetter => &mut ret.triple_letter,
            board_layout::PremiumKind::DoubleLetter => &mut ret.double_letter,
            board_layout::PremiumKind::Plain => continue,
        };
        if is_accessible(board_tiles, cross_checks, row, col) {
            *slot += 1;
        }
    }
    ret
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum PairKind {
    TripleWordTripleWord,
    DoubleWordTripleLetter,
    DoubleWordDoubleWord,
    DoubleLetterTripleWord,
}

impl PairKind {
    pub const ALL: [PairKind; 4] = [
        PairKind::TripleWordTripleWord,
        PairKind::DoubleWordTripleLetter,
        PairKind::DoubleWordDoubleWord,
        PairKind::DoubleLetterTripleWord,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PairKind::TripleWordTripleWord => "TWS/TWS",
            PairKind::DoubleWordTripleLetter => "DWS/TLS",
            PairKind::DoubleWordDoubleWord => "DWS/DWS",
            PairKind::DoubleLetterTripleWord => "DLS/TWS",
        }
    }

    pub fn pairs(&self) -> &'static [PremiumPair] {
        match self {
            PairKind::TripleWordTripleWord => TRIPLE_WORD_TRIPLE_WORD,
            PairKind::DoubleWordTripleLetter => DOUBLE_WORD_TRIPLE_LETTER,
            PairKind::DoubleWordDoubleWord => DOUBLE_WORD_DOUBLE_WORD,
            PairKind::DoubleLetterTripleWord => DOUBLE_LETTER_TRIPLE_WORD,
        }
    }
}

// two premium squares on one row or one column, start before end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PremiumPair {
    pub start: (i8, i8),
    pub end: (i8, i8),
}

const fn pair(r0: i8, c0: i8, r1: i8, c1: i8) -> PremiumPair {
    PremiumPair {
        start: (r0, c0),
        end: (r1, c1),
    }
}

static TRIPLE_WORD_TRIPLE_WORD: &[PremiumPair] = &[
    pair(0, 0, 0, 7),
    pair(0, 7, 0, 14),
    pair(14, 0, 14, 7),
    pair(14, 7, 14, 14),
    pair(0, 0, 7, 0),
    pair(7, 0, 14, 0),
    pair(0, 14, 7, 14),
    pair(7, 14, 14, 14),
];

static DOUBLE_WORD_TRIPLE_LETTER: &[PremiumPair] = &[
    pair(1, 1, 1, 5),
    pair(1, 9, 1, 13),
    pair(13, 1, 13, 5),
    pair(13, 9, 13, 13),
    pair(1, 1, 5, 1),
    pair(9, 1, 13, 1),
    pair(1, 13, 5, 13),
    pair(9, 13, 13, 13),
];

static DOUBLE_WORD_DOUBLE_WORD: &[PremiumPair] = &[
    pair(4, 4, 4, 10),
    pair(10, 4, 10, 10),
    pair(4, 4, 10, 4),
    pair(4, 10, 10, 10),
];

static DOUBLE_LETTER_TRIPLE_WORD: &[PremiumPair] = &[
    pair(0, 0, 0, 3),
    pair(0, 3, 0, 7),
    pair(0, 7, 0, 11),
    pair(0, 11, 0, 14),
    pair(7, 0, 7, 3),
    pair(7, 11, 7, 14),
    pair(14, 0, 14, 3),
    pair(14, 3, 14, 7),
    pair(14, 7, 14, 11),
    pair(14, 11, 14, 14),
    pair(0, 0, 3, 0),
    pair(3, 0, 7, 0),
    pair(7, 0, 11, 0),
    pair(11, 0, 14, 0),
    pair(0, 7, 3, 7),
    pair(11, 7, 14, 7),
    pair(0, 14, 3, 14),
    pair(3, 14, 7, 14),
    pair(7, 14, 11, 14),
    pair(11, 14, 14, 14),
];

impl PremiumPair {
    #[inline(always)]
    pub fn is_down(&self) -> bool {
        self.start.1 == self.end.1
    }

    // squares strictly between the endpoints.
    fn between(&self) -> impl Iterator<Item = (i8, i8)> + use<> {
        let (r0, c0) = self.start;
        let (r1, c1) = self.end;
        let down = self.is_down();
        let (lo, hi) = if down {
            (r0.min(r1), r0.max(r1))
        } else {
            (c0.min(c1), c0.max(c1))
        };
        (lo + 1..hi).map(move |x| if down { (x, c0) } else { (r0, x) })
    }
}

// A pair is worth counting when one play could cover both ends, hooking
// through exactly one tile or one constrained square between them.
pub fn is_connected(
    board_tiles: &board::Board,
    cross_checks: &cross_check::CrossChecks,
    kind: PairKind,
    premium_pair: &PremiumPair,
) -> bool {
    let (r0, c0) = premium_pair.start;
    let (r1, c1) = premium_pair.end;
    if board_tiles.is_occupied(r0, c0) || board_tiles.is_occupied(r1, c1) {
        return false;
    }
    let cross_check_board = cross_checks.lane(premium_pair.is_down());
    let is_dead_at = |r, c| cross_check_board.get(r, c).is_some_and(|x| x.is_dead());
    if is_dead_at(r0, c0) || is_dead_at(r1, c1) {
        return false;
    }
    let mut num_tiles = 0;
    let mut num_live = 0;
    for (r, c) in premium_pair.between() {
        if board_tiles.at(r, c) != 0 {
            num_tiles += 1;
        } else if let Some(x) = cross_check_board.get(r, c) {
            if x.is_dead() {
                return false;
            }
            if x.is_live() {
                num_live += 1;
            }
        }
    }
    match (num_tiles, num_live) {
        (t, c) if t > 1 || c > 1 => false,
        (0, 0) => false,
        (1, 0) => true,
        _ => kind != PairKind::TripleWordTripleWord,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PairStatus {
    pub kind: PairKind,
    pub flags: Vec<bool>,
    pub connected: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PairAccess {
    pub statuses: Vec<PairStatus>,
}

impl PairAccess {
    pub fn connected(&self, kind: PairKind) -> u32 {
        self.statuses
            .iter()
            .find(|x| x.kind == kind)
            .map_or(0, |x| x.connected)
    }
}

pub fn check_pairs(
    board_tiles: &board::Board,
    cross_checks: &cross_check::CrossChecks,
) -> PairAccess {
    PairAccess {
        statuses: PairKind::ALL
            .iter()
            .map(|&kind| {
                let flags = kind
                    .pairs()
                    .iter()
                    .map(|premium_pair| {
                        is_connected(board_tiles, cross_checks, kind, premium_pair)
                    })
                    .collect::<Vec<_>>();
                PairStatus {
                    kind,
                    connected: flags.iter().filter(|&&x| x).count() as u32,
                    flags,
                }
            })
            .collect(),
    }
}

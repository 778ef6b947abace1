// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, cross_check, matrix};

// Where a bingo could land. surplus counts the extra room beyond the bare
// minimum, so every reported lane has surplus >= 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BingoLane {
    pub row: i8,
    pub col: i8,
    pub down: bool,
    pub surplus: i8,
}

pub fn total_surplus(lanes: &[BingoLane]) -> i32 {
    lanes.iter().map(|lane| lane.surplus as i32).sum()
}

// the square is squeezed between tiles on both sides along the lane.
#[inline(always)]
fn is_sandwiched(board_tiles: &board::Board, row: i8, col: i8, down: bool) -> bool {
    let (back, fore) = matrix::Step::along(down);
    let (r0, c0) = back.apply(row, col, 1);
    let (r1, c1) = fore.apply(row, col, 1);
    board_tiles.is_occupied(r0, c0) && board_tiles.is_occupied(r1, c1)
}

#[inline(always)]
fn has_neighbour_along(board_tiles: &board::Board, row: i8, col: i8, down: bool) -> bool {
    let (back, fore) = matrix::Step::along(down);
    let (r0, c0) = back.apply(row, col, 1);
    let (r1, c1) = fore.apply(row, col, 1);
    board_tiles.is_occupied(r0, c0) || board_tiles.is_occupied(r1, c1)
}

// empty squares from (row, col) exclusive, stopping at a tile or at any
// cross-check entry, because a lane may only pass through one constraint.
fn count_free_run(
    board_tiles: &board::Board,
    cross_checks: &cross_check::CrossCheckBoard,
    row: i8,
    col: i8,
    step: matrix::Step,
    max_reach: i8,
) -> i8 {
    let mut count = 0;
    for i in 1..=max_reach {
        let (r, c) = step.apply(row, col, i);
        match board_tiles.get(r, c) {
            Some(0) => {}
            _ => break,
        }
        if cross_checks.get(r, c).is_some() {
            break;
        }
        count += 1;
    }
    count
}

// Lanes for a bingo using the whole rack alongside existing tiles: the rack
// hooks exactly one constrained square and spreads over free squares around it.
pub fn find_rack_lanes(
    board_tiles: &board::Board,
    cross_checks: &cross_check::CrossChecks,
    rack_size: i8,
) -> Vec<BingoLane> {
    if board_tiles.is_empty() {
        return vec![BingoLane {
            row: board::STAR_ROW,
            col: board::STAR_COL,
            down: false,
            surplus: 1,
        }];
    }
    // rack_size - 1 free squares plus the hooked square.
    let max_reach = rack_size - 1;
    let min_free = rack_size - 2;
    let mut ret = Vec::new();
    for (row, col) in board::DIM.squares() {
        if board_tiles.at(row, col) != 0 {
            continue;
        }
        for down in [false, true] {
            let cross_check_board = cross_checks.lane(down);
            match cross_check_board.get(row, col) {
                Some(x) if x.is_live() => {}
                _ => continue,
            }
            if is_sandwiched(board_tiles, row, col, down) {
                continue;
            }
            let (back, fore) = matrix::Step::along(down);
            let free = count_free_run(board_tiles, cross_check_board, row, col, back, max_reach)
                + count_free_run(board_tiles, cross_check_board, row, col, fore, max_reach);
            let surplus = (free - min_free).max(0);
            if surplus > 0 {
                ret.push(BingoLane {
                    row,
                    col,
                    down,
                    surplus,
                });
            }
        }
    }
    ret
}

// (row, col) can take a tile of a play extending outward: it is empty, not a
// dead square, and the square just beyond it is not a tile.
#[inline(always)]
fn is_valid_extension(
    board_tiles: &board::Board,
    cross_check_board: &cross_check::CrossCheckBoard,
    row: i8,
    col: i8,
    step: matrix::Step,
) -> bool {
    if board_tiles.get(row, col) != Some(0) {
        return false;
    }
    if let Some(x) = cross_check_board.get(row, col) {
        if !x.has_valid_letters() {
            return false;
        }
    }
    let (r, c) = step.apply(row, col, 1);
    !board_tiles.is_occupied(r, c)
}

fn count_extension(
    board_tiles: &board::Board,
    cross_check_board: &cross_check::CrossCheckBoard,
    row: i8,
    col: i8,
    step: matrix::Step,
    max_reach: i8,
) -> i8 {
    let mut count = 0;
    for i in 1..=max_reach {
        let (r, c) = step.apply(row, col, i);
        if !is_valid_extension(board_tiles, cross_check_board, r, c, step) {
            break;
        }
        count += 1;
    }
    count
}

// Lanes for a bingo one longer than the rack, played through a lone board
// tile: anchored on tiles without a neighbour along the lane.
pub fn find_through_lanes(
    board_tiles: &board::Board,
    cross_checks: &cross_check::CrossChecks,
    rack_size: i8,
) -> Vec<BingoLane> {
    let max_reach = rack_size;
    let min_free = rack_size - 1;
    let mut ret = Vec::new();
    for (row, col) in board::DIM.squares() {
        if board_tiles.at(row, col) == 0 {
            continue;
        }
        for down in [false, true] {
            if has_neighbour_along(board_tiles, row, col, down) {
                continue;
            }
            let cross_check_board = cross_checks.lane(down);
            let (back, fore) = matrix::Step::along(down);
            let free = count_extension(board_tiles, cross_check_board, row, col, back, max_reach)
                + count_extension(board_tiles, cross_check_board, row, col, fore, max_reach);
            let surplus = (free - min_free).max(0);
            if surplus > 0 {
                ret.push(BingoLane {
                    row,
                    col,
                    down,
                    surplus,
                });
            }
        }
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ENGLISH_ALPHABET;
    use crate::{parse, word_index};

    fn analyze(s: &str, words: &[&str]) -> (board::Board, cross_check::CrossChecks) {
        let mut index = word_index::WordIndex::new();
        for word in words {
            index.insert(word).unwrap();
        }
        let b = parse::parse_board(s);
        let xc = cross_check::CrossChecks::new(&b, &index, &ENGLISH_ALPHABET);
        (b, xc)
    }

    fn row_board(row: usize, row_data: &str) -> String {
        (0..15)
            .map(|r| if r == row { row_data } else { "15" })
            .collect::<Vec<_>>()
            .join("/")
    }

    #[test]
    fn empty_board_has_one_rack_lane_and_no_through_lane() {
        let (b, xc) = analyze(&row_board(0, "15"), &["CAT"]);
        assert_eq!(
            find_rack_lanes(&b, &xc, 7),
            [BingoLane {
                row: 7,
                col: 7,
                down: false,
                surplus: 1
            }]
        );
        assert!(find_through_lanes(&b, &xc, 7).is_empty());
    }

    #[test]
    fn lone_tile_in_the_middle_opens_through_lanes_both_ways() {
        let (b, xc) = analyze(&row_board(7, "7A7"), &["AB", "BA"]);
        let lanes = find_through_lanes(&b, &xc, 7);
        assert_eq!(lanes.len(), 2);
        for lane in &lanes {
            assert_eq!((lane.row, lane.col), (7, 7));
            // 7 squares each side, 14 - 6.
            assert_eq!(lane.surplus, 8);
        }
        assert_eq!(total_surplus(&lanes), 16);
    }

    #[test]
    fn dead_squares_end_through_lanes() {
        // Z? is not a word, so (7, 4) takes nothing in an across play.
        let s = "15/15/15/15/15/15/4Z10/7A7/15/15/15/15/15/15/15";
        let (b, xc) = analyze(s, &["AB", "BA"]);
        assert!(xc.across.get(7, 4).unwrap().is_dead());
        let lanes = find_through_lanes(&b, &xc, 7);
        // left: cols 6 and 5, right: cols 8..=14. 9 - 6 = 3.
        assert!(lanes.contains(&BingoLane {
            row: 7,
            col: 7,
            down: false,
            surplus: 3
        }));
        assert!(lanes.contains(&BingoLane {
            row: 7,
            col: 7,
            down: true,
            surplus: 8
        }));
    }

    #[test]
    fn through_lanes_need_room_past_the_last_square() {
        // B two squares right of A: col 8 is followed by a tile.
        let (b, xc) = analyze(&row_board(7, "7A1B5"), &["AB", "BA"]);
        let lanes = find_through_lanes(&b, &xc, 7);
        let across_a = lanes
            .iter()
            .find(|lane| (lane.row, lane.col, lane.down) == (7, 7, false))
            .unwrap();
        // left 7, right 0.
        assert_eq!(across_a.surplus, 1);
        // B reaches cols 10..=14 only, 5 - 6.
        assert!(
            !lanes
                .iter()
                .any(|lane| (lane.row, lane.col, lane.down) == (7, 9, false))
        );
    }

    #[test]
    fn lone_tile_gives_four_rack_lanes() {
        let (b, xc) = analyze(&row_board(7, "7A7"), &["TA", "AT"]);
        let lanes = find_rack_lanes(&b, &xc, 7);
        // above and below A for across plays, beside A for down plays,
        // 6 free squares each side, 12 - 5.
        assert_eq!(
            lanes,
            [
                BingoLane {
                    row: 6,
                    col: 7,
                    down: false,
                    surplus: 7
                },
                BingoLane {
                    row: 7,
                    col: 6,
                    down: true,
                    surplus: 7
                },
                BingoLane {
                    row: 7,
                    col: 8,
                    down: true,
                    surplus: 7
                },
                BingoLane {
                    row: 8,
                    col: 7,
                    down: false,
                    surplus: 7
                },
            ]
        );
        assert_eq!(total_surplus(&lanes), 28);
    }

    #[test]
    fn rack_lanes_stop_at_neighbouring_hooks() {
        let (b, xc) = analyze(&row_board(7, "6CAT6"), &["CAT", "TA", "AT"]);
        let lanes = find_rack_lanes(&b, &xc, 7);
        // (6, 7) and (8, 7) are walled in by the hooks beside them. (6, 8)
        // and (8, 8) only reach right, cols 9..=14, 6 - 5.
        assert_eq!(
            lanes,
            [
                BingoLane {
                    row: 6,
                    col: 8,
                    down: false,
                    surplus: 1
                },
                BingoLane {
                    row: 8,
                    col: 8,
                    down: false,
                    surplus: 1
                },
            ]
        );
    }

    #[test]
    fn rack_lanes_stop_at_open_squares() {
        // Y at (6, 10) leaves (6, 9) open for across plays.
        let s = "15/15/15/15/15/15/10Y4/7X7/15/15/15/15/15/15/15";
        let (b, xc) = analyze(s, &["AX", "OX"]);
        assert!(xc.across.get(6, 7).unwrap().is_live());
        assert!(xc.across.get(6, 9).unwrap().is_open());
        let lanes = find_rack_lanes(&b, &xc, 7);
        // left: cols 1..=6, right: col 8 only. 7 - 5.
        assert!(lanes.contains(&BingoLane {
            row: 6,
            col: 7,
            down: false,
            surplus: 2
        }));
        assert!(
            !lanes
                .iter()
                .any(|lane| (lane.row, lane.col, lane.down) == (6, 7, true))
        );
    }

    #[test]
    fn sandwiched_hooks_are_skipped() {
        let s = "15/15/15/15/15/15/6B8/5A1A7/15/15/15/15/15/15/15";
        let (b, xc) = analyze(s, &["BA", "AXA"]);
        assert!(xc.across.get(7, 6).unwrap().is_live());
        let lanes = find_rack_lanes(&b, &xc, 7);
        assert!(
            !lanes
                .iter()
                .any(|lane| (lane.row, lane.col, lane.down) == (7, 6, false))
        );
    }
}

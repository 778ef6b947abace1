// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, error};

// Run-length board notation: rows separated by '/', a digit run counts empty
// squares, a letter is a tile (lowercase for a blank). Anything else is
// skipped, and squares beyond the 15x15 grid are dropped.
pub fn parse_board(s: &str) -> board::Board {
    let mut ret = board::Board::new();
    for (row, row_data) in s.split('/').enumerate() {
        let row = row.min(i8::MAX as usize) as i8;
        let mut col = 0usize;
        let sb = row_data.as_bytes();
        let mut ix = 0;
        while ix < sb.len() {
            let c = sb[ix];
            if c.is_ascii_digit() {
                let mut num_empty = 0usize;
                while ix < sb.len() && sb[ix].is_ascii_digit() {
                    num_empty = num_empty.saturating_mul(10).saturating_add((sb[ix] - b'0') as usize);
                    ix += 1;
                }
                col = col.saturating_add(num_empty);
            } else {
                if let Some(tile) = alphabet::board_tile_of(c) {
                    if col < board::DIM.cols as usize {
                        ret.put_if_on_board(row, col as i8, tile);
                    }
                    col = col.saturating_add(1);
                }
                ix += 1;
            }
        }
    }
    ret
}

// Optional strict layer: exactly 15 rows of exactly 15 squares, nothing else.
pub fn parse_board_strict(s: &str) -> error::Returns<board::Board> {
    let rows = s.split('/').collect::<Vec<_>>();
    if rows.len() != board::DIM.rows as usize {
        return_error!(format!(
            "board: need {} rows, found {} rows",
            board::DIM.rows,
            rows.len()
        ));
    }
    for (row_num, row_data) in rows.iter().enumerate() {
        let sb = row_data.as_bytes();
        let mut width = 0usize;
        let mut ix = 0;
        while ix < sb.len() {
            let c = sb[ix];
            if c.is_ascii_digit() {
                let start = ix;
                while ix < sb.len() && sb[ix].is_ascii_digit() {
                    ix += 1;
                }
                match row_data[start..ix].parse::<usize>() {
                    Ok(n) if n > 0 => width = width.saturating_add(n),
                    _ => {
                        return_error!(format!(
                            "board row {} (0-based): bad empty count {:?}",
                            row_num,
                            &row_data[start..ix]
                        ));
                    }
                }
            } else if alphabet::board_tile_of(c).is_some() {
                width = width.saturating_add(1);
                ix += 1;
            } else {
                return_error!(format!(
                    "board row {} (0-based): unexpected {:?} at offset {}",
                    row_num,
                    row_data[ix..].chars().next().unwrap_or('?'),
                    ix
                ));
            }
        }
        if width != board::DIM.cols as usize {
            return_error!(format!(
                "board row {} (0-based): need {} cols, found {} cols",
                row_num,
                board::DIM.cols,
                width
            ));
        }
    }
    Ok(parse_board(s))
}

// Canonical notation, the inverse of parse_board.
pub fn to_rle(board_tiles: &board::Board) -> String {
    let mut ret = String::new();
    for row in 0..board::DIM.rows {
        if row > 0 {
            ret.push('/');
        }
        let mut num_empty = 0;
        for col in 0..board::DIM.cols {
            let b = board_tiles.at(row, col);
            if b == 0 {
                num_empty += 1;
                continue;
            }
            if num_empty > 0 {
                ret.push_str(&num_empty.to_string());
                num_empty = 0;
            }
            let c = alphabet::letter_of(b);
            ret.push(if b & 0x80 != 0 {
                c.to_ascii_lowercase()
            } else {
                c
            });
        }
        if num_empty > 0 {
            ret.push_str(&num_empty.to_string());
        }
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: &str = "15/15/15/15/15/15/15/15/15/15/15/15/15/15/15";

    #[test]
    fn parses_tiles_blanks_and_runs() {
        let b = parse_board("15/15/15/15/15/15/15/4QuIZ7/15/15/15/15/15/15/15");
        assert_eq!(b.num_tiles(), 4);
        assert_eq!(b.at(7, 4), alphabet::board_tile_of(b'Q').unwrap());
        assert_eq!(b.at(7, 5), 0x80 | 21);
        assert_eq!(b.at(7, 7), 26);
        assert_eq!(b.at(7, 8), 0);
    }

    #[test]
    fn multi_digit_counts_concatenate() {
        let b = parse_board("12ABC");
        assert_eq!(b.at(0, 12), 1);
        assert_eq!(b.at(0, 14), 3);
        assert_eq!(b.num_tiles(), 3);
    }

    #[test]
    fn lenient_parser_skips_junk_and_overflow() {
        let b = parse_board("A-B.C/14DE/99Z");
        assert_eq!(b.at(0, 0), 1);
        assert_eq!(b.at(0, 1), 2);
        assert_eq!(b.at(0, 2), 3);
        assert_eq!(b.at(1, 14), 4);
        // E and Z fall off the right edge.
        assert_eq!(b.num_tiles(), 4);
        let many_rows = format!("{}/{}", EMPTY, "A");
        assert!(parse_board(&many_rows).is_empty());
    }

    #[test]
    fn huge_counts_push_tiles_off_the_row() {
        assert!(parse_board("18446744073709551615A").is_empty());
        assert!(parse_board("18446744073709551615AB").is_empty());
        let b = parse_board("99999999999999999999999A/15/B");
        assert_eq!(b.num_tiles(), 1);
        assert_eq!(b.at(2, 0), 2);
        let huge_row = EMPTY.replacen("15", "18446744073709551615A", 1);
        assert!(parse_board_strict(&huge_row).is_err());
    }

    #[test]
    fn empty_notation_is_empty_board() {
        assert!(parse_board(EMPTY).is_empty());
        assert!(parse_board("").is_empty());
        assert_eq!(to_rle(&board::Board::new()), EMPTY);
    }

    #[test]
    fn canonical_notation_round_trips() {
        let s = "15/15/15/15/15/15/3FArM8/7O7/7X7/15/15/15/15/15/A13b";
        let b = parse_board(s);
        assert_eq!(to_rle(&b), s);
        assert!(parse_board_strict(s).unwrap() == b);
    }

    #[test]
    fn strict_parser_rejects_bad_shapes() {
        assert!(parse_board_strict(EMPTY).is_ok());
        assert!(parse_board_strict("15/15").is_err());
        let short_row = EMPTY.replacen("15", "14", 1);
        assert!(parse_board_strict(&short_row).is_err());
        let long_row = EMPTY.replacen("15", "14AB", 1);
        assert!(parse_board_strict(&long_row).is_err());
        let junk = EMPTY.replacen("15", "7.8", 1);
        assert!(parse_board_strict(&junk).is_err());
    }
}

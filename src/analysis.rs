// Copyright (C) 2020-2026 Andy Kurnia.

use super::{bingo, board, cross_check, game_config, parse, premium, tally, word_index};

// Everything derived from one board snapshot.
pub struct Analysis {
    pub board: board::Board,
    pub cross_checks: cross_check::CrossChecks,
    pub rack_lanes: Vec<bingo::BingoLane>,
    pub through_lanes: Vec<bingo::BingoLane>,
    pub premium_access: premium::PremiumAccess,
    pub pair_access: premium::PairAccess,
    pub quadrants: tally::Quadrants,
}

impl Analysis {
    pub fn new(
        board_tiles: board::Board,
        word_index: &word_index::WordIndex,
        game_config: &game_config::GameConfig<'_>,
    ) -> Self {
        let cross_checks =
            cross_check::CrossChecks::new(&board_tiles, word_index, game_config.alphabet());
        let rack_size = game_config.rack_size();
        let rack_lanes = bingo::find_rack_lanes(&board_tiles, &cross_checks, rack_size);
        let through_lanes = bingo::find_through_lanes(&board_tiles, &cross_checks, rack_size);
        let premium_access =
            premium::count_accessible(&board_tiles, &cross_checks, game_config.board_layout());
        let pair_access = premium::check_pairs(&board_tiles, &cross_checks);
        let quadrants = tally::count_quadrants(&board_tiles);
        Self {
            board: board_tiles,
            cross_checks,
            rack_lanes,
            through_lanes,
            premium_access,
            pair_access,
            quadrants,
        }
    }

    #[inline(always)]
    pub fn rack_lane_total(&self) -> i32 {
        bingo::total_surplus(&self.rack_lanes)
    }

    #[inline(always)]
    pub fn through_lane_total(&self) -> i32 {
        bingo::total_surplus(&self.through_lanes)
    }

    pub fn to_json(&self) -> serde_json::Value {
        let cross_check_json = |cross_check_board: &cross_check::CrossCheckBoard| {
            cross_check_board
                .iter()
                .map(|(row, col, x)| {
                    serde_json::json!({
                        "row": row,
                        "col": col,
                        "open": x.is_open(),
                        "letters": x.valid_letters().collect::<String>(),
                        "score": x.score() })
                })
                .collect::<Vec<_>>()
        };
        let pairs = self
            .pair_access
            .statuses
            .iter()
            .map(|status| {
                serde_json::json!({
                    "kind": status.kind.label(),
                    "connected": status.connected,
                    "flags": status.flags })
            })
            .collect::<Vec<_>>();
        serde_json::json!({
            "board": parse::to_rle(&self.board),
            "across": cross_check_json(&self.cross_checks.across),
            "down": cross_check_json(&self.cross_checks.down),
            "seven_letter_lanes": self.rack_lanes,
            "eight_letter_lanes": self.through_lanes,
            "premium": self.premium_access,
            "pairs": pairs,
            "quadrants": self.quadrants })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_carries_every_section() {
        let mut index = word_index::WordIndex::new();
        index.insert("AB").unwrap();
        index.insert("BA").unwrap();
        let game_config = game_config::make_english_game_config();
        let b = parse::parse_board("15/15/15/15/15/15/15/7A7/15/15/15/15/15/15/15");
        let analysis = Analysis::new(b, &index, &game_config);
        let v = analysis.to_json();
        assert_eq!(v["board"], "15/15/15/15/15/15/15/7A7/15/15/15/15/15/15/15");
        assert_eq!(v["across"].as_array().unwrap().len(), 4);
        assert_eq!(v["down"].as_array().unwrap().len(), 4);
        assert_eq!(v["eight_letter_lanes"].as_array().unwrap().len(), 2);
        assert_eq!(v["eight_letter_lanes"][0]["surplus"], 8);
        assert_eq!(v["pairs"].as_array().unwrap().len(), 4);
        assert_eq!(v["pairs"][0]["kind"], "TWS/TWS");
        assert_eq!(analysis.through_lane_total(), 16);
        // B above or below A for across plays, beside it for down plays.
        assert_eq!(analysis.rack_lanes.len(), 4);
        assert_eq!(analysis.rack_lane_total(), 28);
    }
}

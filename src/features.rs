// Copyright (C) 2020-2026 Andy Kurnia.

use super::{analysis, error, game_config, parse, premium, tally, word_index};

// One dataset line:
//   board leave opp/player x,winProb,expDiff
// e.g. "15/.../15 AEINRST/ 0/0 0,0.5,0.0"
pub struct Sample<'a> {
    pub board_rle: &'a str,
    pub leave: tally::TileCounts,
    pub opp_score: i32,
    pub player_score: i32,
    pub win_prob: f64,
    pub exp_point_diff: f64,
}

fn parse_field<T: std::str::FromStr>(field: &str, name: &str) -> error::Returns<T> {
    match field.trim().parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(error::new(format!("{}: cannot parse {:?}", name, field)).into()),
    }
}

pub fn parse_line(line: &str) -> error::Returns<Sample<'_>> {
    let mut parts = line.split_whitespace();
    let Some(board_rle) = parts.next() else {
        return_error!("missing board".into());
    };
    let Some(leave_str) = parts.next() else {
        return_error!("missing leave".into());
    };
    let Some(scores_str) = parts.next() else {
        return_error!("missing scores".into());
    };
    let Some(outcome_str) = parts.next() else {
        return_error!("missing outcome".into());
    };
    let leave = tally::leave_counts(leave_str)?;
    let Some((opp_str, player_str)) = scores_str.split_once('/') else {
        return_error!(format!("scores: need opp/player, found {:?}", scores_str));
    };
    let opp_score = parse_field::<i32>(opp_str, "opponent score")?;
    let player_score = parse_field::<i32>(player_str, "player score")?;
    let outcome = outcome_str.split(',').collect::<Vec<_>>();
    if outcome.len() != 3 {
        return_error!(format!(
            "outcome: need 3 comma-separated values, found {:?}",
            outcome_str
        ));
    }
    // the first value is not used.
    parse_field::<f64>(outcome[0], "outcome")?;
    let win_prob = parse_field::<f64>(outcome[1], "winProb")?;
    let exp_point_diff = parse_field::<f64>(outcome[2], "expDiff")?;
    Ok(Sample {
        board_rle,
        leave,
        opp_score,
        player_score,
        win_prob,
        exp_point_diff,
    })
}

pub struct Features {
    pub score_diff: i32,
    pub total_unseen_tiles: i32,
    pub leave: tally::TileCounts,
    pub unseen: tally::TileCounts,
    pub win_prob: f64,
    pub exp_point_diff: f64,
    pub rack_lane_total: i32,
    pub through_lane_total: i32,
    pub accessible_triple_word: u32,
    pub accessible_double_word: u32,
    pub pair_connections: [u32; 4],
    pub quadrants: tally::Quadrants,
}

impl Features {
    pub fn new(
        sample: &Sample<'_>,
        analysis: &analysis::Analysis,
        game_config: &game_config::GameConfig<'_>,
    ) -> Self {
        let unseen = tally::unseen_counts(game_config.alphabet(), &analysis.board, &sample.leave);
        let mut pair_connections = [0; 4];
        for (slot, &kind) in pair_connections.iter_mut().zip(premium::PairKind::ALL.iter()) {
            *slot = analysis.pair_access.connected(kind);
        }
        Self {
            score_diff: sample.player_score - sample.opp_score,
            total_unseen_tiles: tally::total(&unseen),
            leave: sample.leave,
            unseen,
            win_prob: sample.win_prob,
            exp_point_diff: sample.exp_point_diff,
            rack_lane_total: analysis.rack_lane_total(),
            through_lane_total: analysis.through_lane_total(),
            accessible_triple_word: analysis.premium_access.triple_word,
            accessible_double_word: analysis.premium_access.double_word,
            pair_connections,
            quadrants: analysis.quadrants,
        }
    }

    // parse, analyze and flatten one line.
    pub fn extract(
        line: &str,
        word_index: &word_index::WordIndex,
        game_config: &game_config::GameConfig<'_>,
    ) -> error::Returns<Self> {
        let sample = parse_line(line)?;
        let board_tiles = parse::parse_board(sample.board_rle);
        let analysis = analysis::Analysis::new(board_tiles, word_index, game_config);
        Ok(Self::new(&sample, &analysis, game_config))
    }

    pub fn header() -> Vec<String> {
        let mut ret = vec!["score_diff".to_string(), "total_unseen_tiles".to_string()];
        for slot in 0..tally::NUM_SLOTS {
            ret.push(format!("leave_{}", tally::slot_label(slot)));
        }
        for slot in 0..tally::NUM_SLOTS {
            ret.push(format!("unseen_{}", tally::slot_label(slot)));
        }
        for name in [
            "winProb",
            "expPointDiff",
            "7_letter_bingos",
            "8_letter_bingos",
            "accessible_TWS",
            "accessible_DWS",
        ] {
            ret.push(name.to_string());
        }
        for kind in premium::PairKind::ALL {
            ret.push(kind.label().to_string());
        }
        for name in ["upper_left", "upper_right", "lower_left", "lower_right"] {
            ret.push(name.to_string());
        }
        ret
    }

    // same order as header().
    pub fn to_record(&self) -> Vec<String> {
        let mut ret = Vec::with_capacity(2 + 2 * tally::NUM_SLOTS + 14);
        ret.push(self.score_diff.to_string());
        ret.push(self.total_unseen_tiles.to_string());
        ret.extend(self.leave.iter().map(|x| x.to_string()));
        ret.extend(self.unseen.iter().map(|x| x.to_string()));
        ret.push(self.win_prob.to_string());
        ret.push(self.exp_point_diff.to_string());
        ret.push(self.rack_lane_total.to_string());
        ret.push(self.through_lane_total.to_string());
        ret.push(self.accessible_triple_word.to_string());
        ret.push(self.accessible_double_word.to_string());
        ret.extend(self.pair_connections.iter().map(|x| x.to_string()));
        ret.push(self.quadrants.upper_left.to_string());
        ret.push(self.quadrants.upper_right.to_string());
        ret.push(self.quadrants.lower_left.to_string());
        ret.push(self.quadrants.lower_right.to_string());
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str =
        "15/15/15/15/15/15/15/5CAt6/15/15/15/15/15/15/15 EIR/S? 120/135 0,0.625,12.5";

    #[test]
    fn parses_a_dataset_line() {
        let sample = parse_line(LINE).unwrap();
        assert_eq!(sample.opp_score, 120);
        assert_eq!(sample.player_score, 135);
        assert_eq!(sample.win_prob, 0.625);
        assert_eq!(sample.exp_point_diff, 12.5);
        assert_eq!(tally::total(&sample.leave), 5);
    }

    #[test]
    fn bad_lines_name_the_field() {
        let err = parse_line("15 A").err().unwrap().to_string();
        assert!(err.contains("scores"), "{}", err);
        let err = parse_line("15 A 1/x 0,0,0").err().unwrap().to_string();
        assert!(err.contains("player score"), "{}", err);
        let err = parse_line("15 A 1/2 0,0").err().unwrap().to_string();
        assert!(err.contains("outcome"), "{}", err);
        let err = parse_line("15 A 1/2 0,y,0").err().unwrap().to_string();
        assert!(err.contains("winProb"), "{}", err);
        assert!(parse_line("").is_err());
    }

    #[test]
    fn features_line_up_with_the_header() {
        let mut index = word_index::WordIndex::new();
        for word in ["CAT", "CATS", "AT", "TA"] {
            index.insert(word).unwrap();
        }
        let game_config = game_config::make_english_game_config();
        let features = Features::extract(LINE, &index, &game_config).unwrap();
        assert_eq!(features.score_diff, 15);
        // 3 on the board, 5 on the rack.
        assert_eq!(features.total_unseen_tiles, 92);
        // blank t on the board, one more blank on the rack.
        assert_eq!(features.unseen[tally::BLANK_SLOT], 0);
        assert_eq!(features.unseen[19], 6);
        let header = Features::header();
        let record = features.to_record();
        assert_eq!(header.len(), record.len());
        assert_eq!(header[0], "score_diff");
        assert_eq!(header[2], "leave_A");
        assert_eq!(header[28], "leave_?");
        assert_eq!(header[29], "unseen_A");
        assert_eq!(header[56], "winProb");
        assert_eq!(record[56], "0.625");
        assert_eq!(header.last().unwrap(), "lower_right");
    }
}

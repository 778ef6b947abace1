// Copyright (C) 2020-2026 Andy Kurnia.

// https://github.com/kkawakam/rustyline/blob/master/examples/example.rs

use super::error;

pub const COMMANDS: &[&str] = &[
    "board", "exit", "help", "json", "lanes", "lex", "premium", "show", "source", "words", "xc",
];

#[derive(
    rustyline_derive::Helper,
    rustyline_derive::Highlighter,
    rustyline_derive::Hinter,
    rustyline_derive::Validator,
)]
pub struct MyHelper {
    completer: rustyline::completion::FilenameCompleter,
    #[rustyline(Highlighter)]
    highlighter: rustyline::highlight::MatchingBracketHighlighter,
    #[rustyline(Validator)]
    validator: rustyline::validate::MatchingBracketValidator,
    #[rustyline(Hinter)]
    hinter: rustyline::hint::HistoryHinter,
}

// command names first, file names after that.
fn complete_command(head: &str) -> Vec<rustyline::completion::Pair> {
    COMMANDS
        .iter()
        .filter(|cmd| cmd.starts_with(head))
        .map(|cmd| rustyline::completion::Pair {
            display: cmd.to_string(),
            replacement: cmd.to_string(),
        })
        .collect()
}

impl rustyline::completion::Completer for MyHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<rustyline::completion::Pair>)> {
        let head = &line[..pos];
        if !head.contains(char::is_whitespace) {
            return Ok((0, complete_command(head)));
        }
        self.completer.complete(line, pos, ctx)
    }
}

pub type MyEditor = rustyline::Editor<MyHelper, rustyline::history::DefaultHistory>;

pub fn new_rl_editor() -> error::Returns<MyEditor> {
    let mut rl = match MyEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            return_error!(format!("cannot start line editor: {}", err));
        }
    };
    rl.set_helper(Some(MyHelper {
        completer: rustyline::completion::FilenameCompleter::new(),
        highlighter: rustyline::highlight::MatchingBracketHighlighter::new(),
        validator: rustyline::validate::MatchingBracketValidator::new(),
        hinter: rustyline::hint::HistoryHinter::new(),
    }));
    Ok(rl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_command_prefixes() {
        let found = complete_command("l")
            .into_iter()
            .map(|x| x.replacement)
            .collect::<Vec<_>>();
        assert_eq!(found, ["lanes", "lex"]);
        assert_eq!(complete_command("").len(), COMMANDS.len());
        assert!(complete_command("q").is_empty());
    }
}

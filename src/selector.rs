/// Interactive problem selection: prompt, validate, repeat until a valid
/// index or the exit token.
use std::io::{BufRead, Write};

use thiserror::Error;

use crate::i18n;

pub const EXIT_TOKEN: &str = "q";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Exit,
    /// 1-based index into the catalog.
    Index(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotANumber,
    OutOfRange { max: usize },
}

impl Rejection {
    pub fn message(&self) -> String {
        match self {
            Rejection::NotANumber => i18n::t("not_a_number").to_string(),
            Rejection::OutOfRange { max } => i18n::out_of_range(*max),
        }
    }
}

#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("standard input closed before a selection was made")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Validate one line of input against a catalog of `count` entries.
pub fn parse_selection(input: &str, count: usize) -> Result<Selection, Rejection> {
    let input = input.trim();

    if input.to_lowercase() == EXIT_TOKEN {
        return Ok(Selection::Exit);
    }

    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(Rejection::NotANumber);
    }

    // All digits: a parse failure can only be overflow.
    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(Selection::Index(n)),
        _ => Err(Rejection::OutOfRange { max: count }),
    }
}

/// Keep asking until the user picks a valid entry or quits.
pub fn prompt_selection<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    count: usize,
) -> Result<Selection, SelectorError> {
    loop {
        writeln!(output, "\n{}", i18n::t("select_instruction"))?;
        write!(output, "[1-{count}]> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(SelectorError::InputClosed);
        }

        match parse_selection(&line, count) {
            Ok(selection) => return Ok(selection),
            Err(rejection) => {
                tracing::debug!("rejected selection {:?}: {rejection:?}", line.trim());
                writeln!(output, "{}", rejection.message())?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, count: usize) -> (Result<Selection, SelectorError>, String) {
        let mut out = Vec::new();
        let result = prompt_selection(Cursor::new(input.as_bytes()), &mut out, count);
        (result, String::from_utf8(out).unwrap())
    }

    // ── parse_selection ───────────────────────────────────────────

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(parse_selection(" 2 ", 3), Ok(Selection::Index(2)));
        assert_eq!(parse_selection("1\n", 1), Ok(Selection::Index(1)));
    }

    #[test]
    fn exit_token_is_case_insensitive() {
        assert_eq!(parse_selection("q", 3), Ok(Selection::Exit));
        assert_eq!(parse_selection("Q", 3), Ok(Selection::Exit));
        assert_eq!(parse_selection("  q\n", 0), Ok(Selection::Exit));
    }

    #[test]
    fn longer_words_do_not_exit() {
        assert_eq!(parse_selection("quit", 3), Err(Rejection::NotANumber));
        assert_eq!(parse_selection("qq", 3), Err(Rejection::NotANumber));
    }

    #[test]
    fn non_digits_are_rejected() {
        for input in ["", "   ", "abc", "-1", "+1", "1.5", "1 2", "２"] {
            assert_eq!(parse_selection(input, 3), Err(Rejection::NotANumber), "{input:?}");
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(parse_selection("1", 3), Ok(Selection::Index(1)));
        assert_eq!(parse_selection("3", 3), Ok(Selection::Index(3)));
        assert_eq!(parse_selection("0", 3), Err(Rejection::OutOfRange { max: 3 }));
        assert_eq!(parse_selection("4", 3), Err(Rejection::OutOfRange { max: 3 }));
    }

    #[test]
    fn leading_zeros_parse() {
        assert_eq!(parse_selection("002", 3), Ok(Selection::Index(2)));
    }

    #[test]
    fn huge_number_is_out_of_range() {
        let huge = "9".repeat(40);
        assert_eq!(parse_selection(&huge, 3), Err(Rejection::OutOfRange { max: 3 }));
    }

    #[test]
    fn empty_catalog_admits_no_index() {
        assert_eq!(parse_selection("1", 0), Err(Rejection::OutOfRange { max: 0 }));
        assert_eq!(parse_selection("0", 0), Err(Rejection::OutOfRange { max: 0 }));
    }

    // ── prompt_selection ──────────────────────────────────────────

    #[test]
    fn prompt_shows_range() {
        let (result, out) = run("1\n", 2);
        assert_eq!(result.unwrap(), Selection::Index(1));
        assert!(out.contains("[1-2]> "));
    }

    #[test]
    fn reprompts_until_valid() {
        let (result, out) = run("abc\n9\n 2 \n", 2);
        assert_eq!(result.unwrap(), Selection::Index(2));
        assert_eq!(out.matches("[1-2]> ").count(), 3);
    }

    #[test]
    fn exit_after_bad_input() {
        let (result, out) = run("quit\nQ\n", 2);
        assert_eq!(result.unwrap(), Selection::Exit);
        assert_eq!(out.matches("[1-2]> ").count(), 2);
    }

    #[test]
    fn empty_catalog_only_exits() {
        let (result, out) = run("1\n0\nq\n", 0);
        assert_eq!(result.unwrap(), Selection::Exit);
        assert!(out.contains("[1-0]> "));
        assert_eq!(out.matches("[1-0]> ").count(), 3);
    }

    #[test]
    fn end_of_input_is_an_error() {
        let (result, _) = run("abc\n", 2);
        assert!(matches!(result, Err(SelectorError::InputClosed)));
    }

    #[test]
    fn last_line_without_newline_still_counts() {
        let (result, _) = run("2", 2);
        assert_eq!(result.unwrap(), Selection::Index(2));
    }
}

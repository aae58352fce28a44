use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Characters that separate tokens in the default splitting mode. None of them are ever part of a
/// token.
pub const DELIMITERS: [char; 12] = [' ', '\t', '\n', '\r', ';', ',', '(', ')', '{', '}', '[', ']'];

const OPERATOR_AWARE_PATTERN: &str = r"==|!=|<=|>=|[a-zA-Z_][a-zA-Z0-9_]*|[0-9]+|[<>!=]|\S+";

static OPERATOR_AWARE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(OPERATOR_AWARE_PATTERN).expect("operator aware pattern is a valid regex")
});

/// How the input text is cut into tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Split on whitespace and `; , ( ) { } [ ]`
    #[default]
    Delimited,
    /// Pull out operators, words and numbers even when they are glued together, `x>=10` gives
    /// `x`, `>=`, `10`
    Operators,
}

#[derive(Debug)]
pub enum SplitModeError {
    UnknownMode(String),
}

impl fmt::Display for SplitModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitModeError::UnknownMode(mode) => write!(
                f,
                "Error: Unknown split mode {}! Expected one of delimited | operators",
                mode
            ),
        }
    }
}

impl std::error::Error for SplitModeError {}

impl FromStr for SplitMode {
    type Err = SplitModeError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        if mode.eq_ignore_ascii_case("delimited") {
            Ok(SplitMode::Delimited)
        } else if mode.eq_ignore_ascii_case("operators") {
            Ok(SplitMode::Operators)
        } else {
            Err(SplitModeError::UnknownMode(mode.to_string()))
        }
    }
}

/// Raw whitespace tally of the input, taken before tokenization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WhitespaceCount {
    pub spaces: usize,
    pub tabs: usize,
}

/// Count the space and tab characters of the whole input text
pub fn count_whitespace(text: &str) -> WhitespaceCount {
    text.chars()
        .fold(WhitespaceCount::default(), |mut count, ch| {
            match ch {
                ' ' => count.spaces += 1,
                '\t' => count.tabs += 1,
                _ => {}
            }
            count
        })
}

/// Cut the text into tokens in input order. Tokens are never empty.
pub fn tokenize(text: &str, mode: SplitMode) -> Vec<&str> {
    match mode {
        SplitMode::Delimited => text
            .split(|ch: char| DELIMITERS.contains(&ch))
            .filter(|piece| !piece.is_empty())
            .collect(),
        SplitMode::Operators => OPERATOR_AWARE_REGEX
            .find_iter(text)
            .map(|found| found.as_str())
            .collect(),
    }
}

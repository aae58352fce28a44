/* Token classification. A token is checked against the fixed operator and keyword sets first,
 * then against the number and identifier patterns. The first match wins, anything left over is
 * an invalid token. */

use crate::category::Category;
use once_cell::sync::Lazy;
use regex::Regex;

pub const RELATIONAL_OPERATORS: [&str; 6] = ["==", "!=", "<", ">", "<=", ">="];

pub const KEYWORDS: [&str; 5] = ["if", "else", "while", "for", "return"];

pub const NUMBER_PATTERN: &str = r"^[0-9]+$";

pub const IDENTIFIER_PATTERN: &str = r"^[a-zA-Z_][a-zA-Z0-9_]*$";

static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NUMBER_PATTERN).expect("number pattern is a valid regex"));

static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is a valid regex"));

/// Classify a single token. Never fails, unknown input is `Category::Invalid`.
pub fn classify(token: &str) -> Category {
    if RELATIONAL_OPERATORS.contains(&token) {
        Category::RelationalOperator
    } else if KEYWORDS.contains(&token) {
        Category::Keyword
    } else if NUMBER_REGEX.is_match(token) {
        Category::UnsignedNumber
    } else if IDENTIFIER_REGEX.is_match(token) {
        Category::Identifier
    } else {
        Category::Invalid
    }
}

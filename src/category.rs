use serde::Serialize;
use std::fmt;

/// The lexical categories a token can fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    RelationalOperator,
    Keyword,
    UnsignedNumber,
    Identifier,
    Invalid,
}

impl Category {
    /// Human readable classification printed in the report and the diagram caption
    pub fn label(&self) -> &'static str {
        match self {
            Category::RelationalOperator => "valid relational operator",
            Category::Keyword => "valid keyword",
            Category::UnsignedNumber => "valid unsigned number",
            Category::Identifier => "valid identifier",
            Category::Invalid => "invalid token",
        }
    }

    /// Every category except `Invalid` leads to the accept state
    pub fn is_valid(&self) -> bool {
        !matches!(self, Category::Invalid)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

use crate::category::Category;
use crate::classifier::classify;
use crate::tokenizer::{count_whitespace, tokenize, SplitMode};
use log::debug;
use serde::Serialize;

/// A classified token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    token: String,
    category: Category,
}

impl Token {
    pub fn new(token: String, category: Category) -> Self {
        Token { token, category }
    }
    /// Get the raw text of the token
    pub fn get_token(&self) -> &str {
        &self.token
    }
    /// Get the category the token was classified into
    pub fn get_category(&self) -> Category {
        self.category
    }
}

/// Tallies of one run. Invalid tokens are not counted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Counts {
    pub spaces: usize,
    pub tabs: usize,
    pub keywords: usize,
    pub relational_operators: usize,
    pub numbers: usize,
    pub identifiers: usize,
}

impl Counts {
    /// Bump the counter belonging to `category`
    pub fn record(&mut self, category: Category) {
        match category {
            Category::RelationalOperator => self.relational_operators += 1,
            Category::Keyword => self.keywords += 1,
            Category::UnsignedNumber => self.numbers += 1,
            Category::Identifier => self.identifiers += 1,
            Category::Invalid => {}
        }
    }
}

/// Everything one run produces: the counters and the tokens in input order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Analysis {
    counts: Counts,
    tokens: Vec<Token>,
}

impl Analysis {
    pub fn get_counts(&self) -> &Counts {
        &self.counts
    }

    pub fn get_tokens(&self) -> &[Token] {
        &self.tokens
    }
}

/// Count whitespace, split the text and classify every token
pub fn analyze(text: &str, mode: SplitMode) -> Analysis {
    let whitespace = count_whitespace(text);

    let mut counts = Counts {
        spaces: whitespace.spaces,
        tabs: whitespace.tabs,
        ..Counts::default()
    };

    let mut tokens: Vec<Token> = Vec::new();

    for word in tokenize(text, mode) {
        let category = classify(word);
        debug!("Classified {:?} as {:?}", word, category);
        counts.record(category);
        tokens.push(Token::new(word.to_string(), category));
    }

    Analysis { counts, tokens }
}

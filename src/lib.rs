//! # tokviz
//!
//! A small lexical analyser for source-like text.
//!
//! This library provides functionality to:
//! - Split text into tokens on whitespace and punctuation delimiters
//! - Classify tokens as keywords, relational operators, unsigned numbers or identifiers
//! - Tally whitespace and category counts for a run
//! - Draw the classified tokens as transitions of an illustrative automaton in DOT syntax
//! - Render the diagram through Graphviz or view it in an interactive window

// Re-export the modules
pub mod analysis;
pub mod category;
pub mod classifier;
pub mod diagram;
pub mod export;
pub mod input;
pub mod report;
pub mod tokenizer;
pub mod visualizer;

// Re-export commonly used functions for convenience
pub use analysis::{analyze, Analysis, Counts, Token};
pub use category::Category;
pub use classifier::classify;
pub use diagram::{render, TransitionDiagram, DEFAULT_DIAGRAM_FILE};
pub use export::save_analysis;
pub use input::{read_source_file, read_until_blank_line};
pub use report::write_report;
pub use tokenizer::{tokenize, SplitMode};
pub use visualizer::visualize;

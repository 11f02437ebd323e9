//! Text analysis for lexpand.
//!
//! Tokenizers split raw text into [`token::Token`]s, filters rewrite or drop
//! tokens, and analyzers chain the two. The TF-IDF vectorizer analyzes every
//! document through a [`analyzer::PipelineAnalyzer`]; the query expander splits
//! queries with [`tokenizer::whitespace::WhitespaceTokenizer`].

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::Analyzer;
pub use analyzer::pipeline::PipelineAnalyzer;
pub use token::{Token, TokenStream};
pub use token_filter::Filter;
pub use tokenizer::Tokenizer;

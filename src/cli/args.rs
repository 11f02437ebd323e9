//! Command line argument parsing for the lexpand CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::expansion::ExpansionRep;
use crate::rank::Limit;

/// lexpand - term ranking, document ranking and query expansion
#[derive(Parser, Debug, Clone)]
#[command(name = "lexpand")]
#[command(about = "Term ranking, document ranking and embedding-based query expansion")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexpandArgs {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LEXPAND_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexpandArgs {
    /// The log level used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank the terms of a document collection by summed TF-IDF weight
    #[command(name = "top-terms")]
    TopTerms(TopTermsArgs),

    /// Select the highest-scoring documents of a table
    #[command(name = "top-docs")]
    TopDocs(TopDocsArgs),

    /// Rank the terms of the highest-scoring documents
    #[command(name = "top-terms-from-docs")]
    TopTermsFromDocs(TopTermsFromDocsArgs),

    /// Expand a query with similar terms from an embedding model
    Expand(ExpandArgs),
}

/// Arguments for ranking terms
#[derive(Parser, Debug, Clone)]
pub struct TopTermsArgs {
    /// Document file (JSONL)
    #[arg(value_name = "DOCUMENT_FILE")]
    pub document_file: PathBuf,

    /// Column holding the document text
    #[arg(long, default_value = "text")]
    pub doc_col: String,

    /// Number of terms to return ("all" or a negative number for every term)
    #[arg(short = 'n', long, default_value = "10", allow_hyphen_values = true)]
    pub limit: Limit,
}

/// Arguments for ranking documents
#[derive(Parser, Debug, Clone)]
pub struct TopDocsArgs {
    /// Document file (JSONL)
    #[arg(value_name = "DOCUMENT_FILE")]
    pub document_file: PathBuf,

    /// Column holding the document text
    #[arg(long, default_value = "text")]
    pub doc_col: String,

    /// Column holding the document score
    #[arg(long, default_value = "score")]
    pub score_col: String,

    /// Number of documents to return ("all" or a negative number for every document)
    #[arg(short = 'm', long, default_value = "10", allow_hyphen_values = true)]
    pub limit: Limit,
}

/// Arguments for ranking the terms of the top documents
#[derive(Parser, Debug, Clone)]
pub struct TopTermsFromDocsArgs {
    /// Document file (JSONL)
    #[arg(value_name = "DOCUMENT_FILE")]
    pub document_file: PathBuf,

    /// Column holding the document text
    #[arg(long, default_value = "text")]
    pub doc_col: String,

    /// Column holding the document score
    #[arg(long, default_value = "score")]
    pub score_col: String,

    /// Number of documents to select
    #[arg(short = 'm', long = "docs", default_value = "10", allow_hyphen_values = true)]
    pub doc_limit: Limit,

    /// Number of terms to return
    #[arg(short = 'n', long = "terms", default_value = "10", allow_hyphen_values = true)]
    pub term_limit: Limit,
}

/// Arguments for query expansion
#[derive(Parser, Debug, Clone)]
pub struct ExpandArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Word vectors (word2vec text format)
    #[arg(long, value_name = "VECTOR_FILE")]
    pub vectors: PathBuf,

    /// Document vectors (word2vec text format), required for d2v
    #[arg(long, value_name = "VECTOR_FILE")]
    pub doc_vectors: Option<PathBuf>,

    /// Number of expansion terms to return
    #[arg(short = 'n', long, default_value = "10", allow_hyphen_values = true)]
    pub limit: Limit,

    /// Similarity index proposing candidates (w2v or d2v); defaults to the configured one
    #[arg(short = 'r', long = "rep")]
    pub representation: Option<ExpansionRep>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable columns
    Human,
    /// JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_top_terms() {
        let args = LexpandArgs::try_parse_from(["lexpand", "top-terms", "docs.jsonl", "-n", "-1"])
            .unwrap();
        match &args.command {
            Command::TopTerms(top) => {
                assert_eq!(top.document_file, PathBuf::from("docs.jsonl"));
                assert_eq!(top.doc_col, "text");
                assert_eq!(top.limit, Limit::All);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(args.output_format, OutputFormat::Human);
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_parse_expand() {
        let args = LexpandArgs::try_parse_from([
            "lexpand", "-vv", "expand", "cat dog", "--vectors", "words.txt", "--rep", "d2v",
            "-f", "json",
        ])
        .unwrap();
        assert_eq!(args.log_level(), "debug");
        assert_eq!(args.output_format, OutputFormat::Json);
        match &args.command {
            Command::Expand(expand) => {
                assert_eq!(expand.query, "cat dog");
                assert_eq!(expand.representation, Some(ExpansionRep::DocVectorSimilarity));
                assert_eq!(expand.limit, Limit::Top(10));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_representation() {
        let result = LexpandArgs::try_parse_from([
            "lexpand", "expand", "cat", "--vectors", "words.txt", "--rep", "tfidf",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args =
            LexpandArgs::try_parse_from(["lexpand", "-q", "-vvv", "top-docs", "docs.jsonl"])
                .unwrap();
        assert_eq!(args.log_level(), "error");
    }
}

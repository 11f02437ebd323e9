//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexpandArgs, OutputFormat};
use crate::error::Result;
use crate::expansion::ExpandedTerms;
use crate::rank::{RankedDocument, TermScore};

/// Result structure for term ranking.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermRankingResult {
    pub documents: usize,
    pub terms: Vec<TermScore>,
}

/// Result structure for document ranking.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentRankingResult {
    pub total_documents: usize,
    pub documents: Vec<RankedDocument>,
}

/// Result structure for query expansion.
#[derive(Debug, Serialize)]
pub struct ExpansionResult {
    pub query: String,
    pub representation: String,
    pub terms: ExpandedTerms,
}

/// Plain-text rendering of a command result.
pub trait HumanReadable {
    fn write_human(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

impl HumanReadable for TermRankingResult {
    fn write_human(&self, out: &mut dyn Write) -> std::io::Result<()> {
        if self.terms.is_empty() {
            return writeln!(out, "No terms.");
        }
        let width = self.terms.iter().map(|t| t.term.len()).max().unwrap_or(0);
        for (rank, term) in self.terms.iter().enumerate() {
            writeln!(out, "{:>3}. {:<width$}  {:.6}", rank + 1, term.term, term.score)?;
        }
        Ok(())
    }
}

impl HumanReadable for DocumentRankingResult {
    fn write_human(&self, out: &mut dyn Write) -> std::io::Result<()> {
        if self.documents.is_empty() {
            return writeln!(out, "No documents.");
        }
        for (rank, document) in self.documents.iter().enumerate() {
            let score = match document.score {
                Some(score) => format!("{score:.6}"),
                None => "-".to_string(),
            };
            writeln!(
                out,
                "{:>3}. [row {}] {}  {}",
                rank + 1,
                document.row,
                score,
                document.text
            )?;
        }
        Ok(())
    }
}

impl HumanReadable for ExpansionResult {
    fn write_human(&self, out: &mut dyn Write) -> std::io::Result<()> {
        if self.terms.is_empty() {
            return writeln!(out, "No expansion terms for \"{}\".", self.query);
        }
        let width = self.terms.terms().map(str::len).max().unwrap_or(0);
        for (rank, (term, score)) in self.terms.iter().enumerate() {
            writeln!(out, "{:>3}. {:<width$}  {:.6}", rank + 1, term, score)?;
        }
        Ok(())
    }
}

/// Write a result in the requested format.
pub fn output_result<T>(result: &T, args: &LexpandArgs, out: &mut dyn Write) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

//! Command implementations for the lexpand CLI.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::LexpandConfig;
use crate::document::table::DocumentTable;
use crate::embedding::VectorModel;
use crate::expansion::QueryExpander;
use crate::rank::{CombinedRanker, TermRanker, top_doc};
use crate::tfidf::TfIdfVectorizer;

/// Execute a CLI command, writing its result to stdout.
pub fn execute_command(args: LexpandArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute a CLI command, writing its result to `out`.
pub fn run_command(args: &LexpandArgs, out: &mut dyn Write) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    match &args.command {
        Command::TopTerms(top_args) => top_terms(top_args, &config, args, out),
        Command::TopDocs(top_args) => top_docs(top_args, args, out),
        Command::TopTermsFromDocs(top_args) => top_terms_from_docs(top_args, &config, args, out),
        Command::Expand(expand_args) => expand(expand_args, &config, args, out),
    }
}

fn load_config(path: Option<&Path>) -> Result<LexpandConfig> {
    match path {
        Some(path) => LexpandConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(LexpandConfig::default()),
    }
}

fn load_table(path: &Path) -> Result<DocumentTable> {
    let table = DocumentTable::from_jsonl(path)
        .with_context(|| format!("failed to read documents from {}", path.display()))?;
    tracing::info!(path = %path.display(), documents = table.len(), "loaded documents");
    Ok(table)
}

fn term_ranker(config: &LexpandConfig) -> Result<TermRanker> {
    let vectorizer =
        TfIdfVectorizer::with_config(config.tfidf.clone()).context("invalid tf-idf configuration")?;
    Ok(TermRanker::new(vectorizer))
}

/// Rank the terms of a document collection.
fn top_terms(
    args: &TopTermsArgs,
    config: &LexpandConfig,
    cli_args: &LexpandArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let table = load_table(&args.document_file)?;
    let texts = table.texts(&args.doc_col)?;
    let terms = term_ranker(config)?
        .top_terms(&texts, args.limit)
        .context("term ranking failed")?;

    output_result(
        &TermRankingResult {
            documents: texts.len(),
            terms,
        },
        cli_args,
        out,
    )?;
    Ok(())
}

/// Select the highest-scoring documents.
fn top_docs(args: &TopDocsArgs, cli_args: &LexpandArgs, out: &mut dyn Write) -> Result<()> {
    let table = load_table(&args.document_file)?;
    let documents = top_doc(&table, &args.doc_col, &args.score_col, args.limit)
        .context("document ranking failed")?;

    output_result(
        &DocumentRankingResult {
            total_documents: table.len(),
            documents,
        },
        cli_args,
        out,
    )?;
    Ok(())
}

/// Rank the terms of the highest-scoring documents.
fn top_terms_from_docs(
    args: &TopTermsFromDocsArgs,
    config: &LexpandConfig,
    cli_args: &LexpandArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let table = load_table(&args.document_file)?;
    let ranker = CombinedRanker::new(term_ranker(config)?);
    let terms = ranker
        .top_terms(
            &table,
            &args.doc_col,
            &args.score_col,
            args.doc_limit,
            args.term_limit,
        )
        .context("term ranking failed")?;

    output_result(
        &TermRankingResult {
            documents: args.doc_limit.resolve(table.len()),
            terms,
        },
        cli_args,
        out,
    )?;
    Ok(())
}

/// Expand a query with an embedding model.
fn expand(
    args: &ExpandArgs,
    config: &LexpandConfig,
    cli_args: &LexpandArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let model = VectorModel::from_word2vec_files(&args.vectors, args.doc_vectors.as_ref())
        .with_context(|| format!("failed to load vectors from {}", args.vectors.display()))?;
    let expander = QueryExpander::with_config(Arc::new(model), config.expansion.clone());

    let representation = args
        .representation
        .unwrap_or(config.expansion.representation);
    let terms = expander
        .expand(&args.query, args.limit, representation)
        .context("query expansion failed")?;

    output_result(
        &ExpansionResult {
            query: args.query.clone(),
            representation: representation.to_string(),
            terms,
        },
        cli_args,
        out,
    )?;
    Ok(())
}

//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::engine::SearchResults;
use crate::error::Result;
use crate::index::inverted::IndexStats;

/// Summary printed after an index has been built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSummary {
    /// Corpus the index was built from.
    pub corpus: String,

    /// Number of pages (records) indexed.
    pub pages: u64,

    /// Number of unique terms.
    pub unique_terms: u64,
}

impl IndexSummary {
    /// Create a summary from index statistics.
    pub fn new(corpus: impl Into<String>, stats: IndexStats) -> Self {
        IndexSummary {
            corpus: corpus.into(),
            pages: stats.doc_count,
            unique_terms: stats.term_count,
        }
    }
}

/// Output options shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// Format to write in.
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            format: OutputFormat::Human,
            pretty: false,
        }
    }
}

/// Write an index summary.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &IndexSummary,
    options: OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Human => {
            writeln!(
                out,
                "Indexed {} pages containing {} unique terms",
                summary.pages, summary.unique_terms
            )?;
            Ok(())
        }
        OutputFormat::Json => write_json(out, summary, options),
    }
}

/// Write the results of one query.
pub fn write_search_results<W: Write>(
    out: &mut W,
    results: &SearchResults,
    options: OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Human => {
            writeln!(out, "Found {} matching pages", results.total)?;
            for doc_id in &results.matches {
                writeln!(out, "{doc_id}")?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, results, options),
    }
}

/// Write a value as one JSON document.
fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, options: OutputOptions) -> Result<()> {
    if options.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

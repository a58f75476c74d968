//! Index construction from (document id, text) records.
//!
//! [`IndexBuilder`] wraps an [`InvertedIndex`] and feeds it records, either
//! directly or from a line-pair corpus file. Loading a corpus never fails: a
//! source that cannot be opened ingests nothing, and one that fails part way
//! keeps the records read so far. Either way the failure is reported in the
//! [`BuildReport`] so the caller can tell the user.

use std::path::Path;

use log::{debug, info};

use crate::corpus::{CorpusReader, Record};
use crate::error::SetSearchError;
use crate::index::inverted::InvertedIndex;

/// Outcome of loading one corpus source.
#[derive(Debug)]
pub struct BuildReport {
    /// Number of complete records ingested.
    pub records: usize,

    /// Why the source could not be read, if it could not.
    pub source_error: Option<SetSearchError>,
}

impl BuildReport {
    /// Check whether the source was readable.
    pub fn is_readable(&self) -> bool {
        self.source_error.is_none()
    }
}

/// Populates an inverted index from records.
///
/// Existing index contents are kept; records are merged in.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    index: InvertedIndex,
    records: usize,
}

impl IndexBuilder {
    /// Create a builder over a new empty index.
    pub fn new() -> Self {
        IndexBuilder::default()
    }

    /// Create a builder that merges into an existing index.
    pub fn with_index(index: InvertedIndex) -> Self {
        IndexBuilder { index, records: 0 }
    }

    /// Add one record.
    pub fn add_record(&mut self, record: &Record) {
        let tokens = self.index.add_document(&record.doc_id, &record.text);
        self.records += 1;
        debug!("Indexed {} ({} distinct tokens)", record.doc_id, tokens);
    }

    /// Add every record of an iterator and return how many were added.
    pub fn add_records<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = Record>,
    {
        let before = self.records;
        for record in records {
            self.add_record(&record);
        }
        self.records - before
    }

    /// Add every record of a corpus file.
    pub fn load_corpus<P: AsRef<Path>>(&mut self, path: P) -> BuildReport {
        let path = path.as_ref();

        let mut reader = match CorpusReader::open(path) {
            Ok(reader) => reader,
            Err(e) => {
                debug!("Cannot open corpus {}: {e}", path.display());
                return BuildReport {
                    records: 0,
                    source_error: Some(e),
                };
            }
        };

        let records = self.add_records(reader.by_ref());
        info!(
            "Indexed {} pages from {} ({} unique terms)",
            records,
            path.display(),
            self.index.term_count()
        );

        // Records read before the failure stay in the index.
        let source_error = reader.take_error().map(|e| {
            SetSearchError::corpus(format!("read stopped after {records} records: {e}"))
        });

        BuildReport {
            records,
            source_error,
        }
    }

    /// Number of records added through this builder.
    pub fn record_count(&self) -> usize {
        self.records
    }

    /// Borrow the index being built.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Finish building and return the index.
    pub fn finish(self) -> InvertedIndex {
        self.index
    }
}

/// Build a new index from records. Returns the index and the record count.
pub fn build<I>(records: I) -> (InvertedIndex, usize)
where
    I: IntoIterator<Item = Record>,
{
    let mut builder = IndexBuilder::new();
    let count = builder.add_records(records);
    (builder.finish(), count)
}

/// Merge the records of a corpus file into `index`.
///
/// An unreadable file leaves `index` untouched and reports zero records.
pub fn build_index<P: AsRef<Path>>(path: P, index: &mut InvertedIndex) -> BuildReport {
    let mut builder = IndexBuilder::with_index(std::mem::take(index));
    let report = builder.load_corpus(path);
    *index = builder.finish();
    report
}

//! Line-pair corpus reader.
//!
//! A corpus is a text resource made of repeating two-line groups: the first
//! line names a document (usually a URL), the second holds its text. There is
//! no header and no separator between groups. A trailing identifier without a
//! text line is not a record and is silently dropped.
//!
//! ```text
//! www.shoppinglist.com
//! EGGS! milk, fish,      @  bread cheese
//! www.rainbow.org
//! red ~green~ orange yellow blue indigo violet
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One (document identifier, document text) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque document identifier. Not required to be unique.
    pub doc_id: String,

    /// Free text to tokenize.
    pub text: String,
}

impl Record {
    /// Create a new record.
    pub fn new<I: Into<String>, T: Into<String>>(doc_id: I, text: T) -> Self {
        Record {
            doc_id: doc_id.into(),
            text: text.into(),
        }
    }
}

/// Iterator over the records of a line-pair corpus.
///
/// Lines are read as raw bytes; bytes that are not valid UTF-8 are replaced
/// with U+FFFD rather than ending the read. Iteration stops at end of input
/// or at the first I/O error, which is kept and can be collected with
/// [`CorpusReader::take_error`]. A record is only yielded when both of its
/// lines were read.
pub struct CorpusReader<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
    error: Option<io::Error>,
    finished: bool,
}

impl CorpusReader<BufReader<File>> {
    /// Open a corpus file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(CorpusReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> CorpusReader<R> {
    /// Create a reader over any buffered source.
    pub fn new(reader: R) -> Self {
        CorpusReader {
            reader,
            buf: Vec::new(),
            error: None,
            finished: false,
        }
    }

    /// Take the I/O error that ended iteration, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn next_line(&mut self) -> Option<String> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(String::from_utf8_lossy(&self.buf).into_owned())
            }
            Err(e) => {
                debug!("Corpus read stopped: {e}");
                self.error = Some(e);
                None
            }
        }
    }
}

impl<R: BufRead> Iterator for CorpusReader<R> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        if self.finished {
            return None;
        }

        let record = match (self.next_line(), self.next_line()) {
            (Some(doc_id), Some(text)) => Some(Record { doc_id, text }),
            _ => None,
        };

        if record.is_none() {
            self.finished = true;
        }
        record
    }
}

//! Streaming reader for operation scripts
//!
//! [`OperationReader`] yields one `Result<Operation, LedgerError>` per CSV row,
//! reading rows one at a time. Fatal problems (missing file, unreadable header)
//! are returned from the constructor; a bad row is yielded as an `Err` carrying
//! its line number so the caller can skip it and carry on.
//!
//! ```no_run
//! use bank_ledger::io::OperationReader;
//! use std::path::Path;
//!
//! let reader = OperationReader::open(Path::new("operations.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(operation) => println!("{:?}", operation),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{LedgerError, Operation};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Operation script reader
#[derive(Debug)]
pub struct OperationReader<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    record: StringRecord,
}

impl OperationReader<File> {
    /// Open an operation script on disk
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if the path does not exist
    /// - `IoError` for any other failure opening the file
    /// - `ParseError` if the header row cannot be read
    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::from(e),
        })?;

        Self::from_reader(file)
    }
}

impl<R: Read> OperationReader<R> {
    /// Wrap any byte source
    ///
    /// Fields are trimmed and rows may omit the trailing amount column.
    pub fn from_reader(input: R) -> Result<Self, LedgerError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(input);

        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }
}

impl<R: Read> Iterator for OperationReader<R> {
    type Item = Result<Operation, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.record.position().map(|pos| pos.line());
                let operation = self
                    .record
                    .deserialize::<CsvRecord>(Some(&self.headers))
                    .map_err(LedgerError::from)
                    .and_then(convert_csv_record)
                    .map_err(|e| at_line(e, line));
                Some(operation)
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

fn at_line(error: LedgerError, line: Option<u64>) -> LedgerError {
    match error {
        LedgerError::ParseError {
            line: None,
            message,
        } => LedgerError::ParseError { line, message },
        parse @ LedgerError::ParseError { .. } => parse,
        other => LedgerError::ParseError {
            line,
            message: other.to_string(),
        },
    }
}

//! I/O module
//!
//! Handles reading operation scripts.
//!
//! # Components
//!
//! - `csv_format` - CSV record layout and conversion to [`Operation`](crate::types::Operation)
//! - `reader` - Streaming reader with an iterator interface

pub mod csv_format;
pub mod reader;

pub use csv_format::{convert_csv_record, CsvRecord};
pub use reader::OperationReader;

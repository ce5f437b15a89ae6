//! Statement rendering
//!
//! The [`Printer`] turns pre-rendered transaction rows into a statement and
//! writes it to an output channel (stdout by default). Write failures are
//! logged and degraded to an inline notice; they never reach the caller.

use crate::core::traits::StatementPrinter;
use std::io::{self, Stdout, Write};

/// First line of every statement
pub const STATEMENT_HEADER: &str = "date || credit || debit || balance \n";

/// Printed under the header when there is nothing to list
pub const NO_TRANSACTIONS_NOTICE: &str = "No transactions to display.";

const ROW_SEPARATOR: &str = "\n";

/// Render a statement from rows ordered newest first
pub fn render_statement(rows: &[String]) -> String {
    if rows.is_empty() {
        return format!("{}{}", STATEMENT_HEADER, NO_TRANSACTIONS_NOTICE);
    }
    format!("{}{}", STATEMENT_HEADER, rows.join(ROW_SEPARATOR))
}

/// Statement printer writing to `W`
#[derive(Debug)]
pub struct Printer<W: Write> {
    output: W,
}

impl<W: Write> Printer<W> {
    pub fn new(output: W) -> Self {
        Printer { output }
    }

    /// Mutable access to the underlying writer
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    /// Write `text` and its line ending in a single call
    fn emit(&mut self, text: &str) -> io::Result<()> {
        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');
        self.output.write_all(line.as_bytes())?;
        self.output.flush()
    }
}

impl Printer<Stdout> {
    pub fn stdout() -> Self {
        Printer::new(io::stdout())
    }
}

impl Default for Printer<Stdout> {
    fn default() -> Self {
        Printer::stdout()
    }
}

impl<W: Write> StatementPrinter for Printer<W> {
    fn print_statement(&mut self, rows: &[String]) {
        let statement = render_statement(rows);
        if let Err(e) = self.emit(&statement) {
            tracing::error!(error = %e, rows = rows.len(), "failed to print statement");
            let _ = self.emit(&format!("Error: {}", e));
        }
    }
}

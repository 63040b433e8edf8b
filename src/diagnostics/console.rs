//! Console reporter
//!
//! Prints one line per diagnostic in the form `ERROR:<line> %<message> [E<code>]`
//! and keeps the running error count the driver uses for its exit status.

use super::codes::ErrorCode;
use super::reporter::{Arg, Diagnostic, Reporter};
use crossterm::style::{style, Stylize};
use std::io::{self, Write};

pub struct ConsoleReporter<W: Write> {
    out: W,
    colored: bool,
    errors: usize,
}

impl ConsoleReporter<io::Stderr> {
    /// Reporter writing to standard error.
    pub fn stderr(colored: bool) -> Self {
        Self::new(io::stderr(), colored)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self {
            out,
            colored,
            errors: 0,
        }
    }

    /// One-line summary for the end of a run.
    pub fn summary(&self) -> String {
        format!("Errors: {}", self.errors)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn format(&self, diagnostic: &Diagnostic) -> String {
        let message = diagnostic.message();
        let code = diagnostic.code.to_string();

        if self.colored {
            format!(
                "{}:{} %{} {}",
                style("ERROR").red().bold(),
                diagnostic.line,
                message,
                style(format!("[{code}]")).dark_grey()
            )
        } else {
            format!("ERROR:{} %{} [{}]", diagnostic.line, message, code)
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report_error(&mut self, line: usize, code: ErrorCode, args: Vec<Arg>) {
        self.errors += 1;
        let text = self.format(&Diagnostic::new(line, code, args));
        // A broken diagnostics pipe must not abort the parse.
        let _ = writeln!(self.out, "{}", text);
    }

    fn error_count(&self) -> usize {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output() {
        let mut reporter = ConsoleReporter::new(Vec::new(), false);
        reporter.report_error(
            4,
            ErrorCode::ParseUndeclaredVar,
            vec![Arg::Symbol("y".to_string())],
        );

        assert_eq!(reporter.error_count(), 1);
        assert_eq!(reporter.summary(), "Errors: 1");
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text, "ERROR:4 %Undeclared identifier 'y' [E2005]\n");
    }

    #[test]
    fn test_colored_output_keeps_message() {
        let mut reporter = ConsoleReporter::new(Vec::new(), true);
        reporter.report_error(1, ErrorCode::LexBadHex, vec![Arg::Text("0x".to_string())]);

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.contains("Invalid hexadecimal number 0x"));
        assert!(text.contains('\u{1b}'));
    }
}

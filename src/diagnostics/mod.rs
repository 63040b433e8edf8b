//! Diagnostics
//!
//! - [`codes`]: the stable [`ErrorCode`] taxonomy
//! - [`reporter`]: the [`Reporter`] contract plus the collecting [`DiagnosticLog`]
//! - [`console`]: [`ConsoleReporter`], the driver's human-readable sink

pub mod codes;
pub mod console;
pub mod reporter;

pub use codes::ErrorCode;
pub use console::ConsoleReporter;
pub use reporter::{Arg, Diagnostic, DiagnosticLog, Reporter};

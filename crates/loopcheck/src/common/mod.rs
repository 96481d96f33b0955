//! Common infrastructure shared by the dialect frontends and the driver

mod diagnostic;
mod error;
mod span;

pub use diagnostic::{
    has_error_marker, ErrorClass, Finding, Severity, SyntaxError, ERROR_MARKERS, LEXICAL_MARKER,
    SEMANTIC_MARKER, SYNTAX_MARKER,
};
pub use error::{CheckError, CheckResult, DiagnosticReporter};
pub use span::{LineIndex, Span};

//! Analysis findings
//!
//! Every finding renders to a single line whose prefix carries its
//! severity. Error prefixes are fixed strings: response consumers decide
//! validity by searching for them, so they must never change.

use std::fmt;

use super::Span;

/// Marker embedded in lexical error lines
pub const LEXICAL_MARKER: &str = "❌ ERROR LÉXICO";
/// Marker embedded in syntax error lines
pub const SYNTAX_MARKER: &str = "❌ ERROR SINTÁCTICO";
/// Marker embedded in semantic error lines
pub const SEMANTIC_MARKER: &str = "❌ ERROR SEMÁNTICO";

/// All markers that make an analysis invalid
pub const ERROR_MARKERS: [&str; 3] = [SEMANTIC_MARKER, SYNTAX_MARKER, LEXICAL_MARKER];

/// True if a rendered diagnostic line carries one of the error markers
pub fn has_error_marker(line: &str) -> bool {
    ERROR_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Which stage of the taxonomy an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Lexical,
    Syntax,
    Semantic,
}

impl ErrorClass {
    pub fn marker(self) -> &'static str {
        match self {
            ErrorClass::Lexical => LEXICAL_MARKER,
            ErrorClass::Syntax => SYNTAX_MARKER,
            ErrorClass::Semantic => SEMANTIC_MARKER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error(ErrorClass),
    Warning,
    /// A check that passed
    Confirmation,
    Info,
}

/// One line of semantic output
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
    pub span: Option<Span>,
}

impl Finding {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            span: None,
        }
    }

    pub fn error(class: ErrorClass, message: impl Into<String>) -> Self {
        Self::new(Severity::Error(class), message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn confirmation(message: impl Into<String>) -> Self {
        Self::new(Severity::Confirmation, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error(_))
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error(class) => write!(f, "{}: {}", class.marker(), self.message),
            Severity::Warning => write!(f, "⚠️ {}", self.message),
            Severity::Confirmation => write!(f, "✓ {}", self.message),
            Severity::Info => f.write_str(&self.message),
        }
    }
}

/// Grammar mismatch reported by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub span: Option<Span>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

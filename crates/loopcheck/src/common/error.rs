//! Error types and diagnostic reporting

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use thiserror::Error;

use super::diagnostic::{ErrorClass, Finding, Severity, SyntaxError};
use super::Span;

/// Failure outside the analysis core.
///
/// Lexing, parsing and semantic analysis never fail; only reading input,
/// picking a dialect and writing reports can.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("unknown dialect '{0}' (expected js, c or java)")]
    UnknownDialect(String),

    #[error("cannot detect dialect for '{0}', pass --dialect")]
    UndetectedDialect(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CheckError {
    pub fn unknown_dialect(name: impl Into<String>) -> Self {
        Self::UnknownDialect(name.into())
    }

    pub fn undetected_dialect(path: impl Into<String>) -> Self {
        Self::UndetectedDialect(path.into())
    }
}

pub type CheckResult<T> = Result<T, CheckError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self::with_color(ColorChoice::Auto)
    }

    pub fn with_color(color: ColorChoice) -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(color),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    pub fn report_syntax_error(&self, file_id: usize, error: &SyntaxError) {
        let diagnostic = Diagnostic::error()
            .with_message("Syntax error")
            .with_labels(labels(file_id, error.span, &error.message))
            .with_notes(note_without_span(error.span, &error.message));
        self.emit(&diagnostic);
    }

    pub fn report_finding(&self, file_id: usize, finding: &Finding) {
        let diagnostic = match finding.severity {
            Severity::Error(ErrorClass::Lexical) => Diagnostic::error().with_message("Lexical error"),
            Severity::Error(ErrorClass::Syntax) => Diagnostic::error().with_message("Syntax error"),
            Severity::Error(ErrorClass::Semantic) => Diagnostic::error().with_message("Semantic error"),
            Severity::Warning => Diagnostic::warning().with_message("Warning"),
            Severity::Confirmation => Diagnostic::help().with_message("Check passed"),
            Severity::Info => Diagnostic::note().with_message("Info"),
        };

        let diagnostic = diagnostic
            .with_labels(labels(file_id, finding.span, &finding.message))
            .with_notes(note_without_span(finding.span, &finding.message));
        self.emit(&diagnostic);
    }

    fn emit(&self, diagnostic: &Diagnostic<usize>) {
        let _ = term::emit(&mut self.writer.lock(), &self.config, &self.files, diagnostic);
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn labels(file_id: usize, span: Option<Span>, message: &str) -> Vec<Label<usize>> {
    span.map(|span| vec![Label::primary(file_id, span.start..span.end).with_message(message)])
        .unwrap_or_default()
}

fn note_without_span(span: Option<Span>, message: &str) -> Vec<String> {
    if span.is_some() {
        Vec::new()
    } else {
        vec![message.to_string()]
    }
}

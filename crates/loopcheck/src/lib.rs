//! loopcheck - loop-focused static analysis for three toy dialects
//!
//! Each source goes through the same three stages:
//! - **Lexing** (`frontend::lexer`): a logos scanner per dialect, never fails
//! - **Parsing** (`frontend::parser`): recursive descent over `for`,
//!   `do-while` and the Java class skeleton, collecting syntax errors
//! - **Semantic analysis** (`frontend::sema`): symbol table plus the
//!   dialect's list of token-stream passes
//!
//! Dialects (`frontend::js`, `frontend::c`, `frontend::java`) are static
//! descriptors; the `driver` runs the stages and builds the JSON report.

pub mod common;
pub mod driver;
pub mod frontend;

pub use common::{CheckError, CheckResult, DiagnosticReporter, Finding, Span, SyntaxError};
pub use driver::{analyze_source, Analysis, Pipeline, Report};
pub use frontend::{AnalysisConfig, Dialect, DialectSpec};

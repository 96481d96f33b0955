//! Analysis driver and the response envelope

use serde::Serialize;

use crate::common::{has_error_marker, CheckResult, DiagnosticReporter, Finding, SyntaxError};
use crate::frontend::lexer::{tokenize, Token};
use crate::frontend::parser::Parser;
use crate::frontend::sema::analyze;
use crate::frontend::{AnalysisConfig, Dialect};

/// Everything one run produced for one source
#[derive(Debug, Clone)]
pub struct Analysis {
    pub dialect: Dialect,
    pub tokens: Vec<Token>,
    pub syntax_errors: Vec<SyntaxError>,
    pub findings: Vec<Finding>,
}

impl Analysis {
    /// No syntax errors and no semantic line carrying an error marker
    pub fn is_valid(&self) -> bool {
        self.syntax_errors.is_empty() && !self.semantic_info().iter().any(|line| has_error_marker(line))
    }

    pub fn syntax_messages(&self) -> Vec<String> {
        self.syntax_errors.iter().map(ToString::to_string).collect()
    }

    /// Rendered findings, one line each, in pass order
    pub fn semantic_info(&self) -> Vec<String> {
        self.findings.iter().map(ToString::to_string).collect()
    }

    pub fn to_report(&self) -> Report<'_> {
        Report {
            is_valid: self.is_valid(),
            dialect: self.dialect.name(),
            tokens: &self.tokens,
            syntax_errors: self.syntax_messages(),
            semantic_info: self.semantic_info(),
        }
    }

    /// Send every syntax error and finding through codespan
    pub fn report(&self, reporter: &DiagnosticReporter, file_id: usize) {
        for error in &self.syntax_errors {
            reporter.report_syntax_error(file_id, error);
        }
        for finding in &self.findings {
            reporter.report_finding(file_id, finding);
        }
    }
}

/// Serialized form of an [`Analysis`]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub is_valid: bool,
    pub dialect: &'static str,
    pub tokens: &'a [Token],
    pub syntax_errors: Vec<String>,
    pub semantic_info: Vec<String>,
}

impl Report<'_> {
    pub fn to_json(&self) -> CheckResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Lex, parse and check one source
pub struct Pipeline {
    config: AnalysisConfig,
}

impl Pipeline {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, source: &str, dialect: Dialect) -> Analysis {
        let spec = dialect.spec();

        // Phase 1: lexing
        if self.config.verbose {
            eprintln!("Lexing {dialect}...");
        }
        let tokens = tokenize(source, spec);

        if self.config.dump_tokens {
            eprintln!("=== Tokens ===");
            for token in &tokens {
                eprintln!("{:>4}:{:<3} {:<11} {:?}", token.line, token.column, token.kind, token.text);
            }
            eprintln!("=== End Tokens ===\n");
        }

        // Phase 2: parsing
        if self.config.verbose {
            eprintln!("Parsing {} tokens...", tokens.len());
        }
        let syntax_errors = Parser::new(&tokens, &spec.grammar).parse();

        // Phase 3: semantic analysis
        if self.config.verbose {
            eprintln!("Analyzing ({} syntax errors)...", syntax_errors.len());
        }
        let findings = analyze(&tokens, &spec.semantics);

        if self.config.verbose {
            let errors = findings.iter().filter(|finding| finding.is_error()).count();
            eprintln!("Done: {} findings, {errors} errors", findings.len());
        }

        Analysis {
            dialect,
            tokens,
            syntax_errors,
            findings,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

/// Run the full pipeline with default settings
pub fn analyze_source(source: &str, dialect: Dialect) -> Analysis {
    Pipeline::default().analyze(source, dialect)
}

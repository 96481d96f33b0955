//! loopcheck - loop-focused lexer, parser and semantic checker
//!
//! Usage: loopcheck [OPTIONS] <input>

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context};
use clap::{Parser as ClapParser, ValueEnum};
use loopcheck::common::DiagnosticReporter;
use loopcheck::driver::Pipeline;
use loopcheck::frontend::{AnalysisConfig, Dialect};

/// Source dialect
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum DialectArg {
    /// Detect from the file extension
    #[default]
    Auto,
    /// JavaScript / TypeScript subset
    Js,
    /// C subset
    C,
    /// Java subset
    Java,
}

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum Format {
    /// Diagnostics on stderr, summary on stdout
    #[default]
    Text,
    /// The JSON report on stdout
    Json,
}

#[derive(ClapParser, Debug)]
#[command(name = "loopcheck")]
#[command(version)]
#[command(about = "Lexes, parses and checks for/do-while loops in JS/TS, C and Java subsets", long_about = None)]
struct Args {
    /// Input source file, or '-' for standard input
    #[arg(required = true)]
    input: PathBuf,

    /// Source dialect (auto, js, c or java)
    #[arg(short, long, value_enum, default_value = "auto")]
    dialect: DialectArg,

    /// Output format (text or json)
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Dump tokens (for debugging)
    #[arg(long)]
    dump_tokens: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn select_dialect(args: &Args) -> anyhow::Result<Dialect> {
    let dialect = match args.dialect {
        DialectArg::Js => Dialect::Js,
        DialectArg::C => Dialect::C,
        DialectArg::Java => Dialect::Java,
        DialectArg::Auto if is_stdin(&args.input) => {
            bail!("reading standard input needs an explicit --dialect")
        }
        DialectArg::Auto => Dialect::detect(&args.input)?,
    };
    Ok(dialect)
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    if is_stdin(path) {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read standard input")?;
        Ok(source)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Returns whether the analysis came out valid
fn run(args: &Args) -> anyhow::Result<bool> {
    let dialect = select_dialect(args)?;
    let source = read_source(&args.input)?;
    let filename = if is_stdin(&args.input) {
        "<stdin>".to_string()
    } else {
        args.input.display().to_string()
    };

    if args.verbose {
        eprintln!("Checking {filename} ({dialect})");
    }

    let pipeline = Pipeline::new(AnalysisConfig {
        dump_tokens: args.dump_tokens,
        verbose: args.verbose,
    });
    let analysis = pipeline.analyze(&source, dialect);

    match args.format {
        Format::Json => {
            let json = analysis.to_report().to_json().context("failed to serialize the report")?;
            println!("{json}");
        }
        Format::Text => {
            let mut reporter = DiagnosticReporter::new();
            let file_id = reporter.add_file(&filename, &source);
            analysis.report(&reporter, file_id);

            for line in analysis.semantic_info() {
                println!("{line}");
            }
            println!(
                "{filename}: {} ({} syntax errors, {} findings)",
                if analysis.is_valid() { "valid" } else { "invalid" },
                analysis.syntax_errors.len(),
                analysis.findings.len()
            );
        }
    }

    Ok(analysis.is_valid())
}

//! CLI argument definitions and command execution for `summarize`

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use crate::error::{Result, SummarizeError};
use crate::skeleton::{
    map_file, render_document, summarize_file, SkeletonOptions, SkeletonResult,
    SupportedLanguage, EMPTY_MAP_JSON,
};
use crate::tokens::count_tokens;

/// Structural summaries of Swift and Objective-C sources
#[derive(Parser, Debug, Clone)]
#[command(name = "summarize")]
#[command(about = "Print a declaration skeleton or symbol map for one source file")]
#[command(version)]
pub struct Cli {
    /// Source file to summarize
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the symbol map as JSON instead of the skeleton
    #[arg(long)]
    pub map: bool,

    /// Grammar to use instead of detecting it from the extension
    #[arg(long, value_enum)]
    pub language: Option<LanguageArg>,

    /// Also put location markers above type and extension declarations
    #[arg(long)]
    pub mark_types: bool,

    /// Skip re-parsing the rendered skeleton
    #[arg(long)]
    pub no_verify: bool,

    /// Largest share of the file that may sit inside syntax errors
    #[arg(long, value_name = "RATIO")]
    pub max_error_ratio: Option<f64>,

    /// Print line and token counts to stderr
    #[arg(long)]
    pub stats: bool,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    Swift,
    Objc,
}

impl From<LanguageArg> for SupportedLanguage {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Swift => SupportedLanguage::Swift,
            LanguageArg::Objc => SupportedLanguage::ObjectiveC,
        }
    }
}

impl Cli {
    pub fn options(&self) -> SkeletonOptions {
        let mut options = SkeletonOptions::default()
            .with_mark_types(self.mark_types)
            .with_verify_reparse(!self.no_verify);
        if let Some(ratio) = self.max_error_ratio {
            options = options.with_max_error_ratio(ratio);
        }
        options
    }

    pub fn language_override(&self) -> Option<SupportedLanguage> {
        self.language.map(SupportedLanguage::from)
    }
}

/// What the binary writes and how it exits
#[derive(Debug)]
pub struct Execution {
    pub stdout: String,
    pub stderr: Vec<String>,
    pub failure: Option<SummarizeError>,
}

impl Execution {
    fn ok(stdout: String) -> Self {
        Self {
            stdout,
            stderr: Vec::new(),
            failure: None,
        }
    }

    pub fn success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Run one invocation without touching the process streams
pub fn execute(cli: &Cli) -> Execution {
    if cli.map {
        return execute_map(cli);
    }
    match run_skeleton(cli) {
        Ok((document, result)) => {
            let mut execution = Execution::ok(document);
            if cli.stats {
                execution.stderr = stats_lines(&cli.file, &result);
            }
            execution
        }
        Err(e) => Execution {
            stdout: String::new(),
            stderr: vec![format!("Error: {e}")],
            failure: Some(e),
        },
    }
}

fn run_skeleton(cli: &Cli) -> Result<(String, SkeletonResult)> {
    let options = cli.options();
    debug!(file = %cli.file.display(), ?options, "summarizing");
    let result = summarize_file(&cli.file, &options, cli.language_override())?;
    let document = render_document(&cli.file.display().to_string(), &result.skeleton);
    Ok((document, result))
}

/// Any failure on the map path is reported as an empty object.
fn execute_map(cli: &Cli) -> Execution {
    let json = map_file(&cli.file, &cli.options(), cli.language_override())
        .and_then(|map| map.to_json());
    match json {
        Ok(json) => Execution::ok(format!("{json}\n")),
        Err(e) => {
            debug!(error = %e, "map failed");
            Execution {
                stdout: format!("{EMPTY_MAP_JSON}\n"),
                stderr: Vec::new(),
                failure: Some(e),
            }
        }
    }
}

fn stats_lines(path: &Path, result: &SkeletonResult) -> Vec<String> {
    let mut lines = vec![format!(
        "{}: {} -> {} lines ({:.1}% smaller, {})",
        path.display(),
        result.original_lines,
        result.skeleton_lines,
        result.compression_ratio() * 100.0,
        result.language.name(),
    )];
    match count_tokens(&result.skeleton) {
        Ok(tokens) => lines.push(format!("skeleton tokens: {tokens}")),
        Err(e) => info!(error = %e, "token count unavailable"),
    }
    lines
}

/// Default log filter when `SUMMARIZE_LOG` is unset
pub fn default_log_directive(verbose: bool) -> &'static str {
    if verbose {
        "skeleton_summarizer=debug"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["summarize"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    fn swift_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".swift")
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_flags_build_options() {
        let parsed = cli(&[
            "--mark-types",
            "--no-verify",
            "--max-error-ratio",
            "0.5",
            "--language",
            "objc",
            "A.h",
        ]);
        let options = parsed.options();
        assert!(options.mark_types);
        assert!(!options.verify_reparse);
        assert!((options.max_error_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(parsed.language_override(), Some(SupportedLanguage::ObjectiveC));
    }

    #[test]
    fn test_skeleton_document() {
        let file = swift_file("import Foundation\n\nfunc greet() -> String {\n    return \"hi\"\n}\n");
        let path = file.path().display().to_string();
        let execution = execute(&cli(&[&path]));
        assert!(execution.success());
        assert!(execution.stderr.is_empty());
        assert!(execution.stdout.starts_with("// Skeleton Summary\n"));
        assert!(execution.stdout.contains(&format!("// File: {path}\n")));
        assert!(execution
            .stdout
            .contains("// Line: 3\nfunc greet() -> String { /* implementation hidden */ }"));
    }

    #[test]
    fn test_missing_file_reports_error() {
        let execution = execute(&cli(&["/definitely/not/here.swift"]));
        assert!(!execution.success());
        assert!(execution.stdout.is_empty());
        assert_eq!(execution.stderr.len(), 1);
        assert!(execution.stderr[0].starts_with("Error: File not found"));
        assert!(matches!(
            execution.failure,
            Some(SummarizeError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_parse_error_over_limit() {
        let file = swift_file(")))))\nfunc a() {\n    b()\n}\n");
        let path = file.path().display().to_string();
        let execution = execute(&cli(&["--max-error-ratio", "0", &path]));
        assert!(!execution.success());
        assert!(execution.stdout.is_empty());
        assert_eq!(execution.stderr.len(), 1);
        assert!(execution.stderr[0].starts_with("Error: Failed to parse file:"));
    }

    #[test]
    fn test_map_failure_prints_empty_object() {
        let execution = execute(&cli(&["--map", "/definitely/not/here.swift"]));
        assert!(!execution.success());
        assert_eq!(execution.stdout, "{}\n");
    }

    #[test]
    fn test_map_output() {
        let file = swift_file("struct Point {\n    var x = 0\n}\n");
        let path = file.path().display().to_string();
        let execution = execute(&cli(&["--map", &path]));
        assert!(execution.success());
        let value: serde_json::Value = serde_json::from_str(&execution.stdout).expect("json");
        assert_eq!(value["filePath"], serde_json::Value::String(path));
        assert_eq!(value["symbols"][0]["name"], "Point");
        assert_eq!(value["symbols"][0]["kind"], "type");
        assert_eq!(value["symbols"][0]["line"], 1);
    }

    #[test]
    fn test_unsupported_extension() {
        let execution = execute(&cli(&["notes.txt"]));
        assert!(!execution.success());
        assert!(execution.stderr[0].contains("Unsupported language"));
    }

    #[test]
    fn test_stats_on_stderr() {
        let file = swift_file("func a() {\n    b()\n}\n");
        let path = file.path().display().to_string();
        let execution = execute(&cli(&["--stats", &path]));
        assert!(execution.success());
        assert!(!execution.stderr.is_empty());
        assert!(execution.stderr[0].contains("lines"));
    }
}

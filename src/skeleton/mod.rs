//! Structural skeletons: declaration signatures without implementation
//!
//! This module turns one source file into a skeleton (signatures kept, bodies
//! and initializer values elided, original line markers added) and a symbol
//! map. Each grammar has its own strategy behind the [`Summarizer`] trait.
//!
//! ## Architecture
//!
//! ```text
//! skeleton/
//! ├── mod.rs         - Entry point, language dispatch, banner
//! ├── common.rs      - Markers, line table, output normalizer
//! ├── config.rs      - SkeletonOptions
//! ├── tree.rs        - Swift parse into an owned declaration tree
//! ├── classify.rs    - Declaration categories
//! ├── swift.rs       - Rewrite dispatch table and renderer
//! ├── symbols.rs     - Symbol collector and FileMap
//! └── objc.rs        - Pattern-based Objective-C extraction
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use skeleton_summarizer::skeleton::{produce, SkeletonOptions, SupportedLanguage};
//!
//! let result = produce("func f() -> Int { 1 }", SupportedLanguage::Swift, &SkeletonOptions::default())?;
//! println!("{}", result.skeleton);
//! ```

pub mod classify;
pub mod common;
pub mod config;
pub mod objc;
pub mod swift;
pub mod symbols;
pub mod tree;

use std::path::Path;

use tracing::debug;

pub use common::{normalize_output, LineIndex};
pub use config::SkeletonOptions;
pub use symbols::{FileMap, Symbol, SymbolKind, EMPTY_MAP_JSON};

use crate::error::{Result, SummarizeError};
use common::{BANNER_RULE, BANNER_TITLE};
use objc::ObjcSummarizer;
use swift::SwiftSummarizer;

// ============ Supported Languages ============

/// Grammars with a summarizer strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedLanguage {
    /// Full tree-sitter parse
    Swift,
    /// Pattern-based extraction
    ObjectiveC,
}

impl SupportedLanguage {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "swift" => Some(Self::Swift),
            "m" | "mm" | "h" => Some(Self::ObjectiveC),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext).ok_or_else(|| SummarizeError::UnsupportedLanguage {
            extension: ext.to_string(),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Swift => "swift",
            Self::ObjectiveC => "objective-c",
        }
    }

    /// Legacy sources are often not UTF-8; their bytes are decoded lossily.
    pub fn decodes_lossily(&self) -> bool {
        matches!(self, Self::ObjectiveC)
    }

    /// The strategy for this grammar
    pub fn summarizer(&self, options: &SkeletonOptions) -> Box<dyn Summarizer> {
        match self {
            Self::Swift => Box::new(SwiftSummarizer::new(options.clone())),
            Self::ObjectiveC => Box::new(ObjcSummarizer),
        }
    }
}

// ============ Result Type ============

/// Result of skeleton extraction
#[derive(Debug, Clone)]
pub struct SkeletonResult {
    /// Normalized skeleton body, without the banner
    pub skeleton: String,
    pub symbols: Vec<Symbol>,
    pub language: SupportedLanguage,
    pub original_lines: usize,
    pub skeleton_lines: usize,
}

impl SkeletonResult {
    pub fn new(
        skeleton: String,
        symbols: Vec<Symbol>,
        language: SupportedLanguage,
        source: &str,
    ) -> Self {
        let skeleton_lines = skeleton.lines().count();
        Self {
            skeleton,
            symbols,
            language,
            original_lines: source.lines().count(),
            skeleton_lines,
        }
    }

    /// Calculate compression ratio (0.0 to 1.0)
    pub fn compression_ratio(&self) -> f64 {
        if self.original_lines == 0 {
            return 0.0;
        }
        let diff = self.original_lines as f64 - self.skeleton_lines as f64;
        (diff / self.original_lines as f64).max(0.0)
    }
}

// ============ Capability Interface ============

/// One grammar strategy. Callers never branch on which one runs.
pub trait Summarizer {
    fn language(&self) -> SupportedLanguage;

    /// Skeleton and symbols for one file's text
    fn produce(&self, source: &str) -> Result<SkeletonResult>;

    /// Symbols only; strategies override this to skip skeleton rendering
    fn symbols(&self, source: &str) -> Result<Vec<Symbol>> {
        Ok(self.produce(source)?.symbols)
    }
}

// ============ Main Entry Points ============

/// Skeletonize source text of a known language
pub fn produce(
    source: &str,
    language: SupportedLanguage,
    options: &SkeletonOptions,
) -> Result<SkeletonResult> {
    let summarizer = language.summarizer(options);
    debug!(language = summarizer.language().name(), "producing skeleton");
    summarizer.produce(source)
}

/// Read a file, failing with `FileNotFound`, `Read` or `Decode`
pub fn read_source(path: &Path, language: SupportedLanguage) -> Result<String> {
    let display = path.display().to_string();
    if !path.is_file() {
        return Err(SummarizeError::FileNotFound { path: display });
    }
    let bytes = std::fs::read(path).map_err(|source| SummarizeError::Read {
        path: display.clone(),
        source,
    })?;
    if language.decodes_lossily() {
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }
    String::from_utf8(bytes).map_err(|_| SummarizeError::Decode { path: display })
}

fn resolve_language(path: &Path, language: Option<SupportedLanguage>) -> Result<SupportedLanguage> {
    match language {
        Some(lang) => Ok(lang),
        None => SupportedLanguage::from_path(path),
    }
}

/// Skeleton for a file on disk
pub fn summarize_file(
    path: &Path,
    options: &SkeletonOptions,
    language: Option<SupportedLanguage>,
) -> Result<SkeletonResult> {
    let language = resolve_language(path, language)?;
    let source = read_source(path, language)?;
    produce(&source, language, options)
}

/// Symbol map for a file on disk
pub fn map_file(
    path: &Path,
    options: &SkeletonOptions,
    language: Option<SupportedLanguage>,
) -> Result<FileMap> {
    let language = resolve_language(path, language)?;
    let source = read_source(path, language)?;
    let symbols = language.summarizer(options).symbols(&source)?;
    Ok(FileMap::new(path.display().to_string(), symbols))
}

/// Banner (title, file path, rule), a blank line, then the skeleton body
pub fn render_document(file_path: &str, skeleton: &str) -> String {
    let mut out = String::new();
    out.push_str(BANNER_TITLE);
    out.push('\n');
    out.push_str("// File: ");
    out.push_str(file_path);
    out.push('\n');
    out.push_str(BANNER_RULE);
    out.push_str("\n\n");
    out.push_str(skeleton);
    out
}

//! Structural summaries of source files for LLM context packing.
//!
//! A skeleton keeps every declaration signature and its original line
//! number while hiding implementation bodies and initializer values. Swift
//! goes through a full tree-sitter parse; Objective-C uses a pattern-based
//! extractor.

pub mod cli;
pub mod error;
pub mod skeleton;
pub mod tokens;


pub use error::{Result, SummarizeError};
pub use skeleton::{
    map_file, produce, render_document, summarize_file, FileMap, SkeletonOptions,
    SkeletonResult, Summarizer, SupportedLanguage, Symbol, SymbolKind,
};

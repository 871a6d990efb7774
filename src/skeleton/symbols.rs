//! Symbol map generation.
//!
//! The collector folds over the declaration tree and returns its inventory;
//! nothing is accumulated outside the call, so one collector run can never
//! leak symbols into another file's map.

use serde::{Deserialize, Serialize};

use super::classify::Category;
use super::tree::Node;
use crate::error::{Result, SummarizeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Type,
    Extension,
    Function,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub line: usize,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind, line: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
        }
    }
}

/// Per-file inventory, in source declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMap {
    #[serde(rename = "filePath")]
    pub file_path: String,
    pub symbols: Vec<Symbol>,
}

impl FileMap {
    pub fn new(file_path: impl Into<String>, symbols: Vec<Symbol>) -> Self {
        Self {
            file_path: file_path.into(),
            symbols,
        }
    }

    /// Pretty JSON with object keys in sorted order
    pub fn to_json(&self) -> Result<String> {
        // serde_json's default map is ordered by key, so going through
        // `Value` sorts struct fields as well.
        let value = serde_json::to_value(self)
            .map_err(|e| SummarizeError::internal(format!("map serialization failed: {e}")))?;
        serde_json::to_string_pretty(&value)
            .map_err(|e| SummarizeError::internal(format!("map serialization failed: {e}")))
    }
}

/// Output for any failure on the map path
pub const EMPTY_MAP_JSON: &str = "{}";

fn symbol_kind(category: Category) -> Option<SymbolKind> {
    match category {
        Category::TypeDeclaration => Some(SymbolKind::Type),
        Category::Extension => Some(SymbolKind::Extension),
        c if c.is_function_like() => Some(SymbolKind::Function),
        _ => None,
    }
}

/// Collect type, extension and function symbols reachable without entering a
/// function body.
pub fn collect_symbols(nodes: &[Node]) -> Vec<Symbol> {
    nodes.iter().fold(Vec::new(), |mut acc, node| {
        acc.extend(collect_node(node));
        acc
    })
}

fn collect_node(node: &Node) -> Vec<Symbol> {
    let mut symbols = Vec::new();
    if let (Some(kind), Some(name)) = (symbol_kind(node.category), node.name.as_ref()) {
        symbols.push(Symbol::new(name.clone(), kind, node.line));
    }
    if descends_into(node.category) {
        symbols.extend(collect_symbols(&node.children));
    }
    symbols
}

/// Function bodies and property initializers hold local declarations only
fn descends_into(category: Category) -> bool {
    category.is_container() || category == Category::Other
}

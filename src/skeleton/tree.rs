//! Swift parser integration and the owned declaration tree.
//!
//! tree-sitter trees borrow the parser's buffers and cannot be rewritten, so
//! the parse is lowered into an owned [`Node`] tree that carries exactly the
//! spans the rewrite pass needs (bodies, initializer regions, enum payloads).
//! Only declarations are kept; statements and expressions are flattened away.

use tree_sitter::{Node as TsNode, Parser};
use tracing::debug;

use super::classify::{classify, Category};
use super::common::{
    get_node_text, leading_indent, squash_whitespace, LineIndex, LOCATION_MARKER_LINE,
};
use crate::error::{Result, SummarizeError};

/// Half-open byte range into the original source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    fn of(node: TsNode) -> Self {
        Self::new(node.start_byte(), node.end_byte())
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A change requested by a transform, resolved into text by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Replace a brace-delimited body with the placeholder body
    HideBody(Span),
    /// Remove `= <expr>` and leave the hidden marker in its place
    ElideInitializer(Span),
    /// Remove an enum case's associated values or raw value
    DropPayload(Span),
    /// Insert `// Line: N` above the node, replacing a stale marker if present
    LocationMarker { line: usize, replaces: Option<Span> },
}

/// A classified declaration with its original source geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub category: Category,
    pub kind: &'static str,
    pub span: Span,
    /// 1-based line of the first token, modifiers and attributes included
    pub line: usize,
    pub name: Option<String>,
    /// Function, initializer, deinitializer or subscript body, braces included
    pub body: Option<Span>,
    /// Computed-property and observer blocks of a property binding
    pub accessors: Vec<Span>,
    pub initializers: Vec<Span>,
    pub payloads: Vec<Span>,
    /// The `// Line: N` line left directly above this node by an earlier run
    pub existing_marker: Option<Span>,
    pub rewrites: Vec<Rewrite>,
    pub children: Vec<Node>,
}

/// Owned parse result for one file
#[derive(Debug, Clone)]
pub struct Tree {
    pub nodes: Vec<Node>,
    pub lines: LineIndex,
    pub error_bytes: usize,
    pub has_error: bool,
    pub source_len: usize,
}

impl Tree {
    /// Share of source bytes covered by `ERROR` nodes
    pub fn error_ratio(&self) -> f64 {
        if self.source_len == 0 {
            return 0.0;
        }
        self.error_bytes as f64 / self.source_len as f64
    }

    /// Category and name of each top-level declaration, in order
    pub fn top_level_outline(&self) -> Vec<(Category, Option<String>)> {
        self.nodes
            .iter()
            .map(|n| (n.category, n.name.clone()))
            .collect()
    }
}

/// Parse Swift source into an owned declaration tree.
///
/// Tolerant: syntax errors are accepted as long as they cover at most
/// `max_error_ratio` of the source bytes.
pub fn parse(source: &str, max_error_ratio: f64) -> Result<Tree> {
    let tree = parse_lenient(source)?;
    if tree.error_ratio() > max_error_ratio {
        return Err(SummarizeError::parse(format!(
            "{:.0}% of the source could not be parsed (limit {:.0}%)",
            tree.error_ratio() * 100.0,
            max_error_ratio * 100.0
        )));
    }
    Ok(tree)
}

/// Parse without applying the error tolerance limit
pub fn parse_lenient(source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_swift::LANGUAGE.into())
        .map_err(|e| SummarizeError::internal(format!("Failed to set language: {}", e)))?;

    let ts_tree = parser
        .parse(source, None)
        .ok_or_else(|| SummarizeError::parse("parser produced no tree"))?;

    let root = ts_tree.root_node();
    let lines = LineIndex::new(source);
    let builder = Builder {
        source,
        bytes: source.as_bytes(),
        lines: &lines,
    };
    let nodes = builder.collect(root);
    let error_bytes = error_bytes(root);

    debug!(
        declarations = nodes.len(),
        lines = lines.line_count(),
        error_bytes,
        has_error = root.has_error(),
        "parsed swift source"
    );

    Ok(Tree {
        nodes,
        error_bytes,
        has_error: root.has_error(),
        source_len: source.len(),
        lines,
    })
}

/// Sum of bytes under outermost `ERROR` nodes
fn error_bytes(node: TsNode) -> usize {
    if node.is_error() {
        return node.byte_range().len();
    }
    if !node.has_error() {
        return 0;
    }
    let mut cursor = node.walk();
    let total = node.children(&mut cursor).map(error_bytes).sum();
    total
}

/// Node kinds whose contents are never searched for declarations
fn is_scope_boundary(kind: &str) -> bool {
    matches!(kind, "lambda_literal" | "comment" | "multiline_comment")
}

struct Builder<'a> {
    source: &'a str,
    bytes: &'a [u8],
    lines: &'a LineIndex,
}

impl<'a> Builder<'a> {
    /// Declarations under `node`, flattening through unclassified structure
    fn collect(&self, node: TsNode) -> Vec<Node> {
        let mut out = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match classify(child) {
                Category::Other => {
                    if !is_scope_boundary(child.kind()) {
                        out.extend(self.collect(child));
                    }
                }
                category => out.push(self.build(child, category)),
            }
        }
        out
    }

    fn build(&self, node: TsNode, category: Category) -> Node {
        let span = Span::of(node);
        let line = self.lines.line_of(span.start);

        let mut built = Node {
            category,
            kind: node.kind(),
            span,
            line,
            name: self.node_name(node, category),
            body: None,
            accessors: Vec::new(),
            initializers: Vec::new(),
            payloads: Vec::new(),
            existing_marker: self.existing_marker(span.start, line),
            rewrites: Vec::new(),
            children: Vec::new(),
        };

        match category {
            Category::FunctionLike | Category::InitializerLike | Category::DeinitializerLike => {
                let body = node
                    .child_by_field_name("body")
                    .or_else(|| find_child_by_kind(node, "computed_property"))
                    .filter(|b| !is_accessor_requirement(*b));
                if let Some(body) = body {
                    built.body = Some(Span::of(body));
                    built.children = self.collect(body);
                }
            }
            Category::PropertyBinding => {
                let (initializers, accessors) = binding_regions(node);
                built.initializers = initializers;
                built.accessors = accessors;
            }
            Category::EnumCaseElement => {
                built.payloads = case_payloads(node);
            }
            Category::TypeDeclaration | Category::Extension => {
                let body = node.child_by_field_name("body").or_else(|| {
                    find_child_by_kind(node, "class_body")
                        .or_else(|| find_child_by_kind(node, "enum_class_body"))
                        .or_else(|| find_child_by_kind(node, "protocol_body"))
                });
                if let Some(body) = body {
                    built.children = self.collect(body);
                }
            }
            Category::Other => {}
        }

        built
    }

    fn node_name(&self, node: TsNode, category: Category) -> Option<String> {
        match category {
            Category::InitializerLike => Some("init".to_string()),
            Category::DeinitializerLike => Some("deinit".to_string()),
            Category::FunctionLike if node.kind() == "subscript_declaration" => {
                Some("subscript".to_string())
            }
            _ => node
                .child_by_field_name("name")
                .map(|n| squash_whitespace(get_node_text(n, self.bytes)))
                .filter(|n| !n.is_empty()),
        }
    }

    /// Span of a `// Line: N` line immediately above a declaration that
    /// starts its own line.
    fn existing_marker(&self, start: usize, line: usize) -> Option<Span> {
        if line < 2 {
            return None;
        }
        let line_start = self.lines.line_start(start);
        leading_indent(self.source, line_start, start)?;
        let (prev_start, prev_end) = self.lines.line_span(line - 1)?;
        let prev = self.source.get(prev_start..prev_end)?;
        LOCATION_MARKER_LINE
            .is_match(prev.trim_end_matches('\n'))
            .then(|| Span::new(prev_start, prev_end))
    }
}

fn find_child_by_kind<'t>(node: TsNode<'t>, kind: &str) -> Option<TsNode<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|c| c.kind() == kind);
    found
}

/// `{ get set }` on a protocol requirement: accessor keywords with no block
/// behind any of them.
fn is_accessor_requirement(node: TsNode) -> bool {
    if node.kind() != "computed_property" {
        return false;
    }
    let mut cursor = node.walk();
    let accessors: Vec<TsNode> = node
        .named_children(&mut cursor)
        .filter(|c| !c.is_extra())
        .collect();
    !accessors.is_empty()
        && accessors.iter().all(|accessor| {
            matches!(
                accessor.kind(),
                "computed_getter" | "computed_setter" | "computed_modify"
            ) && !["{", "statements", "function_body"]
                .iter()
                .any(|kind| find_child_by_kind(*accessor, kind).is_some())
        })
}

/// Initializer regions and accessor blocks of a property declaration.
///
/// An initializer region runs from the end of the token before `=` through
/// the end of the value, so removing it leaves `name: Type` intact.
fn binding_regions(node: TsNode) -> (Vec<Span>, Vec<Span>) {
    let mut initializers = Vec::new();
    let mut accessors = Vec::new();

    let mut cursor = node.walk();
    let mut children = Vec::new();
    if cursor.goto_first_child() {
        loop {
            children.push((cursor.field_name(), cursor.node()));
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }

    let mut open: Option<Span> = None;
    let mut prev_end: Option<usize> = None;
    for (field, child) in &children {
        let kind = child.kind();
        if (kind == "computed_property" && !is_accessor_requirement(*child))
            || kind == "willset_didset_block"
        {
            if let Some(region) = open.take() {
                initializers.push(region);
            }
            accessors.push(Span::of(*child));
        } else if kind == "=" {
            if let Some(region) = open.take() {
                initializers.push(region);
            }
            let start = prev_end.unwrap_or(child.start_byte());
            open = Some(Span::new(start, child.end_byte()));
        } else if *field == Some("value") {
            if let Some(region) = open.as_mut() {
                region.end = child.end_byte();
            }
        } else if !child.is_extra() {
            if let Some(region) = open.take() {
                initializers.push(region);
            }
        }
        if !child.is_extra() {
            prev_end = Some(child.end_byte());
        }
    }
    if let Some(region) = open.take() {
        initializers.push(region);
    }

    // An `=` with no value behind it is left alone.
    initializers.retain(|region| {
        children
            .iter()
            .any(|(field, c)| *field == Some("value") && c.end_byte() == region.end)
    });
    (initializers, accessors)
}

/// Associated-value clauses and raw values of each case in an `enum_entry`
fn case_payloads(node: TsNode) -> Vec<Span> {
    let mut payloads = Vec::new();
    let mut cursor = node.walk();
    let mut current: Option<Span> = None;

    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            match cursor.field_name() {
                Some("name") => {
                    if let Some(payload) = current.take().filter(|p| !p.is_empty()) {
                        payloads.push(payload);
                    }
                    current = Some(Span::new(child.end_byte(), child.end_byte()));
                }
                Some("data_contents") | Some("raw_value") => {
                    if let Some(payload) = current.as_mut() {
                        payload.end = child.end_byte();
                    }
                }
                _ => {}
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    if let Some(payload) = current.filter(|p| !p.is_empty()) {
        payloads.push(payload);
    }
    payloads
}

//! Swift skeleton generation.
//!
//! The pipeline is parse → rewrite → render → normalize:
//! - every category maps to one pure `Node -> Node` transform in [`DISPATCH`];
//! - transforms only record [`Rewrite`]s, the source text is untouched;
//! - [`render`] turns the recorded rewrites into non-overlapping text edits
//!   against the original source.

use tracing::{debug, warn};

use super::classify::Category;
use super::common::{
    indent_of, leading_indent, location_marker, normalize_output, BODY_PLACEHOLDER,
    HIDDEN_MARKER,
};
use super::config::SkeletonOptions;
use super::symbols::{collect_symbols, Symbol};
use super::tree::{self, Node, Rewrite, Span, Tree};
use super::{SkeletonResult, Summarizer, SupportedLanguage};
use crate::error::{Result, SummarizeError};

// ============ Dispatch Table ============

/// Settings visible to transforms
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteContext {
    pub mark_types: bool,
}

type Transform = fn(Node, &RewriteContext) -> Node;

/// Category → transform. Categories absent from the table only have their
/// children rewritten.
const DISPATCH: &[(Category, Transform)] = &[
    (Category::FunctionLike, strip_body),
    (Category::InitializerLike, strip_body),
    (Category::DeinitializerLike, strip_body),
    (Category::PropertyBinding, elide_initializer),
    (Category::EnumCaseElement, elide_case_payload),
    (Category::TypeDeclaration, rewrite_members),
    (Category::Extension, rewrite_members),
];

fn transform_for(category: Category) -> Option<Transform> {
    DISPATCH
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, t)| *t)
}

/// Rewrite a node and, where its transform keeps them, its children
pub fn rewrite(node: Node, ctx: &RewriteContext) -> Node {
    match transform_for(node.category) {
        Some(transform) => transform(node, ctx),
        None => rewrite_children(node, ctx),
    }
}

pub fn rewrite_all(nodes: Vec<Node>, ctx: &RewriteContext) -> Vec<Node> {
    nodes.into_iter().map(|n| rewrite(n, ctx)).collect()
}

fn rewrite_children(mut node: Node, ctx: &RewriteContext) -> Node {
    node.children = rewrite_all(std::mem::take(&mut node.children), ctx);
    node
}

fn location_rewrite(node: &Node) -> Rewrite {
    Rewrite::LocationMarker {
        line: node.line,
        replaces: node.existing_marker,
    }
}

// ============ Body Stripper ============

/// Hide the body of a function, initializer, deinitializer or subscript.
///
/// Declarations nested in the body go with it. Requirements without a body
/// only receive the location marker.
pub fn strip_body(mut node: Node, _ctx: &RewriteContext) -> Node {
    node.rewrites.push(location_rewrite(&node));
    if let Some(body) = node.body {
        node.rewrites.push(Rewrite::HideBody(body));
        node.children.clear();
    }
    node
}

// ============ Initializer Elider ============

pub fn elide_initializer(mut node: Node, _ctx: &RewriteContext) -> Node {
    let initializers = node.initializers.clone();
    node.rewrites
        .extend(initializers.into_iter().map(Rewrite::ElideInitializer));
    let accessors = node.accessors.clone();
    node.rewrites.extend(accessors.into_iter().map(Rewrite::HideBody));
    node.children.clear();
    node
}

pub fn elide_case_payload(mut node: Node, _ctx: &RewriteContext) -> Node {
    let payloads = node.payloads.clone();
    node.rewrites
        .extend(payloads.into_iter().map(Rewrite::DropPayload));
    node
}

fn rewrite_members(mut node: Node, ctx: &RewriteContext) -> Node {
    if ctx.mark_types {
        node.rewrites.push(location_rewrite(&node));
    }
    rewrite_children(node, ctx)
}

// ============ Renderer ============

#[derive(Debug, Clone, PartialEq, Eq)]
struct Edit {
    span: Span,
    text: String,
}

/// Apply the rewrites recorded on `nodes` to `source`
pub fn render(source: &str, tree: &Tree, nodes: &[Node]) -> Result<String> {
    let mut edits = Vec::new();
    for node in nodes {
        gather_edits(source, tree, node, &mut edits);
    }
    apply_edits(source, edits)
}

fn gather_edits(source: &str, tree: &Tree, node: &Node, edits: &mut Vec<Edit>) {
    for rewrite in &node.rewrites {
        let edit = match rewrite {
            Rewrite::HideBody(span) => Edit {
                span: *span,
                text: BODY_PLACEHOLDER.to_string(),
            },
            Rewrite::ElideInitializer(span) => Edit {
                span: *span,
                text: format!(" {HIDDEN_MARKER}"),
            },
            Rewrite::DropPayload(span) => Edit {
                span: *span,
                text: String::new(),
            },
            Rewrite::LocationMarker { line, replaces } => {
                marker_edit(source, tree, node.span.start, *line, *replaces)
            }
        };
        edits.push(edit);
    }
    for child in &node.children {
        gather_edits(source, tree, child, edits);
    }
}

/// One blank line, the marker at the declaration's indentation, then the
/// declaration itself. A declaration sharing its line with earlier code is
/// moved to a line of its own.
fn marker_edit(
    source: &str,
    tree: &Tree,
    start: usize,
    line: usize,
    replaces: Option<Span>,
) -> Edit {
    let marker = location_marker(line);
    let line_start = tree.lines.line_start(start);

    match leading_indent(source, line_start, start) {
        Some(indent) => {
            let span = match replaces {
                Some(stale) if stale.end == line_start => Span::new(stale.start, line_start),
                _ => Span::new(line_start, line_start),
            };
            Edit {
                span,
                text: format!("\n{indent}{marker}\n"),
            }
        }
        None => {
            let indent = indent_of(&source[line_start..start]);
            Edit {
                span: Span::new(start, start),
                text: format!("\n\n{indent}{marker}\n{indent}"),
            }
        }
    }
}

fn apply_edits(source: &str, mut edits: Vec<Edit>) -> Result<String> {
    edits.sort_by_key(|e| (e.span.start, e.span.end));

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for edit in edits {
        if edit.span.start < cursor {
            return Err(SummarizeError::internal(format!(
                "overlapping rewrites at byte {}",
                edit.span.start
            )));
        }
        let kept = source.get(cursor..edit.span.start).ok_or_else(|| {
            SummarizeError::internal(format!("rewrite boundary {} splits a character", cursor))
        })?;
        out.push_str(kept);
        out.push_str(&edit.text);
        cursor = edit.span.end;
    }
    let rest = source
        .get(cursor..)
        .ok_or_else(|| SummarizeError::internal("rewrite ran past end of source"))?;
    out.push_str(rest);
    Ok(out)
}

// ============ Summarizer ============

/// Full-parse strategy for Swift sources
#[derive(Debug, Clone, Default)]
pub struct SwiftSummarizer {
    pub options: SkeletonOptions,
}

impl SwiftSummarizer {
    pub fn new(options: SkeletonOptions) -> Self {
        Self { options }
    }

    /// Skeleton body text (no banner) for `source`
    pub fn skeleton(&self, source: &str, tree: &Tree) -> Result<String> {
        let ctx = RewriteContext {
            mark_types: self.options.mark_types,
        };
        let rewritten = rewrite_all(tree.nodes.clone(), &ctx);
        let rendered = render(source, tree, &rewritten)?;
        let skeleton = normalize_output(&rendered);
        if self.options.verify_reparse {
            verify_reparse(tree, &skeleton)?;
        }
        Ok(skeleton)
    }
}

impl Summarizer for SwiftSummarizer {
    fn language(&self) -> SupportedLanguage {
        SupportedLanguage::Swift
    }

    fn produce(&self, source: &str) -> Result<SkeletonResult> {
        let tree = tree::parse(source, self.options.max_error_ratio)?;
        if tree.has_error {
            warn!(
                error_ratio = tree.error_ratio(),
                "swift source has syntax errors, continuing with best-effort tree"
            );
        }
        let skeleton = self.skeleton(source, &tree)?;
        let symbols = collect_symbols(&tree.nodes);
        Ok(SkeletonResult::new(
            skeleton,
            symbols,
            SupportedLanguage::Swift,
            source,
        ))
    }

    fn symbols(&self, source: &str) -> Result<Vec<Symbol>> {
        let tree = tree::parse(source, self.options.max_error_ratio)?;
        Ok(collect_symbols(&tree.nodes))
    }
}

/// The rendered skeleton must parse as well as the input did and keep the
/// same top-level declarations.
fn verify_reparse(original: &Tree, skeleton: &str) -> Result<()> {
    let reparsed = tree::parse_lenient(skeleton)?;
    if !original.has_error && reparsed.has_error {
        return Err(SummarizeError::internal(
            "rendered skeleton no longer parses",
        ));
    }
    if !original.has_error && reparsed.top_level_outline() != original.top_level_outline() {
        debug!(
            before = ?original.top_level_outline(),
            after = ?reparsed.top_level_outline(),
            "top-level outline changed"
        );
        return Err(SummarizeError::internal(
            "rendered skeleton changed the top-level declarations",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skeleton_of(code: &str) -> String {
        let tree = tree::parse(code, 1.0).expect("parses");
        SwiftSummarizer::default()
            .skeleton(code, &tree)
            .expect("skeleton")
    }

    fn node_for(code: &str) -> Node {
        tree::parse(code, 1.0).expect("parses").nodes.remove(0)
    }

    #[test]
    fn test_dispatch_table_covers_categories() {
        assert!(transform_for(Category::FunctionLike).is_some());
        assert!(transform_for(Category::EnumCaseElement).is_some());
        assert!(transform_for(Category::Other).is_none());
    }

    #[test]
    fn test_strip_body_records_marker_and_body() {
        let node = node_for("func a() {\n    func b() {}\n}\n");
        let stripped = strip_body(node, &RewriteContext::default());
        assert!(stripped.children.is_empty());
        assert!(matches!(
            stripped.rewrites[0],
            Rewrite::LocationMarker { line: 1, replaces: None }
        ));
        assert!(matches!(stripped.rewrites[1], Rewrite::HideBody(_)));
    }

    #[test]
    fn test_strip_body_is_pure() {
        let node = node_for("func a() { print(1) }\n");
        let before = node.clone();
        let _ = strip_body(node.clone(), &RewriteContext::default());
        assert_eq!(node, before);
    }

    #[test]
    fn test_bodyless_requirement_gets_marker_only() {
        let code = "protocol P {\n    func run() -> Int\n}\n";
        let out = skeleton_of(code);
        assert!(out.contains("    // Line: 2\n    func run() -> Int\n"));
        assert!(!out.contains("implementation hidden"));
    }

    #[test]
    fn test_subscript_requirement_keeps_accessors() {
        let code = "protocol Storage {\n    subscript(key: String) -> Int { get set }\n}\n";
        let out = skeleton_of(code);
        assert!(out.contains("    // Line: 2\n    subscript(key: String) -> Int { get set }\n"));
        assert!(!out.contains("implementation hidden"));
    }

    #[test]
    fn test_subscript_with_accessor_bodies_hidden() {
        let code = "struct Grid {\n    subscript(i: Int) -> Int {\n        get { cells[i] }\n        set { cells[i] = newValue }\n    }\n}\n";
        let out = skeleton_of(code);
        assert!(out.contains("    subscript(i: Int) -> Int { /* implementation hidden */ }\n"));
        assert!(!out.contains("newValue"));
    }

    #[test]
    fn test_function_body_hidden() {
        let code = "\n\n\n\nfunc foo(x: Int) -> Int { return x * 2 }\n";
        let out = skeleton_of(code);
        assert_eq!(
            out,
            "// Line: 5\nfunc foo(x: Int) -> Int { /* implementation hidden */ }\n"
        );
    }

    #[test]
    fn test_members_keep_indentation() {
        let code = "class A {\n    init(v: Int) {\n        self.v = v\n    }\n    deinit {\n        cleanup()\n    }\n}\n";
        let out = skeleton_of(code);
        assert!(out.contains("\n\n    // Line: 2\n    init(v: Int) { /* implementation hidden */ }\n"));
        assert!(out.contains("\n\n    // Line: 5\n    deinit { /* implementation hidden */ }\n"));
        assert!(!out.contains("cleanup"));
    }

    #[test]
    fn test_inline_declaration_moves_to_own_line() {
        let code = "struct S { func a() { work() } }\n";
        let out = skeleton_of(code);
        assert!(out.contains("// Line: 1\nfunc a() { /* implementation hidden */ } }"));
        assert!(!out.contains("work()"));
    }

    #[test]
    fn test_property_initializer_hidden() {
        let code = "struct S {\n    let name: String = \"value\"\n    var count = compute()\n}\n";
        let out = skeleton_of(code);
        assert!(out.contains("let name: String /* hidden */\n"));
        assert!(out.contains("var count /* hidden */\n"));
        assert!(!out.contains("compute()"));
    }

    #[test]
    fn test_computed_property_hidden() {
        let code = "struct S {\n    var total: Int {\n        return 1 + 2\n    }\n}\n";
        let out = skeleton_of(code);
        assert!(out.contains("var total: Int { /* implementation hidden */ }"));
        assert!(!out.contains("1 + 2"));
    }

    #[test]
    fn test_enum_case_payloads_dropped() {
        let code = "enum Code: Int {\n    case ok = 200\n    case missing = 404\n}\nenum Shape {\n    case circle(radius: Double), square(Int)\n}\n";
        let out = skeleton_of(code);
        assert!(out.contains("    case ok\n"));
        assert!(out.contains("    case missing\n"));
        assert!(out.contains("    case circle, square\n"));
        assert!(!out.contains("200"));
        assert!(!out.contains("radius"));
    }

    #[test]
    fn test_mark_types_option() {
        let code = "struct S {}\n";
        let tree = tree::parse(code, 1.0).expect("parses");
        let summarizer = SwiftSummarizer::new(SkeletonOptions::default().with_mark_types(true));
        let out = summarizer.skeleton(code, &tree).expect("skeleton");
        assert_eq!(out, "// Line: 1\nstruct S {}\n");
    }

    #[test]
    fn test_stale_marker_replaced() {
        let code = "\n// Line: 40\nfunc a() {}\n";
        let out = skeleton_of(code);
        assert_eq!(out, "// Line: 3\nfunc a() { /* implementation hidden */ }\n");
    }

    #[test]
    fn test_overlapping_edits_rejected() {
        let edits = vec![
            Edit { span: Span::new(0, 4), text: String::new() },
            Edit { span: Span::new(2, 6), text: String::new() },
        ];
        assert!(apply_edits("abcdefgh", edits).is_err());
    }

    #[test]
    fn test_apply_edits_in_order() {
        let edits = vec![
            Edit { span: Span::new(4, 6), text: "X".to_string() },
            Edit { span: Span::new(0, 0), text: ">".to_string() },
        ];
        assert_eq!(apply_edits("abcdefgh", edits).unwrap(), ">abcdXgh");
    }
}

//! Declaration classifier for the Swift grammar.
//!
//! Classification looks only at node kinds and the `declaration_kind` keyword
//! of `class_declaration`; identifiers never influence the category.

use tree_sitter::Node;

/// Structural category of a declaration node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FunctionLike,
    InitializerLike,
    DeinitializerLike,
    PropertyBinding,
    EnumCaseElement,
    TypeDeclaration,
    Extension,
    Other,
}

impl Category {
    /// Categories whose bodies are implementation and get hidden
    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            Self::FunctionLike | Self::InitializerLike | Self::DeinitializerLike
        )
    }

    /// Categories that own a member list the collector walks into
    pub fn is_container(self) -> bool {
        matches!(self, Self::TypeDeclaration | Self::Extension)
    }
}

/// Classify a tree-sitter Swift node
pub fn classify(node: Node) -> Category {
    match node.kind() {
        "function_declaration" | "protocol_function_declaration" | "subscript_declaration" => {
            Category::FunctionLike
        }
        "init_declaration" => Category::InitializerLike,
        "deinit_declaration" => Category::DeinitializerLike,
        "property_declaration" | "protocol_property_declaration" => Category::PropertyBinding,
        "enum_entry" => Category::EnumCaseElement,
        "protocol_declaration" => Category::TypeDeclaration,
        "class_declaration" => match declaration_keyword(node) {
            Some("extension") => Category::Extension,
            _ => Category::TypeDeclaration,
        },
        _ => Category::Other,
    }
}

/// Keyword introducing a `class_declaration` (class, struct, enum, actor, extension)
pub fn declaration_keyword(node: Node) -> Option<&'static str> {
    if let Some(kind) = node.child_by_field_name("declaration_kind") {
        if let Some(keyword) = as_declaration_keyword(kind.kind()) {
            return Some(keyword);
        }
    }
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .filter(|child| !child.is_named())
        .find_map(|child| as_declaration_keyword(child.kind()));
    found
}

fn as_declaration_keyword(kind: &str) -> Option<&'static str> {
    match kind {
        "class" => Some("class"),
        "struct" => Some("struct"),
        "enum" => Some("enum"),
        "actor" => Some("actor"),
        "extension" => Some("extension"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn first_decl_category(code: &str) -> Category {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_swift::LANGUAGE.into())
            .expect("swift grammar loads");
        let tree = parser.parse(code, None).expect("tree");
        let root = tree.root_node();
        let mut cursor = root.walk();
        let first = root
            .named_children(&mut cursor)
            .find(|n| n.kind() != "comment")
            .expect("a declaration");
        classify(first)
    }

    #[test]
    fn test_classify_type_like() {
        assert_eq!(first_decl_category("class A {}"), Category::TypeDeclaration);
        assert_eq!(first_decl_category("struct A {}"), Category::TypeDeclaration);
        assert_eq!(first_decl_category("enum A { case x }"), Category::TypeDeclaration);
        assert_eq!(first_decl_category("protocol P {}"), Category::TypeDeclaration);
        assert_eq!(first_decl_category("extension Array {}"), Category::Extension);
    }

    #[test]
    fn test_classify_members() {
        assert_eq!(first_decl_category("func f() {}"), Category::FunctionLike);
        assert_eq!(first_decl_category("let x = 1"), Category::PropertyBinding);
        assert_eq!(first_decl_category("import Foundation"), Category::Other);
    }

    #[test]
    fn test_classification_ignores_names() {
        // A type named like a keyword category is still a type.
        assert_eq!(first_decl_category("struct Extension {}"), Category::TypeDeclaration);
        assert_eq!(first_decl_category("func init2() {}"), Category::FunctionLike);
    }

    #[test]
    fn test_category_groups() {
        assert!(Category::InitializerLike.is_function_like());
        assert!(!Category::PropertyBinding.is_function_like());
        assert!(Category::Extension.is_container());
        assert!(!Category::Other.is_container());
    }
}

//! Objective-C skeleton extraction using line patterns.
//!
//! There is no reliable full parser for this grammar here, so the extractor
//! works on comment- and string-blanked lines:
//! - `@interface` / `@implementation` / `@protocol` headers open blocks that
//!   run to `@end` (or end of file);
//! - `@property` lines and `-`/`+` method signatures are only recognized at
//!   brace depth 0 inside a block, never inside method bodies;
//! - a brace block directly after a header is read as instance variables.
//!
//! Anything that does not match is skipped. Missing a declaration is
//! acceptable, inventing one is not.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::common::{
    location_marker, normalize_output, squash_whitespace, truncate_line, BODY_PLACEHOLDER,
    MAX_DEF_LINE_LEN, MAX_SIGNATURE_CONTINUATION_LINES,
};
use super::symbols::{Symbol, SymbolKind};
use super::{SkeletonResult, Summarizer, SupportedLanguage};
use crate::error::Result;

const MEMBER_INDENT: &str = "    ";

static INTERFACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@interface\s+(\w+)\s*(?:<[^>]*>)?\s*(?:\(\s*(\w*)\s*\))?").unwrap()
});
static IMPLEMENTATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@implementation\s+(\w+)\s*(?:\(\s*(\w*)\s*\))?").unwrap());
static PROTOCOL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@protocol\s+(\w+)").unwrap());
static PROTOCOL_FORWARD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@protocol\s+\w+(?:\s*,\s*\w+)*\s*;").unwrap());
static PROPERTY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@property\b").unwrap());
static METHOD_START_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]\s*\(").unwrap());
static METHOD_PARTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([-+])\s*\(([^()]*(?:\([^()]*\)[^()]*)*)\)\s*(.+)$").unwrap()
});
static SELECTOR_PART_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\s*:").unwrap());
static FIRST_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+").unwrap());
static VISIBILITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(private|public|protected|package)\b").unwrap());
static PROTOCOL_SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(optional|required)\b").unwrap());

// ============ Extracted Structure ============

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Interface,
    ClassExtension,
    Category,
    Implementation,
    CategoryImplementation,
    Protocol,
}

impl BlockKind {
    fn symbol_kind(self) -> SymbolKind {
        match self {
            Self::ClassExtension | Self::Category | Self::CategoryImplementation => {
                SymbolKind::Extension
            }
            Self::Interface | Self::Implementation | Self::Protocol => SymbolKind::Type,
        }
    }

    fn takes_ivars(self) -> bool {
        matches!(
            self,
            Self::Interface | Self::ClassExtension | Self::Implementation
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    Property,
    Method { selector: String, has_body: bool },
    /// `@optional` / `@required` section marker inside a protocol
    Section,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub kind: MemberKind,
    pub text: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub name: String,
    pub header: String,
    pub line: usize,
    pub ivars: Vec<String>,
    pub members: Vec<Member>,
}

impl Block {
    fn symbol_name(&self) -> String {
        match self.kind {
            BlockKind::Interface | BlockKind::Implementation | BlockKind::Protocol => {
                self.name.clone()
            }
            _ => {
                let category = category_of(&self.header).unwrap_or_default();
                format!("{}({})", self.name, category)
            }
        }
    }
}

fn category_of(header: &str) -> Option<String> {
    let open = header.find('(')?;
    let close = header[open..].find(')')? + open;
    Some(header[open + 1..close].trim().to_string())
}

// ============ Comment and String Blanking ============

#[derive(Clone, Copy, PartialEq)]
enum LexState {
    Code,
    BlockComment,
}

/// Lines with comments, string/char literal contents and preprocessor lines
/// replaced by spaces, so braces and `@` keywords inside them are never seen.
fn blank_lines(source: &str) -> Vec<String> {
    let mut state = LexState::Code;
    let mut out = Vec::new();

    for raw in source.lines() {
        let trimmed = raw.trim_start();
        if state == LexState::Code && trimmed.starts_with('#') {
            out.push(String::new());
            continue;
        }

        let chars: Vec<char> = raw.chars().collect();
        let mut line = String::with_capacity(raw.len());
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();
            match state {
                LexState::BlockComment => {
                    if c == '*' && next == Some('/') {
                        state = LexState::Code;
                        line.push_str("  ");
                        i += 2;
                    } else {
                        line.push(' ');
                        i += 1;
                    }
                }
                LexState::Code => {
                    if c == '/' && next == Some('/') {
                        break;
                    } else if c == '/' && next == Some('*') {
                        state = LexState::BlockComment;
                        line.push_str("  ");
                        i += 2;
                    } else if c == '"' || c == '\'' {
                        line.push(c);
                        i += 1;
                        while i < chars.len() && chars[i] != c {
                            if chars[i] == '\\' {
                                line.push(' ');
                                i += 1;
                            }
                            if i < chars.len() {
                                line.push(' ');
                                i += 1;
                            }
                        }
                        if i < chars.len() {
                            line.push(c);
                            i += 1;
                        }
                    } else {
                        line.push(c);
                        i += 1;
                    }
                }
            }
        }
        out.push(line);
    }
    out
}

fn brace_delta(line: &str) -> isize {
    line.chars().fold(0, |acc, c| match c {
        '{' => acc + 1,
        '}' => acc - 1,
        _ => acc,
    })
}

// ============ Scanner ============

enum PendingKind {
    Property,
    Method,
}

struct Pending {
    kind: PendingKind,
    text: String,
    line: usize,
    continuation: usize,
}

struct Scanner {
    blocks: Vec<Block>,
    current: Option<Block>,
    depth: usize,
    ivars_allowed: bool,
    in_ivars: bool,
    ivar_carry: String,
    pending: Option<Pending>,
}

/// Extract interface-level blocks from Objective-C source
pub fn extract_blocks(source: &str) -> Vec<Block> {
    let mut scanner = Scanner {
        blocks: Vec::new(),
        current: None,
        depth: 0,
        ivars_allowed: false,
        in_ivars: false,
        ivar_carry: String::new(),
        pending: None,
    };

    for (idx, line) in blank_lines(source).iter().enumerate() {
        scanner.scan_line(line, idx + 1);
    }
    scanner.close_block();

    debug!(blocks = scanner.blocks.len(), "scanned objective-c source");
    scanner.blocks
}

impl Scanner {
    fn scan_line(&mut self, line: &str, line_no: usize) {
        let trimmed = line.trim();

        if self.current.is_none() {
            self.depth = 0;
            if let Some(block) = open_block(line, line_no) {
                self.current = Some(block);
                self.ivars_allowed = true;
                self.after_header(line);
            }
            return;
        }

        if trimmed.starts_with("@end") {
            self.close_block();
            return;
        }

        if self.pending.is_some() {
            self.continue_pending(trimmed);
            self.track_depth(line);
            return;
        }

        if self.in_ivars {
            self.read_ivars(line, false);
            self.track_depth(line);
            return;
        }

        if self.depth == 0 {
            if self.ivars_allowed && trimmed.starts_with('{') {
                self.track_depth(line);
                if self.depth > 0 {
                    self.in_ivars = true;
                }
                self.read_ivars(line, true);
                self.ivars_allowed = false;
                return;
            }
            if !trimmed.is_empty() {
                self.ivars_allowed = false;
            }
            self.match_member(trimmed, line_no);
        }
        self.track_depth(line);
    }

    fn after_header(&mut self, line: &str) {
        let takes_ivars = self
            .current
            .as_ref()
            .is_some_and(|b| b.kind.takes_ivars());
        if !takes_ivars {
            self.ivars_allowed = false;
        }
        if line.contains('{') {
            self.track_depth(line);
            if takes_ivars && self.depth > 0 {
                self.in_ivars = true;
                self.read_ivars(line, true);
            }
            self.ivars_allowed = false;
        }
    }

    fn track_depth(&mut self, line: &str) {
        let next = self.depth as isize + brace_delta(line);
        self.depth = next.max(0) as usize;
        if self.depth == 0 {
            self.in_ivars = false;
        }
    }

    fn read_ivars(&mut self, line: &str, is_start: bool) {
        let Some(block) = self.current.as_mut() else {
            return;
        };
        let mut segment = line;
        if is_start {
            segment = match segment.find('{') {
                Some(pos) => &segment[pos + 1..],
                None => segment,
            };
        }
        if let Some(pos) = segment.find('}') {
            segment = &segment[..pos];
        }

        let mut rest = segment.trim();
        while let Some(m) = VISIBILITY_RE.find(rest) {
            block.ivars.push(m.as_str().to_string());
            rest = rest[m.end()..].trim_start();
        }

        self.ivar_carry.push(' ');
        self.ivar_carry.push_str(rest);
        if let Some(last) = self.ivar_carry.rfind(';') {
            let complete = self.ivar_carry[..last].to_string();
            let carry = self.ivar_carry[last + 1..].to_string();
            for decl in complete.split(';') {
                let decl = squash_whitespace(decl);
                if !decl.is_empty() {
                    block.ivars.push(format!("{decl};"));
                }
            }
            self.ivar_carry = carry;
        }
        if self.ivar_carry.trim().is_empty() {
            self.ivar_carry.clear();
        }
    }

    fn match_member(&mut self, trimmed: &str, line_no: usize) {
        let is_protocol = self
            .current
            .as_ref()
            .is_some_and(|b| b.kind == BlockKind::Protocol);

        if PROPERTY_RE.is_match(trimmed) {
            self.start_pending(PendingKind::Property, trimmed, line_no);
        } else if METHOD_START_RE.is_match(trimmed) {
            self.start_pending(PendingKind::Method, trimmed, line_no);
        } else if is_protocol {
            if let Some(m) = PROTOCOL_SECTION_RE.find(trimmed) {
                self.push_member(Member {
                    kind: MemberKind::Section,
                    text: m.as_str().to_string(),
                    line: line_no,
                });
            }
        }
    }

    fn start_pending(&mut self, kind: PendingKind, text: &str, line_no: usize) {
        self.pending = Some(Pending {
            kind,
            text: text.to_string(),
            line: line_no,
            continuation: 0,
        });
        self.finish_pending_if_terminated();
    }

    fn continue_pending(&mut self, trimmed: &str) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        pending.continuation += 1;
        if pending.continuation > MAX_SIGNATURE_CONTINUATION_LINES {
            debug!(line = pending.line, "dropping unterminated declaration");
            self.pending = None;
            return;
        }
        pending.text.push(' ');
        pending.text.push_str(trimmed);
        self.finish_pending_if_terminated();
    }

    fn finish_pending_if_terminated(&mut self) {
        let Some(pending) = self.pending.as_ref() else {
            return;
        };
        let Some(end) = pending.text.find(['{', ';']) else {
            return;
        };
        let has_body = pending.text[end..].starts_with('{');
        let signature = squash_whitespace(&pending.text[..end]);
        let line = pending.line;

        let member = match pending.kind {
            PendingKind::Property => (!has_body).then(|| Member {
                kind: MemberKind::Property,
                text: format!("{signature};"),
                line,
            }),
            PendingKind::Method => method_member(&signature, has_body, line),
        };
        self.pending = None;
        if let Some(member) = member {
            self.push_member(member);
        }
    }

    fn push_member(&mut self, member: Member) {
        if let Some(block) = self.current.as_mut() {
            block.members.push(member);
        }
    }

    fn close_block(&mut self) {
        if let Some(block) = self.current.take() {
            self.blocks.push(block);
        }
        self.depth = 0;
        self.in_ivars = false;
        self.ivars_allowed = false;
        self.ivar_carry.clear();
        self.pending = None;
    }
}

fn open_block(line: &str, line_no: usize) -> Option<Block> {
    let header_text = |start: usize| {
        let text = &line[start..];
        let text = text.split('{').next().unwrap_or(text);
        squash_whitespace(text)
    };

    if let Some(caps) = INTERFACE_RE.captures(line) {
        let whole = caps.get(0)?;
        let kind = match caps.get(2) {
            Some(cat) if cat.as_str().is_empty() => BlockKind::ClassExtension,
            Some(_) => BlockKind::Category,
            None => BlockKind::Interface,
        };
        return Some(Block {
            kind,
            name: caps[1].to_string(),
            header: header_text(whole.start()),
            line: line_no,
            ivars: Vec::new(),
            members: Vec::new(),
        });
    }

    if let Some(caps) = IMPLEMENTATION_RE.captures(line) {
        let whole = caps.get(0)?;
        let kind = match caps.get(2) {
            Some(_) => BlockKind::CategoryImplementation,
            None => BlockKind::Implementation,
        };
        return Some(Block {
            kind,
            name: caps[1].to_string(),
            header: header_text(whole.start()),
            line: line_no,
            ivars: Vec::new(),
            members: Vec::new(),
        });
    }

    if PROTOCOL_FORWARD_RE.is_match(line) {
        return None;
    }
    let caps = PROTOCOL_RE.captures(line)?;
    let whole = caps.get(0)?;
    Some(Block {
        kind: BlockKind::Protocol,
        name: caps[1].to_string(),
        header: header_text(whole.start()),
        line: line_no,
        ivars: Vec::new(),
        members: Vec::new(),
    })
}

/// Build a method member from a squashed signature such as
/// `- (void)setValue:(id)value forKey:(NSString *)key`
fn method_member(signature: &str, has_body: bool, line: usize) -> Option<Member> {
    let caps = METHOD_PARTS_RE.captures(signature)?;
    let prefix = &caps[1];
    let return_type = caps[2].trim();
    let rest = caps[3].trim();

    let outside_parens = blank_parenthesized(rest);
    let keywords: Vec<&str> = SELECTOR_PART_RE
        .captures_iter(&outside_parens)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();
    let selector = if keywords.is_empty() {
        FIRST_WORD_RE.find(rest)?.as_str().to_string()
    } else {
        keywords.iter().map(|k| format!("{k}:")).collect()
    };

    let head = format!("{prefix} ({return_type}){rest}");
    let text = if has_body {
        format!("{head} {BODY_PLACEHOLDER}")
    } else {
        format!("{head};")
    };
    Some(Member {
        kind: MemberKind::Method { selector, has_body },
        text: truncate_line(&text, MAX_DEF_LINE_LEN),
        line,
    })
}

/// `text` with every parenthesized group blanked out. Parameter types and
/// trailing macros such as `NS_SWIFT_NAME(fetch(completion:))` live inside
/// parentheses; selector keywords never do.
fn blank_parenthesized(text: &str) -> String {
    let mut depth = 0usize;
    text.chars()
        .map(|c| match c {
            '(' => {
                depth += 1;
                ' '
            }
            ')' => {
                depth = depth.saturating_sub(1);
                ' '
            }
            _ if depth > 0 => ' ',
            _ => c,
        })
        .collect()
}

// ============ Rendering ============

/// Render blocks as an interface listing with location markers
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push('\n');
        out.push_str(&location_marker(block.line));
        out.push('\n');
        out.push_str(&block.header);
        out.push('\n');

        if !block.ivars.is_empty() {
            out.push_str("{\n");
            for ivar in &block.ivars {
                out.push_str(MEMBER_INDENT);
                out.push_str(ivar);
                out.push('\n');
            }
            out.push_str("}\n");
        }

        for member in &block.members {
            out.push('\n');
            if member.kind == MemberKind::Section {
                out.push_str(&member.text);
                out.push('\n');
                continue;
            }
            out.push_str(MEMBER_INDENT);
            out.push_str(&location_marker(member.line));
            out.push('\n');
            out.push_str(MEMBER_INDENT);
            out.push_str(&member.text);
            out.push('\n');
        }
        out.push_str("@end\n");
    }
    normalize_output(&out)
}

/// Symbols for blocks and methods, in source order
pub fn block_symbols(blocks: &[Block]) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = blocks
        .iter()
        .flat_map(|block| {
            let head = Symbol::new(block.symbol_name(), block.kind.symbol_kind(), block.line);
            let methods = block.members.iter().filter_map(|m| match &m.kind {
                MemberKind::Method { selector, .. } => Some(Symbol::new(
                    format!("{}{}", &m.text[..1], selector),
                    SymbolKind::Function,
                    m.line,
                )),
                _ => None,
            });
            std::iter::once(head).chain(methods)
        })
        .collect();
    symbols.sort_by_key(|s| s.line);
    symbols
}

// ============ Summarizer ============

/// Pattern-based strategy for Objective-C sources
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjcSummarizer;

impl Summarizer for ObjcSummarizer {
    fn language(&self) -> SupportedLanguage {
        SupportedLanguage::ObjectiveC
    }

    fn produce(&self, source: &str) -> Result<SkeletonResult> {
        let blocks = extract_blocks(source);
        Ok(SkeletonResult::new(
            render_blocks(&blocks),
            block_symbols(&blocks),
            SupportedLanguage::ObjectiveC,
            source,
        ))
    }

    fn symbols(&self, source: &str) -> Result<Vec<Symbol>> {
        Ok(block_symbols(&extract_blocks(source)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"#import <Foundation/Foundation.h>

@protocol Greeter;
@class Person;

/// Loads people.
@interface PersonStore : NSObject <NSCoding>
{
    NSMutableArray *_people;
    @private
    int _count;
}

@property (nonatomic, strong) NSString *name;
@property (nonatomic, readonly) NSInteger count;

- (instancetype)initWithName:(NSString *)name;
+ (PersonStore *)sharedStore;
- (void)addPerson:(Person *)person
          atIndex:(NSUInteger)index;
@end
"#;

    const IMPLEMENTATION: &str = r#"#import "PersonStore.h"

@implementation PersonStore

- (instancetype)initWithName:(NSString *)name {
    self = [super init];
    if (self) {
        // - (void)notAMethod;
        _name = name;
    }
    return self;
}

+ (PersonStore *)sharedStore
{
    static PersonStore *store = nil;
    NSString *fake = @"- (void)alsoNotAMethod {";
    return store;
}

@end

@interface PersonStore (Sorting)
- (NSArray *)sortedPeople;
@end
"#;

    #[test]
    fn test_interface_block() {
        let blocks = extract_blocks(HEADER);
        assert_eq!(blocks.len(), 1);
        let block = &blocks[0];
        assert_eq!(block.kind, BlockKind::Interface);
        assert_eq!(block.name, "PersonStore");
        assert_eq!(block.header, "@interface PersonStore : NSObject <NSCoding>");
        assert_eq!(block.line, 7);
        assert_eq!(
            block.ivars,
            vec!["NSMutableArray *_people;", "@private", "int _count;"]
        );
        let texts: Vec<&str> = block.members.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "@property (nonatomic, strong) NSString *name;",
                "@property (nonatomic, readonly) NSInteger count;",
                "- (instancetype)initWithName:(NSString *)name;",
                "+ (PersonStore *)sharedStore;",
                "- (void)addPerson:(Person *)person atIndex:(NSUInteger)index;",
            ]
        );
        assert_eq!(block.members[4].line, 19);
    }

    #[test]
    fn test_implementation_skips_method_bodies() {
        let blocks = extract_blocks(IMPLEMENTATION);
        assert_eq!(blocks.len(), 2);
        let implementation = &blocks[0];
        assert_eq!(implementation.kind, BlockKind::Implementation);
        let texts: Vec<&str> = implementation
            .members
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "- (instancetype)initWithName:(NSString *)name { /* implementation hidden */ }",
                "+ (PersonStore *)sharedStore { /* implementation hidden */ }",
            ]
        );
        assert_eq!(blocks[1].kind, BlockKind::Category);
    }

    #[test]
    fn test_symbols() {
        let symbols = block_symbols(&extract_blocks(IMPLEMENTATION));
        let expected = vec![
            Symbol::new("PersonStore", SymbolKind::Type, 3),
            Symbol::new("-initWithName:", SymbolKind::Function, 5),
            Symbol::new("+sharedStore", SymbolKind::Function, 14),
            Symbol::new("PersonStore(Sorting)", SymbolKind::Extension, 23),
            Symbol::new("-sortedPeople", SymbolKind::Function, 24),
        ];
        assert_eq!(symbols, expected);
    }

    #[test]
    fn test_multi_keyword_selector() {
        let symbols = block_symbols(&extract_blocks(HEADER));
        assert!(symbols
            .iter()
            .any(|s| s.name == "-addPerson:atIndex:" && s.line == 19));
    }

    #[test]
    fn test_trailing_macros_add_no_selector_parts() {
        let code = "@interface Client : NSObject\n\
- (void)fetchWithCompletion:(void (^)(NSError *error))completion NS_SWIFT_NAME(fetch(completion:));\n\
- (void)reload:(BOOL)animated __attribute__((swift_name(reload(animated:))));\n\
- (void)reset API_AVAILABLE(ios(13.0));\n\
@end\n";
        let blocks = extract_blocks(code);
        let names: Vec<String> = block_symbols(&blocks).into_iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["Client", "-fetchWithCompletion:", "-reload:", "-reset"]
        );
        let out = render_blocks(&blocks);
        assert!(out.contains("completion NS_SWIFT_NAME(fetch(completion:));\n"));
    }

    #[test]
    fn test_render_layout() {
        let out = render_blocks(&extract_blocks(HEADER));
        assert!(out.starts_with("// Line: 7\n@interface PersonStore : NSObject <NSCoding>\n{\n"));
        assert!(out.contains("\n\n    // Line: 14\n    @property (nonatomic, strong) NSString *name;\n"));
        assert!(out.ends_with("@end\n"));
        assert!(!out.contains("\n\n\n"));
    }

    #[test]
    fn test_protocol_sections_and_forward_declarations() {
        let code = "@protocol A;\n@protocol Delegate <NSObject>\n@required\n- (void)done;\n@optional\n- (void)progress:(float)p;\n@end\n";
        let blocks = extract_blocks(code);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Protocol);
        assert_eq!(blocks[0].name, "Delegate");
        let kinds: Vec<&MemberKind> = blocks[0].members.iter().map(|m| &m.kind).collect();
        assert_eq!(kinds.len(), 4);
        assert_eq!(*kinds[0], MemberKind::Section);
        let out = render_blocks(&blocks);
        assert!(out.contains("\n\n@optional\n"));
    }

    #[test]
    fn test_unterminated_block_closed_at_eof() {
        let code = "@interface Broken : NSObject\n- (void)a;\n";
        let blocks = extract_blocks(code);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].members.len(), 1);
    }

    #[test]
    fn test_garbage_yields_nothing() {
        let code = "int main(void) { return 0; }\n- not a method\n";
        assert!(extract_blocks(code).is_empty());
    }

    #[test]
    fn test_block_comments_are_ignored() {
        let code = "/*\n@interface Hidden : NSObject\n@end\n*/\n@interface Shown\n@end\n";
        let blocks = extract_blocks(code);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "Shown");
    }
}

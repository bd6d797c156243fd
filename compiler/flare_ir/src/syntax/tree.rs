//! Arena-backed syntax tree.

use std::fmt::Write as _;

use super::NodeKind;
use crate::{Span, TokenKind, TokenList};

/// Index of a node in a [`SyntaxTree`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A child of a node: either another node or a token (by index into the
/// tree's token list).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Element {
    Node(NodeId),
    Token(u32),
}

#[derive(Clone, Debug)]
struct NodeData {
    kind: NodeKind,
    children: Vec<Element>,
    error: Option<Box<str>>,
    /// Offset used for the span of a node without tokens.
    offset: u32,
}

/// Concrete syntax tree over a token list.
///
/// Owns a copy of the source and its tokens, so it can answer text queries
/// on its own. Nodes are stored in pre-order; the root is always node 0.
#[derive(Clone)]
pub struct SyntaxTree {
    source: Box<str>,
    tokens: TokenList,
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// The root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Total number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn kind(&self, node: NodeId) -> NodeKind {
        self.nodes[node.index()].kind
    }

    #[inline]
    pub fn children(&self, node: NodeId) -> &[Element] {
        &self.nodes[node.index()].children
    }

    /// Child nodes only, skipping token leaves.
    pub fn child_nodes(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(node).iter().filter_map(|el| match el {
            Element::Node(id) => Some(*id),
            Element::Token(_) => None,
        })
    }

    /// Significant (non-trivia) token leaves directly under `node`.
    pub fn child_tokens(&self, node: NodeId) -> impl Iterator<Item = u32> + '_ {
        self.children(node).iter().filter_map(|el| match el {
            Element::Token(index) if !self.token_kind(*index).is_trivia() => Some(*index),
            _ => None,
        })
    }

    /// Message of an error node.
    #[inline]
    pub fn error_message(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.index()].error.as_deref()
    }

    /// The source text the tree was built from.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    #[inline]
    pub fn token_kind(&self, index: u32) -> TokenKind {
        self.tokens.kind(index as usize)
    }

    #[inline]
    pub fn token_text(&self, index: u32) -> &str {
        self.tokens
            .get(index as usize)
            .map_or("", |t| t.text(&self.source))
    }

    /// First and last token leaf in the subtree, in source order.
    fn token_bounds(&self, node: NodeId) -> Option<(u32, u32)> {
        let mut first = None;
        let mut last = None;
        self.walk_tokens(node, &mut |index| {
            if first.is_none() {
                first = Some(index);
            }
            last = Some(index);
        });
        first.zip(last)
    }

    fn walk_tokens(&self, node: NodeId, f: &mut impl FnMut(u32)) {
        for el in self.children(node) {
            match *el {
                Element::Token(index) => f(index),
                Element::Node(child) => self.walk_tokens(child, f),
            }
        }
    }

    /// Byte range covered by the node. Nodes without tokens are empty spans
    /// at the position where they were opened.
    pub fn text_range(&self, node: NodeId) -> Span {
        match self.token_bounds(node) {
            Some((first, last)) => {
                let start = self.tokens[first as usize].span.start;
                let end = self.tokens[last as usize].span.end;
                Span::new(start, end)
            }
            None => Span::point(self.nodes[node.index()].offset),
        }
    }

    /// Concatenated text of every leaf under `node`.
    pub fn text(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.walk_tokens(node, &mut |index| out.push_str(self.token_text(index)));
        out
    }

    /// Number of token leaves in the whole tree.
    pub fn token_leaf_count(&self) -> usize {
        let mut count = 0;
        self.walk_tokens(self.root(), &mut |_| count += 1);
        count
    }

    /// Pre-order traversal of `node` and all nodes below it.
    pub fn descendants(&self, node: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![node],
        }
    }

    /// All nodes of `kind`, in source order.
    pub fn find_all(&self, kind: NodeKind) -> Vec<NodeId> {
        self.descendants(self.root())
            .filter(|id| self.kind(*id) == kind)
            .collect()
    }

    /// Error nodes with their messages and ranges, in source order.
    pub fn errors(&self) -> impl Iterator<Item = (&str, Span)> + '_ {
        self.descendants(self.root()).filter_map(|id| {
            self.error_message(id)
                .map(|message| (message, self.text_range(id)))
        })
    }

    /// Indented dump of every node and token, trivia included.
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root(), 0, true, &mut out);
        out
    }

    /// Indented dump without spans and without trivia tokens.
    ///
    /// Intended for tests, where it keeps expected trees readable.
    pub fn compact_dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root(), 0, false, &mut out);
        out
    }

    fn dump_node(&self, node: NodeId, depth: usize, full: bool, out: &mut String) {
        let indent = "  ".repeat(depth);
        let kind = self.kind(node);
        let _ = write!(out, "{indent}{kind:?}");
        if full {
            let _ = write!(out, "@{}", self.text_range(node));
        }
        if let Some(message) = self.error_message(node) {
            let _ = write!(out, " {message:?}");
        }
        out.push('\n');
        for el in self.children(node) {
            match *el {
                Element::Node(child) => self.dump_node(child, depth + 1, full, out),
                Element::Token(index) => {
                    let token_kind = self.token_kind(index);
                    if !full && token_kind.is_trivia() {
                        continue;
                    }
                    let text = self.token_text(index);
                    if full {
                        let span = self.tokens[index as usize].span;
                        let _ = writeln!(out, "{indent}  {token_kind:?}@{span} {text:?}");
                    } else {
                        let _ = writeln!(out, "{indent}  {text:?}");
                    }
                }
            }
        }
    }
}

impl std::fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.debug_dump())
    }
}

/// Iterator returned by [`SyntaxTree::descendants`].
pub struct Descendants<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        let children = self.tree.children(node);
        self.stack.extend(children.iter().rev().filter_map(|el| match el {
            Element::Node(id) => Some(*id),
            Element::Token(_) => None,
        }));
        Some(node)
    }
}

/// Incremental builder for a [`SyntaxTree`].
///
/// Receives a well-nested sequence of `start_node` / `token` /
/// `finish_node` calls. Nodes left open by `finish` are closed implicitly;
/// if no node was started at all, an empty `File` root is created.
pub struct TreeBuilder {
    source: Box<str>,
    tokens: TokenList,
    nodes: Vec<NodeData>,
    stack: Vec<NodeId>,
    offset: u32,
}

impl TreeBuilder {
    pub fn new(source: &str, tokens: &TokenList) -> Self {
        TreeBuilder {
            source: source.into(),
            tokens: tokens.clone(),
            nodes: Vec::new(),
            stack: Vec::new(),
            offset: 0,
        }
    }

    /// Open a node as a child of the current one.
    pub fn start_node(&mut self, kind: NodeKind) {
        self.open(kind, None);
    }

    /// Open an error node carrying `message`.
    pub fn start_error(&mut self, message: &str) {
        self.open(NodeKind::Error, Some(message.into()));
    }

    fn open(&mut self, kind: NodeKind, error: Option<Box<str>>) {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        if let Some(parent) = self.stack.last() {
            self.nodes[parent.index()].children.push(Element::Node(id));
        }
        self.nodes.push(NodeData {
            kind,
            children: Vec::new(),
            error,
            offset: self.offset,
        });
        self.stack.push(id);
    }

    /// Attach the token at `index` to the current node.
    pub fn token(&mut self, index: u32) {
        if self.stack.is_empty() {
            self.start_node(NodeKind::File);
        }
        if let Some(token) = self.tokens.get(index as usize) {
            self.offset = token.span.end;
        }
        if let Some(current) = self.stack.last() {
            self.nodes[current.index()].children.push(Element::Token(index));
        }
    }

    /// Close the current node.
    pub fn finish_node(&mut self) {
        self.stack.pop();
    }

    /// Number of nodes currently open.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn finish(mut self) -> SyntaxTree {
        if self.nodes.is_empty() {
            self.start_node(NodeKind::File);
        }
        SyntaxTree {
            source: self.source,
            tokens: self.tokens,
            nodes: self.nodes,
        }
    }
}

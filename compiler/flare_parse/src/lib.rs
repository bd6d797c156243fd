//! Error-tolerant recursive descent parser for ActionScript with E4X.
//!
//! Produces a lossless concrete syntax tree: every token of the input,
//! trivia included, ends up as a leaf exactly once. The parser never fails;
//! malformed input becomes `Error` nodes carrying a message.
//!
//! # Architecture
//!
//! - `cursor`: significant-token navigation over the lexer's `TokenList`
//! - `builder`: marker/event log and the sink that builds the tree
//! - `context`: scoped context flags (`IN_INTERFACE`, `IN_BLOCK_BODY`, `NO_IN`)
//! - `recovery`: token sets for lookahead and resynchronisation
//! - `grammar`: statements, functions, expressions, types and XML literals
//!
//! # Entry points
//!
//! [`parse`] drives a parse over a token list; [`parse_source`] lexes first.
//! [`ParseOptions`] selects the root node kind, fragment mode and depth limit.

mod builder;
mod context;
mod cursor;
mod error;
mod grammar;
pub mod recovery;

use std::sync::atomic::{AtomicUsize, Ordering};

use flare_ir::{NodeKind, SyntaxTree, TokenKind, TokenList};
use tracing::debug;

use builder::Builder;
pub use context::{ForceContext, MethodEmptiness, ParseContext};
pub use cursor::{Cursor, GtOperator};
pub use error::{ParseErrorKind, SyntaxError};
pub use recovery::TokenSet;

/// Default limit on the nesting depth of recursive productions.
pub const DEFAULT_MAX_TREE_DEPTH: usize = 100;

static MAX_TREE_DEPTH: AtomicUsize = AtomicUsize::new(DEFAULT_MAX_TREE_DEPTH);

/// Process-wide nesting limit used when [`ParseOptions`] does not set one.
pub fn max_tree_depth() -> usize {
    MAX_TREE_DEPTH.load(Ordering::Relaxed)
}

/// Change the process-wide nesting limit.
///
/// Affects every later parse without an explicit limit; mainly useful for
/// lowering the limit in tests.
pub fn set_max_tree_depth(depth: usize) {
    MAX_TREE_DEPTH.store(depth, Ordering::Relaxed);
}

/// Options for a single parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Kind of the root node.
    pub root_kind: NodeKind,
    /// Parse a fragment instead of a whole file.
    pub force_context: ForceContext,
    /// Overrides [`max_tree_depth`] for this parse.
    pub max_tree_depth: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            root_kind: NodeKind::File,
            force_context: ForceContext::None,
            max_tree_depth: None,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn with_root_kind(mut self, root_kind: NodeKind) -> Self {
        self.root_kind = root_kind;
        self
    }

    #[must_use]
    pub fn with_force_context(mut self, force_context: ForceContext) -> Self {
        self.force_context = force_context;
        self
    }

    #[must_use]
    pub fn with_max_tree_depth(mut self, depth: usize) -> Self {
        self.max_tree_depth = Some(depth);
        self
    }
}

/// Result of a parse: the tree plus its errors in source order.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub tree: SyntaxTree,
    pub errors: Vec<SyntaxError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse `tokens` (lexed from `source`) into a syntax tree.
pub fn parse(source: &str, tokens: &TokenList, options: &ParseOptions) -> ParseOutput {
    let max_depth = options.max_tree_depth.unwrap_or_else(max_tree_depth);
    debug!(
        tokens = tokens.len(),
        root = %options.root_kind,
        force = ?options.force_context,
        max_depth,
        "parse"
    );

    let mut parser = Parser::new(tokens, source, max_depth);
    parser.parse_root(options.root_kind, options.force_context);
    let events = parser.builder.finish();
    let tree = builder::sink::build_tree(events, tokens, source);
    let errors = SyntaxError::collect(&tree);

    debug!(nodes = tree.node_count(), errors = errors.len(), "parse done");
    ParseOutput { tree, errors }
}

/// Lex and parse `source`.
pub fn parse_source(source: &str, options: &ParseOptions) -> ParseOutput {
    let tokens = flare_lexer::lex(source);
    parse(source, &tokens, options)
}

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    builder: Builder,
    context: ParseContext,
    method_emptiness: Option<MethodEmptiness>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a TokenList, source: &'a str, max_depth: usize) -> Self {
        Parser {
            cursor: Cursor::new(tokens, source),
            builder: Builder::new(),
            context: ParseContext::NONE,
            method_emptiness: None,
            depth: 0,
            max_depth,
        }
    }

    // Cursor delegation

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    pub(crate) fn current_text(&self) -> &'a str {
        self.cursor.current_text()
    }

    #[inline]
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    pub(crate) fn at_set(&self, set: TokenSet) -> bool {
        self.cursor.check_set(set)
    }

    /// Kind of the `n`-th significant token ahead.
    #[inline]
    pub(crate) fn nth(&self, n: usize) -> TokenKind {
        self.cursor.peek_kind_at(n)
    }

    #[inline]
    pub(crate) fn at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    pub(crate) fn has_newline_before(&self) -> bool {
        self.cursor.has_newline_before()
    }

    #[inline]
    pub(crate) fn has_newline_after(&self) -> bool {
        self.cursor.has_newline_after()
    }

    #[inline]
    pub(crate) fn gt_operator(&self) -> Option<GtOperator> {
        self.cursor.gt_operator()
    }

    // Consumption

    /// Consume the current token. Does nothing at the end of input.
    pub(crate) fn bump(&mut self) {
        if !self.cursor.is_at_end() {
            let index = self.cursor.advance();
            self.builder.token(index);
        }
    }

    pub(crate) fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or record "expected '<kind>'" without consuming.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> bool {
        self.expect_or(kind, ParseErrorKind::Expected(kind))
    }

    /// Consume `kind` or record `error` without consuming.
    pub(crate) fn expect_or(&mut self, kind: TokenKind, error: ParseErrorKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(error);
            false
        }
    }

    // Errors

    /// Record an error at the current position without consuming.
    pub(crate) fn error(&mut self, error: ParseErrorKind) {
        let m = self.start();
        m.error(self, error);
    }

    /// Wrap the current token in an error node. At the end of input only
    /// the error is recorded.
    pub(crate) fn error_bump(&mut self, error: ParseErrorKind) {
        let m = self.start();
        self.bump();
        m.error(self, error);
    }

    // Context

    #[inline]
    pub(crate) fn context(&self) -> ParseContext {
        self.context
    }

    /// Run `f` with `flag` set, restoring the previous context afterwards.
    pub(crate) fn with_context<R>(
        &mut self,
        flag: ParseContext,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let saved = self.context;
        self.context = saved.with(flag);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Run `f` with `flag` cleared, restoring the previous context afterwards.
    pub(crate) fn without_context<R>(
        &mut self,
        flag: ParseContext,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let saved = self.context;
        self.context = saved.without(flag);
        let result = f(self);
        self.context = saved;
        result
    }

    #[inline]
    pub(crate) fn method_emptiness(&self) -> Option<MethodEmptiness> {
        self.method_emptiness
    }

    pub(crate) fn set_method_emptiness(&mut self, value: Option<MethodEmptiness>) {
        self.method_emptiness = value;
    }

    /// Run `f` with the given method emptiness, restoring the previous value.
    pub(crate) fn with_method_emptiness<R>(
        &mut self,
        value: Option<MethodEmptiness>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let saved = self.method_emptiness;
        self.method_emptiness = value;
        let result = f(self);
        self.method_emptiness = saved;
        result
    }

    // Depth

    /// Run a recursive production one level deeper.
    ///
    /// Past the depth limit, records an error, wraps the current token in it
    /// and returns `on_limit` without calling `f`.
    pub(crate) fn with_depth<R>(&mut self, on_limit: R, f: impl FnOnce(&mut Self) -> R) -> R {
        if self.depth >= self.max_depth {
            debug!(
                depth = self.depth,
                pos = self.cursor.position(),
                "maximum tree depth exceeded"
            );
            self.error_bump(ParseErrorKind::DepthExceeded);
            return on_limit;
        }
        self.depth += 1;
        let result = flare_stack::ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    /// Whether an iterative chain of `count` links stays within the depth limit.
    #[inline]
    pub(crate) fn within_depth(&self, count: usize) -> bool {
        self.depth + count < self.max_depth
    }
}

#[cfg(test)]
mod tests;

//! Replays parser events into a [`SyntaxTree`].
//!
//! Forward-parent chains are linearised first, so that a node wrapped via
//! `precede` opens before its child. Trivia the cursor skipped are then
//! placed between significant tokens: leading trivia go to the outermost
//! node that starts at the following token unless a left binder claims a
//! doc comment; trailing trivia stay outside a node unless its right
//! binder claims them. Everything left at the end belongs to the root.

use flare_ir::{NodeKind, SyntaxTree, TokenKind, TokenList, TreeBuilder};

use super::{Event, LeftBinder, RightBinder};

enum Step {
    Start {
        kind: NodeKind,
        message: Option<Box<str>>,
        left: LeftBinder,
        right: RightBinder,
    },
    Finish,
    Token(u32),
}

/// Order events so that every forward parent opens before its children.
fn linearize(mut events: Vec<Event>) -> Vec<Step> {
    let mut steps = Vec::with_capacity(events.len());
    let mut chain = Vec::new();
    for i in 0..events.len() {
        match std::mem::replace(&mut events[i], Event::Tombstone) {
            Event::Start {
                kind,
                message,
                forward_parent,
                left,
                right,
            } => {
                chain.push(Step::Start {
                    kind,
                    message,
                    left,
                    right,
                });
                let mut next = forward_parent;
                while let Some(parent) = next {
                    next = None;
                    if let Some(event) = events.get_mut(parent as usize) {
                        if let Event::Start {
                            kind,
                            message,
                            forward_parent,
                            left,
                            right,
                        } = std::mem::replace(event, Event::Tombstone)
                        {
                            chain.push(Step::Start {
                                kind,
                                message,
                                left,
                                right,
                            });
                            next = forward_parent;
                        }
                    }
                }
                steps.extend(chain.drain(..).rev());
            }
            Event::Finish => steps.push(Step::Finish),
            Event::Token { index } => steps.push(Step::Token(index)),
            Event::Tombstone => {}
        }
    }
    steps
}

/// For every `Start`, whether the node contains no token at all.
fn empty_nodes(steps: &[Step]) -> Vec<bool> {
    let mut empty = vec![false; steps.len()];
    let mut open = Vec::new();
    let mut tokens = 0usize;
    for (i, step) in steps.iter().enumerate() {
        match step {
            Step::Start { .. } => open.push((i, tokens)),
            Step::Finish => {
                if let Some((start, count)) = open.pop() {
                    empty[start] = count == tokens;
                }
            }
            Step::Token(_) => tokens += 1,
        }
    }
    empty
}

struct Sink<'a> {
    tokens: &'a TokenList,
    source: &'a str,
    builder: TreeBuilder,
    /// Next raw token not yet attached to the tree.
    next: usize,
    /// Right binders of open nodes.
    open: Vec<RightBinder>,
    last_significant: Option<TokenKind>,
}

impl Sink<'_> {
    fn flush_to(&mut self, end: usize) {
        while self.next < end {
            self.builder.token(to_u32(self.next));
            self.next += 1;
        }
    }

    /// Raw index of the first non-trivia token at or after `self.next`.
    fn trivia_end(&self) -> usize {
        let mut index = self.next;
        while self.tokens.kind(index).is_trivia() {
            index += 1;
        }
        index
    }

    /// Where a node with `binder` wants to start, given that its first
    /// significant token is at `first`.
    fn left_edge(&self, binder: LeftBinder, first: usize) -> usize {
        let max_newlines = match binder {
            LeftBinder::Default => return first,
            LeftBinder::IncludeDocComment => usize::MAX,
            LeftBinder::IncludeDocCommentNoExtraLinebreak => 1,
        };
        let mut newlines = 0;
        let mut index = first;
        while index > self.next {
            let prev = index - 1;
            match self.tokens.kind(prev) {
                TokenKind::Whitespace => {
                    let text = self.tokens[prev].text(self.source);
                    newlines += text.matches('\n').count();
                    if newlines > max_newlines {
                        return first;
                    }
                }
                TokenKind::DocComment => return prev,
                _ => return first,
            }
            index = prev;
        }
        first
    }

    fn start(&mut self, steps: &[Step], empty: &[bool], at: usize) {
        let Step::Start {
            kind,
            message,
            right,
            ..
        } = &steps[at]
        else {
            return;
        };
        if !empty[at] && !self.open.is_empty() {
            let first = self.trivia_end();
            let mut edge = first;
            for (step, is_empty) in steps[at..].iter().zip(&empty[at..]) {
                match step {
                    Step::Start { left, .. } if !*is_empty => {
                        edge = edge.min(self.left_edge(*left, first));
                    }
                    Step::Token(_) => break,
                    _ => {}
                }
            }
            self.flush_to(edge);
        }
        match message {
            Some(message) => self.builder.start_error(message),
            None => self.builder.start_node(*kind),
        }
        self.open.push(*right);
    }

    fn finish(&mut self) {
        let right = self.open.pop().unwrap_or_default();
        if self.open.is_empty() {
            self.flush_to(self.tokens.len());
        } else if right == RightBinder::XmlIncompleteTag
            && !matches!(
                self.last_significant,
                Some(TokenKind::XmlTagEnd | TokenKind::XmlEmptyTagEnd)
            )
        {
            let mut end = self.trivia_end();
            if end > self.next && self.tokens.kind(end - 1) == TokenKind::Whitespace {
                end -= 1;
            }
            self.flush_to(end);
        }
        self.builder.finish_node();
    }

    fn token(&mut self, index: u32) {
        self.flush_to(index as usize);
        self.builder.token(index);
        self.next = index as usize + 1;
        self.last_significant = Some(self.tokens.kind(index as usize));
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Build the tree for `events` over `tokens`.
pub(crate) fn build_tree(events: Vec<Event>, tokens: &TokenList, source: &str) -> SyntaxTree {
    let steps = linearize(events);
    let empty = empty_nodes(&steps);
    let mut sink = Sink {
        tokens,
        source,
        builder: TreeBuilder::new(source, tokens),
        next: 0,
        open: Vec::new(),
        last_significant: None,
    };
    for (at, step) in steps.iter().enumerate() {
        match step {
            Step::Start { .. } => sink.start(&steps, &empty, at),
            Step::Finish => sink.finish(),
            Step::Token(index) => sink.token(*index),
        }
    }
    sink.flush_to(tokens.len());
    sink.builder.finish()
}

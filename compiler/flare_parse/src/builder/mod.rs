//! Mark/commit/rollback tree construction.
//!
//! The grammar does not build nodes directly. It records a flat list of
//! events (`Start`, `Finish`, `Token`) through [`Marker`]s; the
//! [`sink`] replays them into a [`SyntaxTree`](flare_ir::SyntaxTree) once
//! the parse is complete, interleaving the trivia the cursor skipped.
//!
//! Markers follow a strict stack discipline:
//! - `done`/`error` close the innermost open marker only
//! - `rollback_to` truncates every event recorded since the marker and
//!   rewinds the cursor, invalidating all markers opened after it
//! - closing a marker that is not innermost, or one invalidated by a
//!   rollback, is a programming error and panics
//!
//! `CompletedMarker::precede` opens a marker that will wrap an already
//! closed node, via a forward-parent link resolved by the sink.

pub(crate) mod sink;

use flare_ir::NodeKind;
use tracing::debug;

use crate::error::ParseErrorKind;
use crate::Parser;

/// How a node's left edge binds the trivia in front of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum LeftBinder {
    /// Leading trivia stay outside the node.
    #[default]
    Default,
    /// A `/** */` comment separated from the node only by whitespace is
    /// part of the node.
    IncludeDocComment,
    /// Like `IncludeDocComment`, but only when at most one line break
    /// separates the comment from the node.
    IncludeDocCommentNoExtraLinebreak,
}

/// How a node's right edge binds the trivia after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum RightBinder {
    /// Trailing trivia stay outside the node.
    #[default]
    Default,
    /// An XML tag that does not end with `>` or `/>` keeps its trailing
    /// trivia, except a final whitespace token.
    XmlIncompleteTag,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    /// An abandoned or not yet completed marker.
    Tombstone,
    Start {
        kind: NodeKind,
        message: Option<Box<str>>,
        /// Index of a `Start` that wraps this node, set by `precede`.
        forward_parent: Option<u32>,
        left: LeftBinder,
        right: RightBinder,
    },
    Finish,
    /// A significant token, by raw index into the token list.
    Token { index: u32 },
}

#[derive(Clone, Copy, Debug)]
struct OpenMarker {
    pos: u32,
    serial: u32,
}

/// Event log plus the stack of open markers.
#[derive(Default)]
pub(crate) struct Builder {
    events: Vec<Event>,
    open: Vec<OpenMarker>,
    next_serial: u32,
    /// `(child, parent)` forward-parent links, ordered by `parent`.
    links: Vec<(u32, u32)>,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Builder::default()
    }

    fn push_open(&mut self) -> (u32, u32) {
        let pos = to_u32(self.events.len());
        let serial = self.next_serial;
        self.next_serial += 1;
        self.events.push(Event::Tombstone);
        self.open.push(OpenMarker { pos, serial });
        (pos, serial)
    }

    pub(crate) fn token(&mut self, index: usize) {
        self.events.push(Event::Token {
            index: to_u32(index),
        });
    }

    /// Close the innermost open marker, which must be `serial`.
    fn close(&mut self, pos: u32, serial: u32, kind: NodeKind, message: Option<Box<str>>) {
        let top = self.open.pop();
        assert!(
            matches!(top, Some(m) if m.serial == serial),
            "marker closed out of order or after rollback"
        );
        self.events[pos as usize] = Event::Start {
            kind,
            message,
            forward_parent: None,
            left: LeftBinder::Default,
            right: RightBinder::Default,
        };
        self.events.push(Event::Finish);
    }

    fn open_index(&self, serial: u32) -> usize {
        let index = self.open.iter().rposition(|m| m.serial == serial);
        assert!(index.is_some(), "marker used after rollback");
        index.unwrap_or_default()
    }

    /// Events recorded so far; the builder must have no open markers.
    pub(crate) fn finish(self) -> Vec<Event> {
        assert!(
            self.open.is_empty(),
            "{} marker(s) left open at end of parse",
            self.open.len()
        );
        self.events
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// An open position in the output tree.
#[must_use = "a marker must be completed, abandoned or rolled back"]
pub(crate) struct Marker {
    pos: u32,
    serial: u32,
    /// First event covered by the node; earlier than `pos` for a marker
    /// created by `precede`.
    start: u32,
    /// The completed node this marker wraps, for a marker created by
    /// `precede`.
    child: Option<u32>,
    cursor: usize,
}

impl Marker {
    /// Commit everything since the mark as a node of `kind`.
    pub(crate) fn done(self, p: &mut Parser<'_>, kind: NodeKind) -> CompletedMarker {
        p.builder.close(self.pos, self.serial, kind, None);
        CompletedMarker {
            pos: self.pos,
            start: self.start,
            cursor: self.cursor,
        }
    }

    /// Commit everything since the mark as an error node.
    pub(crate) fn error(self, p: &mut Parser<'_>, error: ParseErrorKind) -> CompletedMarker {
        let message = error.to_string();
        p.builder
            .close(self.pos, self.serial, NodeKind::Error, Some(message.into()));
        CompletedMarker {
            pos: self.pos,
            start: self.start,
            cursor: self.cursor,
        }
    }

    /// Discard the marker; its children stay attached to the parent.
    pub(crate) fn abandon(self, p: &mut Parser<'_>) {
        let builder = &mut p.builder;
        let index = builder.open_index(self.serial);
        builder.open.remove(index);
        if let Some(child) = self.child {
            // Links are ordered by parent: only those recorded since this
            // marker need to be scanned.
            let link = builder
                .links
                .iter()
                .rev()
                .take_while(|&&(_, parent)| parent >= self.pos)
                .position(|&(_, parent)| parent == self.pos);
            if let Some(offset) = link {
                builder.links.remove(builder.links.len() - 1 - offset);
            }
            if let Some(Event::Start { forward_parent, .. }) =
                builder.events.get_mut(child as usize)
            {
                *forward_parent = None;
            }
        }
        if builder.events.len() == self.pos as usize + 1 {
            builder.events.pop();
        }
    }

    /// Discard the marker and everything recorded since it, and rewind the
    /// cursor to where the marker was created.
    pub(crate) fn rollback_to(self, p: &mut Parser<'_>) {
        let builder = &mut p.builder;
        builder.open_index(self.serial);
        builder.open.retain(|m| m.pos < self.start);
        builder.events.truncate(self.start as usize);
        while let Some(&(child, parent)) = builder.links.last() {
            if parent < self.start {
                break;
            }
            builder.links.pop();
            if let Some(Event::Start { forward_parent, .. }) =
                builder.events.get_mut(child as usize)
            {
                *forward_parent = None;
            }
        }
        debug!(from = p.cursor.position(), to = self.cursor, "rollback");
        p.cursor.set_position(self.cursor);
    }
}

/// A closed node that can still be wrapped by a new parent.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CompletedMarker {
    pos: u32,
    start: u32,
    cursor: usize,
}

impl CompletedMarker {
    /// Open a new marker that will become the parent of this node.
    pub(crate) fn precede(self, p: &mut Parser<'_>) -> Marker {
        let (pos, serial) = p.builder.push_open();
        if let Some(Event::Start { forward_parent, .. }) =
            p.builder.events.get_mut(self.pos as usize)
        {
            *forward_parent = Some(pos);
        }
        p.builder.links.push((self.pos, pos));
        Marker {
            pos,
            serial,
            start: self.start,
            child: Some(self.pos),
            cursor: self.cursor,
        }
    }

    /// Attach custom edge binders to the node.
    pub(crate) fn bind_edges(self, p: &mut Parser<'_>, left: LeftBinder, right: RightBinder) -> Self {
        if let Some(Event::Start {
            left: l, right: r, ..
        }) = p.builder.events.get_mut(self.pos as usize)
        {
            *l = left;
            *r = right;
        }
        self
    }
}

impl Parser<'_> {
    /// Open a marker at the current token.
    pub(crate) fn start(&mut self) -> Marker {
        let (pos, serial) = self.builder.push_open();
        Marker {
            pos,
            serial,
            start: pos,
            child: None,
            cursor: self.cursor.position(),
        }
    }
}

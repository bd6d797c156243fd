//! Parse context flags for context-sensitive parsing.
//!
//! The same token sequence parses differently depending on where it
//! appears: variables directly inside a block are locals, methods inside an
//! interface must not have bodies, and `in` is not a relational operator in
//! the head of a `for` loop. These flags are scoped: the parser only changes
//! them through closures that restore the previous value on return.

/// Context flags for parsing.
///
/// Multiple flags can be combined using bitwise OR.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext(u16);

impl ParseContext {
    /// No special context.
    pub const NONE: Self = Self(0);

    /// Inside an interface body.
    /// Variable declarations are errors and methods never have bodies.
    pub const IN_INTERFACE: Self = Self(1 << 0);

    /// Directly inside a block `{ ... }` of a function or statement.
    /// Variables are locals and declarations get no attribute list.
    pub const IN_BLOCK_BODY: Self = Self(1 << 1);

    /// `in` is not a binary operator.
    /// Used for the initializer of a `for` loop head.
    pub const NO_IN: Self = Self(1 << 2);

    /// Create a new context with no flags set.
    #[inline]
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Check if a flag is set.
    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    /// Add a flag to the context.
    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    /// Remove a flag from the context.
    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    #[inline]
    pub const fn in_interface(self) -> bool {
        self.has(Self::IN_INTERFACE)
    }

    #[inline]
    pub const fn in_block_body(self) -> bool {
        self.has(Self::IN_BLOCK_BODY)
    }

    /// Check if `in` may be parsed as a relational operator.
    #[inline]
    pub const fn allows_in(self) -> bool {
        !self.has(Self::NO_IN)
    }
}

/// Fragment mode for parsing a single grammar element instead of a file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ForceContext {
    /// Parse a whole file.
    #[default]
    None,
    /// Parse one formal parameter.
    Parameter,
    /// Parse one type; an empty input is an error.
    Type,
    /// Parse one type; an empty input yields an empty root.
    TypeAllowEmpty,
}

/// Whether function declarations in the current scope carry a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MethodEmptiness {
    /// Bodies are not allowed (`native` functions, interface members).
    Always,
    /// A `;` or a body are both accepted.
    Possibly,
}

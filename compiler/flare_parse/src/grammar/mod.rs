//! Grammar Modules
//!
//! Parsing implementations for ActionScript syntax constructs.
//!
//! # Organization
//!
//! Each module extends `Parser` with methods for specific grammar productions:
//!
//! - [`stmt`]: statements, directives, class and interface declarations
//! - [`function`]: attribute lists, function declarations and expressions,
//!   parameter lists
//! - [`expr`]: expressions, from comma expressions down to primaries
//! - [`ty`]: type annotations, qualified names, generic signatures
//! - [`xml`]: E4X literals
//!
//! # Design
//!
//! - **Progress**: productions that may not apply return `bool`; `false`
//!   means nothing was consumed
//! - **Context flags**: `ParseContext` is changed only through scoped
//!   closures, so every exit path restores it
//! - **Recovery**: errors are zero-width nodes at the current token, or wrap
//!   exactly one skipped token

mod expr;
mod function;
mod stmt;
mod ty;
mod xml;

use flare_ir::NodeKind;

use crate::context::ForceContext;
use crate::error::ParseErrorKind;
use crate::Parser;

impl Parser<'_> {
    /// Parse the whole input under a root node of kind `root`.
    ///
    /// With a forced context only one parameter or type is parsed; anything
    /// after it is wrapped in a single "unexpected tokens" error.
    pub(crate) fn parse_root(&mut self, root: NodeKind, force: ForceContext) {
        let file = self.start();
        match force {
            ForceContext::None => {
                while !self.at_end() {
                    self.parse_statement();
                }
            }
            ForceContext::Parameter => self.parse_parameter(),
            ForceContext::Type => {
                self.parse_type();
            }
            ForceContext::TypeAllowEmpty => {
                if !self.at_end() {
                    self.parse_type();
                }
            }
        }

        if !self.at_end() {
            let rest = self.start();
            while !self.at_end() {
                self.bump();
            }
            rest.error(self, ParseErrorKind::UnexpectedTokens);
        }
        file.done(self, root);
    }
}

//! Parser tests.
//!
//! Tests are organized into modules by category:
//! - `parser`: whole files, recovery across statements, losslessness and
//!   parse options
//! - `compositional`: every expression and type form in every position it
//!   can appear in

mod parser;

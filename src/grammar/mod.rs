//! Grammar descriptions, compilation, and the language registry.
//!
//! A language is written as a [`descriptor::GrammarDescriptor`]: plain data
//! listing its keyword tables and an ordered set of rules. Compiling it
//! yields an immutable [`grammar::Grammar`] that can be shared across
//! threads and scanned any number of times. The [`registry::Registry`]
//! maps names and aliases to compiled grammars.

pub mod descriptor;
pub mod grammar;
pub mod registry;

#[cfg(test)]
mod tests;

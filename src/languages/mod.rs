//! Grammars shipped with the crate.

use crate::grammar::descriptor::GrammarFactory;

pub mod ldscript;

/// Registration key and factory of every built-in grammar.
pub const BUILTINS: &[(&str, GrammarFactory)] = &[("ldscript", ldscript::ldscript)];

//! Rule-based tokenizer.
//!
//! Converts a source buffer into a lazy stream of classified tokens using
//! a compiled grammar:
//!
//! - Rules are tried in declaration order, first match wins
//! - Keywords and built-ins only match whole lexemes
//! - Unterminated strings and comments run to the end of the buffer
//! - Anything unmatched is merged into plain text tokens

pub mod lexer;
pub mod tokens;

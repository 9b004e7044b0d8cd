//! Error types for grammar construction and registration.
//!
//! Tokenizing never fails: malformed input degrades to best-effort
//! classification. The only reportable failures are configuration errors:
//!
//! - Duplicate registration of a language name or alias
//! - Empty, invalid, or empty-matching rule patterns
//! - Empty literals or markers in a grammar descriptor

pub mod errors;

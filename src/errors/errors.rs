use std::fmt::Display;

use thiserror::Error;

/// A configuration error raised while compiling or registering a grammar.
///
/// Scanning never fails, so this is the only error the library produces.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    language: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, language: &str) -> Self {
        Error {
            internal_error: error_impl,
            language: language.to_string(),
        }
    }

    pub fn get_language(&self) -> &str {
        &self.language
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::DuplicateLanguage { .. } => "DuplicateLanguage",
            ErrorImpl::EmptyPattern { .. } => "EmptyPattern",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::EmptyMatch { .. } => "EmptyMatch",
            ErrorImpl::EmptyLiteral { .. } => "EmptyLiteral",
            ErrorImpl::EmptyMarker { .. } => "EmptyMarker",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::DuplicateLanguage { name } => ErrorTip::Suggestion(format!(
                "`{}` is already registered, pick another name or alias",
                name
            )),
            ErrorImpl::EmptyPattern { category } => ErrorTip::Suggestion(format!(
                "Give the {} rule a pattern or at least one variant",
                category
            )),
            ErrorImpl::InvalidPattern { pattern, .. } => {
                ErrorTip::Suggestion(format!("Check the syntax of `{}`", pattern))
            }
            ErrorImpl::EmptyMatch { pattern } => ErrorTip::Suggestion(format!(
                "`{}` can match nothing, require at least one character",
                pattern
            )),
            ErrorImpl::EmptyLiteral { .. } => ErrorTip::None,
            ErrorImpl::EmptyMarker { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.language, self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("language or alias {name:?} already registered")]
    DuplicateLanguage { name: String },
    #[error("{category} rule has no pattern")]
    EmptyPattern { category: String },
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("pattern {pattern:?} matches the empty string")]
    EmptyMatch { pattern: String },
    #[error("empty literal in the {category} list")]
    EmptyLiteral { category: String },
    #[error("empty {construct} marker")]
    EmptyMarker { construct: String },
}

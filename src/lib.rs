#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod grammar;
pub mod languages;
pub mod lexer;
pub mod macros;
pub mod render;

extern crate regex;

/// Half-open byte range into the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Returns the 1-based line number, the line text and the byte column of
/// `position` within `source`.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}

pub fn format_error(error: &Error) -> String {
    /*
        Error: DuplicateLanguage (`ld` is already registered, ...)
        -> ldscript
    */

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n-> {}", header, error.get_language())
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{Error, ErrorImpl};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nSECTIONS\n{\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 9);

        assert!(super::get_line_at_position(source, source.len()).is_none());
    }

    #[test]
    fn test_format_error() {
        let error = Error::new(
            ErrorImpl::EmptyMarker {
                construct: "line comment".to_string(),
            },
            "broken",
        );

        assert_eq!(super::format_error(&error), "Error: EmptyMarker\n-> broken");
    }
}

//! Utility macros.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The token Category
/// * `$value` - The matched text
/// * `$span` - The byte span in the source
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(Category::Keyword, "ENTRY".to_string(), Span { start: 0, end: 5 });
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            category: $category,
            value: $value,
            span: $span,
        }
    };
}

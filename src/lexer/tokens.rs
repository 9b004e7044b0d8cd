use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Keyword,
    Builtin,
    String,
    Comment,

    NumberHex,
    NumberBin,
    NumberDec,
    NumberFloat,

    Symbol,

    // Unclassified run
    Text,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Builtin => "builtin",
            Category::String => "string",
            Category::Comment => "comment",
            Category::NumberHex => "number-hex",
            Category::NumberBin => "number-bin",
            Category::NumberDec => "number-dec",
            Category::NumberFloat => "number-float",
            Category::Symbol => "symbol",
            Category::Text => "text",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: Category,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.category, self.value)
    }
}

impl Token {
    pub fn is_classified(&self) -> bool {
        self.category != Category::Text
    }
}

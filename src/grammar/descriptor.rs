//! Declarative grammar descriptions.
//!
//! A language is described as plain data: a keyword table plus an ordered
//! list of rule descriptors. [`Grammar::compile`](super::grammar::Grammar::compile)
//! turns a descriptor into a matcher the tokenizer can run.

use crate::lexer::tokens::Category;

/// Rejects a tentative match based on the character just before it,
/// `None` at the start of the buffer.
pub type BeforeGuard = fn(Option<char>) -> bool;

/// Rejects a tentative match based on the text just after it.
pub type AfterGuard = fn(&str) -> bool;

pub type GrammarFactory = fn() -> GrammarDescriptor;

#[derive(Debug, Clone)]
pub struct GrammarDescriptor {
    pub name: String,
    pub aliases: Vec<String>,
    pub case_sensitive: bool,
    pub keywords: Keywords,
    pub contains: Vec<RuleDescriptor>,
}

/// Literal keyword and built-in tables.
///
/// `pattern` is the lexeme shape used to cut candidate words out of the
/// source; only whole lexemes are looked up in the tables.
#[derive(Debug, Clone)]
pub struct Keywords {
    pub pattern: String,
    pub keyword: Vec<String>,
    pub builtin: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum RuleDescriptor {
    LineComment {
        marker: String,
    },
    BlockComment {
        start: String,
        end: String,
    },
    QuotedString {
        quote: char,
    },
    Custom {
        category: Category,
        pattern: Option<String>,
        relevance: u32,
        variants: Vec<Variant>,
    },
}

/// One alternative of a custom rule, tried in declaration order.
#[derive(Debug, Clone)]
pub struct Variant {
    pub pattern: String,
    pub category: Option<Category>,
    pub reject_before: Option<BeforeGuard>,
    pub reject_after: Option<AfterGuard>,
}

impl Variant {
    pub fn new(category: Category, pattern: &str) -> Self {
        Variant {
            pattern: pattern.to_string(),
            category: Some(category),
            reject_before: None,
            reject_after: None,
        }
    }

    pub fn reject_before(mut self, guard: BeforeGuard) -> Self {
        self.reject_before = Some(guard);
        self
    }

    pub fn reject_after(mut self, guard: AfterGuard) -> Self {
        self.reject_after = Some(guard);
        self
    }
}

impl RuleDescriptor {
    pub fn comment_to_eol(marker: &str) -> Self {
        RuleDescriptor::LineComment {
            marker: marker.to_string(),
        }
    }

    /// `/* ... */`, non-nesting.
    pub fn c_block_comment() -> Self {
        RuleDescriptor::BlockComment {
            start: "/*".to_string(),
            end: "*/".to_string(),
        }
    }

    /// Double-quoted string with backslash escapes.
    pub fn quote_string() -> Self {
        RuleDescriptor::QuotedString { quote: '"' }
    }

    pub fn custom(category: Category, pattern: &str, relevance: u32) -> Self {
        RuleDescriptor::Custom {
            category,
            pattern: Some(pattern.to_string()),
            relevance,
            variants: vec![],
        }
    }

    pub fn variants(category: Category, relevance: u32, variants: Vec<Variant>) -> Self {
        RuleDescriptor::Custom {
            category,
            pattern: None,
            relevance,
            variants,
        }
    }
}

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Keywords {
    pub fn new(pattern: &str, keyword: &[&str], builtin: &[&str]) -> Self {
        Keywords {
            pattern: pattern.to_string(),
            keyword: to_strings(keyword),
            builtin: to_strings(builtin),
        }
    }
}

//! GNU linker script.

use crate::{
    grammar::descriptor::{is_word_char, GrammarDescriptor, Keywords, RuleDescriptor, Variant},
    lexer::tokens::Category,
};

const KEYWORDS: &[&str] = &[
    "OUTPUT_ARCH",
    "ENTRY",
    "SECTIONS",
    "ALIGN",
    "STARTUP",
    "SEATCH_DIR",
    "INCLUDE",
    "PROVIDE",
];

const BUILTINS: &[&str] = &[
    "/DISCARD/",
    ".text",
    ".srodata",
    ".rodata",
    ".sdata",
    ".data",
    ".sbss",
    ".bss",
];

pub fn ldscript() -> GrammarDescriptor {
    GrammarDescriptor {
        name: String::from("GNU linker script"),
        aliases: vec![String::from("ld")],
        case_sensitive: true,
        keywords: Keywords::new(r"\.?[a-zA-Z]\w*", KEYWORDS, BUILTINS),
        contains: vec![
            RuleDescriptor::comment_to_eol("#"),
            RuleDescriptor::c_block_comment(),
            RuleDescriptor::quote_string(),
            RuleDescriptor::variants(
                Category::NumberDec,
                0,
                vec![
                    Variant::new(Category::NumberHex, "0x[0-9a-fA-F]+"),
                    Variant::new(Category::NumberBin, "0b[01]+"),
                    Variant::new(Category::NumberDec, r"-?(0|[1-9]\d*)[kKmMgG]?")
                        .reject_before(word_or_dot)
                        .reject_after(dec_tail),
                    Variant::new(Category::NumberFloat, r"\d+\.\d+").reject_before(after_word),
                    Variant::new(Category::NumberFloat, r"-\d+\.\d+").reject_before(not_after_word),
                ],
            ),
            RuleDescriptor::custom(Category::Symbol, r"'\.?[a-zA-Z_][a-zA-Z0-9_]*", 0),
        ],
    }
}

fn word_or_dot(prev: Option<char>) -> bool {
    prev.is_some_and(|c| c == '.' || is_word_char(c))
}

fn after_word(prev: Option<char>) -> bool {
    prev.is_some_and(is_word_char)
}

// A leading `-` only starts a float right after a word, like `\b-` would.
fn not_after_word(prev: Option<char>) -> bool {
    !after_word(prev)
}

// A label (`10:`), a longer word, or the fraction of a float.
fn dec_tail(rest: &str) -> bool {
    let mut chars = rest.chars();

    match chars.next() {
        Some(':') => true,
        Some('.') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        Some(c) => is_word_char(c),
        None => false,
    }
}

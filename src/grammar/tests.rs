//! Unit tests for grammar compilation and the registry.

use crate::{
    errors::errors::ErrorImpl,
    languages::ldscript::ldscript,
    lexer::{lexer::tokenize_all, tokens::Category},
};

use super::{
    descriptor::{GrammarDescriptor, Keywords, RuleDescriptor, Variant},
    grammar::{Grammar, Matcher},
    registry::{languages, relevance, Registry},
};

fn tiny() -> GrammarDescriptor {
    GrammarDescriptor {
        name: String::from("Tiny"),
        aliases: vec![String::from("tn")],
        case_sensitive: false,
        keywords: Keywords::new(r"[a-z]+", &["let", "fn"], &["print"]),
        contains: vec![
            RuleDescriptor::comment_to_eol("//"),
            RuleDescriptor::custom(Category::NumberDec, r"\d+", 0),
        ],
    }
}

fn shadow() -> GrammarDescriptor {
    GrammarDescriptor {
        aliases: vec![String::from("ld")],
        ..tiny()
    }
}

fn self_alias() -> GrammarDescriptor {
    GrammarDescriptor {
        aliases: vec![String::from("selfish")],
        ..tiny()
    }
}

fn broken() -> GrammarDescriptor {
    GrammarDescriptor {
        contains: vec![RuleDescriptor::custom(Category::Symbol, "(", 0)],
        ..tiny()
    }
}

#[test]
fn test_compile_ldscript() {
    let grammar = Grammar::compile("ldscript", ldscript()).unwrap();

    assert_eq!(grammar.name(), "ldscript");
    assert_eq!(grammar.display_name(), "GNU linker script");
    assert_eq!(grammar.aliases(), &["ld".to_string()]);
    assert!(grammar.case_sensitive());

    let categories: Vec<Category> = grammar.rules().iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::Comment,
            Category::Comment,
            Category::String,
            Category::NumberHex,
            Category::NumberBin,
            Category::NumberDec,
            Category::NumberFloat,
            Category::NumberFloat,
            Category::Symbol,
            Category::Keyword,
            Category::Builtin,
        ]
    );
}

#[test]
fn test_verbatim_literals() {
    let grammar = Grammar::compile("ldscript", ldscript()).unwrap();
    let builtin = grammar.rules().last().unwrap();

    match &builtin.matcher {
        Matcher::Literals { words, verbatim } => {
            assert!(words.contains(".text"));
            assert_eq!(verbatim, &vec!["/DISCARD/".to_string()]);
        }
        _ => panic!("Expected a literal matcher"),
    }
}

#[test]
fn test_case_insensitive_grammar() {
    let grammar = Grammar::compile("tiny", tiny()).unwrap();
    let tokens: Vec<Category> = tokenize_all(&grammar, "LET x = 1 // Fn\nPrint")
        .into_iter()
        .filter(|t| t.is_classified())
        .map(|t| t.category)
        .collect();

    assert_eq!(
        tokens,
        vec![
            Category::Keyword,
            Category::NumberDec,
            Category::Comment,
            Category::Builtin,
        ]
    );
}

#[test]
fn test_empty_pattern() {
    let descriptor = GrammarDescriptor {
        contains: vec![RuleDescriptor::Custom {
            category: Category::Symbol,
            pattern: None,
            relevance: 0,
            variants: vec![],
        }],
        ..tiny()
    };

    let error = Grammar::compile("tiny", descriptor).unwrap_err();
    assert_eq!(error.get_error_name(), "EmptyPattern");
    assert_eq!(error.get_language(), "tiny");
}

#[test]
fn test_invalid_pattern() {
    let error = Grammar::compile("tiny", broken()).unwrap_err();

    match error.get_impl() {
        ErrorImpl::InvalidPattern { pattern, .. } => assert_eq!(pattern, "("),
        other => panic!("Expected InvalidPattern, got {:?}", other),
    }
}

#[test]
fn test_empty_match_pattern() {
    let descriptor = GrammarDescriptor {
        contains: vec![RuleDescriptor::variants(
            Category::NumberDec,
            0,
            vec![Variant::new(Category::NumberDec, r"\d*")],
        )],
        ..tiny()
    };

    let error = Grammar::compile("tiny", descriptor).unwrap_err();
    assert_eq!(error.get_error_name(), "EmptyMatch");
}

#[test]
fn test_empty_keyword_pattern() {
    let descriptor = GrammarDescriptor {
        keywords: Keywords::new("", &["let"], &[]),
        ..tiny()
    };

    let error = Grammar::compile("tiny", descriptor).unwrap_err();
    assert_eq!(error.get_error_name(), "EmptyPattern");
}

#[test]
fn test_empty_literal() {
    let descriptor = GrammarDescriptor {
        keywords: Keywords::new("[a-z]+", &["let", ""], &[]),
        ..tiny()
    };

    let error = Grammar::compile("tiny", descriptor).unwrap_err();
    assert_eq!(error.get_error_name(), "EmptyLiteral");
}

#[test]
fn test_empty_marker() {
    let descriptor = GrammarDescriptor {
        contains: vec![RuleDescriptor::BlockComment {
            start: "(*".to_string(),
            end: String::new(),
        }],
        ..tiny()
    };

    let error = Grammar::compile("tiny", descriptor).unwrap_err();
    assert_eq!(error.get_error_name(), "EmptyMarker");
}

#[test]
fn test_register_and_lookup() {
    let mut registry = Registry::new();
    registry.register_language("tiny", tiny).unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("tiny").unwrap().name(), "tiny");
    assert_eq!(registry.get("tn").unwrap().name(), "tiny");
    assert!(registry.get("Tiny").is_none());
    assert_eq!(registry.names(), vec!["tiny"]);
}

#[test]
fn test_duplicate_name() {
    let mut registry = Registry::new();
    registry.register_language("tiny", tiny).unwrap();

    let error = registry.register_language("tiny", ldscript).unwrap_err();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::DuplicateLanguage {
            name: "tiny".to_string()
        }
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_duplicate_alias() {
    let mut registry = Registry::with_builtins().unwrap();

    let error = registry.register_language("shadow", shadow).unwrap_err();
    assert_eq!(error.get_error_name(), "DuplicateLanguage");
    assert!(registry.get("shadow").is_none());
    assert_eq!(registry.get("ld").unwrap().name(), "ldscript");
}

#[test]
fn test_alias_equal_to_name() {
    let mut registry = Registry::new();

    let error = registry.register_language("selfish", self_alias).unwrap_err();
    assert_eq!(error.get_error_name(), "DuplicateLanguage");
    assert!(registry.is_empty());
}

#[test]
fn test_invalid_grammar_is_not_registered() {
    let mut registry = Registry::new();

    assert!(registry.register_language("broken", broken).is_err());
    assert!(registry.get("broken").is_none());
    assert!(registry.get("tn").is_none());
}

#[test]
fn test_builtin_languages() {
    let registry = languages();

    assert_eq!(registry.names(), vec!["ldscript"]);
    assert!(registry.get("ld").is_some());
}

#[test]
fn test_relevance() {
    let grammar = Grammar::compile("ldscript", ldscript()).unwrap();

    assert_eq!(relevance(&grammar, "ENTRY(_start) .text 0x10 'sym"), 2);
    assert_eq!(relevance(&grammar, "/* ENTRY */"), 0);
}

#[test]
fn test_detect() {
    let mut registry = Registry::with_builtins().unwrap();
    registry.register_language("tiny", tiny).unwrap();

    let (grammar, score) = registry.detect("SECTIONS { .text : { } }").unwrap();
    assert_eq!(grammar.name(), "ldscript");
    assert_eq!(score, 2);

    let (grammar, _) = registry.detect("let f = fn print").unwrap();
    assert_eq!(grammar.name(), "tiny");

    assert!(registry.detect("   ").is_none());
}

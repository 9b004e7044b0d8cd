use std::collections::HashSet;

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{tokenize, Tokens},
        tokens::Category,
    },
};

use super::descriptor::{
    is_word_char, AfterGuard, BeforeGuard, GrammarDescriptor, RuleDescriptor, Variant,
};

const KEYWORD_RELEVANCE: u32 = 1;

#[derive(Debug, Clone)]
pub enum Matcher {
    /// Whole lexemes looked up in a set; `verbatim` holds literals the
    /// lexeme pattern can never produce.
    Literals {
        words: HashSet<String>,
        verbatim: Vec<String>,
    },
    Pattern {
        regex: Regex,
        reject_before: Option<BeforeGuard>,
        reject_after: Option<AfterGuard>,
    },
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
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub category: Category,
    pub matcher: Matcher,
    pub relevance: u32,
}

#[derive(Debug, Clone)]
pub struct Grammar {
    name: String,
    display_name: String,
    aliases: Vec<String>,
    case_sensitive: bool,
    lexeme: Regex,
    rules: Vec<Rule>,
}

impl Grammar {
    pub fn compile(name: &str, descriptor: GrammarDescriptor) -> Result<Grammar, Error> {
        let case_sensitive = descriptor.case_sensitive;
        let lexeme = compile_pattern(name, "keyword", &descriptor.keywords.pattern, case_sensitive)?;

        let mut rules = vec![];
        for rule in descriptor.contains {
            compile_rule(name, rule, case_sensitive, &mut rules)?;
        }

        let keyword = &descriptor.keywords;
        for (category, literals) in [
            (Category::Keyword, &keyword.keyword),
            (Category::Builtin, &keyword.builtin),
        ] {
            if literals.is_empty() {
                continue;
            }

            rules.push(Rule {
                category,
                matcher: compile_literals(name, category, literals, &lexeme, case_sensitive)?,
                relevance: KEYWORD_RELEVANCE,
            });
        }

        debug!("compiled grammar `{}` with {} rules", name, rules.len());

        Ok(Grammar {
            name: name.to_string(),
            display_name: descriptor.name,
            aliases: descriptor.aliases,
            case_sensitive,
            lexeme,
            rules,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn tokenize<'g, 's>(&'g self, source: &'s str) -> Tokens<'g, 's> {
        tokenize(self, source)
    }

    /// First rule, in declaration order, with a non-empty match at `pos`.
    pub fn match_at(&self, source: &str, pos: usize) -> Option<(&Rule, usize)> {
        self.rules.iter().find_map(|rule| {
            rule.match_at(self, source, pos)
                .filter(|len| *len > 0)
                .map(|len| (rule, len))
        })
    }

    /// Length of the unclassified step taken at `pos`: one character.
    pub fn skip_len(&self, source: &str, pos: usize) -> usize {
        source[pos..].chars().next().map_or(0, char::len_utf8)
    }

    fn fold(&self, word: &str) -> String {
        if self.case_sensitive {
            word.to_string()
        } else {
            word.to_lowercase()
        }
    }

    fn starts_with_literal(&self, rest: &str, literal: &str) -> bool {
        match rest.get(..literal.len()) {
            Some(head) if self.case_sensitive => head == literal,
            Some(head) => head.eq_ignore_ascii_case(literal),
            None => false,
        }
    }
}

impl Rule {
    pub fn match_at(&self, grammar: &Grammar, source: &str, pos: usize) -> Option<usize> {
        let rest = &source[pos..];
        let prev = source[..pos].chars().next_back();

        match &self.matcher {
            Matcher::Literals { words, verbatim } => {
                if let Some(m) = grammar.lexeme.find(rest) {
                    let word = m.as_str();
                    let glued = word.starts_with(is_word_char)
                        && prev.is_some_and(|c| c == '.' || is_word_char(c));

                    if !word.is_empty() && !glued && words.contains(&grammar.fold(word)) {
                        return Some(word.len());
                    }
                }

                verbatim
                    .iter()
                    .find(|literal| {
                        grammar.starts_with_literal(rest, literal)
                            && !rest[literal.len()..].starts_with(is_word_char)
                    })
                    .map(|literal| literal.len())
            }
            Matcher::Pattern {
                regex,
                reject_before,
                reject_after,
            } => {
                let m = regex.find(rest)?;

                if let Some(guard) = reject_before {
                    if guard(prev) {
                        return None;
                    }
                }

                if let Some(guard) = reject_after {
                    if guard(&rest[m.end()..]) {
                        return None;
                    }
                }

                Some(m.end())
            }
            Matcher::LineComment { marker } => {
                if !rest.starts_with(marker.as_str()) {
                    return None;
                }

                // `\n`, `\r\n` and a lone `\r` all end the line.
                let body = &rest[marker.len()..];
                let eol = body.find(|c: char| c == '\n' || c == '\r').unwrap_or(body.len());

                Some(marker.len() + eol)
            }
            Matcher::BlockComment { start, end } => {
                let body = rest.strip_prefix(start.as_str())?;

                // Unterminated comments run to the end of the buffer.
                Some(match body.find(end.as_str()) {
                    Some(i) => start.len() + i + end.len(),
                    None => rest.len(),
                })
            }
            Matcher::QuotedString { quote } => {
                let body = rest.strip_prefix(*quote)?;
                let offset = quote.len_utf8();
                let mut chars = body.char_indices();

                while let Some((i, c)) = chars.next() {
                    if c == '\\' {
                        chars.next();
                    } else if c == *quote {
                        return Some(offset + i + c.len_utf8());
                    }
                }

                Some(rest.len())
            }
        }
    }
}

fn compile_pattern(
    language: &str,
    category: &str,
    pattern: &str,
    case_sensitive: bool,
) -> Result<Regex, Error> {
    if pattern.is_empty() {
        return Err(Error::new(
            ErrorImpl::EmptyPattern {
                category: category.to_string(),
            },
            language,
        ));
    }

    // Anchored: rules only ever match at the cursor.
    let regex = RegexBuilder::new(&format!("^(?:{})", pattern))
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|e| {
            Error::new(
                ErrorImpl::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                },
                language,
            )
        })?;

    if regex.is_match("") {
        return Err(Error::new(
            ErrorImpl::EmptyMatch {
                pattern: pattern.to_string(),
            },
            language,
        ));
    }

    Ok(regex)
}

fn compile_literals(
    language: &str,
    category: Category,
    literals: &[String],
    lexeme: &Regex,
    case_sensitive: bool,
) -> Result<Matcher, Error> {
    let mut words = HashSet::new();
    let mut verbatim = vec![];

    for literal in literals {
        if literal.is_empty() {
            return Err(Error::new(
                ErrorImpl::EmptyLiteral {
                    category: category.to_string(),
                },
                language,
            ));
        }

        let whole = lexeme.find(literal).is_some_and(|m| m.end() == literal.len());

        if whole && case_sensitive {
            words.insert(literal.clone());
        } else if whole {
            words.insert(literal.to_lowercase());
        } else {
            verbatim.push(literal.clone());
        }
    }

    // Longest first so a literal never shadows one it prefixes.
    verbatim.sort_by(|a, b| b.len().cmp(&a.len()));

    Ok(Matcher::Literals { words, verbatim })
}

fn compile_rule(
    language: &str,
    rule: RuleDescriptor,
    case_sensitive: bool,
    rules: &mut Vec<Rule>,
) -> Result<(), Error> {
    match rule {
        RuleDescriptor::LineComment { marker } => {
            check_marker(language, "line comment", &marker)?;
            rules.push(Rule {
                category: Category::Comment,
                matcher: Matcher::LineComment { marker },
                relevance: 0,
            });
        }
        RuleDescriptor::BlockComment { start, end } => {
            check_marker(language, "block comment start", &start)?;
            check_marker(language, "block comment end", &end)?;
            rules.push(Rule {
                category: Category::Comment,
                matcher: Matcher::BlockComment { start, end },
                relevance: 0,
            });
        }
        RuleDescriptor::QuotedString { quote } => rules.push(Rule {
            category: Category::String,
            matcher: Matcher::QuotedString { quote },
            relevance: 0,
        }),
        RuleDescriptor::Custom {
            category,
            pattern,
            relevance,
            variants,
        } => {
            let variants = match (pattern, variants.is_empty()) {
                (Some(pattern), true) => vec![Variant {
                    pattern,
                    category: Some(category),
                    reject_before: None,
                    reject_after: None,
                }],
                (_, false) => variants,
                (None, true) => {
                    return Err(Error::new(
                        ErrorImpl::EmptyPattern {
                            category: category.to_string(),
                        },
                        language,
                    ))
                }
            };

            for variant in variants {
                let category = variant.category.unwrap_or(category);
                let regex =
                    compile_pattern(language, category.as_str(), &variant.pattern, case_sensitive)?;

                rules.push(Rule {
                    category,
                    matcher: Matcher::Pattern {
                        regex,
                        reject_before: variant.reject_before,
                        reject_after: variant.reject_after,
                    },
                    relevance,
                });
            }
        }
    }

    Ok(())
}

fn check_marker(language: &str, construct: &str, marker: &str) -> Result<(), Error> {
    if marker.is_empty() {
        return Err(Error::new(
            ErrorImpl::EmptyMarker {
                construct: construct.to_string(),
            },
            language,
        ));
    }

    Ok(())
}

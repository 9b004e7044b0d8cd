use log::trace;

use crate::{grammar::grammar::Grammar, Span, MK_TOKEN};

use super::tokens::{Category, Token};

/// Lazy scan of one buffer against one grammar.
///
/// Unmatched characters are merged into a single [`Category::Text`] token
/// that is flushed right before the next classified token or at the end of
/// the buffer, so the emitted spans always tile the whole input.
#[derive(Debug, Clone)]
pub struct Tokens<'g, 's> {
    grammar: &'g Grammar,
    source: &'s str,
    pos: usize,
    pending: Option<Token>,
}

impl<'g, 's> Tokens<'g, 's> {
    pub fn new(grammar: &'g Grammar, source: &'s str) -> Self {
        Tokens {
            grammar,
            source,
            pos: 0,
            pending: None,
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn make(&self, category: Category, start: usize, end: usize) -> Token {
        MK_TOKEN!(
            category,
            self.source[start..end].to_string(),
            Span { start, end }
        )
    }
}

impl Iterator for Tokens<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }

        let run_start = self.pos;

        while !self.at_eof() {
            if let Some((rule, len)) = self.grammar.match_at(self.source, self.pos) {
                let token = self.make(rule.category, self.pos, self.pos + len);
                trace!("{} at {}..{}", token.category, token.span.start, token.span.end);
                self.pos += len;

                if run_start < token.span.start {
                    let text = self.make(Category::Text, run_start, token.span.start);
                    self.pending = Some(token);
                    return Some(text);
                }

                return Some(token);
            }

            self.pos += self.grammar.skip_len(self.source, self.pos);
        }

        if run_start < self.pos {
            return Some(self.make(Category::Text, run_start, self.pos));
        }

        None
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}

pub fn tokenize<'g, 's>(grammar: &'g Grammar, source: &'s str) -> Tokens<'g, 's> {
    Tokens::new(grammar, source)
}

pub fn tokenize_all(grammar: &Grammar, source: &str) -> Vec<Token> {
    tokenize(grammar, source).collect()
}

use std::{collections::HashMap, sync::Arc};

use lazy_static::lazy_static;
use log::{debug, info};

use crate::{
    errors::errors::{Error, ErrorImpl},
    languages,
};

use super::{descriptor::GrammarFactory, grammar::Grammar};

lazy_static! {
    pub static ref LANGUAGES: Registry =
        Registry::with_builtins().expect("built-in grammars are valid");
}

/// Built-in grammars, registered on first access.
pub fn languages() -> &'static Registry {
    &LANGUAGES
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    grammars: Vec<Arc<Grammar>>,
    lookup: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    pub fn with_builtins() -> Result<Self, Error> {
        let mut registry = Registry::new();

        for (name, factory) in languages::BUILTINS {
            registry.register_language(name, *factory)?;
        }

        info!("registered {} built-in grammars", registry.grammars.len());
        Ok(registry)
    }

    /// Compiles `factory()` and registers it under `name` and its aliases.
    ///
    /// Nothing is registered when the descriptor is invalid or any key is
    /// already taken.
    pub fn register_language(
        &mut self,
        name: &str,
        factory: GrammarFactory,
    ) -> Result<Arc<Grammar>, Error> {
        let grammar = Grammar::compile(name, factory())?;

        let mut keys = vec![name.to_string()];
        for alias in grammar.aliases() {
            if keys.contains(alias) || self.lookup.contains_key(alias) {
                return Err(Error::new(
                    ErrorImpl::DuplicateLanguage {
                        name: alias.clone(),
                    },
                    name,
                ));
            }
            keys.push(alias.clone());
        }

        if self.lookup.contains_key(name) {
            return Err(Error::new(
                ErrorImpl::DuplicateLanguage {
                    name: name.to_string(),
                },
                name,
            ));
        }

        let grammar = Arc::new(grammar);
        let index = self.grammars.len();
        self.grammars.push(Arc::clone(&grammar));

        for key in keys {
            self.lookup.insert(key, index);
        }

        debug!("registered `{}` (aliases: {:?})", name, grammar.aliases());
        Ok(grammar)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Grammar>> {
        self.lookup
            .get(name)
            .map(|index| Arc::clone(&self.grammars[*index]))
    }

    /// Registered language names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.grammars.iter().map(|g| g.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }

    /// Picks the grammar whose rules score the highest total relevance on
    /// `source`. Earlier registrations win ties; no grammar wins with 0.
    pub fn detect(&self, source: &str) -> Option<(Arc<Grammar>, u32)> {
        let mut best: Option<(&Arc<Grammar>, u32)> = None;

        for grammar in &self.grammars {
            let score = relevance(grammar, source);
            debug!("detect: `{}` scored {}", grammar.name(), score);

            if score > 0 && best.map_or(true, |(_, top)| score > top) {
                best = Some((grammar, score));
            }
        }

        best.map(|(grammar, score)| (Arc::clone(grammar), score))
    }
}

/// Sum of the relevance of every rule that produced a token in `source`.
pub fn relevance(grammar: &Grammar, source: &str) -> u32 {
    let mut pos = 0;
    let mut score = 0;

    while pos < source.len() {
        match grammar.match_at(source, pos) {
            Some((rule, len)) => {
                score += rule.relevance;
                pos += len;
            }
            None => pos += grammar.skip_len(source, pos),
        }
    }

    score
}

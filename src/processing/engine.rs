//! Selection of the best rendering.
//!
//! A [`Registry`] is an ordered list of representers. It gathers their
//! candidates and keeps the lowest score, the earliest registered winning ties.

use super::representers::Representer;
use crate::models::{Candidate, PrefixSet};
use colored::Colorize;
use itertools::Itertools;
use lazy_static::lazy_static;
use std::error::Error;

lazy_static! {
    /// Registry with every representer in the default order.
    pub static ref DEFAULT_REGISTRY: Registry = Registry::default();
}

/// Ordered, immutable list of representers.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    representers: Vec<Representer>,
}

impl Registry {
    /// Build a registry; the order decides ties.
    pub fn new(representers: Vec<Representer>) -> Registry {
        Registry { representers }
    }

    pub fn representers(&self) -> &[Representer] {
        &self.representers
    }

    /// Lazily collect the candidates of every representer not in `ignore`.
    pub fn representations_for<'a>(
        &'a self,
        set: &'a PrefixSet,
        ignore: &'a [Representer],
    ) -> impl Iterator<Item = Result<Candidate, Box<dyn Error>>> + 'a {
        self.representers
            .iter()
            .filter(move |&r| !ignore.contains(r))
            .map(move |r| r.represent(set, self, ignore))
            .flatten_ok()
    }

    /// The lowest-scored candidate for `set`, ignoring the given representers.
    pub fn best(
        &self,
        set: &PrefixSet,
        ignore: &[Representer],
    ) -> Result<Candidate, Box<dyn Error>> {
        let mut best: Option<Candidate> = None;
        for candidate in self.representations_for(set, ignore) {
            let candidate = candidate?;
            log::debug!(
                "considering {} with score {}",
                candidate.text.as_str().on_blue(),
                candidate.score
            );
            if best.as_ref().map_or(true, |b| candidate.score < b.score) {
                best = Some(candidate);
            }
        }
        best.ok_or_else(|| {
            format!(
                "No representation for [{set}] (ignoring {})",
                ignore.iter().join(", ")
            )
            .into()
        })
    }

    /// The most readable text for `set`.
    pub fn pretty(&self, set: &PrefixSet) -> Result<String, Box<dyn Error>> {
        Ok(self.best(set, &[])?.text)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new(Representer::ALL.to_vec())
    }
}

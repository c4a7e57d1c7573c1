//! Candidate generators.
//!
//! Each representer looks at a set and proposes zero or one scored rendering.
//! They are independent of each other except `except_for`, which asks the
//! engine to render the addresses it excludes.

use super::engine::Registry;
use super::fmtrange::{fmtrange, merge_runs};
use super::smallest::find_smallest;
use crate::config::{
    EMPTY_TEXT, EXCEPT_SEPARATOR, LIST_SEPARATOR, SCORE_EMPTY, SCORE_EXCEPT_BASE,
    SCORE_EXCEPT_EXTRA_RUN, SCORE_EXCEPT_FACTOR, SCORE_EXTRA_RUN, SCORE_PER_LISTED_PREFIX,
    SCORE_SINGLETON,
};
use crate::models::{Candidate, PrefixSet};
use itertools::Itertools;
use std::error::Error;
use std::fmt;

/// Identity of a rendering strategy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Representer {
    /// The set is exactly one block.
    Singleton,
    /// The set holds no address.
    Empty,
    /// Contiguous runs, each as an address, a block or a `{lo-hi}` range.
    DashedRange,
    /// Every block listed verbatim. Always available, always expensive.
    PrefixList,
    /// Smallest enclosing block minus the addresses not in the set.
    ExceptFor,
}

impl Representer {
    /// All representers, in registration order.
    pub const ALL: [Representer; 5] = [
        Representer::Singleton,
        Representer::Empty,
        Representer::DashedRange,
        Representer::PrefixList,
        Representer::ExceptFor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Representer::Singleton => "singleton",
            Representer::Empty => "empty",
            Representer::DashedRange => "dashed_range",
            Representer::PrefixList => "prefix_list",
            Representer::ExceptFor => "except_for",
        }
    }

    /// Propose a rendering of `set`, if this strategy applies.
    ///
    /// `registry` and `ignore` are only consulted by [`Representer::ExceptFor`].
    pub fn represent(
        &self,
        set: &PrefixSet,
        registry: &Registry,
        ignore: &[Representer],
    ) -> Result<Option<Candidate>, Box<dyn Error>> {
        match self {
            Representer::Singleton => Ok(singleton(set)),
            Representer::Empty => Ok(empty(set)),
            Representer::DashedRange => dashed_range(set),
            Representer::PrefixList => Ok(prefix_list(set)),
            Representer::ExceptFor => except_for(set, registry, ignore),
        }
    }
}

impl fmt::Display for Representer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn singleton(set: &PrefixSet) -> Option<Candidate> {
    match set.prefixes() {
        [only] => Some(Candidate::new(SCORE_SINGLETON, only.to_string())),
        _ => None,
    }
}

pub fn empty(set: &PrefixSet) -> Option<Candidate> {
    set.is_empty()
        .then(|| Candidate::new(SCORE_EMPTY, EMPTY_TEXT))
}

/// Join contiguous runs, formatting each with [`fmtrange`].
///
/// Every run after the first costs [`SCORE_EXTRA_RUN`] on top of its own score.
pub fn dashed_range(set: &PrefixSet) -> Result<Option<Candidate>, Box<dyn Error>> {
    let runs = merge_runs(set.prefixes());
    if runs.is_empty() {
        return Ok(None);
    }
    log::trace!("dashed_range: {} run(s)", runs.len());

    let parts = runs
        .iter()
        .map(|&(start, end)| fmtrange(start, end))
        .collect::<Result<Vec<_>, _>>()?;
    let score = parts.iter().map(|c| c.score).sum::<f64>()
        + SCORE_EXTRA_RUN * (parts.len() - 1) as f64;
    let text = parts.iter().map(|c| c.text.as_str()).join(LIST_SEPARATOR);
    Ok(Some(Candidate::new(score, text)))
}

pub fn prefix_list(set: &PrefixSet) -> Option<Candidate> {
    if set.is_empty() {
        return None;
    }
    Some(Candidate::new(
        SCORE_PER_LISTED_PREFIX * set.len() as f64,
        set.prefixes().iter().join(LIST_SEPARATOR),
    ))
}

/// Render `set` as its smallest enclosing block except the missing addresses.
///
/// The missing addresses are rendered by `registry` with `except_for` ignored,
/// so the form never nests. Each excluded run after the first adds
/// [`SCORE_EXCEPT_EXTRA_RUN`], so an exclusion as fragmented as the set itself
/// never wins. Calling this while `except_for` is already in `ignore` is an
/// error.
pub fn except_for(
    set: &PrefixSet,
    registry: &Registry,
    ignore: &[Representer],
) -> Result<Option<Candidate>, Box<dyn Error>> {
    if ignore.contains(&Representer::ExceptFor) {
        return Err(format!("except_for nested inside except_for while rendering [{set}]").into());
    }
    if set.is_empty() {
        return Ok(None);
    }

    let block = find_smallest(set);
    let excluded = PrefixSet::from(block).difference(set);
    if excluded.is_empty() {
        return Ok(None);
    }

    let mut inner_ignore = ignore.to_vec();
    inner_ignore.push(Representer::ExceptFor);
    let inner = registry.best(&excluded, &inner_ignore)?;
    let extra_runs = excluded.ranges().count().saturating_sub(1);

    Ok(Some(Candidate::new(
        SCORE_EXCEPT_BASE
            + SCORE_EXCEPT_FACTOR * inner.score
            + SCORE_EXCEPT_EXTRA_RUN * extra_runs as f64,
        format!("{block}{EXCEPT_SEPARATOR}{}", inner.text),
    )))
}

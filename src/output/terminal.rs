//! Terminal output utilities.
//!
//! Provides formatting helpers for listing candidate renderings.

use crate::models::{Candidate, PrefixSet};
use crate::processing::DEFAULT_REGISTRY;
use colored::Colorize;
use std::error::Error;

/// Format a score right-aligned to a fixed number of decimals.
///
/// # Arguments
/// * `score` - The score to format
/// * `width` - The minimum width of the field
pub fn format_score(score: f64, width: usize) -> String {
    format!("{score:>width$.3}")
}

/// One line of the candidate listing; the winner is starred and highlighted.
pub fn candidate_line(candidate: &Candidate, is_best: bool) -> String {
    let score = format_score(candidate.score, 8);
    if is_best {
        format!("* {} {}", score.green(), candidate.text.as_str().bold())
    } else {
        format!("  {score} {}", candidate.text)
    }
}

/// Listing lines for `candidates`, marking only the first one equal to `best`.
pub fn candidate_lines(candidates: &[Candidate], best: &Candidate) -> Vec<String> {
    let mut marked = false;
    candidates
        .iter()
        .map(|candidate| {
            let is_best = !marked && candidate == best;
            marked |= is_best;
            candidate_line(candidate, is_best)
        })
        .collect()
}

/// Print every candidate for `set` with its score, best one highlighted.
pub fn print_candidates(set: &PrefixSet) -> Result<(), Box<dyn Error>> {
    let best = DEFAULT_REGISTRY.best(set, &[])?;
    let candidates = DEFAULT_REGISTRY
        .representations_for(set, &[])
        .collect::<Result<Vec<_>, _>>()?;
    for line in candidate_lines(&candidates, &best) {
        println!("{line}");
    }
    Ok(())
}

//! Scored rendering proposed by a representer.

/// A `(score, text)` proposal. Lower scores are more readable.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub score: f64,
    pub text: String,
}

impl Candidate {
    pub fn new(score: f64, text: impl Into<String>) -> Candidate {
        Candidate {
            score,
            text: text.into(),
        }
    }
}

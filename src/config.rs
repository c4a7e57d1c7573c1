//! Scoring weights and runtime settings.

/// Score of a range that is a single address.
pub const SCORE_SINGLE_ADDRESS: f64 = 0.25;
/// Score of a range that is exactly one aligned CIDR block.
pub const SCORE_CIDR_BLOCK: f64 = 0.5;
/// Score of a dashed range, indexed by the number of octets that differ minus one.
pub const SCORE_DASHED: [f64; 4] = [1.0, 1.25, 1.5, 1.5];
/// Added by `dashed_range` for every run after the first.
pub const SCORE_EXTRA_RUN: f64 = 1.0;

/// Score of the `singleton` representer.
pub const SCORE_SINGLETON: f64 = 1.0;
/// Score of the `empty` representer.
pub const SCORE_EMPTY: f64 = 0.0;
/// Per-prefix score of the `prefix_list` fallback.
pub const SCORE_PER_LISTED_PREFIX: f64 = 10.0;
/// Base score of the `except_for` representer.
pub const SCORE_EXCEPT_BASE: f64 = 2.0;
/// Weight applied to the excluded set's own score in `except_for`.
pub const SCORE_EXCEPT_FACTOR: f64 = 0.9;
/// Added by `except_for` for every excluded run after the first, on top of
/// the weighted excluded score.
pub const SCORE_EXCEPT_EXTRA_RUN: f64 = 1.5;

/// Text rendered for the empty set.
pub const EMPTY_TEXT: &str = "nothing";
/// Separator between the enclosing block and the excluded addresses.
pub const EXCEPT_SEPARATOR: &str = " except ";
/// Separator between listed items.
pub const LIST_SEPARATOR: &str = ", ";

/// Prefix length returned by `find_smallest` for the empty set.
pub const EMPTY_SET_SMALLEST_LEN: u8 = crate::models::MAX_LENGTH - 8;

/// Default log4rs configuration file.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";
/// Environment variable overriding [`LOG_CONFIG_FILE`].
pub const LOG_CONFIG_ENV: &str = "PRETTYIP_LOG_CONFIG";

/// Log4rs configuration path, from the environment or the default.
pub fn log_config_file() -> String {
    std::env::var(LOG_CONFIG_ENV).unwrap_or_else(|_| LOG_CONFIG_FILE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_ordering() {
        assert!(SCORE_SINGLE_ADDRESS < SCORE_CIDR_BLOCK);
        assert!(SCORE_CIDR_BLOCK < SCORE_DASHED[0]);
        assert!(SCORE_DASHED.windows(2).all(|w| w[0] <= w[1]));
        // splitting a run into two must never pay off
        assert!(SCORE_DASHED[3] <= 2.0 * SCORE_SINGLE_ADDRESS + SCORE_EXTRA_RUN);
        // except_for must never beat a single run
        assert!(SCORE_EXCEPT_BASE + SCORE_EXCEPT_FACTOR * SCORE_SINGLE_ADDRESS > SCORE_DASHED[3]);
        assert!(SCORE_PER_LISTED_PREFIX > SCORE_DASHED[3] + SCORE_EXTRA_RUN);
        // an excluded run costs more than any run of the set it replaces
        assert!(
            SCORE_EXCEPT_EXTRA_RUN + SCORE_EXCEPT_FACTOR * (SCORE_SINGLE_ADDRESS + SCORE_EXTRA_RUN)
                > SCORE_DASHED[3] + SCORE_EXTRA_RUN
        );
    }
}

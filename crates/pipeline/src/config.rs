//! Tunables for the relaxation steps.

/// The director subset is only used when it has strictly more matches than this
pub const DIRECTOR_MATCH_THRESHOLD: usize = 5;

/// The title-type subset is only used when it has at least this many matches
pub const TITLE_TYPE_MATCH_THRESHOLD: usize = 5;

/// Default number of recommendations returned
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub director_match_threshold: usize,
    pub title_type_match_threshold: usize,
    pub top_n: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            director_match_threshold: DIRECTOR_MATCH_THRESHOLD,
            title_type_match_threshold: TITLE_TYPE_MATCH_THRESHOLD,
            top_n: DEFAULT_TOP_N,
        }
    }
}

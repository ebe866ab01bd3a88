use std::path::PathBuf;

use wordfreq_core::TOP_N;

/// Input used when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "data/pride_and_prejudice.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub input: PathBuf,
    pub top_n: usize,
}

impl RunSettings {
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            top_n: TOP_N,
        }
    }
}

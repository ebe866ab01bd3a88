use std::io::{self, Write};

use freq_logging::{freq_debug, freq_info, freq_warn};
use thiserror::Error;
use wordfreq_core::{count, top_n, RankedList, Tokenizer};

use crate::load::{load, LoadError};
use crate::report::render_ranked_list;
use crate::settings::RunSettings;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Load, tokenize, count and rank `settings.input`, then write the report line to `out`.
///
/// Nothing is written to `out` unless every stage before printing succeeds.
pub fn run(
    settings: &RunSettings,
    tokenizer: &dyn Tokenizer,
    out: &mut dyn Write,
) -> Result<RankedList, PipelineError> {
    let text = load(&settings.input)?;

    let tokens = tokenizer.tokenize(&text);
    freq_debug!("Tokenized {} words", tokens.len());

    let table = count(tokens);
    freq_info!(
        "Counted {} tokens ({} distinct) in {:?}",
        table.total(),
        table.len(),
        settings.input
    );

    if table.is_empty() {
        freq_warn!("No words found in {:?}", settings.input);
    }

    let ranked = top_n(table, settings.top_n);
    writeln!(out, "{}", render_ranked_list(&ranked))?;
    out.flush()?;
    Ok(ranked)
}

mod logging;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use freq_logging::{freq_error, freq_info};
use wordfreq_core::WhitespaceTokenizer;
use wordfreq_engine::{run, RunSettings, DEFAULT_INPUT};

/// Print the ten most frequent words of a UTF-8 text file.
#[derive(Debug, Parser)]
#[command(name = "wordfreq", version)]
struct Cli {
    /// Text file to analyze.
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    input: PathBuf,
}

impl Cli {
    fn settings(&self) -> RunSettings {
        RunSettings::for_input(&self.input)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(freq_logging::default_level());

    let settings = cli.settings();
    freq_info!("Analyzing {:?}", settings.input);

    let mut stdout = io::stdout().lock();
    if let Err(err) = run(&settings, &WhitespaceTokenizer, &mut stdout) {
        freq_error!("Run failed: {}", err);
        return Err(err).with_context(|| format!("could not analyze {:?}", settings.input));
    }
    Ok(())
}

//! Logger initialization for the `wordfreq` binary.
//!
//! Records go to stderr; stdout is reserved for the report line.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

pub fn initialize(level: LevelFilter) {
    // Ignore the error if a logger is already installed.
    let _ = TermLogger::init(
        level,
        build_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

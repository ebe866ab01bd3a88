//! Wordfreq engine: file loading and the load-to-report pipeline.
mod load;
mod pipeline;
mod report;
mod settings;

pub use load::{load, LoadError};
pub use pipeline::{run, PipelineError};
pub use report::render_ranked_list;
pub use settings::{RunSettings, DEFAULT_INPUT};

//! Wordfreq core: pure tokenizing, counting and ranking.
mod rank;
mod table;
mod token;

pub use rank::{top_n, RankedEntry, RankedList, TOP_N};
pub use table::{count, FrequencyTable};
pub use token::{tokenize, Token, Tokenizer, WhitespaceTokenizer};

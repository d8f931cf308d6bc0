pub mod aggregator;
pub mod report;
pub mod session;
pub mod stopwords;
pub mod tokenizer;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{StopWordSet, TagFrequencies};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;

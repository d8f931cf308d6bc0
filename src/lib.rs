pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, Settings};

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::aggregator::{aggregate, process_file};
pub use crate::core::report::{export_tags, render_export, render_report, ExportFormat};
pub use crate::core::session::{
    dispatch, Command, Outcome, SessionPhase, SessionSettings, SessionState,
};
pub use crate::core::stopwords::load_stop_words;
pub use crate::core::tokenizer::tokenize;
pub use domain::model::{StopWordSet, TagFrequencies};
pub use domain::ports::Storage;
pub use utils::error::{Result, TagError};

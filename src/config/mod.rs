#[cfg(feature = "cli")]
pub mod args;
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::{CliConfig, Mode, RunArgs};

use crate::core::report::ExportFormat;
use crate::core::session::SessionSettings;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

/// 合併設定檔與命令列參數後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_dir: String,
    pub stop_words: Option<String>,
    pub export_format: ExportFormat,
    pub output_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_dir: ".".to_string(),
            stop_words: None,
            export_format: ExportFormat::default(),
            output_path: None,
        }
    }
}

impl Settings {
    pub fn from_file_config(config: &TomlConfig) -> Self {
        Self {
            base_dir: config.base_dir().to_string(),
            stop_words: config.stop_words_path().map(str::to_string),
            export_format: config.export_format(),
            output_path: config.output_path().map(str::to_string),
        }
    }

    /// 命令列參數優先於設定檔
    #[cfg(feature = "cli")]
    pub fn apply_cli(mut self, cli: &CliConfig) -> Self {
        if let Some(base_dir) = &cli.base_dir {
            self.base_dir = base_dir.clone();
        }
        if let Some(stop_words) = &cli.stop_words {
            self.stop_words = Some(stop_words.clone());
        }
        if let Some(format) = cli.format {
            self.export_format = format;
        }
        if let Mode::Run(args) = &cli.command {
            if let Some(output) = &args.output {
                self.output_path = Some(output.clone());
            }
        }
        self
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            export_format: self.export_format,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("base_dir", &self.base_dir)?;
        if let Some(stop_words) = &self.stop_words {
            validation::validate_path("stop_words", stop_words)?;
        }
        if let Some(output) = &self.output_path {
            validation::validate_path("output", output)?;
        }
        Ok(())
    }
}

use crate::core::report::ExportFormat;
use crate::utils::error::{Result, TagError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// 預設載入的停用詞檔
    pub stop_words: Option<String>,
    /// 相對路徑的基準目錄
    pub base_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<ExportFormat>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TagError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TagError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})；未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn base_dir(&self) -> &str {
        self.extractor.base_dir.as_deref().unwrap_or(".")
    }

    pub fn stop_words_path(&self) -> Option<&str> {
        self.extractor.stop_words.as_deref()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    pub fn export_format(&self) -> ExportFormat {
        self.output.format.unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("extractor.base_dir", self.base_dir())?;
        if let Some(stop_words) = self.stop_words_path() {
            validation::validate_path("extractor.stop_words", stop_words)?;
        }
        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }
        Ok(())
    }
}

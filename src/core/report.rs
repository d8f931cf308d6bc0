use crate::domain::model::TagFrequencies;
use crate::domain::ports::Storage;
use crate::utils::error::{Result, TagError};
use crate::utils::validation::extension_mismatch;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const REPORT_HEADER: &str = "Tag Frequencies:";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `word,count` per line
    #[default]
    Csv,
    /// `word<TAB>count` per line
    Tsv,
    /// JSON object keyed by word
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Tsv, ExportFormat::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TagError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: "Unsupported format. Valid formats: csv, tsv, json".to_string(),
            })
    }
}

/// 畫面顯示用的報表：標題、空行，再逐行列出 `word: count`
pub fn render_report(frequencies: &TagFrequencies) -> String {
    let mut report = String::with_capacity(REPORT_HEADER.len() + 2 + frequencies.len() * 12);
    report.push_str(REPORT_HEADER);
    report.push_str("\n\n");
    for (tag, count) in frequencies.iter() {
        report.push_str(&format!("{}: {}\n", tag, count));
    }
    report
}

/// 產生匯出內容；沒有任何詞頻時回傳 `EmptyResult`
pub fn render_export(frequencies: &TagFrequencies, format: ExportFormat) -> Result<Vec<u8>> {
    if frequencies.is_empty() {
        return Err(TagError::EmptyResult);
    }

    match format {
        ExportFormat::Csv => write_delimited(frequencies, b','),
        ExportFormat::Tsv => write_delimited(frequencies, b'\t'),
        ExportFormat::Json => {
            let mut json = serde_json::to_vec_pretty(frequencies)?;
            json.push(b'\n');
            Ok(json)
        }
    }
}

fn write_delimited(frequencies: &TagFrequencies, delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for (tag, count) in frequencies.iter() {
        writer.write_record([tag, count.to_string().as_str()])?;
    }

    writer
        .into_inner()
        .map_err(|e| TagError::IoError(std::io::Error::other(e.to_string())))
}

/// 將詞頻寫入 `path`，回傳寫出的筆數
///
/// Nothing is written when the mapping is empty. The mapping itself is only
/// borrowed, so a failed write leaves it intact. Any file name is accepted;
/// an extension naming another format only produces a warning.
pub fn export_tags<S: Storage>(
    storage: &S,
    path: &str,
    frequencies: &TagFrequencies,
    format: ExportFormat,
) -> Result<usize> {
    let data = render_export(frequencies, format)?;

    if let Some(declared) = extension_mismatch(path, format) {
        tracing::warn!(
            "⚠️ {} looks like a {} file but tags are written as {}",
            path,
            declared,
            format
        );
    }

    tracing::debug!("Writing {} bytes of {} to {}", data.len(), format, path);
    storage
        .write_file(path, &data)
        .map_err(|source| TagError::Export {
            path: path.to_string(),
            source,
        })?;

    tracing::info!("Saved {} tags to {}", frequencies.len(), path);
    Ok(frequencies.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::MemoryStorage;

    fn sample() -> TagFrequencies {
        let mut freqs = TagFrequencies::new();
        for tag in ["sat", "cat", "mat", "cat"] {
            freqs.record(tag);
        }
        freqs
    }

    #[test]
    fn test_render_report() {
        assert_eq!(
            render_report(&sample()),
            "Tag Frequencies:\n\ncat: 2\nmat: 1\nsat: 1\n"
        );
    }

    #[test]
    fn test_render_report_empty_has_header_only() {
        assert_eq!(render_report(&TagFrequencies::new()), "Tag Frequencies:\n\n");
    }

    #[test]
    fn test_csv_export() {
        let data = render_export(&sample(), ExportFormat::Csv).unwrap();
        assert_eq!(String::from_utf8(data).unwrap(), "cat,2\nmat,1\nsat,1\n");
    }

    #[test]
    fn test_tsv_export() {
        let data = render_export(&sample(), ExportFormat::Tsv).unwrap();
        assert_eq!(String::from_utf8(data).unwrap(), "cat\t2\nmat\t1\nsat\t1\n");
    }

    #[test]
    fn test_json_export_keeps_key_order() {
        let data = render_export(&sample(), ExportFormat::Json).unwrap();
        let text = String::from_utf8(data).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["cat"], 2);
        assert!(text.find("\"cat\"").unwrap() < text.find("\"mat\"").unwrap());
        assert!(text.find("\"mat\"").unwrap() < text.find("\"sat\"").unwrap());
    }

    #[test]
    fn test_export_empty_writes_nothing() {
        let storage = MemoryStorage::new();
        let err = export_tags(&storage, "out.csv", &TagFrequencies::new(), ExportFormat::Csv)
            .unwrap_err();
        assert!(matches!(err, TagError::EmptyResult));
        assert!(storage.get_file("out.csv").is_none());
    }

    #[test]
    fn test_export_twice_is_byte_identical() {
        let storage = MemoryStorage::new();
        let freqs = sample();
        export_tags(&storage, "a.csv", &freqs, ExportFormat::Csv).unwrap();
        export_tags(&storage, "b.csv", &freqs, ExportFormat::Csv).unwrap();
        assert_eq!(storage.get_file("a.csv"), storage.get_file("b.csv"));
    }

    #[test]
    fn test_export_failure_reports_path() {
        let storage = MemoryStorage::new().read_only();
        let freqs = sample();
        let err = export_tags(&storage, "locked.csv", &freqs, ExportFormat::Csv).unwrap_err();
        assert!(matches!(err, TagError::Export { ref path, .. } if path == "locked.csv"));
        assert_eq!(freqs, sample());
    }

    #[test]
    fn test_export_ignores_mismatched_extension() {
        let storage = MemoryStorage::new();
        let entries = export_tags(&storage, "tags.json", &sample(), ExportFormat::Csv).unwrap();
        assert_eq!(entries, 3);
        assert_eq!(storage.get_file("tags.json").unwrap(), b"cat,2\nmat,1\nsat,1\n");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(" json ".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}

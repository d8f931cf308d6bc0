use crate::core::report::ExportFormat;
use crate::utils::error::{Result, TagError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(TagError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TagError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 副檔名指向另一種已知格式時回傳該格式；未知或沒有副檔名回傳 `None`
pub fn extension_mismatch(path: &str, format: ExportFormat) -> Option<ExportFormat> {
    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())?;

    extension
        .parse::<ExportFormat>()
        .ok()
        .filter(|declared| *declared != format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", "tags.csv").is_ok());
        assert!(validate_path("output", "").is_err());
        assert!(validate_path("output", "   ").is_err());
        assert!(validate_path("output", "bad\0name").is_err());
    }

    #[test]
    fn test_extension_mismatch() {
        assert_eq!(extension_mismatch("tags.csv", ExportFormat::Csv), None);
        assert_eq!(extension_mismatch("tags.TSV", ExportFormat::Tsv), None);
        assert_eq!(extension_mismatch("tags.txt", ExportFormat::Json), None);
        assert_eq!(extension_mismatch("tags", ExportFormat::Json), None);
        assert_eq!(
            extension_mismatch("tags.json", ExportFormat::Csv),
            Some(ExportFormat::Json)
        );
    }
}

use crate::domain::ports::Storage;
use std::fs;
use std::io;
use std::path::PathBuf;

/// 本機檔案系統；相對路徑以 `base_path` 為基準，絕對路徑原樣使用
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());
        fs::read(full_path)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> io::Result<()> {
        let full_path = self.resolve(path);
        tracing::debug!("Writing {} bytes to {}", data.len(), full_path.display());

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Directory does not exist: {}", parent.display()),
                ));
            }
        }

        fs::write(full_path, data)
    }
}

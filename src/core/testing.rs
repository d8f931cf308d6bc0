use crate::domain::ports::Storage;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

/// 記憶體內的 Storage，測試用
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<HashMap<String, Vec<u8>>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: impl AsRef<[u8]>) -> Self {
        self.files
            .borrow_mut()
            .insert(path.to_string(), content.as_ref().to_vec());
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn get_file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }
}

impl Storage for MemoryStorage {
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("File not found: {}", path))
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Permission denied: {}", path),
            ));
        }
        self.files.borrow_mut().insert(path.to_string(), data.to_vec());
        Ok(())
    }
}

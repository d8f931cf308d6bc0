use crate::core::tokenizer::lines_of;
use crate::domain::model::StopWordSet;
use crate::domain::ports::Storage;
use crate::utils::error::{Result, TagError};

/// 讀取停用詞檔並回傳新的集合
///
/// The caller decides whether to replace its current set; on error nothing
/// has been touched, so the previous set stays in effect.
pub fn load_stop_words<S: Storage>(storage: &S, path: &str) -> Result<StopWordSet> {
    tracing::debug!("Loading stop words from: {}", path);

    let data = storage
        .read_file(path)
        .map_err(|source| TagError::StopWordLoad {
            path: path.to_string(),
            source,
        })?;

    let stop_words = StopWordSet::from_lines(lines_of(&data));
    tracing::info!("Loaded {} stop words from {}", stop_words.len(), path);
    Ok(stop_words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::MemoryStorage;

    #[test]
    fn test_load_stop_words_mixed_case_and_blank_lines() {
        let storage = MemoryStorage::new().with_file("stop.txt", "  The\n\nAND\n");
        let set = load_stop_words(&storage, "stop.txt").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["and", "the"]);
    }

    #[test]
    fn test_load_stop_words_crlf_file() {
        let storage = MemoryStorage::new().with_file("stop.txt", "a\r\nAn\r\n \r\nthe\r\n");
        let set = load_stop_words(&storage, "stop.txt").unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("an"));
    }

    #[test]
    fn test_load_stop_words_carriage_return_only_file() {
        let storage = MemoryStorage::new().with_file("stop.txt", "the\ron\r");
        let set = load_stop_words(&storage, "stop.txt").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["on", "the"]);
    }

    #[test]
    fn test_load_stop_words_missing_file() {
        let storage = MemoryStorage::new();
        let err = load_stop_words(&storage, "missing.txt").unwrap_err();
        assert!(matches!(err, TagError::StopWordLoad { ref path, .. } if path == "missing.txt"));
    }

    #[test]
    fn test_load_empty_stop_word_file() {
        let storage = MemoryStorage::new().with_file("stop.txt", "");
        assert!(load_stop_words(&storage, "stop.txt").unwrap().is_empty());
    }
}

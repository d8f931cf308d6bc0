use crate::core::tokenizer::{lines_of, tokenize};
use crate::domain::model::{StopWordSet, TagFrequencies};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, TagError};

/// 計算詞頻，停用詞不計入
///
/// Always starts from an empty mapping, so results never accumulate across
/// calls.
pub fn aggregate<I, S>(lines: I, stop_words: &StopWordSet) -> TagFrequencies
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut frequencies = TagFrequencies::new();
    for line in lines {
        for token in tokenize(line.as_ref()) {
            if !stop_words.contains(&token) {
                frequencies.record(token);
            }
        }
    }
    frequencies
}

pub fn process_file<S: Storage>(
    storage: &S,
    path: &str,
    stop_words: &StopWordSet,
) -> Result<TagFrequencies> {
    tracing::debug!(
        "Processing {} with {} stop words",
        path,
        stop_words.len()
    );

    let data = storage
        .read_file(path)
        .map_err(|source| TagError::FileProcess {
            path: path.to_string(),
            source,
        })?;

    let frequencies = aggregate(lines_of(&data), stop_words);
    tracing::info!(
        "Extracted {} distinct tags ({} occurrences) from {}",
        frequencies.len(),
        frequencies.total(),
        path
    );
    Ok(frequencies)
}

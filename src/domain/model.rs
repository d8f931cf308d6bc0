use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// 停用詞集合：全部小寫、去除前後空白、不含空字串
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: BTreeSet<String>,
}

impl StopWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 每行一個停用詞，空白行略過，重複的詞只保留一次
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// 詞頻對照表，依字典序迭代；計數永遠 >= 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagFrequencies {
    counts: BTreeMap<String, u64>,
}

impl TagFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count for `tag`, inserting it at 1 when unseen.
    pub fn record(&mut self, tag: impl Into<String>) {
        *self.counts.entry(tag.into()).or_insert(0) += 1;
    }

    pub fn get(&self, tag: &str) -> Option<u64> {
        self.counts.get(tag).copied()
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of non-stop tokens seen.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(tag, count)| (tag.as_str(), *count))
    }
}

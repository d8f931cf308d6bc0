use crate::core::aggregator::process_file;
use crate::core::report::{export_tags, render_report, ExportFormat};
use crate::core::stopwords::load_stop_words;
use crate::domain::model::{StopWordSet, TagFrequencies};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// 一次工作階段的狀態快照，由呼叫端持有並在每個指令間傳遞
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    stop_words: StopWordSet,
    stop_words_source: Option<String>,
    frequencies: TagFrequencies,
    current_file: Option<String>,
    last_saved: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NoFileLoaded,
    StopWordsLoaded,
    FileProcessed,
    Saved,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_words(mut self, stop_words: StopWordSet, source: impl Into<String>) -> Self {
        self.stop_words = stop_words;
        self.stop_words_source = Some(source.into());
        self
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    pub fn stop_words_source(&self) -> Option<&str> {
        self.stop_words_source.as_deref()
    }

    pub fn frequencies(&self) -> &TagFrequencies {
        &self.frequencies
    }

    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    pub fn last_saved(&self) -> Option<&str> {
        self.last_saved.as_deref()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.last_saved.is_some() {
            SessionPhase::Saved
        } else if self.current_file.is_some() {
            SessionPhase::FileProcessed
        } else if self.stop_words_source.is_some() {
            SessionPhase::StopWordsLoaded
        } else {
            SessionPhase::NoFileLoaded
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectTargetFile(String),
    SelectStopWords(String),
    SaveTags(String),
    ShowReport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    StopWordsLoaded { path: String, count: usize },
    FileProcessed { path: String, distinct: usize, total: u64 },
    TagsSaved { path: String, entries: usize },
    Report(String),
}

impl Outcome {
    /// 成功時顯示給使用者的訊息
    pub fn message(&self) -> String {
        match self {
            Outcome::StopWordsLoaded { count, .. } => format!("Loaded {} stop words", count),
            Outcome::FileProcessed {
                path,
                distinct,
                total,
            } => {
                let name = Path::new(path)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.clone());
                format!(
                    "Selected file: {} ({} distinct tags, {} occurrences)",
                    name, distinct, total
                )
            }
            Outcome::TagsSaved { .. } => "Tags saved successfully".to_string(),
            Outcome::Report(report) => report.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSettings {
    pub export_format: ExportFormat,
}

/// 執行單一指令，回傳新的狀態與結果
///
/// State transitions:
/// - stop words: replaced wholesale on success, untouched on failure; the
///   current frequencies are never recomputed.
/// - target file: the mapping is cleared before reading, so a failed read
///   leaves an empty mapping behind.
/// - save: never changes the mapping; only a successful write records the
///   destination.
pub fn dispatch<S: Storage>(
    storage: &S,
    state: SessionState,
    command: &Command,
    settings: &SessionSettings,
) -> (SessionState, Result<Outcome>) {
    tracing::debug!("Dispatching {:?} in phase {:?}", command, state.phase());

    match command {
        Command::SelectStopWords(path) => match load_stop_words(storage, path) {
            Ok(stop_words) => {
                let count = stop_words.len();
                let next = state.with_stop_words(stop_words, path.clone());
                (
                    next,
                    Ok(Outcome::StopWordsLoaded {
                        path: path.clone(),
                        count,
                    }),
                )
            }
            Err(e) => {
                tracing::warn!("Keeping previous stop words: {}", e);
                (state, Err(e))
            }
        },
        Command::SelectTargetFile(path) => {
            let mut next = SessionState {
                frequencies: TagFrequencies::new(),
                current_file: Some(path.clone()),
                last_saved: None,
                ..state
            };
            match process_file(storage, path, &next.stop_words) {
                Ok(frequencies) => {
                    let outcome = Outcome::FileProcessed {
                        path: path.clone(),
                        distinct: frequencies.len(),
                        total: frequencies.total(),
                    };
                    next.frequencies = frequencies;
                    (next, Ok(outcome))
                }
                Err(e) => (next, Err(e)),
            }
        }
        Command::SaveTags(path) => {
            match export_tags(storage, path, &state.frequencies, settings.export_format) {
                Ok(entries) => {
                    let next = SessionState {
                        last_saved: Some(path.clone()),
                        ..state
                    };
                    (
                        next,
                        Ok(Outcome::TagsSaved {
                            path: path.clone(),
                            entries,
                        }),
                    )
                }
                Err(e) => (state, Err(e)),
            }
        }
        Command::ShowReport => {
            let report = render_report(&state.frequencies);
            (state, Ok(Outcome::Report(report)))
        }
    }
}

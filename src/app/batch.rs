use crate::config::Settings;
use crate::core::session::{dispatch, Command, Outcome, SessionState};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, TagError};

#[derive(Debug)]
pub struct RunSummary {
    pub report: String,
    pub saved: Option<usize>,
    /// 不影響結果的警告，例如沒有可儲存的詞
    pub warnings: Vec<TagError>,
}

/// 非互動模式：依序載入停用詞、處理檔案、產生報表，有設定輸出路徑時再儲存
pub fn run_once<S: Storage>(
    storage: &S,
    input: &str,
    settings: &Settings,
) -> Result<RunSummary> {
    let session_settings = settings.session_settings();
    let mut state = SessionState::new();
    let mut warnings = Vec::new();

    let mut commands = Vec::with_capacity(4);
    if let Some(stop_words) = &settings.stop_words {
        commands.push(Command::SelectStopWords(stop_words.clone()));
    }
    commands.push(Command::SelectTargetFile(input.to_string()));
    commands.push(Command::ShowReport);
    if let Some(output) = &settings.output_path {
        commands.push(Command::SaveTags(output.clone()));
    }

    let mut report = String::new();
    let mut saved = None;
    for command in &commands {
        let (next, result) = dispatch(storage, state, command, &session_settings);
        state = next;
        match result {
            Ok(Outcome::Report(text)) => report = text,
            Ok(Outcome::TagsSaved { entries, .. }) => saved = Some(entries),
            Ok(outcome) => tracing::info!("{}", outcome.message()),
            Err(TagError::EmptyResult) => {
                tracing::warn!("Nothing to save: no tags were extracted from {}", input);
                warnings.push(TagError::EmptyResult);
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!("Run finished in phase {:?}", state.phase());
    Ok(RunSummary {
        report,
        saved,
        warnings,
    })
}

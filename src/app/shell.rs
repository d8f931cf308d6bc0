use crate::config::Settings;
use crate::core::session::{dispatch, Command, Outcome, SessionState};
use crate::domain::ports::Storage;
use crate::utils::error::{ErrorSeverity, Result, TagError};
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  open <file>        select a text file and extract its tags
  stop [file]        load a stop-word list (defaults to the configured one)
  save [file]        save tags (defaults to the configured output path)
  show               print the current tag report
  status             print the session state
  help               print this help
  quit               leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Run(Command),
    Status,
    Help,
    Quit,
}

fn required_argument(verb: &str, argument: Option<String>, name: &str) -> Result<String> {
    argument.ok_or_else(|| TagError::MissingArgument {
        command: verb.to_string(),
        argument: name.to_string(),
    })
}

/// 解析一行輸入；空白行與 `#` 開頭的註解回傳 `None`
pub fn parse_line(line: &str, settings: &Settings) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let argument = (!rest.is_empty()).then(|| rest.to_string());
    let verb = verb.to_ascii_lowercase();

    let command = match verb.as_str() {
        "open" | "file" => {
            let path = required_argument(&verb, argument, "file")?;
            ShellCommand::Run(Command::SelectTargetFile(path))
        }
        "stop" | "stopwords" => {
            let path = argument.or_else(|| settings.stop_words.clone());
            let path = required_argument(&verb, path, "file")?;
            ShellCommand::Run(Command::SelectStopWords(path))
        }
        "save" => {
            let path = argument.or_else(|| settings.output_path.clone());
            let path = required_argument(&verb, path, "file")?;
            ShellCommand::Run(Command::SaveTags(path))
        }
        "show" | "report" => ShellCommand::Run(Command::ShowReport),
        "status" => ShellCommand::Status,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => return Err(TagError::UnknownCommand { input: verb.clone() }),
    };
    Ok(Some(command))
}

pub fn status_text(state: &SessionState) -> String {
    format!(
        "Phase: {:?}\n\
         Stop words: {} ({})\n\
         File: {}\n\
         Tags: {} distinct, {} occurrences\n\
         Last saved: {}",
        state.phase(),
        state.stop_words().len(),
        state.stop_words_source().unwrap_or("none"),
        state.current_file().unwrap_or("No file selected"),
        state.frequencies().len(),
        state.frequencies().total(),
        state.last_saved().unwrap_or("never"),
    )
}

pub fn write_error<W: Write>(out: &mut W, error: &TagError) -> std::io::Result<()> {
    if error.severity() == ErrorSeverity::Low {
        writeln!(out, "⚠️  {}", error.user_friendly_message())
    } else {
        writeln!(out, "❌ {}", error.user_friendly_message())?;
        writeln!(out, "💡 {}", error.recovery_suggestion())
    }
}

/// 互動式工作階段，直到 `quit` 或輸入結束
///
/// Every failure is reported on `out` and the loop keeps going, including
/// input lines that are not valid UTF-8; only I/O errors on the terminal
/// streams end the session early.
pub fn run_shell<S, R, W>(
    storage: &S,
    mut input: R,
    mut out: W,
    settings: &Settings,
    mut state: SessionState,
) -> Result<SessionState>
where
    S: Storage,
    R: BufRead,
    W: Write,
{
    let session_settings = settings.session_settings();
    writeln!(out, "Tag Extractor. Type 'help' for commands.")?;

    let mut buffer = Vec::new();
    let mut line_number = 0usize;
    loop {
        write!(out, "> ")?;
        out.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            writeln!(out)?;
            break;
        }
        line_number += 1;

        let Ok(line) = std::str::from_utf8(&buffer) else {
            let e = TagError::InvalidInput {
                reason: format!("line {} is not valid UTF-8", line_number),
            };
            tracing::warn!("{}", e);
            write_error(&mut out, &e)?;
            continue;
        };

        let command = match parse_line(line, settings) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                write_error(&mut out, &e)?;
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => writeln!(out, "{}", HELP)?,
            ShellCommand::Status => writeln!(out, "{}", status_text(&state))?,
            ShellCommand::Run(command) => {
                let (next, result) = dispatch(storage, state, &command, &session_settings);
                state = next;
                match result {
                    Ok(outcome) => {
                        match &outcome {
                            Outcome::Report(report) => write!(out, "{}", report)?,
                            other => writeln!(out, "✅ {}", other.message())?,
                        }
                        if matches!(outcome, Outcome::FileProcessed { .. }) {
                            let (next, report) =
                                dispatch(storage, state, &Command::ShowReport, &session_settings);
                            state = next;
                            if let Ok(report) = report {
                                write!(out, "{}", report.message())?;
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!("Command {:?} failed: {}", command, e);
                        write_error(&mut out, &e)?;
                    }
                }
            }
        }
    }

    Ok(state)
}

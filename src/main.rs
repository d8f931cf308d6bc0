use clap::Parser;
use std::io::{self, Write};
use tag_extractor::app::{run_once, run_shell, shell::write_error};
use tag_extractor::config::{CliConfig, Mode, Settings};
use tag_extractor::utils::error::{ErrorSeverity, TagError};
use tag_extractor::utils::{logger, validation::Validate};
use tag_extractor::{dispatch, Command, LocalStorage, SessionState, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let settings = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(&e));
        }
    };

    let storage = LocalStorage::new(settings.base_dir.clone());

    match &cli.command {
        Mode::CheckConfig => {
            println!("📋 Configuration Summary:");
            println!("  Base dir: {}", settings.base_dir);
            println!(
                "  Stop words: {}",
                settings.stop_words.as_deref().unwrap_or("none")
            );
            println!("  Format: {}", settings.export_format);
            println!(
                "  Output: {}",
                settings.output_path.as_deref().unwrap_or("none")
            );
            println!("✅ Configuration is valid");
        }
        Mode::Run(args) => match run_once(&storage, &args.input, &settings) {
            Ok(summary) => {
                if !args.quiet {
                    print!("{}", summary.report);
                }
                for warning in &summary.warnings {
                    eprintln!("⚠️  {}", warning.user_friendly_message());
                }
                if let (Some(entries), Some(output)) = (summary.saved, &settings.output_path) {
                    tracing::info!("📁 Saved {} tags to {}", entries, output);
                    eprintln!("✅ Tags saved successfully ({} tags) to {}", entries, output);
                }
            }
            Err(e) => {
                tracing::error!(
                    "❌ Tag extraction failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                let code = exit_code(&e);
                if code > 0 {
                    std::process::exit(code);
                }
            }
        },
        Mode::Shell => {
            let mut state = SessionState::new();
            let stdout = io::stdout();
            let mut out = stdout.lock();

            if let Some(stop_words) = &settings.stop_words {
                let (next, result) = dispatch(
                    &storage,
                    state,
                    &Command::SelectStopWords(stop_words.clone()),
                    &settings.session_settings(),
                );
                state = next;
                match result {
                    Ok(outcome) => writeln!(out, "✅ {}", outcome.message())?,
                    Err(e) => write_error(&mut out, &e)?,
                }
            }

            let stdin = io::stdin();
            let final_state = run_shell(&storage, stdin.lock(), &mut out, &settings, state)?;
            tracing::debug!("Shell finished in phase {:?}", final_state.phase());
        }
    }

    Ok(())
}

fn resolve_settings(cli: &CliConfig) -> Result<Settings, TagError> {
    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            config
        }
        None => TomlConfig::default(),
    };

    let settings = Settings::from_file_config(&file_config).apply_cli(cli);
    settings.validate()?;
    Ok(settings)
}

fn exit_code(e: &TagError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

//! ats-scorer: heuristic ATS scoring for structured resumes

use ats_scorer::advisory::{default_resume_id, parse_advisory_response, AdvisoryPrompt};
use ats_scorer::cli::{self, Cli, Commands, ConfigAction};
use ats_scorer::config::{Config, OutputFormat};
use ats_scorer::error::{AtsScorerError, Result};
use ats_scorer::input::{InputManager, StructuredResumeData};
use ats_scorer::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use ats_scorer::output::report::AtsReport;
use ats_scorer::scoring::CriterionName;
use ats_scorer::AtsEngine;
use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Score {
            files,
            resume_id,
            output,
            save,
            detailed,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let detailed = detailed || config.output.detailed;
            let engine = AtsEngine::new(config.scoring.clone()).context("building the scoring engine")?;
            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed,
                config.output.pretty_json,
                true,
                true,
            );

            if resume_id.is_some() && files.len() > 1 {
                warn!("--resume-id applies to every file in this batch");
            }

            let progress = (files.len() > 1).then(|| progress_bar(files.len() as u64));
            let mut input_manager = InputManager::new();
            let mut degraded = 0;

            for file in &files {
                if let Some(pb) = &progress {
                    pb.set_message(file.display().to_string());
                }

                let (report, resume) =
                    score_file(&engine, &mut input_manager, file, resume_id.as_deref()).await;
                if report.is_degraded() {
                    degraded += 1;
                }

                let mut content = generator.generate_report(&report, &format)?;
                if detailed && format == OutputFormat::Console {
                    if let Some(resume) = &resume {
                        content.push_str(
                            &generator.console().format_criteria(&engine.score_criteria(resume)),
                        );
                    }
                }

                match &save {
                    Some(target) => {
                        let path = save_path(target, file, &format, files.len());
                        save_report_to_file(&content, &path)
                            .with_context(|| format!("saving report to {}", path.display()))?;
                        emit(&progress, &format!("💾 Saved report to {}", path.display()));
                    }
                    None => emit(&progress, &content),
                }

                if let Some(pb) = &progress {
                    pb.inc(1);
                }
            }

            if let Some(pb) = progress {
                pb.finish_and_clear();
            }
            info!("Scored {} file(s), {} degraded", files.len(), degraded);
        }

        Commands::Criteria => {
            println!("📋 Scoring Criteria (scoring table v{})\n", config.scoring.version);
            for name in CriterionName::ALL {
                println!("  • {:<28} {:>4.1} pts  ({})", name.label(), name.max_points(), name.key());
            }
            let total: f64 = CriterionName::ALL.iter().map(|n| n.max_points()).sum();
            println!("  {:<30} {:>4.1} pts", "Total", total);

            let scoring = &config.scoring;
            println!("\nTargets:");
            println!("  Unique keywords: {}", scoring.keyword_target);
            println!("  Action verb ratio: {:.0}%", scoring.action_verb_target_ratio * 100.0);
            println!("  Quantified ratio: {:.0}%", scoring.quantifiable_target_ratio * 100.0);
            println!("  Concise ratio: {:.0}% (max {} chars)", scoring.concise_target_ratio * 100.0, scoring.max_bullet_chars);
            println!(
                "  Summary words: {}-{} ideal, {}-{} acceptable",
                scoring.summary.ideal_min,
                scoring.summary.ideal_max,
                scoring.summary.acceptable_min,
                scoring.summary.acceptable_max
            );

            let report = &scoring.report;
            println!("\nReport thresholds:");
            println!("  Strong ≥ {}%, Okay ≥ {}%", report.strong, report.okay);
            println!(
                "  Overall suggestion bands: medium {} / good {}",
                scoring.suggestions.overall_medium, scoring.suggestions.overall_good
            );
        }

        Commands::Prompt { file } => {
            let mut input_manager = InputManager::new();
            let value = input_manager
                .load_json(&file)
                .await
                .with_context(|| format!("loading {}", file.display()))?;
            let resume = StructuredResumeData::from_value(&value)
                .with_context(|| format!("reading resume fields from {}", file.display()))?;
            println!("{}", AdvisoryPrompt::default().render_for(&resume)?);
        }

        Commands::Advisory {
            file,
            resume_id,
            output,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let raw = read_reply(&file).await?;
            let resume_id = resume_id.unwrap_or_else(|| "unknown_resume".to_string());
            let report = parse_advisory_response(&resume_id, &raw);

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                config.output.detailed,
                config.output.pretty_json,
                true,
                true,
            );
            println!("{}", generator.generate_report(&report, &format)?);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    AtsScorerError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default()
                    .save_to(config_path)
                    .with_context(|| format!("writing {}", config_path.display()))?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

async fn read_reply(file: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("reading provider reply {}", file.display()))
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(format) => cli::parse_output_format(format).map_err(AtsScorerError::InvalidInput),
        None => Ok(config.output.format),
    }
}

/// Load and score one file; load failures become degraded reports so a batch keeps going
async fn score_file(
    engine: &AtsEngine,
    input_manager: &mut InputManager,
    file: &Path,
    resume_id: Option<&str>,
) -> (AtsReport, Option<StructuredResumeData>) {
    let fallback_id = || {
        resume_id
            .map(str::to_string)
            .unwrap_or_else(|| file.display().to_string())
    };

    let value = match input_manager.load_json(file).await {
        Ok(value) => value,
        Err(e) => {
            warn!("Could not load {}: {}", file.display(), e);
            return (AtsReport::degraded(fallback_id(), &e), None);
        }
    };

    let resume = StructuredResumeData::from_value(&value).ok();
    let id = match (resume_id, &resume) {
        (Some(id), _) => id.to_string(),
        (None, Some(resume)) => default_resume_id(resume),
        (None, None) => fallback_id(),
    };

    (engine.evaluate(&id, Some(&value)), resume)
}

fn save_path(target: &Path, file: &Path, format: &OutputFormat, file_count: usize) -> PathBuf {
    if file_count > 1 || target.is_dir() {
        target.join(suggest_filename(format, &file.to_string_lossy(), false))
    } else {
        target.to_path_buf()
    }
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}") {
        pb.set_style(style.progress_chars("=> "));
    }
    pb
}

fn emit(progress: &Option<ProgressBar>, text: &str) {
    match progress {
        Some(pb) => pb.suspend(|| println!("{}", text)),
        None => println!("{}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_reply_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reply.txt");

        let err = read_reply(&path).await.unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("reading provider reply"));
        assert!(message.contains("reply.txt"));

        let err: AtsScorerError = err.into();
        assert!(err.to_string().contains("reply.txt"));
    }

    #[test]
    fn test_save_path_for_batches() {
        let dir = tempfile::tempdir().unwrap();
        let single = save_path(Path::new("out.json"), Path::new("a.json"), &OutputFormat::Json, 1);
        assert_eq!(single, PathBuf::from("out.json"));

        let batch = save_path(dir.path(), Path::new("a.json"), &OutputFormat::Json, 2);
        assert!(batch.starts_with(dir.path()));
        assert!(batch.to_string_lossy().contains("a_ats_report"));
    }
}

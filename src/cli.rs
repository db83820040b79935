//! CLI interface for the ATS scorer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ats-scorer")]
#[command(about = "Score structured resumes for ATS readiness")]
#[command(long_about = "Score structured resume JSON against ten ATS criteria and print a report with categorized suggestions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one or more structured resume JSON files
    Score {
        /// Resume JSON files produced by the upstream extractor
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Resume identifier (defaults to the candidate email)
        #[arg(long)]
        resume_id: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to a file (a directory when scoring several files)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show report card points and the per-criterion breakdown
        #[arg(short, long)]
        detailed: bool,
    },

    /// List the scoring criteria, their weights and thresholds
    Criteria,

    /// Print the advisory provider prompt for a resume
    Prompt {
        /// Resume JSON file
        file: PathBuf,
    },

    /// Normalize a saved advisory provider reply into a report
    Advisory {
        /// File holding the raw provider reply
        file: PathBuf,

        /// Resume identifier for the normalized report
        #[arg(long)]
        resume_id: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_score_command_parses() {
        let cli = Cli::try_parse_from([
            "ats-scorer", "-v", "score", "a.json", "b.json", "--resume-id", "r-1", "-o", "json",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Score {
                files, resume_id, output, ..
            } => {
                assert_eq!(files.len(), 2);
                assert_eq!(resume_id.as_deref(), Some("r-1"));
                assert_eq!(output.as_deref(), Some("json"));
            }
            _ => panic!("expected score command"),
        }
    }
}

//! Configuration management for the ATS scorer

use crate::error::{AtsScorerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version of the heuristic table shipped as the default
pub const SCORING_TABLE_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

/// Every tunable heuristic constant used by the scoring pipeline.
///
/// Criterion weights are not part of this table: they are fixed on
/// [`crate::scoring::CriterionName`] and always sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub version: u32,
    pub keyword_target: usize,
    pub action_verb_target_ratio: f64,
    pub quantifiable_target_ratio: f64,
    pub concise_target_ratio: f64,
    pub max_bullet_chars: usize,
    pub summary: SummaryBands,
    pub grammar: GrammarPenalties,
    pub contact: ContactConfig,
    pub suggestions: SuggestionThresholds,
    pub report: ReportThresholds,
}

/// Word-count bands for the profile summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryBands {
    pub ideal_min: usize,
    pub ideal_max: usize,
    pub acceptable_min: usize,
    pub acceptable_max: usize,
    /// Fraction of the maximum awarded inside the acceptable band
    pub acceptable_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarPenalties {
    pub passive_factor: f64,
    pub filler_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email_weight: f64,
    pub phone_weight: f64,
    pub link_weight: f64,
    pub phone_min_chars: usize,
    pub professional_link_domains: Vec<String>,
    pub placeholder_values: Vec<String>,
}

/// Pass fractions (of a criterion's max) below which suggestions are emitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionThresholds {
    pub contact_pass: f64,
    pub keyword_low_count: usize,
    pub keyword_pass: f64,
    pub action_verb_pass: f64,
    pub quantifiable_pass: f64,
    pub conciseness_pass: f64,
    pub grammar_pass: f64,
    pub overall_medium: u8,
    pub overall_good: u8,
}

/// Percentage thresholds used by the sidebar and the report cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportThresholds {
    pub strong: u8,
    pub okay: u8,
    pub quantifying_impact: u8,
    pub spelling_grammar: u8,
    pub bullet_length: u8,
    pub essential_sections: u8,
    pub contact_information: u8,
    pub profile_summary: u8,
    pub keyword_coverage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            version: SCORING_TABLE_VERSION,
            keyword_target: 30,
            action_verb_target_ratio: 0.8,
            quantifiable_target_ratio: 0.35,
            concise_target_ratio: 0.85,
            max_bullet_chars: 170,
            summary: SummaryBands::default(),
            grammar: GrammarPenalties::default(),
            contact: ContactConfig::default(),
            suggestions: SuggestionThresholds::default(),
            report: ReportThresholds::default(),
        }
    }
}

impl Default for SummaryBands {
    fn default() -> Self {
        Self {
            ideal_min: 25,
            ideal_max: 75,
            acceptable_min: 10,
            acceptable_max: 100,
            acceptable_fraction: 0.5,
        }
    }
}

impl Default for GrammarPenalties {
    fn default() -> Self {
        Self {
            passive_factor: 1.5,
            filler_factor: 0.75,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email_weight: 0.4,
            phone_weight: 0.4,
            link_weight: 0.2,
            phone_min_chars: 7,
            professional_link_domains: vec!["linkedin.com".to_string()],
            placeholder_values: ["string", "n/a", "na", "none", "null", "-"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            contact_pass: 0.8,
            keyword_low_count: 10,
            keyword_pass: 0.7,
            action_verb_pass: 0.7,
            quantifiable_pass: 0.6,
            conciseness_pass: 0.8,
            grammar_pass: 0.8,
            overall_medium: 60,
            overall_good: 85,
        }
    }
}

impl Default for ReportThresholds {
    fn default() -> Self {
        Self {
            strong: 80,
            okay: 60,
            quantifying_impact: 60,
            spelling_grammar: 80,
            bullet_length: 80,
            essential_sections: 80,
            contact_information: 80,
            profile_summary: 50,
            keyword_coverage: 60,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            pretty_json: true,
        }
    }
}

impl ScoringConfig {
    /// Reject tables that would make the scoring functions meaningless
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("action_verb_target_ratio", self.action_verb_target_ratio),
            ("quantifiable_target_ratio", self.quantifiable_target_ratio),
            ("concise_target_ratio", self.concise_target_ratio),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value <= 1.0) {
                return Err(AtsScorerError::Configuration(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.keyword_target == 0 {
            return Err(AtsScorerError::Configuration(
                "keyword_target must be greater than zero".to_string(),
            ));
        }
        if self.max_bullet_chars == 0 {
            return Err(AtsScorerError::Configuration(
                "max_bullet_chars must be greater than zero".to_string(),
            ));
        }

        let s = &self.summary;
        if !(s.acceptable_min <= s.ideal_min
            && s.ideal_min <= s.ideal_max
            && s.ideal_max <= s.acceptable_max)
        {
            return Err(AtsScorerError::Configuration(format!(
                "summary bands must nest: {} <= {} <= {} <= {}",
                s.acceptable_min, s.ideal_min, s.ideal_max, s.acceptable_max
            )));
        }

        let c = &self.contact;
        let contact_total = c.email_weight + c.phone_weight + c.link_weight;
        if (contact_total - 1.0).abs() > 1e-6 {
            return Err(AtsScorerError::Configuration(format!(
                "contact weights must sum to 1.0, got {}",
                contact_total
            )));
        }

        let r = &self.report;
        if r.okay > r.strong || r.strong > 100 {
            return Err(AtsScorerError::Configuration(format!(
                "status thresholds must satisfy okay <= strong <= 100, got {} / {}",
                r.okay, r.strong
            )));
        }

        let g = &self.suggestions;
        if g.overall_medium > g.overall_good {
            return Err(AtsScorerError::Configuration(format!(
                "overall_medium ({}) must not exceed overall_good ({})",
                g.overall_medium, g.overall_good
            )));
        }

        Ok(())
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| AtsScorerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.scoring.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AtsScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-scorer")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let config = ScoringConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.version, SCORING_TABLE_VERSION);
        assert_eq!(config.keyword_target, 30);
        assert_eq!(config.max_bullet_chars, 170);
    }

    #[test]
    fn test_rejects_zero_ratio() {
        let config = ScoringConfig {
            quantifiable_target_ratio: 0.0,
            ..ScoringConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AtsScorerError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_summary_bands() {
        let mut config = ScoringConfig::default();
        config.summary.ideal_min = 80;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unbalanced_contact_weights() {
        let mut config = ScoringConfig::default();
        config.contact.link_weight = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.scoring.keyword_target = 40;
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nkeyword_target = 20\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scoring.keyword_target, 20);
        assert_eq!(loaded.scoring.max_bullet_chars, 170);
        assert_eq!(loaded.output, OutputConfig::default());
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nconcise_target_ratio = 3.0\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(AtsScorerError::Configuration(_))
        ));
    }
}

//! Scoring pipeline orchestration
//!
//! resume -> criteria -> {suggestions, sidebar + cards} -> report. Any failure,
//! including a panic, becomes a degraded report instead of reaching the caller.

use crate::config::ScoringConfig;
use crate::error::{AtsScorerError, Result};
use crate::input::StructuredResumeData;
use crate::output::report::AtsReport;
use crate::output::structurer::ResponseStructurer;
use crate::scoring::{CriteriaScores, ResumeScorer, TOTAL_MAX_POINTS};
use crate::suggestions::{SuggestionGenerator, Suggestions};
use log::{debug, error, info, warn};
use serde_json::Value;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Reusable, thread-safe evaluator built once per scoring table
pub struct AtsEngine {
    config: ScoringConfig,
    scorer: ResumeScorer,
    suggestions: SuggestionGenerator,
    structurer: ResponseStructurer,
}

/// Clamp to [0, 100] and round half to even
pub fn final_score(total: f64) -> u8 {
    if !total.is_finite() {
        return 0;
    }
    total.min(TOTAL_MAX_POINTS).round_ties_even().clamp(0.0, 100.0) as u8
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

impl AtsEngine {
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        let scorer = ResumeScorer::new(&config)?;
        let suggestions = SuggestionGenerator::new(&config);
        let structurer = ResponseStructurer::new(&config);

        debug!("ATS engine ready (scoring table v{})", config.version);
        Ok(Self {
            config,
            scorer,
            suggestions,
            structurer,
        })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Criterion scores alone, without suggestions or presentation
    pub fn score_criteria(&self, resume: &StructuredResumeData) -> CriteriaScores {
        self.scorer.score(resume)
    }

    pub fn suggestions_for(&self, resume: &StructuredResumeData) -> (CriteriaScores, Suggestions) {
        let scores = self.scorer.score(resume);
        let score = final_score(scores.total());
        let suggestions = self.suggestions.generate(&scores, score, resume);
        (scores, suggestions)
    }

    /// Evaluate raw upstream JSON; never fails
    pub fn evaluate(&self, resume_id: &str, input: Option<&Value>) -> AtsReport {
        self.guarded(resume_id, || {
            let value = input.ok_or_else(|| {
                AtsScorerError::MissingInput("Processed resume data missing.".to_string())
            })?;
            let resume = StructuredResumeData::from_value(value)?;
            self.try_evaluate(resume_id, &resume)
        })
    }

    /// Evaluate an already typed resume; never fails
    pub fn evaluate_resume(&self, resume_id: &str, resume: &StructuredResumeData) -> AtsReport {
        self.guarded(resume_id, || self.try_evaluate(resume_id, resume))
    }

    /// The fallible pipeline behind [`evaluate`](Self::evaluate)
    pub fn try_evaluate(&self, resume_id: &str, resume: &StructuredResumeData) -> Result<AtsReport> {
        if *resume == StructuredResumeData::default() {
            return Err(AtsScorerError::MissingInput(
                "Processed resume data is empty.".to_string(),
            ));
        }

        let scores = self.scorer.score(resume);
        let total = scores.total();
        if !total.is_finite() {
            return Err(AtsScorerError::Scoring(format!(
                "criterion total is not a number: {}",
                total
            )));
        }

        let ats_score = final_score(total);
        let suggestions = self.suggestions.generate(&scores, ats_score, resume);
        let sidebar = self.structurer.sidebar(&scores, ats_score);
        let cards = self.structurer.cards(&scores, &suggestions);

        info!("ATS score for {}: {}", resume_id, ats_score);
        Ok(AtsReport {
            resume_id: resume_id.to_string(),
            ats_score,
            error: None,
            error_kind: None,
            score_breakdown_for_sidebar: Some(sidebar),
            report_details: cards,
        })
    }

    fn guarded<F>(&self, resume_id: &str, pipeline: F) -> AtsReport
    where
        F: FnOnce() -> Result<AtsReport>,
    {
        match catch_unwind(AssertUnwindSafe(pipeline)) {
            Ok(Ok(report)) => report,
            Ok(Err(e)) => {
                warn!("Degraded ATS report for {}: {}", resume_id, e);
                AtsReport::degraded(resume_id, &e)
            }
            Err(payload) => {
                let e = AtsScorerError::Scoring(panic_message(payload.as_ref()));
                error!("ATS scoring panicked for {}: {}", resume_id, e);
                AtsReport::degraded(resume_id, &e)
            }
        }
    }
}

/// Evaluate with the default scoring table
pub fn evaluate(resume_id: &str, input: Option<&Value>) -> AtsReport {
    match AtsEngine::new(ScoringConfig::default()) {
        Ok(engine) => engine.evaluate(resume_id, input),
        Err(e) => {
            error!("Failed to build ATS engine: {}", e);
            AtsReport::degraded(resume_id, &e)
        }
    }
}

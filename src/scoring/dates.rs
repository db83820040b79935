//! Date format consistency across experience, project and education entries

use super::{Criterion, CriterionName, CriterionScore, DateEvidence, Evidence, ResumeView};
use crate::error::Result;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;

/// Fraction of the maximum awarded when the resume carries no dates at all
const NO_DATES_FRACTION: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DateFormat {
    #[serde(rename = "YYYY-MM-DD")]
    FullDate,
    #[serde(rename = "YYYY-MM")]
    YearMonth,
    #[serde(rename = "MM/YYYY")]
    MonthSlashYear,
    #[serde(rename = "Month YYYY")]
    MonthNameYear,
    #[serde(rename = "Present")]
    Present,
}

impl DateFormat {
    pub fn label(&self) -> &'static str {
        match self {
            DateFormat::FullDate => "YYYY-MM-DD",
            DateFormat::YearMonth => "YYYY-MM",
            DateFormat::MonthSlashYear => "MM/YYYY",
            DateFormat::MonthNameYear => "Month YYYY",
            DateFormat::Present => "Present",
        }
    }
}

pub struct DateConsistency {
    shapes: Vec<(Regex, DateFormat)>,
}

impl DateConsistency {
    pub fn new() -> Result<Self> {
        let shapes = vec![
            (Regex::new(r"^\d{4}-\d{2}-\d{2}$")?, DateFormat::FullDate),
            (Regex::new(r"^\d{4}-\d{2}$")?, DateFormat::YearMonth),
            (Regex::new(r"^\d{2}/\d{4}$")?, DateFormat::MonthSlashYear),
            (Regex::new(r"^\w+\s+\d{4}$")?, DateFormat::MonthNameYear),
        ];
        Ok(Self { shapes })
    }

    /// Classify a trimmed date string; `None` for an unrecognized shape
    pub fn classify(&self, date: &str) -> Option<DateFormat> {
        if date.eq_ignore_ascii_case("present") {
            return Some(DateFormat::Present);
        }
        self.shapes
            .iter()
            .find(|(pattern, _)| pattern.is_match(date))
            .map(|(_, format)| *format)
    }
}

impl Criterion for DateConsistency {
    fn name(&self) -> CriterionName {
        CriterionName::DateConsistency
    }

    fn evaluate(&self, view: &ResumeView<'_>) -> CriterionScore {
        let dates_found = view.dates.len();
        let mut formats = BTreeSet::new();
        let mut unrecognized = 0;
        for date in &view.dates {
            match self.classify(date) {
                Some(format) => {
                    formats.insert(format);
                }
                None => unrecognized += 1,
            }
        }

        let dated_formats = formats.iter().filter(|f| **f != DateFormat::Present).count();
        let (score, consistent) = if dates_found == 0 {
            (self.max() * NO_DATES_FRACTION, true)
        } else if formats.is_empty() {
            (0.0, false)
        } else if dated_formats <= 1 {
            (self.max(), true)
        } else {
            (0.0, false)
        };

        CriterionScore::new(
            self.name(),
            score,
            Evidence::Dates(DateEvidence {
                consistent,
                dates_found,
                formats_found: formats.into_iter().collect(),
                unrecognized,
            }),
        )
    }
}

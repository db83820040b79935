//! Keyword density over extracted keywords and skill names

use super::{scaled, Criterion, CriterionName, CriterionScore, Evidence, KeywordEvidence, ResumeView};
use std::collections::HashSet;

pub struct KeywordDensity {
    target: usize,
}

impl KeywordDensity {
    pub fn new(target: usize) -> Self {
        Self { target }
    }
}

/// Case-sensitive union of extracted keywords and skill names
pub fn unique_keywords<'a>(view: &ResumeView<'a>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    view.resume
        .extracted_keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .chain(view.resume.skill_names())
        .filter(|k| seen.insert(*k))
        .collect()
}

impl Criterion for KeywordDensity {
    fn name(&self) -> CriterionName {
        CriterionName::KeywordDensity
    }

    fn evaluate(&self, view: &ResumeView<'_>) -> CriterionScore {
        let unique = unique_keywords(view).len();
        let ratio = if self.target == 0 {
            0.0
        } else {
            unique as f64 / self.target as f64
        };

        CriterionScore::new(
            self.name(),
            scaled(ratio, 1.0, self.max()),
            Evidence::Keywords(KeywordEvidence {
                unique_keywords: unique,
                target: self.target,
            }),
        )
    }
}

//! Profile summary length bands

use super::{Criterion, CriterionName, CriterionScore, Evidence, ResumeView, SummaryEvidence};
use crate::config::SummaryBands;
use crate::input::resume::present_str;

pub struct ProfileSummaryQuality {
    bands: SummaryBands,
}

impl ProfileSummaryQuality {
    pub fn new(bands: SummaryBands) -> Self {
        Self { bands }
    }
}

impl Criterion for ProfileSummaryQuality {
    fn name(&self) -> CriterionName {
        CriterionName::ProfileSummaryQuality
    }

    fn evaluate(&self, view: &ResumeView<'_>) -> CriterionScore {
        let summary = present_str(&view.resume.profile_summary);
        let word_count = summary.map_or(0, |s| s.split_whitespace().count());
        let b = &self.bands;

        let score = if (b.ideal_min..=b.ideal_max).contains(&word_count) {
            self.max()
        } else if (b.acceptable_min..=b.acceptable_max).contains(&word_count) {
            self.max() * b.acceptable_fraction
        } else {
            0.0
        };

        CriterionScore::new(
            self.name(),
            score,
            Evidence::Summary(SummaryEvidence {
                present: summary.is_some(),
                word_count,
            }),
        )
    }
}

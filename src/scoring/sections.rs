//! Section completeness

use super::{Criterion, CriterionName, CriterionScore, Evidence, ResumeView, SectionEvidence};
use crate::input::StructuredResumeData;
use serde::Serialize;

/// The six canonical resume sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    #[serde(rename = "Personal Data")]
    PersonalData,
    #[serde(rename = "Profile Summary")]
    ProfileSummary,
    #[serde(rename = "Experience")]
    Experiences,
    Education,
    Skills,
    Projects,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::PersonalData,
        Section::ProfileSummary,
        Section::Experiences,
        Section::Education,
        Section::Skills,
        Section::Projects,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Section::PersonalData => "Personal Data",
            Section::ProfileSummary => "Profile Summary",
            Section::Experiences => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
        }
    }

    pub fn is_present(&self, resume: &StructuredResumeData) -> bool {
        match self {
            Section::PersonalData => !resume.personal_data.is_empty(),
            Section::ProfileSummary => resume.has_profile_summary(),
            Section::Experiences => !resume.experiences.is_empty(),
            Section::Education => !resume.education.is_empty(),
            Section::Skills => !resume.skills.is_empty(),
            Section::Projects => !resume.projects.is_empty(),
        }
    }
}

pub struct SectionCompleteness;

impl Criterion for SectionCompleteness {
    fn name(&self) -> CriterionName {
        CriterionName::SectionCompleteness
    }

    fn evaluate(&self, view: &ResumeView<'_>) -> CriterionScore {
        let (present, missing): (Vec<Section>, Vec<Section>) = Section::ALL
            .into_iter()
            .partition(|section| section.is_present(view.resume));

        let per_section = self.max() / Section::ALL.len() as f64;
        let score = (present.len() as f64 * per_section).min(self.max());

        CriterionScore::new(
            self.name(),
            score,
            Evidence::Sections(SectionEvidence { present, missing }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::test_support::resume;
    use serde_json::json;

    #[test]
    fn test_all_sections_score_max() {
        let data = resume(json!({
            "Personal Data": { "firstName": "Ada" },
            "Profile Summary": "Engineer",
            "Experiences": [{ "jobTitle": "Engineer" }],
            "Education": [{ "institution": "MIT" }],
            "Skills": [{ "skillName": "Rust" }],
            "Projects": [{ "projectName": "CLI" }]
        }));
        let score = SectionCompleteness.evaluate(&ResumeView::new(&data));

        assert_eq!(score.score, 15.0);
        match score.evidence {
            Evidence::Sections(e) => assert!(e.missing.is_empty()),
            other => panic!("unexpected evidence {:?}", other),
        }
    }

    #[test]
    fn test_partial_sections_score_proportionally() {
        let data = resume(json!({
            "Personal Data": { "email": "a@b.com" },
            "Profile Summary": "   ",
            "Skills": [{ "skillName": "Rust" }]
        }));
        let score = SectionCompleteness.evaluate(&ResumeView::new(&data));

        assert!((score.score - 5.0).abs() < 1e-9);
        match score.evidence {
            Evidence::Sections(e) => {
                assert_eq!(e.present, vec![Section::PersonalData, Section::Skills]);
                assert!(e.missing.contains(&Section::ProfileSummary));
            }
            other => panic!("unexpected evidence {:?}", other),
        }
    }
}

//! Presence of description bullets under experience and project entries

use super::{ratio, Criterion, CriterionName, CriterionScore, DetailEvidence, Evidence, ResumeView};

pub struct ExperienceDetails;

impl Criterion for ExperienceDetails {
    fn name(&self) -> CriterionName {
        CriterionName::ExperienceDetailsPresent
    }

    fn evaluate(&self, view: &ResumeView<'_>) -> CriterionScore {
        let detailed_entries: Vec<String> = view
            .entries
            .iter()
            .filter(|entry| !entry.bullets.is_empty())
            .map(|entry| entry.label.to_string())
            .collect();
        let total_entries = view.entries.len();
        let entries_with_details = detailed_entries.len();

        CriterionScore::new(
            self.name(),
            ratio(entries_with_details, total_entries) * self.max(),
            Evidence::Details(DetailEvidence {
                entries_with_details,
                total_entries,
                detailed_entries,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::test_support::resume;
    use serde_json::json;

    #[test]
    fn test_fraction_of_entries_with_bullets() {
        let data = resume(json!({
            "Experiences": [
                { "jobTitle": "Engineer", "description": ["Built API"] },
                { "jobTitle": "Intern", "description": ["   "] }
            ],
            "Projects": [
                { "projectName": "CLI", "description": "Wrote parser" },
                { "projectName": "Site" }
            ]
        }));
        let score = ExperienceDetails.evaluate(&ResumeView::new(&data));

        assert_eq!(score.score, 5.0);
        match score.evidence {
            Evidence::Details(e) => {
                assert_eq!(e.total_entries, 4);
                assert_eq!(e.detailed_entries, vec!["Engineer", "CLI"]);
            }
            other => panic!("unexpected evidence {:?}", other),
        }
    }

    #[test]
    fn test_no_entries_scores_zero() {
        let data = resume(json!({ "Skills": [{ "skillName": "Rust" }] }));
        let score = ExperienceDetails.evaluate(&ResumeView::new(&data));
        assert_eq!(score.score, 0.0);
    }
}

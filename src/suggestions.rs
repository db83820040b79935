//! Categorized improvement suggestions derived from criterion scores

use crate::config::ScoringConfig;
use crate::input::resume::is_present;
use crate::input::StructuredResumeData;
use crate::scoring::{CriteriaScores, CriterionName, Section};
use serde::Serialize;
use std::collections::BTreeMap;

/// Suggestion categories, ordered as they are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SuggestionCategory {
    Overall,
    #[serde(rename = "Structure & Sections")]
    StructureAndSections,
    #[serde(rename = "Contact Info")]
    ContactInfo,
    #[serde(rename = "Profile Summary")]
    ProfileSummary,
    Keywords,
    #[serde(rename = "Experience & Projects")]
    ExperienceAndProjects,
    #[serde(rename = "Grammar & Style")]
    GrammarAndStyle,
    Education,
}

impl SuggestionCategory {
    pub const ALL: [SuggestionCategory; 8] = [
        SuggestionCategory::Overall,
        SuggestionCategory::StructureAndSections,
        SuggestionCategory::ContactInfo,
        SuggestionCategory::ProfileSummary,
        SuggestionCategory::Keywords,
        SuggestionCategory::ExperienceAndProjects,
        SuggestionCategory::GrammarAndStyle,
        SuggestionCategory::Education,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SuggestionCategory::Overall => "Overall",
            SuggestionCategory::StructureAndSections => "Structure & Sections",
            SuggestionCategory::ContactInfo => "Contact Info",
            SuggestionCategory::ProfileSummary => "Profile Summary",
            SuggestionCategory::Keywords => "Keywords",
            SuggestionCategory::ExperienceAndProjects => "Experience & Projects",
            SuggestionCategory::GrammarAndStyle => "Grammar & Style",
            SuggestionCategory::Education => "Education",
        }
    }
}

/// Non-empty suggestion lists keyed by category
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Suggestions(BTreeMap<SuggestionCategory, Vec<String>>);

impl Suggestions {
    pub fn get(&self, category: SuggestionCategory) -> &[String] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (SuggestionCategory, &[String])> {
        self.0.iter().map(|(c, v)| (*c, v.as_slice()))
    }

    pub fn contains(&self, category: SuggestionCategory) -> bool {
        self.0.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, category: SuggestionCategory, text: impl Into<String>) {
        self.0.entry(category).or_default().push(text.into());
    }
}

fn missing_section_label(section: Section) -> Option<&'static str> {
    match section {
        Section::PersonalData => Some("Contact Info"),
        Section::Experiences => Some("Work Experience"),
        Section::Education => Some("Education"),
        Section::Skills => Some("Skills"),
        Section::Projects => Some("Projects"),
        // gets its own message
        Section::ProfileSummary => None,
    }
}

pub struct SuggestionGenerator {
    config: ScoringConfig,
}

impl SuggestionGenerator {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn generate(
        &self,
        scores: &CriteriaScores,
        final_score: u8,
        resume: &StructuredResumeData,
    ) -> Suggestions {
        let mut out = Suggestions::default();

        self.structure(scores, &mut out);
        self.contact(scores, &mut out);
        self.summary(scores, &mut out);
        self.keywords(scores, &mut out);
        self.experience(scores, &mut out);
        self.grammar_and_style(scores, &mut out);
        self.education(resume, &mut out);
        self.overall(final_score, &mut out);

        out
    }

    fn fraction(scores: &CriteriaScores, name: CriterionName) -> f64 {
        scores.get(name).map_or(0.0, |s| s.fraction())
    }

    fn structure(&self, scores: &CriteriaScores, out: &mut Suggestions) {
        let Some(sections) = scores.sections() else {
            return;
        };

        let missing: Vec<&str> = sections
            .missing
            .iter()
            .filter_map(|s| missing_section_label(*s))
            .collect();
        if !missing.is_empty() {
            out.push(
                SuggestionCategory::StructureAndSections,
                format!(
                    "Missing or unclear standard sections: {}. Use clear headers.",
                    missing.join(", ")
                ),
            );
        }
    }

    fn contact(&self, scores: &CriteriaScores, out: &mut Suggestions) {
        let Some(contact) = scores.contact() else {
            return;
        };

        if Self::fraction(scores, CriterionName::ContactInfoQuality)
            < self.config.suggestions.contact_pass
        {
            let mut missing = Vec::new();
            if !contact.email_valid {
                missing.push("valid Email");
            }
            if !contact.phone_found {
                missing.push("Phone Number");
            }
            if !missing.is_empty() {
                out.push(
                    SuggestionCategory::ContactInfo,
                    format!(
                        "Include essential, correctly formatted details: {}.",
                        missing.join(", ")
                    ),
                );
            }
        }

        if !contact.professional_link_found {
            out.push(
                SuggestionCategory::ContactInfo,
                "Consider adding a professional LinkedIn profile link.",
            );
        }
    }

    fn summary(&self, scores: &CriteriaScores, out: &mut Suggestions) {
        let Some(summary) = scores.summary() else {
            return;
        };

        if !summary.present {
            out.push(
                SuggestionCategory::StructureAndSections,
                "Consider adding a Profile Summary/Objective section near the top.",
            );
            return;
        }

        if Self::fraction(scores, CriterionName::ProfileSummaryQuality) < 1.0 {
            let bands = &self.config.summary;
            if summary.word_count < bands.ideal_min {
                out.push(
                    SuggestionCategory::ProfileSummary,
                    "Expand your summary slightly (aim for 2-4 sentences) to better introduce key skills.",
                );
            } else if summary.word_count > bands.ideal_max {
                out.push(
                    SuggestionCategory::ProfileSummary,
                    "Condense your summary to 2-4 concise sentences focusing on strongest qualifications.",
                );
            }
        }
    }

    fn keywords(&self, scores: &CriteriaScores, out: &mut Suggestions) {
        let Some(keywords) = scores.keywords() else {
            return;
        };
        let thresholds = &self.config.suggestions;

        if keywords.unique_keywords < thresholds.keyword_low_count {
            out.push(
                SuggestionCategory::Keywords,
                "Keyword count is low. Ensure technical skills, tools, software, industry terms are clearly listed/described.",
            );
        } else if Self::fraction(scores, CriterionName::KeywordDensity) < thresholds.keyword_pass {
            out.push(
                SuggestionCategory::Keywords,
                format!(
                    "Keyword usage ({} found) could be improved. Integrate more relevant terms naturally into Summary and Experience.",
                    keywords.unique_keywords
                ),
            );
        }
    }

    fn experience(&self, scores: &CriteriaScores, out: &mut Suggestions) {
        let thresholds = &self.config.suggestions;

        if let Some(details) = scores.details() {
            if details.entries_with_details < details.total_entries {
                out.push(
                    SuggestionCategory::ExperienceAndProjects,
                    "Ensure every work/project entry includes descriptive bullet points.",
                );
            }
        }

        if let Some(verbs) = scores.bullets(CriterionName::ActionVerbs) {
            if verbs.total_bullets > 0
                && Self::fraction(scores, CriterionName::ActionVerbs) < thresholds.action_verb_pass
            {
                let remaining = verbs.total_bullets.saturating_sub(verbs.passed).max(1);
                out.push(
                    SuggestionCategory::ExperienceAndProjects,
                    format!(
                        "Use strong action verbs (e.g., Managed, Developed) to start most ({} more) bullet points.",
                        remaining
                    ),
                );
            }
        }

        if let Some(quantified) = scores.bullets(CriterionName::QuantifiableResults) {
            if quantified.total_bullets > 0
                && Self::fraction(scores, CriterionName::QuantifiableResults)
                    < thresholds.quantifiable_pass
            {
                let target = ((quantified.total_bullets as f64
                    * self.config.quantifiable_target_ratio)
                    .floor() as usize)
                    .max(1);
                out.push(
                    SuggestionCategory::ExperienceAndProjects,
                    format!(
                        "Quantify achievements more. Add numbers/metrics to showcase impact (aim for ~{} bullets).",
                        target
                    ),
                );
            }
        }
    }

    fn grammar_and_style(&self, scores: &CriteriaScores, out: &mut Suggestions) {
        let thresholds = &self.config.suggestions;

        if let Some(concise) = scores.bullets(CriterionName::BulletConciseness) {
            if concise.total_bullets > 0
                && Self::fraction(scores, CriterionName::BulletConciseness)
                    < thresholds.conciseness_pass
            {
                out.push(
                    SuggestionCategory::GrammarAndStyle,
                    format!(
                        "Keep bullet points concise (ideally 1-2 lines, under {} characters) for easy scanning.",
                        self.config.max_bullet_chars
                    ),
                );
            }
        }

        if let Some(grammar) = scores.grammar() {
            if Self::fraction(scores, CriterionName::GrammarIndicators) < thresholds.grammar_pass {
                if grammar.passive_count > 0 {
                    out.push(
                        SuggestionCategory::GrammarAndStyle,
                        format!(
                            "Avoid passive voice ({} instance(s) found). Rephrase actively (e.g., 'Managed team' instead of 'Team was managed').",
                            grammar.passive_count
                        ),
                    );
                }
                if grammar.filler_count > 0 {
                    out.push(
                        SuggestionCategory::GrammarAndStyle,
                        format!(
                            "Replace weaker phrases like 'responsible for' or 'assisted with' ({} instance(s) found) with direct action verbs describing your contribution.",
                            grammar.filler_count
                        ),
                    );
                }
            }
        }

        if scores.dates().map_or(false, |d| !d.consistent) {
            out.push(
                SuggestionCategory::GrammarAndStyle,
                "Use a consistent date format (e.g., MM/YYYY or Month YYYY) throughout all sections (Experience, Education).",
            );
        }
    }

    fn education(&self, resume: &StructuredResumeData, out: &mut Suggestions) {
        let missing_degree = resume
            .education
            .iter()
            .filter(|e| !is_present(&e.degree))
            .count();
        let missing_dates = resume
            .education
            .iter()
            .filter(|e| !is_present(&e.start_date) && !is_present(&e.end_date))
            .count();

        if missing_degree > 0 {
            out.push(
                SuggestionCategory::Education,
                format!(
                    "State the degree or qualification for every education entry ({} missing).",
                    missing_degree
                ),
            );
        }
        if missing_dates > 0 {
            out.push(
                SuggestionCategory::Education,
                format!(
                    "Add attendance or graduation dates to every education entry ({} missing).",
                    missing_dates
                ),
            );
        }
    }

    fn overall(&self, final_score: u8, out: &mut Suggestions) {
        let thresholds = &self.config.suggestions;
        let has_specific = !out.is_empty();

        let message = if final_score < thresholds.overall_medium {
            "This resume needs significant improvement for ATS compatibility. Focus on the suggestions provided in each category."
        } else if final_score < thresholds.overall_good {
            if has_specific {
                "Good start! This resume is quite ATS-friendly. Addressing the specific suggestions can make it even stronger."
            } else {
                "Good structure and content! Generally ATS-friendly. Minor tweaks could improve it further."
            }
        } else if has_specific {
            "Excellent score! Your resume aligns well with ATS best practices. Addressing the minor suggestions below will make it even better."
        } else {
            "Excellent! Your resume follows ATS best practices effectively."
        };

        out.push(SuggestionCategory::Overall, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ResumeScorer;
    use serde_json::json;

    fn suggest(value: serde_json::Value, final_score: u8) -> Suggestions {
        let config = ScoringConfig::default();
        let resume = StructuredResumeData::from_value(&value).unwrap();
        let scores = ResumeScorer::new(&config).unwrap().score(&resume);
        SuggestionGenerator::new(&config).generate(&scores, final_score, &resume)
    }

    #[test]
    fn test_overall_is_always_present() {
        let suggestions = suggest(json!({ "Skills": [{ "skillName": "Rust" }] }), 10);
        assert_eq!(
            suggestions.get(SuggestionCategory::Overall),
            ["This resume needs significant improvement for ATS compatibility. Focus on the suggestions provided in each category."]
        );
    }

    #[test]
    fn test_missing_sections_listed() {
        let suggestions = suggest(json!({ "Skills": [{ "skillName": "Rust" }] }), 10);
        let structure = suggestions.get(SuggestionCategory::StructureAndSections);

        assert_eq!(
            structure[0],
            "Missing or unclear standard sections: Contact Info, Work Experience, Education, Projects. Use clear headers."
        );
        assert_eq!(
            structure[1],
            "Consider adding a Profile Summary/Objective section near the top."
        );
    }

    #[test]
    fn test_contact_messages() {
        let suggestions = suggest(
            json!({ "Personal Data": { "email": "bad", "phone": "555-123-4567" } }),
            10,
        );
        assert_eq!(
            suggestions.get(SuggestionCategory::ContactInfo),
            [
                "Include essential, correctly formatted details: valid Email.",
                "Consider adding a professional LinkedIn profile link."
            ]
        );
    }

    #[test]
    fn test_short_summary() {
        let suggestions = suggest(json!({ "Profile Summary": "Backend engineer." }), 10);
        assert_eq!(
            suggestions.get(SuggestionCategory::ProfileSummary),
            ["Expand your summary slightly (aim for 2-4 sentences) to better introduce key skills."]
        );
    }

    #[test]
    fn test_keyword_count_message() {
        let keywords: Vec<String> = (0..12).map(|i| format!("kw{}", i)).collect();
        let suggestions = suggest(json!({ "Extracted Keywords": keywords }), 10);
        assert_eq!(
            suggestions.get(SuggestionCategory::Keywords),
            ["Keyword usage (12 found) could be improved. Integrate more relevant terms naturally into Summary and Experience."]
        );
    }

    #[test]
    fn test_experience_and_grammar_messages() {
        let suggestions = suggest(
            json!({
                "Experiences": [
                    { "jobTitle": "Dev", "description": [
                        "Team was managed by me",
                        "Responsible for deployments",
                        "Handled tickets",
                        "Wrote docs"
                    ] },
                    { "jobTitle": "Intern" }
                ]
            }),
            10,
        );

        let experience = suggestions.get(SuggestionCategory::ExperienceAndProjects);
        assert_eq!(
            experience,
            [
                "Ensure every work/project entry includes descriptive bullet points.",
                "Use strong action verbs (e.g., Managed, Developed) to start most (2 more) bullet points.",
                "Quantify achievements more. Add numbers/metrics to showcase impact (aim for ~1 bullets)."
            ]
        );

        let grammar = suggestions.get(SuggestionCategory::GrammarAndStyle);
        assert!(grammar[0].starts_with("Avoid passive voice (1 instance(s) found)"));
        assert!(grammar[1].contains("(1 instance(s) found)"));
    }

    #[test]
    fn test_inconsistent_dates_message() {
        let suggestions = suggest(
            json!({ "Education": [{ "degree": "BSc", "startDate": "2015-09", "endDate": "06/2019" }] }),
            10,
        );
        assert!(suggestions
            .get(SuggestionCategory::GrammarAndStyle)
            .iter()
            .any(|s| s.starts_with("Use a consistent date format")));
        assert!(!suggestions.contains(SuggestionCategory::Education));
    }

    #[test]
    fn test_education_gaps() {
        let suggestions = suggest(
            json!({ "Education": [{ "institution": "MIT" }, { "degree": "MSc", "endDate": "2020" }] }),
            10,
        );
        assert_eq!(
            suggestions.get(SuggestionCategory::Education),
            [
                "State the degree or qualification for every education entry (1 missing).",
                "Add attendance or graduation dates to every education entry (1 missing)."
            ]
        );
    }

    #[test]
    fn test_overall_bands() {
        let config = ScoringConfig::default();
        let generator = SuggestionGenerator::new(&config);

        let mut quiet = Suggestions::default();
        generator.overall(90, &mut quiet);
        assert_eq!(
            quiet.get(SuggestionCategory::Overall),
            ["Excellent! Your resume follows ATS best practices effectively."]
        );

        let mut busy = Suggestions::default();
        busy.push(SuggestionCategory::Keywords, "x");
        generator.overall(70, &mut busy);
        assert!(busy.get(SuggestionCategory::Overall)[0].starts_with("Good start!"));

        let mut medium = Suggestions::default();
        generator.overall(60, &mut medium);
        assert!(medium.get(SuggestionCategory::Overall)[0].starts_with("Good structure"));
    }

    #[test]
    fn test_serializes_in_category_order() {
        let suggestions = suggest(json!({ "Skills": [{ "skillName": "Rust" }] }), 10);
        let text = serde_json::to_string(&suggestions).unwrap();
        let overall = text.find("\"Overall\"").unwrap();
        let structure = text.find("\"Structure & Sections\"").unwrap();
        let keywords = text.find("\"Keywords\"").unwrap();
        assert!(overall < structure && structure < keywords);
    }
}

//! Maps criterion scores and suggestions onto the sidebar and report cards

use crate::config::{ReportThresholds, ScoringConfig};
use crate::output::report::{
    AiSuggestion, CardPoint, ItemStatus, ReportCard, SidebarCategory, SidebarSummary, SubItem,
};
use crate::scoring::{CriteriaScores, CriterionName};
use crate::suggestions::{SuggestionCategory, Suggestions};

/// `ceil(clamp(score / max, 0, 1) * 100)`, `None` when `max` is not positive.
///
/// A 1e-9 tolerance keeps float noise from crossing an integer boundary.
pub fn percentage(score: f64, max: f64) -> Option<u8> {
    if !(max > 0.0) || !score.is_finite() {
        return None;
    }
    let fraction = (score / max).clamp(0.0, 1.0);
    let value = (fraction * 100.0 - 1e-9).ceil().clamp(0.0, 100.0);
    Some(value as u8)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    Strong,
    Okay,
    NeedsImprovement,
}

impl StatusBucket {
    pub fn from_percentage(percentage: Option<u8>, thresholds: &ReportThresholds) -> Self {
        match percentage {
            Some(p) if p >= thresholds.strong => StatusBucket::Strong,
            Some(p) if p >= thresholds.okay => StatusBucket::Okay,
            _ => StatusBucket::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBucket::Strong => "Strong",
            StatusBucket::Okay => "Okay",
            StatusBucket::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StatusBucket::Strong => "success",
            StatusBucket::Okay => "warning",
            StatusBucket::NeedsImprovement => "error",
        }
    }
}

const CONTENT_CRITERIA: &[CriterionName] = &[
    CriterionName::ExperienceDetailsPresent,
    CriterionName::ActionVerbs,
    CriterionName::QuantifiableResults,
    CriterionName::BulletConciseness,
    CriterionName::GrammarIndicators,
];

const SECTION_CRITERIA: &[CriterionName] = &[
    CriterionName::SectionCompleteness,
    CriterionName::ContactInfoQuality,
    CriterionName::ProfileSummaryQuality,
];

const ESSENTIALS_CRITERIA: &[CriterionName] = &[
    CriterionName::KeywordDensity,
    CriterionName::DateConsistency,
];

const SUMMARY_CARD: &[CriterionName] = &[
    CriterionName::ProfileSummaryQuality,
    CriterionName::ContactInfoQuality,
];

const EXPERIENCE_CARD: &[CriterionName] = &[
    CriterionName::ExperienceDetailsPresent,
    CriterionName::ActionVerbs,
    CriterionName::QuantifiableResults,
];

const SKILLS_CARD: &[CriterionName] = &[CriterionName::KeywordDensity];

const FORMATTING_CARD: &[CriterionName] = &[
    CriterionName::SectionCompleteness,
    CriterionName::BulletConciseness,
    CriterionName::GrammarIndicators,
    CriterionName::DateConsistency,
];

fn item(text: &str, status: ItemStatus) -> SubItem {
    SubItem {
        text: text.to_string(),
        status,
    }
}

fn point(text: impl Into<String>, is_good: bool) -> CardPoint {
    CardPoint {
        text: text.into(),
        is_good,
    }
}

fn pass_if(condition: bool) -> ItemStatus {
    if condition {
        ItemStatus::Pass
    } else {
        ItemStatus::Fail
    }
}

pub struct ResponseStructurer {
    thresholds: ReportThresholds,
    max_bullet_chars: usize,
}

impl ResponseStructurer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            thresholds: config.report.clone(),
            max_bullet_chars: config.max_bullet_chars,
        }
    }

    fn criterion_pct(scores: &CriteriaScores, name: CriterionName) -> Option<u8> {
        let (score, max) = scores.score_of(name);
        percentage(score, max)
    }

    fn combined_pct(scores: &CriteriaScores, names: &[CriterionName]) -> Option<u8> {
        let (score, max) = scores.combined(names);
        percentage(score, max)
    }

    /// Pass when the criterion reaches `threshold` percent
    fn meets(scores: &CriteriaScores, name: CriterionName, threshold: u8) -> ItemStatus {
        pass_if(Self::criterion_pct(scores, name).map_or(false, |p| p >= threshold))
    }

    pub fn sidebar(&self, scores: &CriteriaScores, final_score: u8) -> SidebarSummary {
        let t = &self.thresholds;
        let contact = scores.contact();
        let dates = scores.dates();

        let categories = vec![
            SidebarCategory {
                title: "CONTENT".to_string(),
                percentage: Self::combined_pct(scores, CONTENT_CRITERIA),
                sub_items: vec![
                    item("ATS Parse Rate", ItemStatus::Pass),
                    SubItem {
                        text: "Quantifying Impact".to_string(),
                        status: Self::meets(scores, CriterionName::QuantifiableResults, t.quantifying_impact),
                    },
                    item("Repetition", ItemStatus::Info),
                    SubItem {
                        text: "Spelling & Grammar".to_string(),
                        status: Self::meets(scores, CriterionName::GrammarIndicators, t.spelling_grammar),
                    },
                    SubItem {
                        text: "Bullet Length".to_string(),
                        status: Self::meets(scores, CriterionName::BulletConciseness, t.bullet_length),
                    },
                ],
            },
            SidebarCategory {
                title: "SECTION".to_string(),
                percentage: Self::combined_pct(scores, SECTION_CRITERIA),
                sub_items: vec![
                    SubItem {
                        text: "Essential Sections".to_string(),
                        status: Self::meets(scores, CriterionName::SectionCompleteness, t.essential_sections),
                    },
                    SubItem {
                        text: "Contact Information".to_string(),
                        status: Self::meets(scores, CriterionName::ContactInfoQuality, t.contact_information),
                    },
                    SubItem {
                        text: "Profile Summary".to_string(),
                        status: Self::meets(scores, CriterionName::ProfileSummaryQuality, t.profile_summary),
                    },
                ],
            },
            SidebarCategory {
                title: "ATS ESSENTIALS".to_string(),
                percentage: Self::combined_pct(scores, ESSENTIALS_CRITERIA),
                sub_items: vec![
                    item("File Format & Size", ItemStatus::Pass),
                    item("Design", ItemStatus::Info),
                    item("Email Address", pass_if(contact.map_or(false, |c| c.email_valid))),
                    item(
                        "Hyperlink in Header",
                        if contact.map_or(false, |c| c.professional_link_found) {
                            ItemStatus::Pass
                        } else {
                            ItemStatus::Info
                        },
                    ),
                    item("Date Formatting", pass_if(dates.map_or(false, |d| d.consistent))),
                    SubItem {
                        text: "Keyword Coverage".to_string(),
                        status: Self::meets(scores, CriterionName::KeywordDensity, t.keyword_coverage),
                    },
                ],
            },
            SidebarCategory {
                title: "TAILORING".to_string(),
                percentage: None,
                sub_items: vec![
                    item("Hard Skills", ItemStatus::Info),
                    item("Soft Skills", ItemStatus::Info),
                    item("Action Verbs", ItemStatus::Info),
                    item("Tailored Title", ItemStatus::Info),
                ],
            },
        ];

        SidebarSummary {
            overall_score: final_score,
            total_issues: SidebarSummary::count_failures(&categories),
            categories,
        }
    }

    fn card(
        &self,
        scores: &CriteriaScores,
        suggestions: &Suggestions,
        (id, icon, title): (&str, &str, &str),
        criteria: &[CriterionName],
        points: Vec<CardPoint>,
        categories: &[SuggestionCategory],
    ) -> ReportCard {
        let bucket = StatusBucket::from_percentage(Self::combined_pct(scores, criteria), &self.thresholds);
        let ai_suggestions = categories
            .iter()
            .flat_map(|c| suggestions.get(*c).iter())
            .map(|s| AiSuggestion::Text(s.clone()))
            .collect();

        ReportCard {
            id: id.to_string(),
            icon: icon.to_string(),
            title: title.to_string(),
            status: bucket.label().to_string(),
            color: bucket.color().to_string(),
            points,
            ai_suggestions,
        }
    }

    fn summary_points(&self, scores: &CriteriaScores) -> Vec<CardPoint> {
        let mut points = Vec::new();

        match scores.summary() {
            Some(s) if s.present => {
                let full = Self::criterion_pct(scores, CriterionName::ProfileSummaryQuality) == Some(100);
                points.push(point(format!("Profile summary is {} words long", s.word_count), full));
            }
            _ => points.push(point("No profile summary found", false)),
        }

        if let Some(c) = scores.contact() {
            points.push(if c.email_valid {
                point("Valid email address", true)
            } else {
                point("Email address missing or malformed", false)
            });
            points.push(if c.phone_found {
                point("Phone number found", true)
            } else {
                point("Phone number missing", false)
            });
            points.push(if c.professional_link_found {
                point("Professional profile link included", true)
            } else {
                point("No professional profile link (e.g., LinkedIn)", false)
            });
        }

        points
    }

    fn experience_points(&self, scores: &CriteriaScores) -> Vec<CardPoint> {
        let t = &self.thresholds;
        let mut points = Vec::new();

        if let Some(d) = scores.details() {
            if d.total_entries == 0 {
                points.push(point("No experience or project entries found", false));
            } else {
                points.push(point(
                    format!("{} of {} entries include bullet points", d.entries_with_details, d.total_entries),
                    d.entries_with_details == d.total_entries,
                ));
            }
        }

        let verbs = scores.bullets(CriterionName::ActionVerbs);
        let quantified = scores.bullets(CriterionName::QuantifiableResults);
        match (verbs, quantified) {
            (Some(v), Some(q)) if v.total_bullets > 0 => {
                points.push(point(
                    format!("{} of {} bullets start with an action verb", v.passed, v.total_bullets),
                    Self::meets(scores, CriterionName::ActionVerbs, t.okay) == ItemStatus::Pass,
                ));
                points.push(point(
                    format!("{} of {} bullets include numbers or metrics", q.passed, q.total_bullets),
                    Self::meets(scores, CriterionName::QuantifiableResults, t.quantifying_impact)
                        == ItemStatus::Pass,
                ));
            }
            _ => points.push(point("No description bullets to evaluate", false)),
        }

        points
    }

    fn skills_points(&self, scores: &CriteriaScores) -> Vec<CardPoint> {
        scores
            .keywords()
            .map(|k| {
                point(
                    format!("{} unique keywords and skills found (target {})", k.unique_keywords, k.target),
                    Self::meets(scores, CriterionName::KeywordDensity, self.thresholds.keyword_coverage)
                        == ItemStatus::Pass,
                )
            })
            .into_iter()
            .collect()
    }

    fn formatting_points(&self, scores: &CriteriaScores) -> Vec<CardPoint> {
        let t = &self.thresholds;
        let mut points = Vec::new();

        if let Some(s) = scores.sections() {
            if s.missing.is_empty() {
                points.push(point("All standard sections present", true));
            } else {
                let names: Vec<&str> = s.missing.iter().map(|m| m.display_name()).collect();
                points.push(point(format!("Missing sections: {}", names.join(", ")), false));
            }
        }

        if let Some(c) = scores.bullets(CriterionName::BulletConciseness) {
            if c.total_bullets > 0 {
                points.push(point(
                    format!(
                        "{} of {} bullets within {} characters",
                        c.passed, c.total_bullets, self.max_bullet_chars
                    ),
                    Self::meets(scores, CriterionName::BulletConciseness, t.bullet_length) == ItemStatus::Pass,
                ));
            }
        }

        if let Some(g) = scores.grammar() {
            if g.total_bullets > 0 {
                points.push(if g.passive_count == 0 {
                    point("No passive voice detected", true)
                } else {
                    point(format!("Passive voice in {} bullet(s)", g.passive_count), false)
                });
                points.push(if g.filler_count == 0 {
                    point("No filler phrases detected", true)
                } else {
                    point(format!("Filler phrases in {} bullet(s)", g.filler_count), false)
                });
            }
        }

        if let Some(d) = scores.dates() {
            if d.dates_found == 0 {
                points.push(point("No dates found on entries", false));
            } else if d.consistent {
                let labels: Vec<&str> = d.formats_found.iter().map(|f| f.label()).collect();
                points.push(point(
                    format!("Dates use a consistent format ({})", labels.join(", ")),
                    true,
                ));
            } else {
                points.push(point("Date formats are mixed or unrecognized", false));
            }
        }

        points
    }

    pub fn cards(&self, scores: &CriteriaScores, suggestions: &Suggestions) -> Vec<ReportCard> {
        vec![
            self.card(
                scores,
                suggestions,
                ("summary", "📝", "Summary"),
                SUMMARY_CARD,
                self.summary_points(scores),
                &[SuggestionCategory::ProfileSummary, SuggestionCategory::ContactInfo],
            ),
            self.card(
                scores,
                suggestions,
                ("work_experience", "💼", "Work Experience"),
                EXPERIENCE_CARD,
                self.experience_points(scores),
                &[SuggestionCategory::ExperienceAndProjects],
            ),
            self.card(
                scores,
                suggestions,
                ("skills", "🛠️", "Skills"),
                SKILLS_CARD,
                self.skills_points(scores),
                &[SuggestionCategory::Keywords],
            ),
            self.card(
                scores,
                suggestions,
                ("formatting", "🎨", "Formatting & Style"),
                FORMATTING_CARD,
                self.formatting_points(scores),
                &[
                    SuggestionCategory::GrammarAndStyle,
                    SuggestionCategory::StructureAndSections,
                    SuggestionCategory::Education,
                ],
            ),
        ]
    }
}

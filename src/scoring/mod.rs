//! Criterion scoring over the structured resume
//! Ten independent criteria, each producing a bounded score with evidence

pub mod bullets;
pub mod contact;
pub mod dates;
pub mod details;
pub mod keywords;
pub mod sections;
pub mod summary;
pub mod view;
pub mod vocabulary;

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::input::StructuredResumeData;
use log::debug;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

pub use dates::DateFormat;
pub use sections::Section;
pub use view::ResumeView;

/// Sum of every criterion's maximum
pub const TOTAL_MAX_POINTS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionName {
    SectionCompleteness,
    ContactInfoQuality,
    ProfileSummaryQuality,
    KeywordDensity,
    ExperienceDetailsPresent,
    ActionVerbs,
    QuantifiableResults,
    BulletConciseness,
    GrammarIndicators,
    DateConsistency,
}

impl CriterionName {
    pub const ALL: [CriterionName; 10] = [
        CriterionName::SectionCompleteness,
        CriterionName::ContactInfoQuality,
        CriterionName::ProfileSummaryQuality,
        CriterionName::KeywordDensity,
        CriterionName::ExperienceDetailsPresent,
        CriterionName::ActionVerbs,
        CriterionName::QuantifiableResults,
        CriterionName::BulletConciseness,
        CriterionName::GrammarIndicators,
        CriterionName::DateConsistency,
    ];

    /// Fixed weight in points; the ten weights sum to [`TOTAL_MAX_POINTS`]
    pub fn max_points(&self) -> f64 {
        match self {
            CriterionName::SectionCompleteness => 15.0,
            CriterionName::ContactInfoQuality => 10.0,
            CriterionName::ProfileSummaryQuality => 5.0,
            CriterionName::KeywordDensity => 10.0,
            CriterionName::ExperienceDetailsPresent => 10.0,
            CriterionName::ActionVerbs => 15.0,
            CriterionName::QuantifiableResults => 15.0,
            CriterionName::BulletConciseness => 10.0,
            CriterionName::GrammarIndicators => 5.0,
            CriterionName::DateConsistency => 5.0,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            CriterionName::SectionCompleteness => "section_completeness",
            CriterionName::ContactInfoQuality => "contact_info_quality",
            CriterionName::ProfileSummaryQuality => "profile_summary_quality",
            CriterionName::KeywordDensity => "keyword_density",
            CriterionName::ExperienceDetailsPresent => "experience_details_present",
            CriterionName::ActionVerbs => "action_verbs",
            CriterionName::QuantifiableResults => "quantifiable_results",
            CriterionName::BulletConciseness => "bullet_conciseness",
            CriterionName::GrammarIndicators => "grammar_indicators",
            CriterionName::DateConsistency => "date_consistency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CriterionName::SectionCompleteness => "Section Completeness",
            CriterionName::ContactInfoQuality => "Contact Info Quality",
            CriterionName::ProfileSummaryQuality => "Profile Summary Quality",
            CriterionName::KeywordDensity => "Keyword Density",
            CriterionName::ExperienceDetailsPresent => "Experience Details",
            CriterionName::ActionVerbs => "Action Verbs",
            CriterionName::QuantifiableResults => "Quantifiable Results",
            CriterionName::BulletConciseness => "Bullet Conciseness",
            CriterionName::GrammarIndicators => "Grammar Indicators",
            CriterionName::DateConsistency => "Date Consistency",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionEvidence {
    pub present: Vec<Section>,
    pub missing: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactEvidence {
    pub email_valid: bool,
    pub phone_found: bool,
    pub professional_link_found: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEvidence {
    pub present: bool,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordEvidence {
    pub unique_keywords: usize,
    pub target: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailEvidence {
    pub entries_with_details: usize,
    pub total_entries: usize,
    pub detailed_entries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulletEvidence {
    pub passed: usize,
    pub total_bullets: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrammarEvidence {
    pub passive_count: usize,
    pub filler_count: usize,
    pub total_bullets: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateEvidence {
    pub consistent: bool,
    pub dates_found: usize,
    pub formats_found: Vec<DateFormat>,
    pub unrecognized: usize,
}

/// Criterion-specific findings behind a score
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Evidence {
    Sections(SectionEvidence),
    Contact(ContactEvidence),
    Summary(SummaryEvidence),
    Keywords(KeywordEvidence),
    Details(DetailEvidence),
    Bullets(BulletEvidence),
    Grammar(GrammarEvidence),
    Dates(DateEvidence),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionScore {
    #[serde(skip)]
    pub name: CriterionName,
    pub score: f64,
    pub max: f64,
    #[serde(flatten)]
    pub evidence: Evidence,
}

impl CriterionScore {
    /// Build a score clamped to `[0, name.max_points()]`
    pub fn new(name: CriterionName, score: f64, evidence: Evidence) -> Self {
        let max = name.max_points();
        let score = if score.is_finite() { score.clamp(0.0, max) } else { 0.0 };
        Self {
            name,
            score,
            max,
            evidence,
        }
    }

    /// Score as a fraction of the maximum, 0 when the maximum is 0
    pub fn fraction(&self) -> f64 {
        if self.max > 0.0 {
            self.score / self.max
        } else {
            0.0
        }
    }
}

/// Common contract of the ten scoring criteria
pub trait Criterion: Send + Sync {
    fn name(&self) -> CriterionName;

    fn max(&self) -> f64 {
        self.name().max_points()
    }

    fn evaluate(&self, view: &ResumeView<'_>) -> CriterionScore;
}

/// Ordered criterion results for one evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaScores {
    scores: Vec<CriterionScore>,
}

impl CriteriaScores {
    pub fn new(scores: Vec<CriterionScore>) -> Self {
        Self { scores }
    }

    pub fn get(&self, name: CriterionName) -> Option<&CriterionScore> {
        self.scores.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CriterionScore> {
        self.scores.iter()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.scores.iter().map(|s| s.score).sum()
    }

    pub fn total_max(&self) -> f64 {
        self.scores.iter().map(|s| s.max).sum()
    }

    /// `(score, max)` of a criterion, `(0, 0)` if it was not evaluated
    pub fn score_of(&self, name: CriterionName) -> (f64, f64) {
        self.get(name).map_or((0.0, 0.0), |s| (s.score, s.max))
    }

    /// Combined `(score, max)` over several criteria
    pub fn combined(&self, names: &[CriterionName]) -> (f64, f64) {
        names.iter().fold((0.0, 0.0), |(score, max), name| {
            let (s, m) = self.score_of(*name);
            (score + s, max + m)
        })
    }

    pub fn sections(&self) -> Option<&SectionEvidence> {
        match self.get(CriterionName::SectionCompleteness).map(|s| &s.evidence) {
            Some(Evidence::Sections(e)) => Some(e),
            _ => None,
        }
    }

    pub fn contact(&self) -> Option<&ContactEvidence> {
        match self.get(CriterionName::ContactInfoQuality).map(|s| &s.evidence) {
            Some(Evidence::Contact(e)) => Some(e),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&SummaryEvidence> {
        match self.get(CriterionName::ProfileSummaryQuality).map(|s| &s.evidence) {
            Some(Evidence::Summary(e)) => Some(e),
            _ => None,
        }
    }

    pub fn keywords(&self) -> Option<&KeywordEvidence> {
        match self.get(CriterionName::KeywordDensity).map(|s| &s.evidence) {
            Some(Evidence::Keywords(e)) => Some(e),
            _ => None,
        }
    }

    pub fn details(&self) -> Option<&DetailEvidence> {
        match self.get(CriterionName::ExperienceDetailsPresent).map(|s| &s.evidence) {
            Some(Evidence::Details(e)) => Some(e),
            _ => None,
        }
    }

    /// Evidence of one of the three per-bullet ratio criteria
    pub fn bullets(&self, name: CriterionName) -> Option<&BulletEvidence> {
        match self.get(name).map(|s| &s.evidence) {
            Some(Evidence::Bullets(e)) => Some(e),
            _ => None,
        }
    }

    pub fn grammar(&self) -> Option<&GrammarEvidence> {
        match self.get(CriterionName::GrammarIndicators).map(|s| &s.evidence) {
            Some(Evidence::Grammar(e)) => Some(e),
            _ => None,
        }
    }

    pub fn dates(&self) -> Option<&DateEvidence> {
        match self.get(CriterionName::DateConsistency).map(|s| &s.evidence) {
            Some(Evidence::Dates(e)) => Some(e),
            _ => None,
        }
    }
}

impl Serialize for CriteriaScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for score in &self.scores {
            map.serialize_entry(score.name.key(), score)?;
        }
        map.end()
    }
}

/// `passed / total`, 0 when there is nothing to count
pub(crate) fn ratio(passed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        passed as f64 / total as f64
    }
}

/// Linear score reaching `max` once `ratio` meets `target`
pub(crate) fn scaled(ratio: f64, target: f64, max: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (ratio / target).min(1.0) * max
}

/// Runs every criterion against a resume
pub struct ResumeScorer {
    criteria: Vec<Box<dyn Criterion>>,
}

impl ResumeScorer {
    /// Compile all heuristic patterns for the given table
    pub fn new(config: &ScoringConfig) -> Result<Self> {
        let criteria: Vec<Box<dyn Criterion>> = vec![
            Box::new(sections::SectionCompleteness),
            Box::new(contact::ContactInfoQuality::new(&config.contact)?),
            Box::new(summary::ProfileSummaryQuality::new(config.summary.clone())),
            Box::new(keywords::KeywordDensity::new(config.keyword_target)),
            Box::new(details::ExperienceDetails),
            Box::new(bullets::ActionVerbs::new(config.action_verb_target_ratio)),
            Box::new(bullets::QuantifiableResults::new(config.quantifiable_target_ratio)?),
            Box::new(bullets::BulletConciseness::new(
                config.concise_target_ratio,
                config.max_bullet_chars,
            )),
            Box::new(bullets::GrammarIndicators::new(config.grammar.clone())?),
            Box::new(dates::DateConsistency::new()?),
        ];

        Ok(Self { criteria })
    }

    pub fn criteria(&self) -> impl Iterator<Item = &dyn Criterion> {
        self.criteria.iter().map(|c| c.as_ref())
    }

    pub fn score(&self, resume: &StructuredResumeData) -> CriteriaScores {
        let view = ResumeView::new(resume);
        let scores = self
            .criteria
            .iter()
            .map(|criterion| {
                let result = criterion.evaluate(&view);
                debug!(
                    "{}: {:.2}/{}",
                    result.name.key(),
                    result.score,
                    result.max
                );
                result
            })
            .collect();

        CriteriaScores::new(scores)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::input::StructuredResumeData;
    use serde_json::Value;

    pub fn resume(value: Value) -> StructuredResumeData {
        StructuredResumeData::from_value(&value).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::resume;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_weights_sum_to_total() {
        let total: f64 = CriterionName::ALL.iter().map(|c| c.max_points()).sum();
        assert_eq!(total, TOTAL_MAX_POINTS);
    }

    #[test]
    fn test_scorer_evaluates_every_criterion_in_order() {
        let scorer = ResumeScorer::new(&ScoringConfig::default()).unwrap();
        let scores = scorer.score(&resume(json!({ "Profile Summary": "Hi" })));

        let names: Vec<_> = scores.iter().map(|s| s.name).collect();
        assert_eq!(names, CriterionName::ALL.to_vec());
        assert_eq!(scores.total_max(), TOTAL_MAX_POINTS);
    }

    #[test]
    fn test_scores_stay_within_bounds() {
        let scorer = ResumeScorer::new(&ScoringConfig::default()).unwrap();
        let scores = scorer.score(&resume(json!({
            "Experiences": [{ "description": ["was tasked", "responsible for x"] }],
            "Education": [{ "startDate": "garbage" }]
        })));

        for s in scores.iter() {
            assert!(s.score >= 0.0 && s.score <= s.max, "{:?}", s);
        }
    }

    #[test]
    fn test_criterion_score_clamps() {
        let evidence = Evidence::Bullets(BulletEvidence {
            passed: 0,
            total_bullets: 0,
        });
        let high = CriterionScore::new(CriterionName::ActionVerbs, 99.0, evidence.clone());
        assert_eq!(high.score, 15.0);
        let nan = CriterionScore::new(CriterionName::ActionVerbs, f64::NAN, evidence);
        assert_eq!(nan.score, 0.0);
    }

    #[test]
    fn test_criteria_serialize_as_named_map() {
        let scorer = ResumeScorer::new(&ScoringConfig::default()).unwrap();
        let scores = scorer.score(&resume(json!({ "Skills": [{ "skillName": "Rust" }] })));
        let value = serde_json::to_value(&scores).unwrap();

        assert_eq!(value["keyword_density"]["unique_keywords"], 1);
        assert_eq!(value["keyword_density"]["max"], 10.0);
        assert_eq!(value["date_consistency"]["consistent"], true);
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_ratio_guards_zero() {
        assert_eq!(ratio(3, 0), 0.0);
        assert_eq!(scaled(0.5, 0.0, 10.0), 0.0);
        assert_eq!(scaled(0.9, 0.8, 15.0), 15.0);
    }
}

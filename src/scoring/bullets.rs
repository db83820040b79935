//! Per-bullet heuristics: action verbs, metrics, length and weak phrasing

use super::vocabulary::{ACTION_VERBS, COMMON_ADVERBS, FILLER_PHRASES};
use super::{
    ratio, scaled, BulletEvidence, Criterion, CriterionName, CriterionScore, Evidence,
    GrammarEvidence, ResumeView,
};
use crate::config::GrammarPenalties;
use crate::error::Result;
use aho_corasick::AhoCorasick;
use regex::Regex;
use std::collections::HashSet;

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?'];

fn bullet_score(name: CriterionName, passed: usize, total: usize, target: f64) -> CriterionScore {
    CriterionScore::new(
        name,
        scaled(ratio(passed, total), target, name.max_points()),
        Evidence::Bullets(BulletEvidence {
            passed,
            total_bullets: total,
        }),
    )
}

fn normalize_token(token: &str) -> String {
    token.to_lowercase().trim_end_matches(TRAILING_PUNCTUATION).to_string()
}

pub struct ActionVerbs {
    verbs: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
    target_ratio: f64,
}

impl ActionVerbs {
    pub fn new(target_ratio: f64) -> Self {
        Self {
            verbs: ACTION_VERBS.iter().copied().collect(),
            adverbs: COMMON_ADVERBS.iter().copied().collect(),
            target_ratio,
        }
    }

    /// Only the first token is inspected, or the second one after an adverb.
    /// Leading punctuation and quotes are kept, so `"Led` is not a hit.
    pub fn starts_with_action_verb(&self, bullet: &str) -> bool {
        let mut tokens = bullet.split_whitespace();
        let first = match tokens.next() {
            Some(token) => normalize_token(token),
            None => return false,
        };

        if self.verbs.contains(first.as_str()) {
            return true;
        }

        let adverb = self.adverbs.contains(first.as_str())
            || (first.ends_with("ly") && first.chars().count() > 3);
        if adverb {
            if let Some(second) = tokens.next() {
                return self.verbs.contains(normalize_token(second).as_str());
            }
        }
        false
    }
}

impl Criterion for ActionVerbs {
    fn name(&self) -> CriterionName {
        CriterionName::ActionVerbs
    }

    fn evaluate(&self, view: &ResumeView<'_>) -> CriterionScore {
        let passed = view
            .bullets
            .iter()
            .filter(|b| self.starts_with_action_verb(b))
            .count();
        bullet_score(self.name(), passed, view.total_bullets(), self.target_ratio)
    }
}

pub struct QuantifiableResults {
    number_pattern: Regex,
    target_ratio: f64,
}

impl QuantifiableResults {
    pub fn new(target_ratio: f64) -> Result<Self> {
        let number_pattern = Regex::new(concat!(
            r"(?i)\d+%?",
            r"|\$\d{1,3}(?:,\d{3})*(?:\.\d+)?",
            r"|\b\d+\s*(?:million|thousand|hundred|billion|k)\b",
            r"|\b(?:over|under|approx(?:imately)?|more than|less than|up to)\s+\d+\b",
        ))?;
        Ok(Self {
            number_pattern,
            target_ratio,
        })
    }

    pub fn is_quantified(&self, bullet: &str) -> bool {
        self.number_pattern.is_match(bullet)
    }
}

impl Criterion for QuantifiableResults {
    fn name(&self) -> CriterionName {
        CriterionName::QuantifiableResults
    }

    fn evaluate(&self, view: &ResumeView<'_>) -> CriterionScore {
        let passed = view.bullets.iter().filter(|b| self.is_quantified(b)).count();
        bullet_score(self.name(), passed, view.total_bullets(), self.target_ratio)
    }
}

pub struct BulletConciseness {
    target_ratio: f64,
    max_chars: usize,
}

impl BulletConciseness {
    pub fn new(target_ratio: f64, max_chars: usize) -> Self {
        Self {
            target_ratio,
            max_chars,
        }
    }
}

impl Criterion for BulletConciseness {
    fn name(&self) -> CriterionName {
        CriterionName::BulletConciseness
    }

    fn evaluate(&self, view: &ResumeView<'_>) -> CriterionScore {
        let passed = view
            .bullets
            .iter()
            .filter(|b| b.chars().count() <= self.max_chars)
            .count();
        bullet_score(self.name(), passed, view.total_bullets(), self.target_ratio)
    }
}

pub struct GrammarIndicators {
    passive_pattern: Regex,
    filler_matcher: AhoCorasick,
    penalties: GrammarPenalties,
}

impl GrammarIndicators {
    pub fn new(penalties: GrammarPenalties) -> Result<Self> {
        let passive_pattern = Regex::new(r"(?i)\b(?:am|is|are|was|were|been|being)\s+\w+ed\b")?;
        let filler_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(FILLER_PHRASES)?;

        Ok(Self {
            passive_pattern,
            filler_matcher,
            penalties,
        })
    }

    pub fn has_passive_voice(&self, bullet: &str) -> bool {
        self.passive_pattern.is_match(bullet)
    }

    /// Filler phrase match that starts and ends on a word boundary
    pub fn has_filler_phrase(&self, bullet: &str) -> bool {
        let is_word = |c: char| c.is_alphanumeric() || c == '_';
        self.filler_matcher.find_overlapping_iter(bullet).any(|m| {
            let before = bullet[..m.start()].chars().next_back();
            let after = bullet[m.end()..].chars().next();
            !before.map_or(false, is_word) && !after.map_or(false, is_word)
        })
    }
}

impl Criterion for GrammarIndicators {
    fn name(&self) -> CriterionName {
        CriterionName::GrammarIndicators
    }

    fn evaluate(&self, view: &ResumeView<'_>) -> CriterionScore {
        let total_bullets = view.total_bullets();
        let passive_count = view.bullets.iter().filter(|b| self.has_passive_voice(b)).count();
        let filler_count = view.bullets.iter().filter(|b| self.has_filler_phrase(b)).count();

        // Nothing to judge without bullets
        let score = if total_bullets == 0 {
            0.0
        } else {
            let max = self.max();
            let passive_penalty = ratio(passive_count, total_bullets) * max * self.penalties.passive_factor;
            let filler_penalty = ratio(filler_count, total_bullets) * max * self.penalties.filler_factor;
            (max - passive_penalty - filler_penalty).max(0.0)
        };

        CriterionScore::new(
            self.name(),
            score,
            Evidence::Grammar(GrammarEvidence {
                passive_count,
                filler_count,
                total_bullets,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use crate::scoring::test_support::resume;
    use serde_json::json;

    fn view_data(bullets: &[&str]) -> crate::input::StructuredResumeData {
        resume(json!({ "Experiences": [{ "jobTitle": "Engineer", "description": bullets }] }))
    }

    #[test]
    fn test_action_verb_first_token() {
        let verbs = ActionVerbs::new(0.8);
        assert!(verbs.starts_with_action_verb("Managed a team of 5"));
        assert!(verbs.starts_with_action_verb("Led."));
        assert!(verbs.starts_with_action_verb("DEVELOPED: billing service"));
        assert!(!verbs.starts_with_action_verb("Team player"));
        assert!(!verbs.starts_with_action_verb(""));
    }

    #[test]
    fn test_action_verb_after_adverb() {
        let verbs = ActionVerbs::new(0.8);
        assert!(verbs.starts_with_action_verb("Successfully launched the app"));
        assert!(verbs.starts_with_action_verb("Quickly built a prototype"));
        assert!(!verbs.starts_with_action_verb("Early adopter of Rust"));
        assert!(!verbs.starts_with_action_verb("Greatly"));
        // "fly" is too short for the -ly rule
        assert!(!verbs.starts_with_action_verb("Fly designed"));
    }

    #[test]
    fn test_leading_punctuation_is_not_stripped() {
        let verbs = ActionVerbs::new(0.8);
        assert!(!verbs.starts_with_action_verb("\"Led\" the migration"));
        assert!(!verbs.starts_with_action_verb("- Managed releases"));
        assert!(!verbs.starts_with_action_verb("(Designed) schema"));
    }

    #[test]
    fn test_action_verb_ratio_against_target() {
        let data = view_data(&["Managed team", "Built API", "Team lead", "Wrote docs", "Shipped v2"]);
        let score = ActionVerbs::new(0.8).evaluate(&ResumeView::new(&data));
        // 4/5 hits meets the 0.8 target
        assert_eq!(score.score, 15.0);
    }

    #[test]
    fn test_quantified_bullets() {
        let q = QuantifiableResults::new(0.35).unwrap();
        assert!(q.is_quantified("Increased revenue by 25%"));
        assert!(q.is_quantified("Saved $1,200 per month"));
        assert!(q.is_quantified("Handled over 30 tickets daily"));
        assert!(q.is_quantified("Grew audience to 2 million"));
        assert!(!q.is_quantified("Improved team morale"));
        assert!(!q.is_quantified("Cut costs by several million"));
    }

    #[test]
    fn test_quantifiable_score() {
        let data = view_data(&["Cut latency 40%", "Wrote docs", "Led standups", "Fixed bugs"]);
        let score = QuantifiableResults::new(0.35)
            .unwrap()
            .evaluate(&ResumeView::new(&data));
        let expected = (0.25 / 0.35) * 15.0;
        assert!((score.score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_conciseness_counts_characters() {
        let long = "x".repeat(171);
        let exact = "é".repeat(170);
        let data = view_data(&[long.as_str(), exact.as_str()]);
        let score = BulletConciseness::new(0.85, 170).evaluate(&ResumeView::new(&data));

        assert_eq!(
            score.evidence,
            Evidence::Bullets(BulletEvidence {
                passed: 1,
                total_bullets: 2
            })
        );
        assert!((score.score - (0.5 / 0.85) * 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_filler_phrases_respect_word_boundaries() {
        let grammar = GrammarIndicators::new(GrammarPenalties::default()).unwrap();
        assert!(grammar.has_filler_phrase("Responsible for the billing system"));
        assert!(grammar.has_filler_phrase("Was involved in hiring"));
        assert!(!grammar.has_filler_phrase("Irresponsible form"));
        assert!(!grammar.has_filler_phrase("Reworked onboarding"));
    }

    #[test]
    fn test_passive_voice_detection() {
        let grammar = GrammarIndicators::new(GrammarPenalties::default()).unwrap();
        assert!(grammar.has_passive_voice("The team was managed by me"));
        assert!(grammar.has_passive_voice("Reports were generated weekly"));
        assert!(!grammar.has_passive_voice("Managed the team"));
    }

    #[test]
    fn test_grammar_penalties() {
        let data = view_data(&[
            "Reports were generated weekly",
            "Responsible for deployments",
            "Built the API",
            "Shipped v2",
        ]);
        let score = GrammarIndicators::new(GrammarPenalties::default())
            .unwrap()
            .evaluate(&ResumeView::new(&data));

        // 5 - 0.25*5*1.5 - 0.25*5*0.75
        assert!((score.score - 2.1875).abs() < 1e-9);
        assert_eq!(
            score.evidence,
            Evidence::Grammar(GrammarEvidence {
                passive_count: 1,
                filler_count: 1,
                total_bullets: 4
            })
        );
    }

    #[test]
    fn test_grammar_floors_at_zero() {
        let data = view_data(&["Was tasked and responsible for it", "Is managed and worked on"]);
        let score = GrammarIndicators::new(GrammarPenalties::default())
            .unwrap()
            .evaluate(&ResumeView::new(&data));
        assert_eq!(score.score, 0.0);
    }

    #[test]
    fn test_zero_bullets_score_zero() {
        let config = ScoringConfig::default();
        let data = resume(json!({ "Experiences": [{ "jobTitle": "Engineer" }] }));
        let view = ResumeView::new(&data);

        let criteria: Vec<Box<dyn Criterion>> = vec![
            Box::new(ActionVerbs::new(config.action_verb_target_ratio)),
            Box::new(QuantifiableResults::new(config.quantifiable_target_ratio).unwrap()),
            Box::new(BulletConciseness::new(config.concise_target_ratio, config.max_bullet_chars)),
            Box::new(GrammarIndicators::new(config.grammar.clone()).unwrap()),
        ];
        for criterion in criteria {
            assert_eq!(criterion.evaluate(&view).score, 0.0, "{:?}", criterion.name());
        }
    }
}

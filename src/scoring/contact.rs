//! Contact information quality

use super::{ContactEvidence, Criterion, CriterionName, CriterionScore, Evidence, ResumeView};
use crate::config::ContactConfig;
use crate::error::Result;
use crate::input::resume::present_str;
use regex::Regex;

pub struct ContactInfoQuality {
    email_pattern: Regex,
    phone_pattern: Regex,
    config: ContactConfig,
}

impl ContactInfoQuality {
    pub fn new(config: &ContactConfig) -> Result<Self> {
        // Email shape is checked from the start of the value; a phone only
        // needs a long enough run of digits and separators anywhere.
        let email_pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+")?;
        let phone_pattern = Regex::new(&format!(r"[\d\s\-+().]{{{},}}", config.phone_min_chars))?;

        Ok(Self {
            email_pattern,
            phone_pattern,
            config: config.clone(),
        })
    }

    fn is_professional_link(&self, link: &str) -> bool {
        let lowered = link.to_lowercase();
        if self.config.placeholder_values.iter().any(|p| p.eq_ignore_ascii_case(&lowered)) {
            return false;
        }
        self.config
            .professional_link_domains
            .iter()
            .any(|domain| lowered.contains(&domain.to_lowercase()))
    }
}

impl Criterion for ContactInfoQuality {
    fn name(&self) -> CriterionName {
        CriterionName::ContactInfoQuality
    }

    fn evaluate(&self, view: &ResumeView<'_>) -> CriterionScore {
        let personal = &view.resume.personal_data;
        let max = self.max();

        let email_valid = present_str(&personal.email)
            .map_or(false, |email| self.email_pattern.is_match(email));
        let phone_found = present_str(&personal.phone)
            .map_or(false, |phone| self.phone_pattern.is_match(phone));
        let professional_link_found = [&personal.linkedin, &personal.portfolio]
            .into_iter()
            .filter_map(present_str)
            .any(|link| self.is_professional_link(link));

        let mut score = 0.0;
        if email_valid {
            score += max * self.config.email_weight;
        }
        if phone_found {
            score += max * self.config.phone_weight;
        }
        if professional_link_found {
            score += max * self.config.link_weight;
        }

        CriterionScore::new(
            self.name(),
            score,
            Evidence::Contact(ContactEvidence {
                email_valid,
                phone_found,
                professional_link_found,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::test_support::resume;
    use serde_json::json;

    fn evaluate(personal: serde_json::Value) -> CriterionScore {
        let criterion = ContactInfoQuality::new(&ContactConfig::default()).unwrap();
        let data = resume(json!({ "Personal Data": personal }));
        criterion.evaluate(&ResumeView::new(&data))
    }

    #[test]
    fn test_complete_contact_scores_max() {
        let score = evaluate(json!({
            "email": "a@b.com",
            "phone": "555-123-4567",
            "linkedin": "https://www.linkedin.com/in/ada"
        }));
        assert!((score.score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_placeholder_link_is_ignored() {
        let score = evaluate(json!({
            "email": "a@b.com",
            "phone": "555-123-4567",
            "linkedin": "string"
        }));
        assert!((score.score - 8.0).abs() < 1e-9);
        match score.evidence {
            Evidence::Contact(e) => assert!(!e.professional_link_found),
            other => panic!("unexpected evidence {:?}", other),
        }
    }

    #[test]
    fn test_invalid_email_and_short_phone() {
        let score = evaluate(json!({
            "email": "not-an-email",
            "phone": "12-34",
            "linkedin": "LinkedIn.com/in/ada"
        }));
        assert!((score.score - 2.0).abs() < 1e-9);
        match score.evidence {
            Evidence::Contact(e) => {
                assert!(!e.email_valid);
                assert!(!e.phone_found);
                assert!(e.professional_link_found);
            }
            other => panic!("unexpected evidence {:?}", other),
        }
    }

    #[test]
    fn test_missing_personal_data_scores_zero() {
        let score = evaluate(json!(null));
        assert_eq!(score.score, 0.0);
    }
}

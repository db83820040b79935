//! Advisory scoring path backed by a generative model
//!
//! This crate only renders the provider prompt and normalizes the reply; the
//! network call belongs to the caller. The heuristic engine never depends on it.

pub mod prompts;
pub mod response;

pub use prompts::{AdvisoryPrompt, PromptParams};
pub use response::{extract_json_object, parse_advisory_response};

use crate::input::resume::present_str;
use crate::input::StructuredResumeData;

/// Identifier used when the caller has none: the candidate email if present
pub fn default_resume_id(resume: &StructuredResumeData) -> String {
    present_str(&resume.personal_data.email)
        .unwrap_or("unknown_resume")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_resume_id() {
        let with_email = StructuredResumeData::from_value(&json!({
            "Personal Data": { "email": " ada@example.com " }
        }))
        .unwrap();
        assert_eq!(default_resume_id(&with_email), "ada@example.com");
        assert_eq!(default_resume_id(&StructuredResumeData::default()), "unknown_resume");
    }
}

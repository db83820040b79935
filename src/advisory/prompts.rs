//! Provider prompt asking for a report shaped like the engine's output

use crate::error::Result;
use crate::input::StructuredResumeData;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct AdvisoryPrompt {
    pub template: String,
}

impl Default for AdvisoryPrompt {
    fn default() -> Self {
        Self {
            template: ADVISORY_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for prompt template substitution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptParams {
    pub resume_json: String,
}

impl PromptParams {
    pub fn from_resume(resume: &StructuredResumeData) -> Result<Self> {
        Ok(Self {
            resume_json: serde_json::to_string_pretty(resume)?,
        })
    }
}

impl AdvisoryPrompt {
    pub fn render(&self, params: &PromptParams) -> String {
        let prompt = self.template.replace("{resume}", &params.resume_json);
        debug!("Advisory prompt rendered ({} chars)", prompt.len());
        prompt
    }

    pub fn render_for(&self, resume: &StructuredResumeData) -> Result<String> {
        Ok(self.render(&PromptParams::from_resume(resume)?))
    }
}

const ADVISORY_TEMPLATE: &str = r#"ROLE: You review resumes for applicant tracking system (ATS) compatibility and coach candidates.

TASK: Read the structured resume below and return ONE JSON object for a resume report screen.

<RESUME_JSON>
{resume}
</RESUME_JSON>

RULES:
1. "ats_score" is an integer from 0 to 100 reflecting overall ATS readiness.
2. "score_breakdown_for_sidebar" has exactly four categories, in this order:
   CONTENT (ATS Parse Rate, Quantifying Impact, Repetition, Spelling & Grammar, Bullet Length),
   SECTION (Essential Sections, Contact Information, Profile Summary),
   ATS ESSENTIALS (File Format & Size, Design, Email Address, Hyperlink in Header, Date Formatting, Keyword Coverage),
   TAILORING (Hard Skills, Soft Skills, Action Verbs, Tailored Title).
   Each sub item has a "status" of "pass", "fail" or "info". TAILORING has "percentage": null and only "info" items.
3. "report_details" holds four cards with ids "summary", "work_experience", "skills" and "formatting".
   A card "status"/"color" pair is one of Strong/success, Okay/warning, Needs Improvement/error.
4. For a card that needs improvement, quote a real line from the resume and add
   {"title": "...", "original": "<quoted line>", "upgraded": "<your rewrite>"} to "ai_suggestions".
   Simple advice ("Add a Projects section") is a plain string.
5. Output the JSON object only. No prose, no markdown.

SCHEMA:
{
  "ats_score": 0,
  "score_breakdown_for_sidebar": {
    "overall_score": 0,
    "total_issues": 0,
    "categories": [
      {"title": "CONTENT", "percentage": 0, "sub_items": [{"text": "ATS Parse Rate", "status": "pass"}]}
    ]
  },
  "report_details": [
    {
      "id": "summary",
      "icon": "📝",
      "title": "Summary",
      "status": "Strong",
      "color": "success",
      "points": [{"text": "...", "isGood": true}],
      "ai_suggestions": ["...", {"title": "...", "original": "...", "upgraded": "..."}]
    }
  ]
}"#;

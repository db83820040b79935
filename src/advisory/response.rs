//! Normalizes raw provider replies into an [`AtsReport`]

use crate::error::{AtsScorerError, Result};
use crate::output::report::{AtsReport, SidebarSummary};
use log::{debug, warn};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static FENCE: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?i)```(?:json)?\s*([\s\S]*?)```"));

/// Pull the JSON object out of a reply that may carry fences or prose.
///
/// Tries the whole text, then each fenced block, then the span from the
/// first `{` to the last `}`.
pub fn extract_json_object(raw: &str) -> Result<Value> {
    let text = raw.trim();

    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    let fence = FENCE
        .as_ref()
        .map_err(|e| AtsScorerError::Pattern(e.to_string()))?;
    for captures in fence.captures_iter(text) {
        if let Some(block) = captures.get(1) {
            if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(block.as_str().trim()) {
                return Ok(value);
            }
        }
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if end > start {
            let candidate = text[start..=end].replace("```", "");
            if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(candidate.trim()) {
                return Ok(value);
            }
        }
    }

    Err(AtsScorerError::AdvisoryResponse(
        "no JSON object found in provider reply".to_string(),
    ))
}

fn normalize(resume_id: &str, raw: &str) -> Result<AtsReport> {
    let value = extract_json_object(raw)?;
    let mut report: AtsReport = serde_json::from_value(value)
        .map_err(|e| AtsScorerError::AdvisoryResponse(format!("unexpected report shape: {}", e)))?;

    report.resume_id = resume_id.to_string();
    let score = report.ats_score;
    if let Some(sidebar) = report.score_breakdown_for_sidebar.as_mut() {
        sidebar.overall_score = score;
        sidebar.total_issues = SidebarSummary::count_failures(&sidebar.categories);
    }
    Ok(report)
}

/// Parse a provider reply; a reply that cannot be used degrades instead of failing
pub fn parse_advisory_response(resume_id: &str, raw: &str) -> AtsReport {
    match normalize(resume_id, raw) {
        Ok(report) => {
            debug!("Advisory report for {}: {}", resume_id, report.ats_score);
            report
        }
        Err(e) => {
            let e = match e {
                AtsScorerError::AdvisoryResponse(_) => e,
                other => AtsScorerError::AdvisoryResponse(other.to_string()),
            };
            warn!("Unusable advisory reply for {}: {}", resume_id, e);
            AtsReport::degraded(resume_id, &e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::output::report::ItemStatus;

    const REPLY: &str = r#"{
        "ats_score": 104,
        "score_breakdown_for_sidebar": {
            "overall_score": 12,
            "total_issues": 0,
            "categories": [
                {"title": "CONTENT", "percentage": 70, "sub_items": [
                    {"text": "ATS Parse Rate", "status": "pass"},
                    {"text": "Quantifying Impact", "status": "fail"}
                ]},
                {"title": "SECTION", "percentage": 40, "sub_items": [
                    {"text": "Essential Sections", "status": "fail"}
                ]}
            ]
        },
        "report_details": [
            {"id": "summary", "icon": "📝", "title": "Summary", "status": "Okay", "color": "warning",
             "points": [{"text": "Summary present", "isGood": true}],
             "ai_suggestions": [{"title": "Add Impact", "original": "Did work", "upgraded": "Cut costs 20%"}]}
        ]
    }"#;

    #[test]
    fn test_plain_reply_is_normalized() {
        let report = parse_advisory_response("r-1", REPLY);
        assert_eq!(report.resume_id, "r-1");
        assert_eq!(report.ats_score, 100);

        let sidebar = report.score_breakdown_for_sidebar.unwrap();
        assert_eq!(sidebar.overall_score, 100);
        assert_eq!(sidebar.total_issues, 2);
        assert_eq!(sidebar.categories[0].sub_items[1].status, ItemStatus::Fail);
    }

    #[test]
    fn test_fenced_reply() {
        let raw = format!("Here is the report:\n```json\n{}\n```\nThanks!", REPLY);
        let report = parse_advisory_response("r-2", &raw);
        assert!(report.error.is_none());
        assert_eq!(report.report_details.len(), 1);
    }

    #[test]
    fn test_fence_reused_across_replies() {
        for score in [40, 65, 90] {
            let raw = format!("```json\n{{\"ats_score\": {}}}\n```", score);
            let value = extract_json_object(&raw).unwrap();
            assert_eq!(value["ats_score"], score);
        }
    }

    #[test]
    fn test_reply_with_surrounding_prose() {
        let raw = format!("Sure! {} Let me know.", REPLY);
        let value = extract_json_object(&raw).unwrap();
        assert_eq!(value["ats_score"], 104);
    }

    #[test]
    fn test_garbage_reply_degrades() {
        let report = parse_advisory_response("r-3", "I cannot help with that.");
        assert_eq!(report.ats_score, 0);
        assert_eq!(report.error_kind, Some(ErrorKind::AdvisoryResponse));
        assert!(report.report_details.is_empty());
    }

    #[test]
    fn test_wrong_shape_degrades() {
        let report = parse_advisory_response("r-4", r#"{"report_details": [{"id": 3}]}"#);
        assert_eq!(report.error_kind, Some(ErrorKind::AdvisoryResponse));
    }

    #[test]
    fn test_provider_error_shape_is_kept() {
        let report = parse_advisory_response(
            "r-5",
            r#"{"ats_score": 0, "error": "quota exceeded", "score_breakdown_for_sidebar": {}, "report_details": []}"#,
        );
        assert_eq!(report.error.as_deref(), Some("quota exceeded"));
        assert!(report.score_breakdown_for_sidebar.is_none());
    }
}

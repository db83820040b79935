//! Report structures consumed by the resume report UI

use crate::error::{AtsScorerError, ErrorKind};
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Final response for one resume.
///
/// A degraded report has `ats_score == 0`, an `error` message, its
/// `error_kind`, an empty (`{}`) sidebar and no cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    #[serde(default)]
    pub resume_id: String,

    /// Aggregate score (0-100)
    #[serde(default, deserialize_with = "bounded_score")]
    pub ats_score: u8,

    /// Why the pipeline degraded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,

    /// Compact four-category overview; serialized as `{}` when absent
    #[serde(
        default,
        serialize_with = "sidebar_or_empty",
        deserialize_with = "empty_or_sidebar"
    )]
    pub score_breakdown_for_sidebar: Option<SidebarSummary>,

    /// Detailed topic panels
    #[serde(default)]
    pub report_details: Vec<ReportCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarSummary {
    #[serde(default, deserialize_with = "bounded_score")]
    pub overall_score: u8,

    /// Count of sub-items tagged `fail`
    #[serde(default)]
    pub total_issues: usize,

    #[serde(default)]
    pub categories: Vec<SidebarCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarCategory {
    pub title: String,

    /// `null` for categories without an underlying check
    #[serde(default, deserialize_with = "optional_percentage")]
    pub percentage: Option<u8>,

    #[serde(default)]
    pub sub_items: Vec<SubItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubItem {
    pub text: String,
    pub status: ItemStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pass,
    Fail,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCard {
    pub id: String,
    pub icon: String,
    pub title: String,

    /// `Strong`, `Okay` or `Needs Improvement`
    pub status: String,

    /// `success`, `warning` or `error`
    pub color: String,

    #[serde(default)]
    pub points: Vec<CardPoint>,

    #[serde(default)]
    pub ai_suggestions: Vec<AiSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPoint {
    pub text: String,
    #[serde(rename = "isGood")]
    pub is_good: bool,
}

/// Either a plain hint or a concrete rewrite of resume text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AiSuggestion {
    Text(String),
    Rewrite {
        title: String,
        original: String,
        upgraded: String,
    },
}

impl AiSuggestion {
    pub fn title(&self) -> &str {
        match self {
            AiSuggestion::Text(text) => text,
            AiSuggestion::Rewrite { title, .. } => title,
        }
    }
}

impl AtsReport {
    pub fn degraded(resume_id: impl Into<String>, error: &AtsScorerError) -> Self {
        Self {
            resume_id: resume_id.into(),
            ats_score: 0,
            error: Some(error.to_string()),
            error_kind: Some(error.kind()),
            score_breakdown_for_sidebar: None,
            report_details: Vec::new(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    pub fn total_issues(&self) -> usize {
        self.score_breakdown_for_sidebar
            .as_ref()
            .map_or(0, |s| s.total_issues)
    }
}

impl SidebarSummary {
    pub fn count_failures(categories: &[SidebarCategory]) -> usize {
        categories
            .iter()
            .flat_map(|c| c.sub_items.iter())
            .filter(|item| item.status == ItemStatus::Fail)
            .count()
    }
}

fn clamp_score(value: &Value) -> Option<u8> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !number.is_finite() {
        return None;
    }
    Some(number.clamp(0.0, 100.0).round() as u8)
}

/// Accept any numeric score, clamped to 0-100
fn bounded_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(clamp_score(&value).unwrap_or(0))
}

fn optional_percentage<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(clamp_score(&value))
}

fn sidebar_or_empty<S>(sidebar: &Option<SidebarSummary>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match sidebar {
        Some(summary) => summary.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

fn empty_or_sidebar<'de, D>(deserializer: D) -> Result<Option<SidebarSummary>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        _ => SidebarSummary::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

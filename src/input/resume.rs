//! Structured resume model produced by the upstream extraction step

use crate::error::{AtsScorerError, Result};
use crate::input::lenient::{bullets, lenient, lenient_seq};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canonical, strongly typed view of the upstream resume JSON.
///
/// Top-level keys use the spaced, capitalised names of the extraction
/// contract (`"Personal Data"`, `"Extracted Keywords"`, ...); nested keys use
/// the compact camelCase names (`jobTitle`, `startDate`, ...). Snake-case
/// aliases are accepted for both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredResumeData {
    #[serde(rename = "Personal Data", alias = "personal_data", default, deserialize_with = "lenient")]
    pub personal_data: PersonalData,

    #[serde(rename = "Profile Summary", alias = "profile_summary", default, deserialize_with = "lenient")]
    pub profile_summary: Option<String>,

    #[serde(rename = "Experiences", alias = "experiences", default, deserialize_with = "lenient_seq")]
    pub experiences: Vec<Experience>,

    #[serde(rename = "Projects", alias = "projects", default, deserialize_with = "lenient_seq")]
    pub projects: Vec<Project>,

    #[serde(rename = "Skills", alias = "skills", default, deserialize_with = "lenient_seq")]
    pub skills: Vec<Skill>,

    #[serde(rename = "Education", alias = "education", default, deserialize_with = "lenient_seq")]
    pub education: Vec<Education>,

    #[serde(rename = "Extracted Keywords", alias = "extracted_keywords", default, deserialize_with = "lenient_seq")]
    pub extracted_keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalData {
    #[serde(rename = "firstName", alias = "first_name", default, deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", alias = "last_name", default, deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub portfolio: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "jobTitle", alias = "job_title", default, deserialize_with = "lenient")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(rename = "startDate", alias = "start_date", default, deserialize_with = "lenient")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", alias = "end_date", default, deserialize_with = "lenient")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "bullets")]
    pub description: Vec<String>,
    #[serde(rename = "technologiesUsed", alias = "technologies_used", default, deserialize_with = "lenient_seq")]
    pub technologies_used: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "projectName", alias = "project_name", default, deserialize_with = "lenient")]
    pub project_name: Option<String>,
    #[serde(default, deserialize_with = "bullets")]
    pub description: Vec<String>,
    #[serde(rename = "technologiesUsed", alias = "technologies_used", default, deserialize_with = "lenient_seq")]
    pub technologies_used: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<String>,
    #[serde(rename = "startDate", alias = "start_date", default, deserialize_with = "lenient")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", alias = "end_date", default, deserialize_with = "lenient")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,
    #[serde(rename = "skillName", alias = "skill_name", default, deserialize_with = "lenient")]
    pub skill_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, deserialize_with = "lenient")]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub degree: Option<String>,
    #[serde(rename = "fieldOfStudy", alias = "field_of_study", default, deserialize_with = "lenient")]
    pub field_of_study: Option<String>,
    #[serde(rename = "startDate", alias = "start_date", default, deserialize_with = "lenient")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", alias = "end_date", default, deserialize_with = "lenient")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub grade: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

/// A string counts as present when it has non-whitespace content
pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |s| !s.trim().is_empty())
}

/// Trimmed content of an optional string, `None` when blank
pub fn present_str(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl PersonalData {
    pub fn is_empty(&self) -> bool {
        let location_present = self
            .location
            .as_ref()
            .map_or(false, |l| is_present(&l.city) || is_present(&l.country));

        !(is_present(&self.first_name)
            || is_present(&self.last_name)
            || is_present(&self.email)
            || is_present(&self.phone)
            || is_present(&self.linkedin)
            || is_present(&self.portfolio)
            || location_present)
    }
}

impl Experience {
    pub fn label(&self) -> &str {
        present_str(&self.job_title)
            .or_else(|| present_str(&self.company))
            .unwrap_or("Experience")
    }
}

impl Project {
    pub fn label(&self) -> &str {
        present_str(&self.project_name).unwrap_or("Project")
    }
}

impl StructuredResumeData {
    /// Classify and convert a raw upstream payload.
    ///
    /// `null`, `{}` and `[]` are missing input; any other non-object is
    /// invalid input. Objects never fail: mistyped fields become absent, and a
    /// key sent under both its contract name and its snake_case alias keeps
    /// the contract value unless that one is `null`.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Err(AtsScorerError::MissingInput(
                "Processed resume data missing.".to_string(),
            )),
            Value::Object(map) if map.is_empty() => Err(AtsScorerError::MissingInput(
                "Processed resume data is empty.".to_string(),
            )),
            Value::Array(items) if items.is_empty() => Err(AtsScorerError::MissingInput(
                "Processed resume data is empty.".to_string(),
            )),
            Value::Object(_) => Ok(Self::deserialize(&canonicalize(value))?),
            other => Err(AtsScorerError::InvalidInput(format!(
                "Expected a structured resume object, got {}",
                json_type_name(other)
            ))),
        }
    }

    pub fn has_profile_summary(&self) -> bool {
        is_present(&self.profile_summary)
    }

    /// Trimmed, non-blank skill names in document order
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().filter_map(|s| present_str(&s.skill_name))
    }
}

/// snake_case spelling -> contract key, for every level of the payload
const KEY_ALIASES: &[(&str, &str)] = &[
    ("personal_data", "Personal Data"),
    ("profile_summary", "Profile Summary"),
    ("experiences", "Experiences"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("education", "Education"),
    ("extracted_keywords", "Extracted Keywords"),
    ("first_name", "firstName"),
    ("last_name", "lastName"),
    ("job_title", "jobTitle"),
    ("start_date", "startDate"),
    ("end_date", "endDate"),
    ("technologies_used", "technologiesUsed"),
    ("project_name", "projectName"),
    ("skill_name", "skillName"),
    ("field_of_study", "fieldOfStudy"),
];

fn canonical_key(key: &str) -> &str {
    KEY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or(key, |&(_, contract)| contract)
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            // contract keys go first so an alias only fills a gap
            let (contract, aliased): (Vec<_>, Vec<_>) = map
                .iter()
                .partition(|(key, _)| canonical_key(key.as_str()) == key.as_str());

            let mut out = Map::new();
            for (key, item) in contract.into_iter().chain(aliased) {
                let key = canonical_key(key.as_str());
                if out.get(key).map_or(true, Value::is_null) {
                    out.insert(key.to_string(), canonicalize(item));
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

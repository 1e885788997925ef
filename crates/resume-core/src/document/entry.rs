use std::time::{SystemTime, UNIX_EPOCH};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One service record in the experience section.
///
/// Dates are month-granularity `YYYY-MM` strings; an empty `end_date`
/// means the position is still held.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExperienceEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub responsibilities: String,
    #[serde(default)]
    pub achievements: String,
}

impl ExperienceEntry {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// One school record in the education section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EducationEntry {
    pub id: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field_of_study: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

impl EducationEntry {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Generate an entry identifier that is distinct from every id in `existing`.
///
/// Identifiers are timestamp-based (`<prefix>-<millis>`); a numeric bump is
/// appended until the candidate is unique, so two entries created within the
/// same millisecond still receive different ids.
pub fn fresh_entry_id(prefix: &str, existing: &[String]) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or(0);
    let mut candidate = format!("{}-{}", prefix, millis);
    let mut bump = 1u32;
    while existing.iter().any(|id| *id == candidate) {
        candidate = format!("{}-{}-{}", prefix, millis, bump);
        bump += 1;
    }
    candidate
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::document::entry::{EducationEntry, ExperienceEntry};
use crate::document::personal::PersonalInfo;
use crate::document::skills::SkillSet;
use crate::document::target::TargetJob;

/// The aggregate document accumulated across the wizard steps.
///
/// Owned exclusively by the active editing session. List-valued sections
/// always contain at least one entry; `Default` seeds each with a single
/// blank entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResumeDocument {
    #[serde(default)]
    pub personal: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub target: TargetJob,
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self {
            personal: PersonalInfo::default(),
            experience: vec![ExperienceEntry::with_id("1")],
            education: vec![EducationEntry::with_id("1")],
            skills: SkillSet::default(),
            target: TargetJob::default(),
        }
    }
}

impl ResumeDocument {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Compact export emitted when the wizard completes.
    pub fn to_cbor(&self) -> Result<Vec<u8>, serde_cbor::Error> {
        serde_cbor::to_vec(self)
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The civilian position the resume is aimed at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TargetJob {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub summary: String,
}

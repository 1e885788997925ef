use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Contact details entered on the first wizard step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PersonalInfo {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub linkedin: String,
}

impl PersonalInfo {
    /// Display name assembled from the name fields.
    pub fn full_name(&self) -> String {
        let mut name = String::new();
        if !self.first_name.trim().is_empty() {
            name.push_str(self.first_name.trim());
        }
        if !self.last_name.trim().is_empty() {
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(self.last_name.trim());
        }
        name
    }
}

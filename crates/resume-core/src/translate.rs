use serde::Serialize;

use crate::document::ExperienceEntry;

/// One substring-match rule in the civilian-translation table.
#[derive(Debug, Clone, Copy)]
pub struct TranslationRule {
    /// Substring looked for in the entry title.
    pub needle: &'static str,
    /// Civilian title that replaces the whole title on a match.
    pub title: &'static str,
    /// Optional substitution applied to the first occurrence in the
    /// responsibilities.
    pub responsibilities: Option<(&'static str, &'static str)>,
}

/// Ordered rule table; the first matching rule wins.
pub const RULES: &[TranslationRule] = &[
    TranslationRule {
        needle: "Squad Leader",
        title: "Team Leader",
        responsibilities: Some(("tactical operations", "team operations and coordination")),
    },
    TranslationRule {
        needle: "Sergeant",
        title: "Operations Manager",
        responsibilities: None,
    },
    TranslationRule {
        needle: "Lieutenant",
        title: "Project Manager",
        responsibilities: None,
    },
    TranslationRule {
        needle: "Officer",
        title: "Security Specialist",
        responsibilities: None,
    },
];

/// An experience entry with its civilian-terminology rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslatedExperience {
    pub entry: ExperienceEntry,
    pub title: String,
    pub responsibilities: String,
    pub achievements: String,
}

/// Apply the rule table to one entry. No matching rule leaves the entry
/// unchanged (identity fallthrough).
pub fn translate(entry: &ExperienceEntry) -> TranslatedExperience {
    let mut title = entry.title.clone();
    let mut responsibilities = entry.responsibilities.clone();

    if let Some(rule) = RULES.iter().find(|rule| entry.title.contains(rule.needle)) {
        title = rule.title.to_string();
        if let Some((from, to)) = rule.responsibilities {
            responsibilities = responsibilities.replacen(from, to, 1);
        }
    }

    TranslatedExperience {
        entry: entry.clone(),
        title,
        responsibilities,
        achievements: entry.achievements.clone(),
    }
}

/// Translate every entry, preserving length and order.
pub fn translate_all(entries: &[ExperienceEntry]) -> Vec<TranslatedExperience> {
    entries.iter().map(translate).collect()
}

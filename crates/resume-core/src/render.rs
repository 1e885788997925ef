use handlebars::Handlebars;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::document::ResumeDocument;
use crate::translate::translate_all;

/// Errors surfaced while producing the text preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to register preview template: {0}")]
    Template(#[from] handlebars::TemplateError),
    #[error("failed to render preview: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// One experience entry as it appears in the preview, post-translation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewExperience {
    pub id: String,
    pub title: String,
    pub branch: String,
    pub dates: String,
    pub responsibilities: String,
    pub achievements: String,
}

/// One education entry as it appears in the preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewEducation {
    pub id: String,
    pub school: String,
    pub program: String,
    pub dates: String,
}

/// Display tree derived from the complete document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewPayload {
    pub full_name: String,
    pub contact: Vec<String>,
    pub summary: Option<String>,
    pub experience: Vec<PreviewExperience>,
    pub education: Vec<PreviewEducation>,
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub certifications: Vec<String>,
    pub translation_note: Option<String>,
}

/// Format a month-granularity `YYYY-MM` date as e.g. `May 2020`.
///
/// Empty input stays empty; unparseable input passes through untouched.
pub fn format_month(raw: &str) -> String {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let Some((year, month)) = trimmed.split_once('-') else {
        return trimmed.to_string();
    };
    match month.parse::<usize>() {
        Ok(index) if (1..=12).contains(&index) => format!("{} {}", MONTHS[index - 1], year),
        _ => trimmed.to_string(),
    }
}

/// Project the complete document into the preview display tree.
///
/// Pure function of the document: translates experience entries, keeps one
/// preview entry per document entry, drops education rows without a school,
/// and filters blank skill labels.
pub fn build_preview(document: &ResumeDocument) -> PreviewPayload {
    let personal = &document.personal;

    let mut contact = Vec::new();
    if !personal.email.trim().is_empty() {
        contact.push(personal.email.trim().to_string());
    }
    if !personal.phone.trim().is_empty() {
        contact.push(personal.phone.trim().to_string());
    }
    let location = match (personal.city.trim(), personal.state.trim()) {
        ("", "") => String::new(),
        (city, "") => city.to_string(),
        ("", state) => state.to_string(),
        (city, state) => format!("{}, {}", city, state),
    };
    if !location.is_empty() {
        contact.push(location);
    }
    if !personal.linkedin.trim().is_empty() {
        contact.push(format!("LinkedIn: {}", personal.linkedin.trim()));
    }

    let experience = translate_all(&document.experience)
        .into_iter()
        .map(|translated| {
            let start = format_month(&translated.entry.start_date);
            let end = format_month(&translated.entry.end_date);
            let end = if end.is_empty() {
                "Present".to_string()
            } else {
                end
            };
            PreviewExperience {
                id: translated.entry.id.clone(),
                title: translated.title,
                branch: translated.entry.branch.clone(),
                dates: format!("{} - {}", start, end),
                responsibilities: translated.responsibilities,
                achievements: translated.achievements,
            }
        })
        .collect();

    let education = document
        .education
        .iter()
        .filter(|entry| !entry.school.trim().is_empty())
        .map(|entry| {
            let program = match (entry.degree.trim(), entry.field_of_study.trim()) {
                ("", "") => String::new(),
                (degree, "") => degree.to_string(),
                ("", field) => field.to_string(),
                (degree, field) => format!("{}, {}", degree, field),
            };
            let start = format_month(&entry.start_date);
            let end = format_month(&entry.end_date);
            let dates = match (start.as_str(), end.as_str()) {
                ("", "") => String::new(),
                (start, "") => start.to_string(),
                ("", end) => end.to_string(),
                (start, end) => format!("{} - {}", start, end),
            };
            PreviewEducation {
                id: entry.id.clone(),
                school: entry.school.trim().to_string(),
                program,
                dates,
            }
        })
        .collect();

    let labels = |values: &[String]| {
        values
            .iter()
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty())
            .collect::<Vec<_>>()
    };

    let summary = if document.target.summary.trim().is_empty() {
        None
    } else {
        Some(document.target.summary.trim().to_string())
    };

    let translation_note = if document.target.industry.trim().is_empty() {
        None
    } else {
        Some(format!(
            "Your military/first responder experience has been translated to civilian terminology, highlighting transferable skills for your target position in the {} industry.",
            document.target.industry.trim()
        ))
    };

    PreviewPayload {
        full_name: personal.full_name(),
        contact,
        summary,
        experience,
        education,
        technical: labels(&document.skills.technical),
        soft: labels(&document.skills.soft),
        certifications: labels(&document.skills.certifications),
        translation_note,
    }
}

const TEXT_TEMPLATE: &str = "\
{{full_name}}
{{#each contact}}{{this}}{{#unless @last}} | {{/unless}}{{/each}}

{{#if summary}}\
PROFESSIONAL SUMMARY
{{summary}}

{{/if}}\
{{#if experience}}\
PROFESSIONAL EXPERIENCE
{{#each experience}}\
{{title}}{{#if branch}} | {{branch}}{{/if}}
{{dates}}
{{#if responsibilities}}Responsibilities: {{responsibilities}}
{{/if}}\
{{#if achievements}}Achievements: {{achievements}}
{{/if}}
{{/each}}\
{{/if}}\
{{#if education}}\
EDUCATION
{{#each education}}\
{{school}}{{#if program}} | {{program}}{{/if}}{{#if dates}} ({{dates}}){{/if}}
{{/each}}

{{/if}}\
{{#if technical}}\
Technical Skills: {{#each technical}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}
{{/if}}\
{{#if soft}}\
Soft Skills: {{#each soft}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}
{{/if}}\
{{#if certifications}}\
Certifications & Licenses: {{#each certifications}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}
{{/if}}\
{{#if translation_note}}
AI Translation Note: {{translation_note}}
{{/if}}";

/// Render the preview payload as plain text.
pub fn render_text(payload: &PreviewPayload) -> Result<String, PreviewError> {
    let mut registry = Handlebars::new();
    registry.register_escape_fn(handlebars::no_escape);
    registry.register_template_string("resume", TEXT_TEMPLATE)?;
    Ok(registry.render("resume", payload)?)
}

/// Render the preview payload as a structured JSON value.
pub fn render_json(payload: &PreviewPayload) -> Value {
    serde_json::to_value(payload).unwrap_or(Value::Null)
}

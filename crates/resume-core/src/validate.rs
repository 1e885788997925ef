use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::document::ResumeDocument;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));
static MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").expect("valid month pattern"));

/// A single field-level finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
    pub code: String,
}

/// Result of checking the document against the required-field markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub missing_required: Vec<String>,
}

struct Checker {
    errors: Vec<ValidationError>,
    missing_required: Vec<String>,
}

impl Checker {
    fn require(&mut self, path: &str, value: &str) {
        if value.trim().is_empty() {
            self.missing_required.push(path.to_string());
        }
    }

    fn check_email(&mut self, path: &str, value: &str) {
        if !value.trim().is_empty() && !EMAIL.is_match(value.trim()) {
            self.errors.push(ValidationError {
                path: path.to_string(),
                message: "not a valid email address".into(),
                code: "invalid_email".into(),
            });
        }
    }

    fn check_month(&mut self, path: &str, value: &str) {
        if !value.trim().is_empty() && !MONTH.is_match(value.trim()) {
            self.errors.push(ValidationError {
                path: path.to_string(),
                message: "dates use the YYYY-MM month format".into(),
                code: "invalid_month".into(),
            });
        }
    }
}

/// Validate required fields and field formats across the whole document.
///
/// Mirrors the form-level required markers: violations are reported, never
/// raised. An empty experience end date is an open-ended position and is
/// accepted.
pub fn validate(document: &ResumeDocument) -> ValidationResult {
    let mut checker = Checker {
        errors: Vec::new(),
        missing_required: Vec::new(),
    };

    checker.require("/personal/first_name", &document.personal.first_name);
    checker.require("/personal/last_name", &document.personal.last_name);
    checker.require("/personal/email", &document.personal.email);
    checker.require("/personal/phone", &document.personal.phone);
    checker.check_email("/personal/email", &document.personal.email);

    for (index, entry) in document.experience.iter().enumerate() {
        let base = format!("/experience/{}", index);
        checker.require(&format!("{}/title", base), &entry.title);
        checker.require(&format!("{}/branch", base), &entry.branch);
        checker.require(&format!("{}/start_date", base), &entry.start_date);
        checker.require(&format!("{}/responsibilities", base), &entry.responsibilities);
        checker.require(&format!("{}/achievements", base), &entry.achievements);
        checker.check_month(&format!("{}/start_date", base), &entry.start_date);
        checker.check_month(&format!("{}/end_date", base), &entry.end_date);
    }

    for (index, entry) in document.education.iter().enumerate() {
        let base = format!("/education/{}", index);
        checker.require(&format!("{}/school", base), &entry.school);
        checker.require(&format!("{}/degree", base), &entry.degree);
        checker.check_month(&format!("{}/start_date", base), &entry.start_date);
        checker.check_month(&format!("{}/end_date", base), &entry.end_date);
    }

    checker.require("/target/title", &document.target.title);
    checker.require("/target/industry", &document.target.industry);
    checker.require("/target/summary", &document.target.summary);

    ValidationResult {
        valid: checker.errors.is_empty() && checker.missing_required.is_empty(),
        errors: checker.errors,
        missing_required: checker.missing_required,
    }
}

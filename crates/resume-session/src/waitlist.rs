use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

/// Message shown to users for any waitlist failure; the specific cause stays
/// internal.
pub const GENERIC_WAITLIST_FAILURE: &str = "Failed to submit email";

/// One captured early-access signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WaitlistError {
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("this email is already on the waitlist")]
    Duplicate,
}

/// Early-access email capture.
pub trait WaitlistService {
    fn capture(&mut self, email: &str) -> Result<WaitlistEntry, WaitlistError>;
}

/// In-memory waitlist with a service-assigned timestamp per record.
#[derive(Debug, Default)]
pub struct MockWaitlist {
    entries: Vec<WaitlistEntry>,
}

impl MockWaitlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a previously captured list.
    pub fn from_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[WaitlistEntry] {
        &self.entries
    }
}

impl WaitlistService for MockWaitlist {
    fn capture(&mut self, email: &str) -> Result<WaitlistEntry, WaitlistError> {
        let email = email.trim();
        if !EMAIL.is_match(email) {
            return Err(WaitlistError::InvalidEmail);
        }
        if self
            .entries
            .iter()
            .any(|entry| entry.email.eq_ignore_ascii_case(email))
        {
            return Err(WaitlistError::Duplicate);
        }
        let entry = WaitlistEntry {
            email: email.to_string(),
            created_at: Utc::now(),
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }
}

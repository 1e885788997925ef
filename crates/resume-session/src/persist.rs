use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use resume_core::ResumeDocument;

use crate::latency::{Latency, NoDelay};

/// Listing row shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSummary {
    pub id: String,
    pub title: String,
    pub target_position: String,
    pub industry: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("resume '{0}' was not found")]
    NotFound(String),
}

/// Saved-resume persistence, keyed by identifier.
pub trait ResumeStore {
    fn list(&self) -> Vec<ResumeSummary>;
    fn get(&self, id: &str) -> Result<ResumeSummary, StoreError>;
    fn save(&mut self, document: &ResumeDocument, title: &str) -> Result<ResumeSummary, StoreError>;
    fn delete(&mut self, id: &str) -> Result<(), StoreError>;
}

/// In-memory mock store seeded with reference resumes.
///
/// Saves always succeed (mocked success path only); each operation waits
/// once on the latency boundary.
pub struct MockResumeStore {
    summaries: Vec<ResumeSummary>,
    documents: BTreeMap<String, ResumeDocument>,
    latency: Box<dyn Latency>,
}

impl Default for MockResumeStore {
    fn default() -> Self {
        Self::seeded(Box::new(NoDelay))
    }
}

impl MockResumeStore {
    pub fn seeded(latency: Box<dyn Latency>) -> Self {
        Self {
            summaries: seed_summaries(),
            documents: BTreeMap::new(),
            latency,
        }
    }

    pub fn empty(latency: Box<dyn Latency>) -> Self {
        Self {
            summaries: Vec::new(),
            documents: BTreeMap::new(),
            latency,
        }
    }

    fn fresh_id(&self) -> String {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        let mut candidate = format!("resume-{}", millis);
        let mut bump = 1u32;
        while self.summaries.iter().any(|summary| summary.id == candidate) {
            candidate = format!("resume-{}-{}", millis, bump);
            bump += 1;
        }
        candidate
    }
}

impl ResumeStore for MockResumeStore {
    fn list(&self) -> Vec<ResumeSummary> {
        self.latency.wait();
        self.summaries.clone()
    }

    fn get(&self, id: &str) -> Result<ResumeSummary, StoreError> {
        self.latency.wait();
        self.summaries
            .iter()
            .find(|summary| summary.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn save(&mut self, document: &ResumeDocument, title: &str) -> Result<ResumeSummary, StoreError> {
        self.latency.wait();
        let summary = ResumeSummary {
            id: self.fresh_id(),
            title: title.to_string(),
            target_position: document.target.title.clone(),
            industry: document.target.industry.clone(),
            last_updated: Utc::now(),
        };
        self.documents.insert(summary.id.clone(), document.clone());
        self.summaries.push(summary.clone());
        Ok(summary)
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.latency.wait();
        let index = self
            .summaries
            .iter()
            .position(|summary| summary.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.summaries.remove(index);
        self.documents.remove(id);
        Ok(())
    }
}

fn seed_summaries() -> Vec<ResumeSummary> {
    vec![
        ResumeSummary {
            id: "resume-1".into(),
            title: "Infantry to Project Management".into(),
            target_position: "Project Manager".into(),
            industry: "Technology".into(),
            last_updated: seed_time(2023, 11, 15, 14, 30),
        },
        ResumeSummary {
            id: "resume-2".into(),
            title: "Military Logistics to Supply Chain".into(),
            target_position: "Supply Chain Manager".into(),
            industry: "Manufacturing".into(),
            last_updated: seed_time(2023, 12, 2, 9, 15),
        },
        ResumeSummary {
            id: "resume-3".into(),
            title: "Medical Corps to Healthcare".into(),
            target_position: "Healthcare Administrator".into(),
            industry: "Healthcare".into(),
            last_updated: seed_time(2024, 1, 10, 16, 45),
        },
    ]
}

fn seed_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingLatency(Rc<Cell<usize>>);

    impl Latency for CountingLatency {
        fn wait(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn every_operation_waits_exactly_once() {
        let waits = Rc::new(Cell::new(0));
        let mut store = MockResumeStore::seeded(Box::new(CountingLatency(waits.clone())));

        store.list();
        assert_eq!(waits.get(), 1);
        store.get("resume-1").expect("seeded");
        assert_eq!(waits.get(), 2);
        store
            .save(&ResumeDocument::default(), "Untitled Resume")
            .expect("mock saves succeed");
        assert_eq!(waits.get(), 3);
        store.delete("resume-1").expect("seeded");
        assert_eq!(waits.get(), 4);
    }

    #[test]
    fn seeded_store_lists_reference_resumes() {
        let store = MockResumeStore::default();
        let listed = store.list();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].title, "Infantry to Project Management");
    }

    #[test]
    fn get_finds_by_id() {
        let store = MockResumeStore::default();
        let summary = store.get("resume-2").expect("seeded");
        assert_eq!(summary.target_position, "Supply Chain Manager");
        assert_eq!(store.get("resume-99"), Err(StoreError::NotFound("resume-99".into())));
    }

    #[test]
    fn save_assigns_id_and_stamps_last_updated() {
        let mut store = MockResumeStore::empty(Box::new(NoDelay));
        let mut document = ResumeDocument::default();
        document.target.title = "Operations Manager".into();
        document.target.industry = "Technology".into();

        let saved = store
            .save(&document, "Squad Lead to Operations")
            .expect("mock saves succeed");
        assert!(saved.id.starts_with("resume-"));
        assert_eq!(saved.target_position, "Operations Manager");
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut store = MockResumeStore::default();
        store.delete("resume-1").expect("seeded");
        assert_eq!(store.list().len(), 2);
        assert_eq!(
            store.delete("resume-1"),
            Err(StoreError::NotFound("resume-1".into()))
        );
    }
}

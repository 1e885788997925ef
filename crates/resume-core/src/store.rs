use crate::document::{
    EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument, SkillSet, TargetJob,
};

/// Full replacement value for one named section of the document.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    Personal(PersonalInfo),
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(SkillSet),
    Target(TargetJob),
}

/// Holds the single mutable document aggregate for the editing session.
///
/// Updates replace whole sections atomically and synchronously; there is no
/// debounce and no validation gate between an editor and the store.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    document: ResumeDocument,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: ResumeDocument) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn into_document(self) -> ResumeDocument {
        self.document
    }

    pub fn apply(&mut self, update: SectionUpdate) {
        match update {
            SectionUpdate::Personal(personal) => self.document.personal = personal,
            SectionUpdate::Experience(entries) => self.document.experience = entries,
            SectionUpdate::Education(entries) => self.document.education = entries,
            SectionUpdate::Skills(skills) => self.document.skills = skills,
            SectionUpdate::Target(target) => self.document.target = target,
        }
    }
}

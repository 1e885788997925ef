use thiserror::Error;

use crate::document::{
    EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument, SkillCategory, SkillSet,
    TargetJob, fresh_entry_id,
};
use crate::steps::Step;
use crate::store::SectionUpdate;

/// Errors raised by entry-level editing operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("a section must keep at least one entry")]
    LastEntry,
    #[error("unknown entry id '{0}'")]
    UnknownEntry(String),
}

/// Capability contract shared by every section editor.
///
/// An editor owns a local copy of its section; `flush` produces the update
/// pushed into the form store after every change.
pub trait SectionEditor {
    fn step(&self) -> Step;
    fn flush(&self) -> SectionUpdate;
}

/// Editable fields of the personal-info section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    State,
    ZipCode,
    Linkedin,
}

#[derive(Debug, Clone, Default)]
pub struct PersonalEditor {
    info: PersonalInfo,
}

impl PersonalEditor {
    pub fn new(document: &ResumeDocument) -> Self {
        Self {
            info: document.personal.clone(),
        }
    }

    pub fn info(&self) -> &PersonalInfo {
        &self.info
    }

    pub fn set(&mut self, field: PersonalField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PersonalField::FirstName => self.info.first_name = value,
            PersonalField::LastName => self.info.last_name = value,
            PersonalField::Email => self.info.email = value,
            PersonalField::Phone => self.info.phone = value,
            PersonalField::Address => self.info.address = value,
            PersonalField::City => self.info.city = value,
            PersonalField::State => self.info.state = value,
            PersonalField::ZipCode => self.info.zip_code = value,
            PersonalField::Linkedin => self.info.linkedin = value,
        }
    }
}

impl SectionEditor for PersonalEditor {
    fn step(&self) -> Step {
        Step::Personal
    }

    fn flush(&self) -> SectionUpdate {
        SectionUpdate::Personal(self.info.clone())
    }
}

/// Editable fields of one experience entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Title,
    Branch,
    StartDate,
    EndDate,
    Responsibilities,
    Achievements,
}

#[derive(Debug, Clone)]
pub struct ExperienceEditor {
    entries: Vec<ExperienceEntry>,
}

impl ExperienceEditor {
    pub fn new(document: &ResumeDocument) -> Self {
        Self {
            entries: document.experience.clone(),
        }
    }

    pub fn entries(&self) -> &[ExperienceEntry] {
        &self.entries
    }

    pub fn set(
        &mut self,
        id: &str,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> Result<(), EditError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| EditError::UnknownEntry(id.to_string()))?;
        let value = value.into();
        match field {
            ExperienceField::Title => entry.title = value,
            ExperienceField::Branch => entry.branch = value,
            ExperienceField::StartDate => entry.start_date = value,
            ExperienceField::EndDate => entry.end_date = value,
            ExperienceField::Responsibilities => entry.responsibilities = value,
            ExperienceField::Achievements => entry.achievements = value,
        }
        Ok(())
    }

    /// Append a blank entry with a freshly generated id; returns the id.
    pub fn add_entry(&mut self) -> String {
        let existing: Vec<String> = self.entries.iter().map(|entry| entry.id.clone()).collect();
        let id = fresh_entry_id("exp", &existing);
        self.entries.push(ExperienceEntry::with_id(id.clone()));
        id
    }

    /// Remove an entry by id. The last remaining entry cannot be removed.
    pub fn remove_entry(&mut self, id: &str) -> Result<(), EditError> {
        if self.entries.len() <= 1 {
            return Err(EditError::LastEntry);
        }
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| EditError::UnknownEntry(id.to_string()))?;
        self.entries.remove(index);
        Ok(())
    }
}

impl SectionEditor for ExperienceEditor {
    fn step(&self) -> Step {
        Step::Experience
    }

    fn flush(&self) -> SectionUpdate {
        SectionUpdate::Experience(self.entries.clone())
    }
}

/// Editable fields of one education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    School,
    Degree,
    FieldOfStudy,
    StartDate,
    EndDate,
}

#[derive(Debug, Clone)]
pub struct EducationEditor {
    entries: Vec<EducationEntry>,
}

impl EducationEditor {
    pub fn new(document: &ResumeDocument) -> Self {
        Self {
            entries: document.education.clone(),
        }
    }

    pub fn entries(&self) -> &[EducationEntry] {
        &self.entries
    }

    pub fn set(
        &mut self,
        id: &str,
        field: EducationField,
        value: impl Into<String>,
    ) -> Result<(), EditError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| EditError::UnknownEntry(id.to_string()))?;
        let value = value.into();
        match field {
            EducationField::School => entry.school = value,
            EducationField::Degree => entry.degree = value,
            EducationField::FieldOfStudy => entry.field_of_study = value,
            EducationField::StartDate => entry.start_date = value,
            EducationField::EndDate => entry.end_date = value,
        }
        Ok(())
    }

    pub fn add_entry(&mut self) -> String {
        let existing: Vec<String> = self.entries.iter().map(|entry| entry.id.clone()).collect();
        let id = fresh_entry_id("edu", &existing);
        self.entries.push(EducationEntry::with_id(id.clone()));
        id
    }

    pub fn remove_entry(&mut self, id: &str) -> Result<(), EditError> {
        if self.entries.len() <= 1 {
            return Err(EditError::LastEntry);
        }
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| EditError::UnknownEntry(id.to_string()))?;
        self.entries.remove(index);
        Ok(())
    }
}

impl SectionEditor for EducationEditor {
    fn step(&self) -> Step {
        Step::Education
    }

    fn flush(&self) -> SectionUpdate {
        SectionUpdate::Education(self.entries.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SkillsEditor {
    skills: SkillSet,
}

impl SkillsEditor {
    pub fn new(document: &ResumeDocument) -> Self {
        Self {
            skills: document.skills.clone(),
        }
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    /// Append a trimmed label; blank input is ignored. Returns whether a
    /// label was added.
    pub fn add(&mut self, category: SkillCategory, label: &str) -> bool {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.skills.labels_mut(category).push(trimmed.to_string());
        true
    }

    /// Remove the label at `index`; out-of-range positions are ignored.
    pub fn remove(&mut self, category: SkillCategory, index: usize) {
        let labels = self.skills.labels_mut(category);
        if index < labels.len() {
            labels.remove(index);
        }
    }
}

impl SectionEditor for SkillsEditor {
    fn step(&self) -> Step {
        Step::Skills
    }

    fn flush(&self) -> SectionUpdate {
        SectionUpdate::Skills(self.skills.clone())
    }
}

/// Editable fields of the target-job section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetField {
    Title,
    Industry,
    Summary,
}

#[derive(Debug, Clone, Default)]
pub struct TargetEditor {
    target: TargetJob,
}

impl TargetEditor {
    pub fn new(document: &ResumeDocument) -> Self {
        Self {
            target: document.target.clone(),
        }
    }

    pub fn target(&self) -> &TargetJob {
        &self.target
    }

    pub fn set(&mut self, field: TargetField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TargetField::Title => self.target.title = value,
            TargetField::Industry => self.target.industry = value,
            TargetField::Summary => self.target.summary = value,
        }
    }
}

impl SectionEditor for TargetEditor {
    fn step(&self) -> Step {
        Step::Target
    }

    fn flush(&self) -> SectionUpdate {
        SectionUpdate::Target(self.target.clone())
    }
}

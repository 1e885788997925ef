#![allow(missing_docs)]

pub mod document;
pub mod editor;
pub mod render;
pub mod schema;
pub mod steps;
pub mod store;
pub mod translate;
pub mod validate;

pub use document::{
    EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument, SkillCategory, SkillSet,
    TargetJob, fresh_entry_id,
};
pub use editor::{
    EditError, EducationEditor, EducationField, ExperienceEditor, ExperienceField, PersonalEditor,
    PersonalField, SectionEditor, SkillsEditor, TargetEditor, TargetField,
};
pub use render::{
    PreviewEducation, PreviewError, PreviewExperience, PreviewPayload, build_preview, format_month,
    render_json, render_text,
};
pub use schema::document_schema;
pub use steps::{Step, StepController};
pub use store::{FormStore, SectionUpdate};
pub use translate::{RULES, TranslatedExperience, TranslationRule, translate, translate_all};
pub use validate::{ValidationError, ValidationResult, validate};

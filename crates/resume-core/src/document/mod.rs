pub mod entry;
pub mod personal;
pub mod resume;
pub mod skills;
pub mod target;

pub use entry::{EducationEntry, ExperienceEntry, fresh_entry_id};
pub use personal::PersonalInfo;
pub use resume::ResumeDocument;
pub use skills::{SkillCategory, SkillSet};
pub use target::TargetJob;

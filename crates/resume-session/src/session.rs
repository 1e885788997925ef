use thiserror::Error;

use resume_core::{
    FormStore, PreviewPayload, ResumeDocument, SectionUpdate, Step, StepController,
    ValidationResult, build_preview, validate,
};

use crate::auth::{AuthService, User};
use crate::latency::Latency;
use crate::persist::{ResumeStore, ResumeSummary, StoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("sign in to create a resume")]
    SignedOut,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One resume-editing session behind the auth gate.
///
/// Owns the step controller and the document aggregate for its lifetime.
/// The document has no identity outside the session: `submit` consumes the
/// session and only the derived summary survives in the store.
pub struct WizardSession {
    user: User,
    controller: StepController,
    store: FormStore,
    latency: Box<dyn Latency>,
}

impl WizardSession {
    /// Start a session for the signed-in user; refused when signed out.
    pub fn start(auth: &dyn AuthService, latency: Box<dyn Latency>) -> Result<Self, SessionError> {
        let user = auth.current_user().cloned().ok_or(SessionError::SignedOut)?;
        Ok(Self {
            user,
            controller: StepController::new(),
            store: FormStore::new(),
            latency,
        })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn step(&self) -> Step {
        self.controller.current()
    }

    pub fn position(&self) -> usize {
        self.controller.position()
    }

    pub fn step_count(&self) -> usize {
        self.controller.len()
    }

    pub fn is_first(&self) -> bool {
        self.controller.is_first()
    }

    pub fn is_last(&self) -> bool {
        self.controller.is_last()
    }

    pub fn advance(&mut self) {
        self.controller.advance();
    }

    pub fn retreat(&mut self) {
        self.controller.retreat();
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        self.controller.jump_to(index)
    }

    pub fn document(&self) -> &ResumeDocument {
        self.store.document()
    }

    pub fn apply(&mut self, update: SectionUpdate) {
        self.store.apply(update);
    }

    pub fn validate(&self) -> ValidationResult {
        validate(self.store.document())
    }

    /// Build the preview after the simulated translation delay.
    pub fn preview(&self) -> PreviewPayload {
        self.latency.wait();
        build_preview(self.store.document())
    }

    /// Save through the persistence boundary and end the session.
    pub fn submit(
        self,
        store: &mut dyn ResumeStore,
        title: &str,
    ) -> Result<ResumeSummary, SessionError> {
        let document = self.store.into_document();
        Ok(store.save(&document, title)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockAuth;
    use crate::latency::NoDelay;
    use crate::persist::MockResumeStore;
    use resume_core::{PersonalEditor, PersonalField, SectionEditor, TargetEditor, TargetField};

    fn signed_in_auth(dir: &tempfile::TempDir) -> MockAuth {
        let mut auth = MockAuth::open(dir.path().join("user.json")).expect("open");
        auth.login("vet@example.com", "pw").expect("login");
        auth
    }

    #[test]
    fn start_requires_a_signed_in_user() {
        let dir = tempfile::tempdir().expect("tempdir");
        let auth = MockAuth::open(dir.path().join("user.json")).expect("open");
        assert!(matches!(
            WizardSession::start(&auth, Box::new(NoDelay)),
            Err(SessionError::SignedOut)
        ));
    }

    #[test]
    fn edits_flow_through_to_the_aggregate() {
        let dir = tempfile::tempdir().expect("tempdir");
        let auth = signed_in_auth(&dir);
        let mut session = WizardSession::start(&auth, Box::new(NoDelay)).expect("signed in");

        let mut editor = PersonalEditor::new(session.document());
        editor.set(PersonalField::FirstName, "Jordan");
        session.apply(editor.flush());

        assert_eq!(session.document().personal.first_name, "Jordan");
        assert_eq!(session.step(), Step::Personal);
        session.advance();
        assert_eq!(session.step(), Step::Experience);
    }

    #[test]
    fn preview_reflects_the_current_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let auth = signed_in_auth(&dir);
        let mut session = WizardSession::start(&auth, Box::new(NoDelay)).expect("signed in");

        let mut editor = PersonalEditor::new(session.document());
        editor.set(PersonalField::FirstName, "Jordan");
        editor.set(PersonalField::LastName, "Hayes");
        session.apply(editor.flush());

        let payload = session.preview();
        assert_eq!(payload.full_name, "Jordan Hayes");
        assert_eq!(payload.experience.len(), session.document().experience.len());
    }

    #[test]
    fn submit_ends_the_session_and_lists_the_summary() {
        let dir = tempfile::tempdir().expect("tempdir");
        let auth = signed_in_auth(&dir);
        let mut session = WizardSession::start(&auth, Box::new(NoDelay)).expect("signed in");

        let mut editor = TargetEditor::new(session.document());
        editor.set(TargetField::Title, "Operations Manager");
        editor.set(TargetField::Industry, "Technology");
        session.apply(editor.flush());

        let mut store = MockResumeStore::empty(Box::new(NoDelay));
        let summary = session
            .submit(&mut store, "Squad Lead to Operations")
            .expect("mock saves succeed");
        assert_eq!(summary.target_position, "Operations Manager");
        assert_eq!(store.list().len(), 1);
    }
}

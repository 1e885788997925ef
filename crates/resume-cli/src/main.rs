mod wizard;

use clap::{Parser, Subcommand, ValueEnum};
use resume_core::{
    EducationEditor, EducationField, ExperienceEditor, ExperienceField, PersonalEditor,
    PersonalField, PersonalInfo, ResumeDocument, SectionEditor, SkillCategory, SkillsEditor, Step,
    TargetEditor, TargetField, ValidationResult, build_preview, document_schema, render_json,
    render_text, validate,
};
use resume_session::{
    AuthService, FixedDelay, GENERIC_WAITLIST_FAILURE, Latency, MockAuth, MockResumeStore,
    MockWaitlist, NoDelay, ResumeStore, WaitlistEntry, WaitlistService, WizardSession,
};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use wizard::{Verbosity, WizardPresenter};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

const SIMULATED_DELAY: Duration = Duration::from_millis(1500);

fn pick_latency(no_delay: bool) -> Box<dyn Latency> {
    if no_delay {
        Box::new(NoDelay)
    } else {
        Box::new(FixedDelay(SIMULATED_DELAY))
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Military-to-civilian resume wizard",
    long_about = "Builds civilian-friendly resumes from military and first responder experience via a multi-step text wizard"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RenderMode {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Run the multi-step resume wizard in a text shell.
    Wizard {
        /// Show verbose output (signed-in user, step ids, validation details).
        #[arg(long, alias = "debug")]
        verbose: bool,
        /// Also emit the document JSON at completion.
        #[arg(long)]
        document_json: bool,
        /// Write the completed document JSON to this file before saving.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Skip the simulated translation/save delays.
        #[arg(long)]
        no_delay: bool,
    },
    /// Render a saved resume document as a civilian-friendly preview.
    Preview {
        /// Path to the resume document JSON.
        #[arg(long, value_name = "DOCUMENT")]
        document: PathBuf,
        /// Render output mode for the preview.
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
    /// Check a resume document against the required-field rules.
    Validate {
        /// Path to the resume document JSON.
        #[arg(long, value_name = "DOCUMENT")]
        document: PathBuf,
    },
    /// Emit the JSON Schema for resume documents.
    Schema,
    /// List saved resumes.
    Dashboard {
        /// Case-insensitive filter over title and target position.
        #[arg(long, value_name = "TERM")]
        search: Option<String>,
        /// Skip the simulated store delay.
        #[arg(long)]
        no_delay: bool,
    },
    /// Delete a saved resume by id.
    Delete {
        #[arg(long, value_name = "ID")]
        id: String,
        /// Skip the simulated store delay.
        #[arg(long)]
        no_delay: bool,
    },
    /// Join the early-access waitlist.
    Waitlist {
        #[arg(long, value_name = "EMAIL")]
        email: String,
    },
    /// Sign in with an email address (mock auth, any password accepted).
    Login {
        #[arg(long, value_name = "EMAIL")]
        email: String,
    },
    /// Sign out and clear the stored session.
    Logout,
    /// Show the signed-in user.
    Whoami,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Wizard {
            verbose,
            document_json,
            out,
            no_delay,
        } => run_wizard(verbose, document_json, out, no_delay),
        Command::Preview { document, format } => run_preview(document, format),
        Command::Validate { document } => run_validate(document),
        Command::Schema => run_schema(),
        Command::Dashboard { search, no_delay } => run_dashboard(search, no_delay),
        Command::Delete { id, no_delay } => run_delete(&id, no_delay),
        Command::Waitlist { email } => run_waitlist(&email),
        Command::Login { email } => run_login(&email),
        Command::Logout => run_logout(),
        Command::Whoami => run_whoami(),
    }
}

fn state_dir() -> PathBuf {
    env::var_os("HERO_RESUME_STATE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn session_file() -> PathBuf {
    state_dir().join("user.json")
}

fn waitlist_file() -> PathBuf {
    state_dir().join("waitlist.json")
}

fn run_preview(document_path: PathBuf, format: RenderMode) -> CliResult<()> {
    let raw = fs::read_to_string(&document_path)?;
    let document = ResumeDocument::from_json(&raw)?;
    let payload = build_preview(&document);
    match format {
        RenderMode::Text => println!("{}", render_text(&payload)?),
        RenderMode::Json => println!("{}", serde_json::to_string_pretty(&render_json(&payload))?),
    }
    Ok(())
}

fn run_validate(document_path: PathBuf) -> CliResult<()> {
    let raw = fs::read_to_string(&document_path)?;
    let document = ResumeDocument::from_json(&raw)?;

    let result = validate(&document);
    println!(
        "Validation result: {}",
        if result.valid { "valid" } else { "invalid" }
    );
    describe_validation(&result);

    if result.valid {
        Ok(())
    } else {
        Err("validation failed".into())
    }
}

fn describe_validation(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("Errors:");
        for error in &result.errors {
            println!("  {} - {}", error.path, error.message);
        }
    }
    if !result.missing_required.is_empty() {
        println!(
            "Missing required fields: {}",
            result.missing_required.join(", ")
        );
    }
}

fn run_schema() -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(&document_schema())?);
    Ok(())
}

fn run_dashboard(search: Option<String>, no_delay: bool) -> CliResult<()> {
    let store = MockResumeStore::seeded(pick_latency(no_delay));
    let mut rows = store.list();
    if let Some(term) = search {
        let term = term.to_lowercase();
        rows.retain(|row| {
            row.title.to_lowercase().contains(&term)
                || row.target_position.to_lowercase().contains(&term)
        });
    }

    if rows.is_empty() {
        println!("No resumes found.");
        return Ok(());
    }
    for row in rows {
        println!(
            "{}  {}  ({}, {})  updated {}",
            row.id,
            row.title,
            row.target_position,
            row.industry,
            row.last_updated.format("%Y-%m-%d")
        );
    }
    Ok(())
}

fn run_delete(id: &str, no_delay: bool) -> CliResult<()> {
    let mut store = MockResumeStore::seeded(pick_latency(no_delay));
    store.delete(id)?;
    println!("Deleted resume '{}'.", id);
    Ok(())
}

fn run_waitlist(email: &str) -> CliResult<()> {
    let path = waitlist_file();
    let entries: Vec<WaitlistEntry> = match fs::read_to_string(&path) {
        Ok(raw) => serde_json::from_str(&raw)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(err) => return Err(err.into()),
    };

    let mut waitlist = MockWaitlist::from_entries(entries);
    match waitlist.capture(email) {
        Ok(entry) => {
            fs::write(&path, serde_json::to_string_pretty(waitlist.entries())?)?;
            println!(
                "You're on the list! We'll reach out to {} with early access.",
                entry.email
            );
            Ok(())
        }
        // The cause stays internal; users see one generic message.
        Err(_) => Err(GENERIC_WAITLIST_FAILURE.into()),
    }
}

fn run_login(email: &str) -> CliResult<()> {
    let mut auth = MockAuth::open(session_file())?;
    let user = auth.login(email, "")?;
    println!("Signed in as {} ({})", user.email, user.id);
    Ok(())
}

fn run_logout() -> CliResult<()> {
    let mut auth = MockAuth::open(session_file())?;
    auth.logout()?;
    println!("Signed out.");
    Ok(())
}

fn run_whoami() -> CliResult<()> {
    let auth = MockAuth::open(session_file())?;
    match auth.current_user() {
        Some(user) => {
            println!("{} ({})", user.email, user.id);
            Ok(())
        }
        None => Err("not signed in".into()),
    }
}

enum Nav {
    Next,
    Back,
    Jump(usize),
}

enum ReviewOutcome {
    Saved,
    Back(WizardSession),
}

fn run_wizard(
    verbose: bool,
    document_json: bool,
    out: Option<PathBuf>,
    no_delay: bool,
) -> CliResult<()> {
    let auth = MockAuth::open(session_file())?;
    let mut store = MockResumeStore::seeded(pick_latency(no_delay));
    let mut session = match WizardSession::start(&auth, pick_latency(no_delay)) {
        Ok(session) => session,
        Err(err) => {
            return Err(format!(
                "{} (try `hero-resume login --email you@example.com`)",
                err
            )
            .into());
        }
    };

    let mut presenter = WizardPresenter::new(Verbosity::from_verbose(verbose), document_json);
    presenter.show_header(&session);

    loop {
        presenter.show_step(&session);
        let nav = match session.step() {
            Step::Personal => edit_personal(&mut session, &presenter)?,
            Step::Experience => edit_experience(&mut session, &presenter)?,
            Step::Education => edit_education(&mut session, &presenter)?,
            Step::Skills => edit_skills(&mut session, &presenter)?,
            Step::Target => edit_target(&mut session, &presenter)?,
            Step::Preview => match review_and_submit(session, &presenter, &mut store, out.as_deref())? {
                ReviewOutcome::Saved => return Ok(()),
                ReviewOutcome::Back(returned) => {
                    session = returned;
                    session.retreat();
                    continue;
                }
            },
        };
        match nav {
            Nav::Next => session.advance(),
            Nav::Back => session.retreat(),
            Nav::Jump(index) => {
                session.jump_to(index);
            }
        }
    }
}

fn review_and_submit(
    session: WizardSession,
    presenter: &WizardPresenter,
    store: &mut dyn ResumeStore,
    out: Option<&Path>,
) -> CliResult<ReviewOutcome> {
    println!("Translating your experience into civilian terms...");
    let payload = session.preview();
    println!("{}", render_text(&payload)?);

    let validation = session.validate();
    if !validation.valid {
        println!("This resume is not complete yet:");
        presenter.show_validation(&validation);
    }

    loop {
        let choice = prompt_line("[s]ave resume, [b]ack to edit, or [q]uit without saving")?;
        match choice.trim().to_lowercase().as_str() {
            "" | "s" | "save" => {
                let default_title = default_resume_title(session.document());
                let raw = prompt_line(&format!("Resume title [{}]", default_title))?;
                let title = if raw.trim().is_empty() {
                    default_title
                } else {
                    raw.trim().to_string()
                };

                if let Some(path) = out {
                    fs::write(path, session.document().to_json_pretty()?)?;
                    println!("Wrote document JSON to {}", path.display());
                }

                let document = session.document().clone();
                println!("Saving...");
                let summary = session.submit(store, &title)?;
                presenter.show_completion(&document, &summary);
                return Ok(ReviewOutcome::Saved);
            }
            "b" | "back" => return Ok(ReviewOutcome::Back(session)),
            "q" | "quit" => Err("wizard aborted by user")?,
            _ => println!("Please answer s, b, or q."),
        }
    }
}

fn default_resume_title(document: &ResumeDocument) -> String {
    let target = document.target.title.trim();
    if target.is_empty() {
        "Untitled Resume".to_string()
    } else {
        format!("{} Resume", target)
    }
}

fn edit_personal(session: &mut WizardSession, presenter: &WizardPresenter) -> CliResult<Nav> {
    let mut editor = PersonalEditor::new(session.document());
    let fields = [
        (PersonalField::FirstName, "First Name", true),
        (PersonalField::LastName, "Last Name", true),
        (PersonalField::Email, "Email", true),
        (PersonalField::Phone, "Phone", true),
        (PersonalField::Address, "Street Address", false),
        (PersonalField::City, "City", false),
        (PersonalField::State, "State", false),
        (PersonalField::ZipCode, "ZIP Code", false),
        (PersonalField::Linkedin, "LinkedIn Profile", false),
    ];
    for (field, label, required) in fields {
        let current = personal_value(editor.info(), field);
        if let Some(value) = prompt_field(presenter, label, required, &current)? {
            editor.set(field, value);
            session.apply(editor.flush());
        }
    }
    prompt_nav(session)
}

fn personal_value(info: &PersonalInfo, field: PersonalField) -> String {
    match field {
        PersonalField::FirstName => info.first_name.clone(),
        PersonalField::LastName => info.last_name.clone(),
        PersonalField::Email => info.email.clone(),
        PersonalField::Phone => info.phone.clone(),
        PersonalField::Address => info.address.clone(),
        PersonalField::City => info.city.clone(),
        PersonalField::State => info.state.clone(),
        PersonalField::ZipCode => info.zip_code.clone(),
        PersonalField::Linkedin => info.linkedin.clone(),
    }
}

fn edit_experience(session: &mut WizardSession, presenter: &WizardPresenter) -> CliResult<Nav> {
    let mut editor = ExperienceEditor::new(session.document());
    let ids: Vec<String> = editor.entries().iter().map(|entry| entry.id.clone()).collect();
    for (index, id) in ids.iter().enumerate() {
        println!("Experience {}", index + 1);
        edit_experience_entry(session, presenter, &mut editor, id)?;
    }

    loop {
        let choice =
            prompt_line("[a]dd another experience, [r]emove one, or press Enter to continue")?;
        match choice.trim().to_lowercase().as_str() {
            "" => break,
            "a" | "add" => {
                let id = editor.add_entry();
                session.apply(editor.flush());
                println!("Experience {}", editor.entries().len());
                edit_experience_entry(session, presenter, &mut editor, &id)?;
            }
            "r" | "remove" => {
                let total = editor.entries().len();
                let raw = prompt_line(&format!("Remove which experience? (1-{})", total))?;
                match raw.trim().parse::<usize>() {
                    Ok(number) if (1..=total).contains(&number) => {
                        let id = editor.entries()[number - 1].id.clone();
                        match editor.remove_entry(&id) {
                            Ok(()) => {
                                session.apply(editor.flush());
                                println!("Removed experience {}.", number);
                            }
                            Err(err) => println!("{}", err),
                        }
                    }
                    _ => println!("Enter a number between 1 and {}.", total),
                }
            }
            _ => println!("Please answer a, r, or press Enter."),
        }
    }
    prompt_nav(session)
}

fn edit_experience_entry(
    session: &mut WizardSession,
    presenter: &WizardPresenter,
    editor: &mut ExperienceEditor,
    id: &str,
) -> CliResult<()> {
    let fields = [
        (ExperienceField::Title, "Position/Rank", true),
        (ExperienceField::Branch, "Branch/Department", true),
        (ExperienceField::StartDate, "Start Date (YYYY-MM)", true),
        (
            ExperienceField::EndDate,
            "End Date (YYYY-MM, blank if still serving)",
            false,
        ),
        (
            ExperienceField::Responsibilities,
            "Primary Responsibilities",
            true,
        ),
        (ExperienceField::Achievements, "Key Achievements", true),
    ];
    for (field, label, required) in fields {
        let current = experience_value(&editor, id, field);
        if let Some(value) = prompt_field(presenter, label, required, &current)? {
            editor.set(id, field, value)?;
            session.apply(editor.flush());
        }
    }
    Ok(())
}

fn experience_value(editor: &ExperienceEditor, id: &str, field: ExperienceField) -> String {
    editor
        .entries()
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| match field {
            ExperienceField::Title => entry.title.clone(),
            ExperienceField::Branch => entry.branch.clone(),
            ExperienceField::StartDate => entry.start_date.clone(),
            ExperienceField::EndDate => entry.end_date.clone(),
            ExperienceField::Responsibilities => entry.responsibilities.clone(),
            ExperienceField::Achievements => entry.achievements.clone(),
        })
        .unwrap_or_default()
}

fn edit_education(session: &mut WizardSession, presenter: &WizardPresenter) -> CliResult<Nav> {
    let mut editor = EducationEditor::new(session.document());
    let ids: Vec<String> = editor.entries().iter().map(|entry| entry.id.clone()).collect();
    for (index, id) in ids.iter().enumerate() {
        println!("Education {}", index + 1);
        edit_education_entry(session, presenter, &mut editor, id)?;
    }

    loop {
        let choice = prompt_line("[a]dd another school, or press Enter to continue")?;
        match choice.trim().to_lowercase().as_str() {
            "" => break,
            "a" | "add" => {
                let id = editor.add_entry();
                session.apply(editor.flush());
                println!("Education {}", editor.entries().len());
                edit_education_entry(session, presenter, &mut editor, &id)?;
            }
            _ => println!("Please answer a or press Enter."),
        }
    }
    prompt_nav(session)
}

fn edit_education_entry(
    session: &mut WizardSession,
    presenter: &WizardPresenter,
    editor: &mut EducationEditor,
    id: &str,
) -> CliResult<()> {
    let fields = [
        (EducationField::School, "School", true),
        (EducationField::Degree, "Degree", true),
        (EducationField::FieldOfStudy, "Field of Study", false),
        (EducationField::StartDate, "Start Date (YYYY-MM)", false),
        (EducationField::EndDate, "End Date (YYYY-MM)", false),
    ];
    for (field, label, required) in fields {
        let current = education_value(&editor, id, field);
        if let Some(value) = prompt_field(presenter, label, required, &current)? {
            editor.set(id, field, value)?;
            session.apply(editor.flush());
        }
    }
    Ok(())
}

fn education_value(editor: &EducationEditor, id: &str, field: EducationField) -> String {
    editor
        .entries()
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| match field {
            EducationField::School => entry.school.clone(),
            EducationField::Degree => entry.degree.clone(),
            EducationField::FieldOfStudy => entry.field_of_study.clone(),
            EducationField::StartDate => entry.start_date.clone(),
            EducationField::EndDate => entry.end_date.clone(),
        })
        .unwrap_or_default()
}

fn edit_skills(session: &mut WizardSession, presenter: &WizardPresenter) -> CliResult<Nav> {
    let mut editor = SkillsEditor::new(session.document());
    let categories = [
        (SkillCategory::Technical, "Technical skill"),
        (SkillCategory::Soft, "Soft skill"),
        (SkillCategory::Certifications, "Certification or license"),
    ];
    for (category, label) in categories {
        let existing = editor.skills().labels(category);
        if !existing.is_empty() {
            println!("Current {}: {}", category, existing.join(", "));
        }
        loop {
            presenter.show_field_prompt(&format!("{} (blank to finish)", label), false, "");
            let raw = read_line()?;
            if raw.trim().is_empty() {
                break;
            }
            if editor.add(category, &raw) {
                session.apply(editor.flush());
            }
        }
    }
    prompt_nav(session)
}

fn edit_target(session: &mut WizardSession, presenter: &WizardPresenter) -> CliResult<Nav> {
    let mut editor = TargetEditor::new(session.document());
    let fields = [
        (TargetField::Title, "Target Job Title", true),
        (TargetField::Industry, "Target Industry", true),
        (TargetField::Summary, "Professional Summary", true),
    ];
    for (field, label, required) in fields {
        let current = match field {
            TargetField::Title => editor.target().title.clone(),
            TargetField::Industry => editor.target().industry.clone(),
            TargetField::Summary => editor.target().summary.clone(),
        };
        if let Some(value) = prompt_field(presenter, label, required, &current)? {
            editor.set(field, value);
            session.apply(editor.flush());
        }
    }
    prompt_nav(session)
}

fn prompt_nav(session: &WizardSession) -> CliResult<Nav> {
    if session.is_first() {
        return Ok(Nav::Next);
    }
    loop {
        let choice = prompt_line("[n]ext, [b]ack, or a completed step number to revisit")?;
        match choice.trim().to_lowercase().as_str() {
            "" | "n" | "next" => return Ok(Nav::Next),
            "b" | "back" => return Ok(Nav::Back),
            other => match other.parse::<usize>() {
                // Only already-visited steps can be jumped to.
                Ok(number) if number >= 1 && number <= session.position() + 1 => {
                    return Ok(Nav::Jump(number - 1));
                }
                _ => println!("Please answer n, b, or a completed step number."),
            },
        }
    }
}

/// Prompt for a field; `None` keeps the current value.
fn prompt_field(
    presenter: &WizardPresenter,
    label: &str,
    required: bool,
    current: &str,
) -> CliResult<Option<String>> {
    presenter.show_field_prompt(label, required, current);
    let raw = read_line()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

fn prompt_line(label: &str) -> CliResult<String> {
    println!("{}", label);
    read_line()
}

fn read_line() -> CliResult<String> {
    print!("> ");
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err("input stream closed before the wizard finished".into());
    }
    Ok(input.trim_end_matches(['\n', '\r']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use serde_json::Value;
    use std::fs;

    fn hero_resume() -> Command {
        Command::cargo_bin("hero-resume").expect("binary builds")
    }

    fn complete_document() -> ResumeDocument {
        let mut document = ResumeDocument::default();
        document.personal.first_name = "Jordan".into();
        document.personal.last_name = "Hayes".into();
        document.personal.email = "jordan@example.com".into();
        document.personal.phone = "555-0100".into();

        let experience = &mut document.experience[0];
        experience.title = "Squad Leader".into();
        experience.branch = "US Army".into();
        experience.start_date = "2018-05".into();
        experience.responsibilities = "Led tactical operations for a 12-person team".into();
        experience.achievements = "Raised unit readiness scores two years running".into();

        let education = &mut document.education[0];
        education.school = "Fayetteville Community College".into();
        education.degree = "AAS".into();
        education.field_of_study = "Logistics".into();

        document.skills.technical.push("Logistics".into());
        document.target.title = "Operations Manager".into();
        document.target.industry = "Technology".into();
        document.target.summary = "Operations leader transitioning from the US Army.".into();
        document
    }

    fn write_document(dir: &assert_fs::TempDir, document: &ResumeDocument) -> std::path::PathBuf {
        let path = dir.path().join("resume.json");
        fs::write(&path, document.to_json_pretty().expect("serialize")).expect("write fixture");
        path
    }

    #[test]
    fn schema_emits_the_document_schema() -> CliResult<()> {
        let output = hero_resume().arg("schema").assert().success();
        let schema: Value = serde_json::from_slice(&output.get_output().stdout)?;
        assert!(schema["properties"].get("personal").is_some());
        assert!(schema["properties"].get("experience").is_some());
        Ok(())
    }

    #[test]
    fn validate_accepts_a_complete_document() -> CliResult<()> {
        let dir = assert_fs::TempDir::new()?;
        let path = write_document(&dir, &complete_document());

        let output = hero_resume()
            .arg("validate")
            .arg("--document")
            .arg(&path)
            .assert()
            .success();
        let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
        assert!(stdout.contains("Validation result: valid"));
        Ok(())
    }

    #[test]
    fn validate_rejects_a_blank_document() -> CliResult<()> {
        let dir = assert_fs::TempDir::new()?;
        let path = write_document(&dir, &ResumeDocument::default());

        let output = hero_resume()
            .arg("validate")
            .arg("--document")
            .arg(&path)
            .assert()
            .failure();
        let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
        assert!(stdout.contains("Validation result: invalid"));
        assert!(stdout.contains("/personal/first_name"));
        Ok(())
    }

    #[test]
    fn preview_translates_military_titles() -> CliResult<()> {
        let dir = assert_fs::TempDir::new()?;
        let path = write_document(&dir, &complete_document());

        let output = hero_resume()
            .arg("preview")
            .arg("--document")
            .arg(&path)
            .assert()
            .success();
        let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
        assert!(stdout.contains("Jordan Hayes"));
        assert!(stdout.contains("Team Leader | US Army"));
        assert!(stdout.contains("May 2018 - Present"));
        assert!(!stdout.contains("Squad Leader"));
        Ok(())
    }

    #[test]
    fn preview_json_mode_emits_the_payload() -> CliResult<()> {
        let dir = assert_fs::TempDir::new()?;
        let path = write_document(&dir, &complete_document());

        let output = hero_resume()
            .arg("preview")
            .arg("--document")
            .arg(&path)
            .arg("--format")
            .arg("json")
            .assert()
            .success();
        let payload: Value = serde_json::from_slice(&output.get_output().stdout)?;
        assert_eq!(payload["full_name"].as_str(), Some("Jordan Hayes"));
        assert_eq!(
            payload["experience"][0]["title"].as_str(),
            Some("Team Leader")
        );
        Ok(())
    }

    #[test]
    fn dashboard_lists_the_seeded_resumes() -> CliResult<()> {
        let output = hero_resume()
            .arg("dashboard")
            .arg("--no-delay")
            .assert()
            .success();
        let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
        assert!(stdout.contains("resume-1"));
        assert!(stdout.contains("Infantry to Project Management"));
        assert!(stdout.contains("resume-3"));
        Ok(())
    }

    #[test]
    fn dashboard_search_filters_by_title_and_position() -> CliResult<()> {
        let output = hero_resume()
            .arg("dashboard")
            .arg("--no-delay")
            .arg("--search")
            .arg("supply")
            .assert()
            .success();
        let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
        assert!(stdout.contains("resume-2"));
        assert!(!stdout.contains("resume-1"));
        assert!(!stdout.contains("resume-3"));
        Ok(())
    }

    #[test]
    fn delete_pays_the_simulated_wait_unless_disabled() -> CliResult<()> {
        let started = std::time::Instant::now();
        hero_resume()
            .arg("delete")
            .arg("--id")
            .arg("resume-1")
            .assert()
            .success();
        assert!(started.elapsed() >= SIMULATED_DELAY);

        let started = std::time::Instant::now();
        hero_resume()
            .arg("delete")
            .arg("--id")
            .arg("resume-1")
            .arg("--no-delay")
            .assert()
            .success();
        assert!(started.elapsed() < SIMULATED_DELAY);
        Ok(())
    }

    #[test]
    fn waitlist_persists_and_rejects_duplicates() -> CliResult<()> {
        let state = assert_fs::TempDir::new()?;

        let output = hero_resume()
            .env("HERO_RESUME_STATE_DIR", state.path())
            .arg("waitlist")
            .arg("--email")
            .arg("vet@example.com")
            .assert()
            .success();
        let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
        assert!(stdout.contains("vet@example.com"));

        let output = hero_resume()
            .env("HERO_RESUME_STATE_DIR", state.path())
            .arg("waitlist")
            .arg("--email")
            .arg("VET@example.com")
            .assert()
            .failure();
        let stderr = String::from_utf8_lossy(&output.get_output().stderr).to_string();
        assert!(stderr.contains("Failed to submit email"));
        Ok(())
    }

    #[test]
    fn waitlist_reports_the_same_generic_failure_for_bad_emails() -> CliResult<()> {
        let state = assert_fs::TempDir::new()?;
        let output = hero_resume()
            .env("HERO_RESUME_STATE_DIR", state.path())
            .arg("waitlist")
            .arg("--email")
            .arg("not-an-email")
            .assert()
            .failure();
        let stderr = String::from_utf8_lossy(&output.get_output().stderr).to_string();
        assert!(stderr.contains("Failed to submit email"));
        assert!(!stderr.contains("valid email"));
        Ok(())
    }

    #[test]
    fn wizard_refuses_to_start_signed_out() -> CliResult<()> {
        let state = assert_fs::TempDir::new()?;
        let output = hero_resume()
            .env("HERO_RESUME_STATE_DIR", state.path())
            .arg("wizard")
            .arg("--no-delay")
            .assert()
            .failure();
        let stderr = String::from_utf8_lossy(&output.get_output().stderr).to_string();
        assert!(stderr.contains("sign in"));
        assert!(stderr.contains("hero-resume login"));
        Ok(())
    }

    #[test]
    fn login_whoami_logout_roundtrip() -> CliResult<()> {
        let state = assert_fs::TempDir::new()?;

        hero_resume()
            .env("HERO_RESUME_STATE_DIR", state.path())
            .arg("login")
            .arg("--email")
            .arg("vet@example.com")
            .assert()
            .success();

        let output = hero_resume()
            .env("HERO_RESUME_STATE_DIR", state.path())
            .arg("whoami")
            .assert()
            .success();
        let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
        assert!(stdout.contains("vet@example.com"));

        hero_resume()
            .env("HERO_RESUME_STATE_DIR", state.path())
            .arg("logout")
            .assert()
            .success();

        hero_resume()
            .env("HERO_RESUME_STATE_DIR", state.path())
            .arg("whoami")
            .assert()
            .failure();
        Ok(())
    }

    #[test]
    fn wizard_builds_and_saves_a_resume_end_to_end() -> CliResult<()> {
        let state = assert_fs::TempDir::new()?;
        let out_path = state.path().join("document.json");

        hero_resume()
            .env("HERO_RESUME_STATE_DIR", state.path())
            .arg("login")
            .arg("--email")
            .arg("vet@example.com")
            .assert()
            .success();

        let answers = [
            // Personal
            "Jordan",
            "Hayes",
            "jordan@example.com",
            "555-0100",
            "",
            "",
            "",
            "",
            "",
            // Experience entry 1, then continue, then next
            "Squad Leader",
            "US Army",
            "2018-05",
            "",
            "Led tactical operations for a 12-person team",
            "Raised unit readiness scores two years running",
            "",
            "",
            // Education entry 1, then continue, then next
            "Fayetteville Community College",
            "AAS",
            "Logistics",
            "2013-09",
            "2015-05",
            "",
            "",
            // Skills: one technical, then blank per category, then next
            "Logistics",
            "",
            "",
            "",
            "",
            // Target, then next
            "Operations Manager",
            "Technology",
            "Operations leader transitioning from the US Army.",
            "",
            // Preview: save with the default title
            "",
            "",
        ];
        let stdin = format!("{}\n", answers.join("\n"));

        let output = hero_resume()
            .env("HERO_RESUME_STATE_DIR", state.path())
            .arg("wizard")
            .arg("--no-delay")
            .arg("--out")
            .arg(&out_path)
            .write_stdin(stdin)
            .assert()
            .success();
        let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
        assert!(stdout.contains("Resume created successfully"));
        assert!(stdout.contains("Saved as 'Operations Manager Resume'"));
        assert!(stdout.contains("Team Leader | US Army"));
        assert!(stdout.contains("Document (CBOR hex):"));

        let saved = fs::read_to_string(&out_path)?;
        let document = ResumeDocument::from_json(&saved)?;
        assert_eq!(document.personal.first_name, "Jordan");
        assert_eq!(document.experience[0].title, "Squad Leader");
        assert_eq!(document.target.industry, "Technology");
        Ok(())
    }
}

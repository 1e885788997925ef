use std::fmt::Write;

use resume_core::{ResumeDocument, Step, ValidationResult};
use resume_session::{ResumeSummary, WizardSession};

/// Controls which bits of state the wizard prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: prompts only.
    Clean,
    /// Verbose output: signed-in user, step ids, validation details.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Prints step banners, field prompts, and the completion summary.
pub struct WizardPresenter {
    verbosity: Verbosity,
    header_printed: bool,
    show_document_json: bool,
}

impl WizardPresenter {
    pub fn new(verbosity: Verbosity, show_document_json: bool) -> Self {
        Self {
            verbosity,
            header_printed: false,
            show_document_json,
        }
    }

    pub fn show_header(&mut self, session: &WizardSession) {
        if self.header_printed {
            return;
        }
        println!("Create New Resume");
        println!("Enter your information to create a civilian-friendly resume.");
        if self.verbosity.is_verbose() {
            println!("Signed in as {}", session.user().email);
        }
        self.header_printed = true;
    }

    pub fn show_step(&self, session: &WizardSession) {
        let step = session.step();
        println!();
        println!(
            "Step {}/{}: {}",
            session.position() + 1,
            session.step_count(),
            step.name()
        );
        if self.verbosity.is_verbose() {
            println!("  ({})", step.id());
        }
        if let Some(hint) = step_hint(step) {
            println!("{}", hint);
        }
    }

    pub fn show_field_prompt(&self, label: &str, required: bool, current: &str) {
        let mut line = label.to_string();
        if required {
            line.push_str(" *");
        }
        if !current.is_empty() {
            let _ = write!(&mut line, " [{}]", current);
        }
        println!("{}", line);
    }

    pub fn show_validation(&self, result: &ValidationResult) {
        if result.valid {
            return;
        }
        if !result.missing_required.is_empty() {
            println!(
                "Missing required fields: {}",
                result.missing_required.join(", ")
            );
        }
        for error in &result.errors {
            println!("  {} - {}", error.path, error.message);
        }
    }

    pub fn show_completion(&self, document: &ResumeDocument, summary: &ResumeSummary) {
        println!("Resume created successfully! ✅");
        println!("Saved as '{}' ({})", summary.title, summary.id);
        match document.to_cbor() {
            Ok(bytes) => {
                println!("Document (CBOR hex): {}", encode_hex(&bytes));
            }
            Err(err) => {
                eprintln!("Failed to serialize document to CBOR: {}", err);
            }
        }
        if self.show_document_json {
            match document.to_json_pretty() {
                Ok(pretty) => println!("{}", pretty),
                Err(err) => {
                    eprintln!("Failed to serialize document to JSON: {}", err);
                }
            }
        }
    }
}

fn step_hint(step: Step) -> Option<&'static str> {
    match step {
        Step::Experience => Some(
            "Use military/first responder terminology; titles and responsibilities are translated to civilian terms in the preview.",
        ),
        Step::Skills => Some("Press Enter on an empty line to finish a skill list."),
        Step::Preview => Some("Review your civilian-friendly resume."),
        _ => None,
    }
}

fn encode_hex(bytes: &[u8]) -> String {
    let mut encoded = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(&mut encoded, "{:02x}", byte).expect("writing to string cannot fail");
    }
    encoded
}

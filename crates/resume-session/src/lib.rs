#![allow(missing_docs)]

pub mod auth;
pub mod latency;
pub mod persist;
pub mod session;
pub mod waitlist;

pub use auth::{AuthError, AuthService, MockAuth, ProfileUpdate, User};
pub use latency::{FixedDelay, Latency, NoDelay};
pub use persist::{MockResumeStore, ResumeStore, ResumeSummary, StoreError};
pub use session::{SessionError, WizardSession};
pub use waitlist::{
    GENERIC_WAITLIST_FAILURE, MockWaitlist, WaitlistEntry, WaitlistError, WaitlistService,
};

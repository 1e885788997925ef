use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The signed-in account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Partial profile change applied to the current user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in")]
    SignedOut,
    #[error("an email address is required")]
    EmptyEmail,
    #[error("failed to access the session file: {0}")]
    Io(#[from] io::Error),
    #[error("session file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Gatekeeper for the editing routes. The wizard consumes only
/// `current_user`; the remaining operations exist for the account surface.
pub trait AuthService {
    fn current_user(&self) -> Option<&User>;
    fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError>;
    fn signup(&mut self, email: &str, password: &str) -> Result<User, AuthError>;
    fn logout(&mut self) -> Result<(), AuthError>;
    fn update_profile(&mut self, update: ProfileUpdate) -> Result<User, AuthError>;
}

/// File-backed mock authentication.
///
/// The session file stands in for browser local storage: any email signs in,
/// the fabricated user persists across invocations, and logout removes the
/// file. Passwords are accepted unchecked.
#[derive(Debug)]
pub struct MockAuth {
    path: PathBuf,
    current: Option<User>,
}

impl MockAuth {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AuthError> {
        let path = path.into();
        let current = match fs::read_to_string(&path) {
            Ok(raw) => Some(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, current })
    }

    fn establish(&mut self, email: &str) -> Result<User, AuthError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AuthError::EmptyEmail);
        }
        let user = User {
            id: fabricated_id(),
            email: email.to_string(),
            first_name: None,
            last_name: None,
        };
        self.persist(&user)?;
        self.current = Some(user.clone());
        Ok(user)
    }

    fn persist(&self, user: &User) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(user)?)?;
        Ok(())
    }
}

fn fabricated_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or(0);
    format!("user-{}", millis)
}

impl AuthService for MockAuth {
    fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    fn login(&mut self, email: &str, _password: &str) -> Result<User, AuthError> {
        self.establish(email)
    }

    fn signup(&mut self, email: &str, _password: &str) -> Result<User, AuthError> {
        self.establish(email)
    }

    fn logout(&mut self) -> Result<(), AuthError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        self.current = None;
        Ok(())
    }

    fn update_profile(&mut self, update: ProfileUpdate) -> Result<User, AuthError> {
        let user = self.current.as_mut().ok_or(AuthError::SignedOut)?;
        if let Some(email) = update.email {
            let email = email.trim().to_string();
            if email.is_empty() {
                return Err(AuthError::EmptyEmail);
            }
            user.email = email;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = update.last_name {
            user.last_name = Some(last_name);
        }
        let user = user.clone();
        self.persist(&user)?;
        Ok(user)
    }
}

//! Form validation for login, signup, and profile edits.
//!
//! Each form checks its fields in display order and reports the first failure
//! as `CoreError::Validation` carrying the message shown to the user.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 30;
pub const MAX_BIO_LEN: usize = 160;

/// Credentials entered on the login page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the email or password is empty.
    pub fn validate(&self) -> Result<(), CoreError> {
        require(&self.email, "Email is required")?;
        require(&self.password, "Password is required")
    }
}

/// Fields of the signup page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` on the first missing field, a short
    /// password, or a confirmation mismatch.
    pub fn validate(&self) -> Result<(), CoreError> {
        require(&self.name, "Name is required")?;
        require(&self.email, "Email is required")?;
        require(&self.password, "Password is required")?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CoreError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.password != self.confirm_password {
            return Err(CoreError::validation("Passwords do not match"));
        }
        Ok(())
    }
}

/// Editable profile fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
}

impl ProfileForm {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the name length, email format, or
    /// bio length is out of bounds.
    pub fn validate(&self) -> Result<(), CoreError> {
        let name_len = self.name.chars().count();
        if name_len < MIN_NAME_LEN {
            return Err(CoreError::validation(format!(
                "Name must be at least {MIN_NAME_LEN} characters."
            )));
        }
        if name_len > MAX_NAME_LEN {
            return Err(CoreError::validation(format!(
                "Name must not be longer than {MAX_NAME_LEN} characters."
            )));
        }
        if !is_valid_email(&self.email) {
            return Err(CoreError::validation("Please enter a valid email address."));
        }
        if let Some(bio) = &self.bio
            && bio.chars().count() > MAX_BIO_LEN
        {
            return Err(CoreError::validation(format!(
                "Bio must not be longer than {MAX_BIO_LEN} characters."
            )));
        }
        Ok(())
    }
}

fn require(value: &str, message: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        Err(CoreError::validation(message))
    } else {
        Ok(())
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain with
/// non-empty labels, no whitespace.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

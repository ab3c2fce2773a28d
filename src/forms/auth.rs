//! Login and signup forms
//!
//! Passwords are held in `Zeroizing` buffers so they are wiped once the
//! request has been sent.

use zeroize::Zeroizing;

use super::{required_text, ValidationError, MIN_PASSWORD_LEN};

/// Raw login input; the identifier is a username or email
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub identifier: Option<String>,
    pub password: Option<Zeroizing<String>>,
}

/// Raw signup input
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<Zeroizing<String>>,
}

/// Validated login credentials
#[derive(Debug, Clone)]
pub struct Credentials {
    pub identifier: String,
    pub password: Zeroizing<String>,
}

/// Validated signup details
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: Zeroizing<String>,
}

fn present_password(password: &Option<Zeroizing<String>>) -> Option<Zeroizing<String>> {
    password.as_ref().filter(|p| !p.is_empty()).cloned()
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        match (
            required_text(&self.identifier),
            present_password(&self.password),
        ) {
            (Some(identifier), Some(password)) => Ok(Credentials {
                identifier,
                password,
            }),
            _ => Err(ValidationError::MissingCredentials),
        }
    }
}

impl SignupForm {
    pub fn validate(&self) -> Result<Registration, ValidationError> {
        let (name, email, password) = match (
            required_text(&self.name),
            required_text(&self.email),
            present_password(&self.password),
        ) {
            (Some(name), Some(email), Some(password)) => (name, email, password),
            _ => return Err(ValidationError::MissingCredentials),
        };

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }

        Ok(Registration {
            name,
            email,
            password,
        })
    }
}

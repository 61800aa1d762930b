//! Authentication primitives such as login credentials and registrations.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::{UserValidationError, Username};

/// Minimum allowed length for a password at registration time.
pub const PASSWORD_MIN: usize = 3;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `username` must not be empty after trimming; it is kept verbatim so the
///   lookup matches the stored username exactly.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use bloglist::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("root", "sekret").unwrap();
/// assert_eq!(creds.username(), "root");
/// assert_eq!(creds.password(), "sekret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        if username.trim().is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for user lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validation failures for a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    Username(UserValidationError),
    MissingPassword,
    PasswordTooShort { min: usize },
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username(inner) => inner.fmt(f),
            Self::MissingPassword => write!(f, "password missing"),
            Self::PasswordTooShort { min } => {
                write!(f, "password shorter than {min} characters")
            }
        }
    }
}

impl std::error::Error for RegistrationValidationError {}

impl From<UserValidationError> for RegistrationValidationError {
    fn from(value: UserValidationError) -> Self {
        Self::Username(value)
    }
}

/// Validated account registration.
///
/// Username checks run before password checks so the first reported problem
/// is stable for a given payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    username: Username,
    name: Option<String>,
    password: Zeroizing<String>,
}

impl Registration {
    /// Validate raw registration inputs.
    pub fn try_from_parts(
        username: Option<&str>,
        name: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, RegistrationValidationError> {
        let username = Username::new(username.unwrap_or_default())?;
        let password = match password {
            None | Some("") => return Err(RegistrationValidationError::MissingPassword),
            Some(raw) if raw.chars().count() < PASSWORD_MIN => {
                return Err(RegistrationValidationError::PasswordTooShort { min: PASSWORD_MIN });
            }
            Some(raw) => Zeroizing::new(raw.to_owned()),
        };
        Ok(Self {
            username,
            name: name.map(str::to_owned),
            password,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGrant {
    /// Signed identity assertion to present as a bearer token.
    pub token: String,
    pub username: Username,
    pub name: Option<String>,
}

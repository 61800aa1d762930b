//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP inbound adapter is the single
//! place that maps an [`ErrorCode`] to a status code and response body.

use std::fmt;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// A required field is missing or fails a presence/length check.
    InvalidRequest,
    /// An identifier does not have the expected format.
    MalformedId,
    /// A bearer token was supplied but could not be verified.
    InvalidToken,
    /// The operation needs a resolved identity and none is attached.
    Unauthorized,
    /// The resolved identity does not own the targeted record.
    Forbidden,
    /// Login credentials did not match a known user.
    InvalidCredentials,
    /// The requested username is already taken.
    DuplicateUsername,
    /// The requested resource does not exist.
    NotFound,
    /// A backing store could not be reached.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

impl ErrorCode {
    /// Snake-case label used in structured logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::MalformedId => "malformed_id",
            Self::InvalidToken => "invalid_token",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::InvalidCredentials => "invalid_credentials",
            Self::DuplicateUsername => "duplicate_username",
            Self::NotFound => "not_found",
            Self::ServiceUnavailable => "service_unavailable",
            Self::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) const MALFORMED_ID_MESSAGE: &str = "malformatted id";
pub(crate) const INVALID_TOKEN_MESSAGE: &str = "invalid token";
pub(crate) const MISSING_IDENTITY_MESSAGE: &str = "token missing or invalid";
pub(crate) const NOT_CREATOR_MESSAGE: &str = "a blog can be deleted only by its creator";
pub(crate) const INVALID_CREDENTIALS_MESSAGE: &str = "invalid username or password";
pub(crate) const DUPLICATE_USERNAME_MESSAGE: &str = "username must be unique";

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use bloglist::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::NotFound, "missing");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidationError {
    EmptyMessage,
}

impl fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
        }
    }
}

impl std::error::Error for ErrorValidationError {}

impl Error {
    /// Create a new error, panicking if validation fails.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self { code, message })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Identifier failed to parse before any lookup was attempted.
    pub fn malformed_id() -> Self {
        Self::new(ErrorCode::MalformedId, MALFORMED_ID_MESSAGE)
    }

    /// Bearer token failed signature or expiry verification.
    pub fn invalid_token() -> Self {
        Self::new(ErrorCode::InvalidToken, INVALID_TOKEN_MESSAGE)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// No identity is attached to a request that needs one.
    pub fn missing_identity() -> Self {
        Self::unauthorized(MISSING_IDENTITY_MESSAGE)
    }

    /// Convenience constructor for [`ErrorCode::Forbidden`].
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// The caller tried to remove a blog it did not create.
    pub fn not_creator() -> Self {
        Self::forbidden(NOT_CREATOR_MESSAGE)
    }

    /// Generic login failure; never says which half of the pair was wrong.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials, INVALID_CREDENTIALS_MESSAGE)
    }

    /// The store rejected a username that is already registered.
    pub fn duplicate_username() -> Self {
        Self::new(ErrorCode::DuplicateUsername, DUPLICATE_USERNAME_MESSAGE)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

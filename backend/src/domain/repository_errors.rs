//! Translation of driven-port failures into domain errors.
//!
//! Connection problems become 503-class errors and everything else is an
//! internal failure, except the store's username conflict which callers may
//! surface directly.

use super::Error;
use super::ports::{
    BlogRepositoryError, CredentialHasherError, TokenCodecError, UserRepositoryError,
};

pub(crate) fn user_store(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserRepositoryError::DuplicateUsername { .. } => Error::duplicate_username(),
        UserRepositoryError::Missing { id } => {
            Error::internal(format!("user {id} disappeared during update"))
        }
    }
}

pub(crate) fn blog_store(error: BlogRepositoryError) -> Error {
    match error {
        BlogRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("blog repository unavailable: {message}"))
        }
        BlogRepositoryError::Query { message } => {
            Error::internal(format!("blog repository error: {message}"))
        }
    }
}

pub(crate) fn hasher(error: CredentialHasherError) -> Error {
    Error::internal(error.to_string())
}

pub(crate) fn token_signing(error: TokenCodecError) -> Error {
    Error::internal(error.to_string())
}

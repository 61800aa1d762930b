//! Request-scoped caller identity and the signed assertion it is built from.
//!
//! A [`RequestIdentity`] is created once per request by the identity resolver
//! and handed explicitly to every service call that needs it.

use super::{Error, User, UserId, Username};

/// Claims carried by a signed identity assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityAssertion {
    pub user_id: UserId,
    pub username: Username,
}

impl IdentityAssertion {
    /// Assertion describing `user`.
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id().clone(),
            username: user.username().clone(),
        }
    }
}

/// Identity attached to a single request.
///
/// # Examples
/// ```
/// use bloglist::domain::{ErrorCode, RequestIdentity};
///
/// let anonymous = RequestIdentity::anonymous();
/// let err = anonymous.require_user().unwrap_err();
/// assert_eq!(err.code(), ErrorCode::Unauthorized);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestIdentity(Option<User>);

impl RequestIdentity {
    /// No credential, or a credential naming a user that no longer exists.
    pub fn anonymous() -> Self {
        Self(None)
    }

    /// A verified caller, fully loaded from the credential store.
    pub fn authenticated(user: User) -> Self {
        Self(Some(user))
    }

    /// The resolved user, if any.
    pub fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }

    /// Require a resolved user or fail with the standard unauthorised error.
    pub fn require_user(&self) -> Result<&User, Error> {
        self.user().ok_or_else(Error::missing_identity)
    }
}

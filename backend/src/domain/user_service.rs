//! Account registration and user listing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::ports::{
    BlogRepository, CredentialHasher, UserListing, UserRepository, UsersCommand, UsersQuery,
};
use super::repository_errors;
use super::{Blog, BlogId, Error, NewUser, Registration, User};

/// User service implementing the user driving ports.
#[derive(Clone)]
pub struct UserService<U, B, H> {
    users: Arc<U>,
    blogs: Arc<B>,
    hasher: Arc<H>,
}

impl<U, B, H> UserService<U, B, H> {
    /// Create a new service from its collaborators.
    pub fn new(users: Arc<U>, blogs: Arc<B>, hasher: Arc<H>) -> Self {
        Self {
            users,
            blogs,
            hasher,
        }
    }
}

#[async_trait]
impl<U, B, H> UsersCommand for UserService<U, B, H>
where
    U: UserRepository,
    B: BlogRepository,
    H: CredentialHasher,
{
    async fn register(&self, registration: &Registration) -> Result<User, Error> {
        let credential_hash = self
            .hasher
            .hash(registration.password())
            .await
            .map_err(repository_errors::hasher)?;

        let user = self
            .users
            .insert(NewUser {
                username: registration.username().clone(),
                name: registration.name().map(str::to_owned),
                credential_hash,
            })
            .await
            .map_err(repository_errors::user_store)?;

        info!(user_id = %user.id(), username = %user.username(), "user registered");
        Ok(user)
    }
}

#[async_trait]
impl<U, B, H> UsersQuery for UserService<U, B, H>
where
    U: UserRepository,
    B: BlogRepository,
    H: CredentialHasher,
{
    async fn list(&self) -> Result<Vec<UserListing>, Error> {
        let users = self
            .users
            .list()
            .await
            .map_err(repository_errors::user_store)?;
        let blogs: HashMap<BlogId, Blog> = self
            .blogs
            .list()
            .await
            .map_err(repository_errors::blog_store)?
            .into_iter()
            .map(|blog| (blog.id(), blog))
            .collect();

        Ok(users
            .into_iter()
            .map(|user| {
                let owned = user
                    .blogs()
                    .iter()
                    .filter_map(|id| blogs.get(id).cloned())
                    .collect();
                UserListing { user, blogs: owned }
            })
            .collect())
    }
}

//! Blog use-cases with ownership enforcement.
//!
//! A blog's owner id is authoritative. The owning user's `blogs` list is an
//! index updated after the blog write; the two writes are not atomic and a
//! failure between them is logged, not rolled back.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::blog_stats::{favorite_blog, most_blogs, most_likes, total_likes};
use super::ports::{
    BlogListing, BlogRepository, BlogStats, BlogsCommand, BlogsQuery, OwnerSummary,
    UserRepository,
};
use super::repository_errors;
use super::{
    Blog, BlogDraft, BlogFields, BlogId, Error, NewBlog, RequestIdentity, User, UserId,
};

const BLOG_NOT_FOUND_MESSAGE: &str = "blog not found";
const OWNER_NOT_FOUND_MESSAGE: &str = "user not found";

/// Blog service implementing the blog driving ports.
#[derive(Clone)]
pub struct BlogService<B, U> {
    blogs: Arc<B>,
    users: Arc<U>,
}

impl<B, U> BlogService<B, U> {
    /// Create a new service with the given repositories.
    pub fn new(blogs: Arc<B>, users: Arc<U>) -> Self {
        Self { blogs, users }
    }
}

fn validate(draft: &BlogDraft) -> Result<BlogFields, Error> {
    BlogFields::try_from_draft(draft).map_err(|err| Error::invalid_request(err.to_string()))
}

fn parse_blog_id(raw: &str) -> Result<BlogId, Error> {
    BlogId::parse(raw).map_err(|_| Error::malformed_id())
}

fn owner_summary(user: &User) -> OwnerSummary {
    OwnerSummary {
        id: user.id().clone(),
        username: user.username().clone(),
        name: user.name().map(str::to_owned),
    }
}

impl<B, U> BlogService<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    async fn load_user(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(repository_errors::user_store)
    }

    /// Reload `owner` and append `blog` to its list.
    async fn link(&self, owner: &UserId, blog: BlogId) -> Result<(), Error> {
        let Some(mut user) = self.load_user(owner).await? else {
            warn!(user_id = %owner, blog_id = %blog, "owner vanished before link");
            return Ok(());
        };
        user.link_blog(blog);
        self.users
            .update(&user)
            .await
            .map_err(repository_errors::user_store)
    }

    /// Reload `owner` and drop `blog` from its list.
    async fn unlink(&self, owner: &UserId, blog: BlogId) -> Result<(), Error> {
        let Some(mut user) = self.load_user(owner).await? else {
            warn!(user_id = %owner, blog_id = %blog, "owner vanished before unlink");
            return Ok(());
        };
        if !user.unlink_blog(&blog) {
            return Ok(());
        }
        self.users
            .update(&user)
            .await
            .map_err(repository_errors::user_store)
    }

    /// Owner requested by an update payload, or the current owner.
    async fn requested_owner(&self, current: &Blog, requested: Option<&str>) -> Result<UserId, Error> {
        let Some(raw) = requested else {
            return Ok(current.owner().clone());
        };
        let id = UserId::new(raw).map_err(|_| Error::malformed_id())?;
        if self.load_user(&id).await?.is_none() {
            return Err(Error::invalid_request(OWNER_NOT_FOUND_MESSAGE));
        }
        Ok(id)
    }

    async fn all_blogs(&self) -> Result<Vec<Blog>, Error> {
        self.blogs
            .list()
            .await
            .map_err(repository_errors::blog_store)
    }
}

#[async_trait]
impl<B, U> BlogsCommand for BlogService<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    async fn create(&self, identity: &RequestIdentity, draft: BlogDraft) -> Result<Blog, Error> {
        let owner = identity.require_user()?;
        let fields = validate(&draft)?;

        let blog = self
            .blogs
            .insert(NewBlog {
                fields,
                owner: owner.id().clone(),
            })
            .await
            .map_err(repository_errors::blog_store)?;
        self.link(owner.id(), blog.id()).await?;

        info!(blog_id = %blog.id(), user_id = %owner.id(), "blog created");
        Ok(blog)
    }

    async fn update(&self, id: &str, draft: BlogDraft) -> Result<Blog, Error> {
        let fields = validate(&draft)?;
        let id = parse_blog_id(id)?;

        let current = self
            .blogs
            .find_by_id(id)
            .await
            .map_err(repository_errors::blog_store)?
            .ok_or_else(|| Error::not_found(BLOG_NOT_FOUND_MESSAGE))?;
        let owner = self.requested_owner(&current, draft.user.as_deref()).await?;

        let updated = self
            .blogs
            .update(&current.replaced(fields, owner.clone()))
            .await
            .map_err(repository_errors::blog_store)?
            .ok_or_else(|| Error::not_found(BLOG_NOT_FOUND_MESSAGE))?;

        if !current.is_owned_by(&owner) {
            self.unlink(current.owner(), id).await?;
            self.link(&owner, id).await?;
            info!(blog_id = %id, from = %current.owner(), to = %owner, "blog reassigned");
        }
        Ok(updated)
    }

    async fn delete(&self, identity: &RequestIdentity, id: &str) -> Result<(), Error> {
        let caller = identity.require_user()?;
        let id = parse_blog_id(id)?;

        let Some(blog) = self
            .blogs
            .find_by_id(id)
            .await
            .map_err(repository_errors::blog_store)?
        else {
            return Ok(());
        };
        if !blog.is_owned_by(caller.id()) {
            warn!(blog_id = %id, user_id = %caller.id(), "delete refused: not the creator");
            return Err(Error::not_creator());
        }

        self.blogs
            .delete(id)
            .await
            .map_err(repository_errors::blog_store)?;
        self.unlink(caller.id(), id).await?;

        info!(blog_id = %id, user_id = %caller.id(), "blog deleted");
        Ok(())
    }
}

#[async_trait]
impl<B, U> BlogsQuery for BlogService<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    async fn list(&self) -> Result<Vec<BlogListing>, Error> {
        let blogs = self.all_blogs().await?;
        let owners: HashMap<UserId, OwnerSummary> = self
            .users
            .list()
            .await
            .map_err(repository_errors::user_store)?
            .iter()
            .map(|user| (user.id().clone(), owner_summary(user)))
            .collect();

        Ok(blogs
            .into_iter()
            .map(|blog| BlogListing {
                owner: owners.get(blog.owner()).cloned(),
                blog,
            })
            .collect())
    }

    async fn stats(&self) -> Result<BlogStats, Error> {
        let blogs = self.all_blogs().await?;
        Ok(BlogStats {
            total_likes: total_likes(&blogs),
            favorite_blog: favorite_blog(&blogs).cloned(),
            most_blogs: most_blogs(&blogs),
            most_likes: most_likes(&blogs),
        })
    }
}

#[cfg(test)]
#[path = "blog_service_tests.rs"]
mod tests;

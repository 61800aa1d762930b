//! Tests for the blog service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{BlogRepositoryError, MockBlogRepository, MockUserRepository};
use crate::domain::{CredentialHash, ErrorCode, NewUser, Username};

type Service = BlogService<MockBlogRepository, MockUserRepository>;

fn service(blogs: MockBlogRepository, users: MockUserRepository) -> Service {
    BlogService::new(Arc::new(blogs), Arc::new(users))
}

fn user(username: &str) -> User {
    NewUser {
        username: Username::new(username).expect("valid username"),
        name: None,
        credential_hash: CredentialHash::from_encoded("hash"),
    }
    .into_user(UserId::random())
}

fn draft() -> BlogDraft {
    BlogDraft {
        title: Some("Type wars".to_owned()),
        author: Some("Robert C. Martin".to_owned()),
        url: Some("http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html".to_owned()),
        likes: None,
        user: None,
    }
}

fn stored_blog(owner: &UserId, likes: u64) -> Blog {
    let mut raw = draft();
    raw.likes = Some(likes);
    NewBlog {
        fields: BlogFields::try_from_draft(&raw).expect("valid draft"),
        owner: owner.clone(),
    }
    .into_blog(BlogId::random())
}

#[fixture]
fn owner() -> User {
    user("mluukkai")
}

#[rstest]
#[tokio::test]
async fn create_without_identity_touches_no_store() {
    let mut blogs = MockBlogRepository::new();
    blogs.expect_insert().times(0);
    let mut users = MockUserRepository::new();
    users.expect_update().times(0);

    let err = service(blogs, users)
        .create(&RequestIdentity::anonymous(), draft())
        .await
        .expect_err("anonymous create");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
    assert_eq!(err.message(), "token missing or invalid");
}

#[rstest]
#[tokio::test]
async fn create_checks_identity_before_fields() {
    let err = service(MockBlogRepository::new(), MockUserRepository::new())
        .create(&RequestIdentity::anonymous(), BlogDraft::default())
        .await
        .expect_err("anonymous create");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
}

#[rstest]
#[case::title(|d: &mut BlogDraft| d.title = None, "title missing")]
#[case::author(|d: &mut BlogDraft| d.author = None, "author missing")]
#[case::url(|d: &mut BlogDraft| d.url = None, "url missing")]
#[tokio::test]
async fn create_rejects_missing_fields(
    owner: User,
    #[case] strip: fn(&mut BlogDraft),
    #[case] message: &str,
) {
    let mut blogs = MockBlogRepository::new();
    blogs.expect_insert().times(0);
    let mut payload = draft();
    strip(&mut payload);

    let err = service(blogs, MockUserRepository::new())
        .create(&RequestIdentity::authenticated(owner), payload)
        .await
        .expect_err("invalid payload");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), message);
}

#[rstest]
#[tokio::test]
async fn create_sets_owner_and_links_blog(owner: User) {
    let owner_id = owner.id().clone();
    let stored_owner = owner.clone();
    let mut blogs = MockBlogRepository::new();
    blogs
        .expect_insert()
        .times(1)
        .returning(|new| Ok(new.into_blog(BlogId::random())));
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored_owner)));
    users
        .expect_update()
        .withf(|updated| updated.blogs().len() == 1)
        .times(1)
        .return_once(|_| Ok(()));

    let blog = service(blogs, users)
        .create(&RequestIdentity::authenticated(owner), draft())
        .await
        .expect("created");

    assert!(blog.is_owned_by(&owner_id));
    assert_eq!(blog.likes(), 0);
}

#[rstest]
#[tokio::test]
async fn delete_by_non_owner_is_forbidden(owner: User) {
    let blog = stored_blog(owner.id(), 3);
    let intruder = user("intruder");
    let mut blogs = MockBlogRepository::new();
    blogs
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(blog)));
    blogs.expect_delete().times(0);
    let mut users = MockUserRepository::new();
    users.expect_update().times(0);

    let err = service(blogs, users)
        .delete(
            &RequestIdentity::authenticated(intruder),
            "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        )
        .await
        .expect_err("not the creator");

    assert_eq!(err.code(), ErrorCode::Forbidden);
    assert_eq!(err.message(), "a blog can be deleted only by its creator");
}

#[rstest]
#[tokio::test]
async fn delete_of_absent_blog_is_noop(owner: User) {
    let mut blogs = MockBlogRepository::new();
    blogs.expect_find_by_id().return_once(|_| Ok(None));
    blogs.expect_delete().times(0);

    service(blogs, MockUserRepository::new())
        .delete(
            &RequestIdentity::authenticated(owner),
            "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        )
        .await
        .expect("idempotent delete");
}

#[rstest]
#[tokio::test]
async fn delete_rejects_malformed_id_before_lookup(owner: User) {
    let mut blogs = MockBlogRepository::new();
    blogs.expect_find_by_id().times(0);

    let err = service(blogs, MockUserRepository::new())
        .delete(&RequestIdentity::authenticated(owner), "5a422a851b54a676234d17f7")
        .await
        .expect_err("malformed");

    assert_eq!(err, Error::malformed_id());
}

#[rstest]
#[tokio::test]
async fn delete_by_owner_removes_and_unlinks(mut owner: User) {
    let blog = stored_blog(owner.id(), 3);
    let blog_id = blog.id();
    owner.link_blog(blog_id);
    let stored_owner = owner.clone();
    let mut blogs = MockBlogRepository::new();
    blogs
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(blog)));
    blogs
        .expect_delete()
        .withf(move |id| *id == blog_id)
        .times(1)
        .return_once(|_| Ok(true));
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(stored_owner)));
    users
        .expect_update()
        .withf(|updated| updated.blogs().is_empty())
        .times(1)
        .return_once(|_| Ok(()));

    service(blogs, users)
        .delete(&RequestIdentity::authenticated(owner), &blog_id.to_string())
        .await
        .expect("deleted");
}

#[rstest]
#[tokio::test]
async fn update_validates_fields_before_parsing_id() {
    let mut blogs = MockBlogRepository::new();
    blogs.expect_find_by_id().times(0);
    let mut payload = draft();
    payload.url = None;

    let err = service(blogs, MockUserRepository::new())
        .update("not-an-id", payload)
        .await
        .expect_err("invalid payload");

    assert_eq!(err.message(), "url missing");
}

#[rstest]
#[tokio::test]
async fn update_of_absent_blog_is_not_found() {
    let mut blogs = MockBlogRepository::new();
    blogs.expect_find_by_id().return_once(|_| Ok(None));

    let err = service(blogs, MockUserRepository::new())
        .update("3fa85f64-5717-4562-b3fc-2c963f66afa6", draft())
        .await
        .expect_err("absent");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_reassigns_owner_and_moves_link(mut owner: User) {
    let blog = stored_blog(owner.id(), 1);
    let blog_id = blog.id();
    owner.link_blog(blog_id);
    let heir = user("heir");
    let heir_id = heir.id().clone();
    let owner_id = owner.id().clone();

    let mut blogs = MockBlogRepository::new();
    blogs
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(blog)));
    blogs
        .expect_update()
        .returning(|replaced| Ok(Some(replaced.clone())));

    let mut users = MockUserRepository::new();
    let (owner_for_lookup, heir_for_lookup) = (owner.clone(), heir.clone());
    users.expect_find_by_id().returning(move |id| {
        if id == owner_for_lookup.id() {
            Ok(Some(owner_for_lookup.clone()))
        } else {
            Ok(Some(heir_for_lookup.clone()))
        }
    });
    let (old_id, new_id) = (owner_id.clone(), heir_id.clone());
    users
        .expect_update()
        .withf(move |updated| updated.id() == &old_id && updated.blogs().is_empty())
        .times(1)
        .return_once(|_| Ok(()));
    users
        .expect_update()
        .withf(move |updated| updated.id() == &new_id && updated.owns(&blog_id))
        .times(1)
        .return_once(|_| Ok(()));

    let mut payload = draft();
    payload.likes = Some(9);
    payload.user = Some(heir_id.to_string());

    let updated = service(blogs, users)
        .update(&blog_id.to_string(), payload)
        .await
        .expect("updated");

    assert!(updated.is_owned_by(&heir_id));
    assert_eq!(updated.likes(), 9);
}

#[rstest]
#[tokio::test]
async fn update_rejects_unknown_owner(owner: User) {
    let blog = stored_blog(owner.id(), 1);
    let blog_id = blog.id();
    let mut blogs = MockBlogRepository::new();
    blogs
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(blog)));
    blogs.expect_update().times(0);
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().return_once(|_| Ok(None));

    let mut payload = draft();
    payload.user = Some(UserId::random().to_string());

    let err = service(blogs, users)
        .update(&blog_id.to_string(), payload)
        .await
        .expect_err("unknown owner");

    assert_eq!(err.message(), "user not found");
}

#[rstest]
#[tokio::test]
async fn list_populates_owners(owner: User) {
    let blog = stored_blog(owner.id(), 2);
    let orphan = stored_blog(&UserId::random(), 1);
    let mut blogs = MockBlogRepository::new();
    blogs
        .expect_list()
        .return_once(move || Ok(vec![blog, orphan]));
    let stored_owner = owner.clone();
    let mut users = MockUserRepository::new();
    users
        .expect_list()
        .return_once(move || Ok(vec![stored_owner]));

    let listing = service(blogs, users).list().await.expect("listed");

    assert_eq!(listing.len(), 2);
    let first_owner = listing.first().and_then(|entry| entry.owner.as_ref());
    assert_eq!(first_owner.map(|o| o.username.as_ref()), Some("mluukkai"));
    assert!(listing.get(1).is_some_and(|entry| entry.owner.is_none()));
}

#[rstest]
#[tokio::test]
async fn stats_aggregate_every_blog(owner: User) {
    let stored = vec![stored_blog(owner.id(), 2), stored_blog(owner.id(), 5)];
    let mut blogs = MockBlogRepository::new();
    blogs.expect_list().return_once(move || Ok(stored));

    let stats = service(blogs, MockUserRepository::new())
        .stats()
        .await
        .expect("stats");

    assert_eq!(stats.total_likes, 7);
    assert_eq!(stats.favorite_blog.map(|b| b.likes()), Some(5));
    assert_eq!(stats.most_blogs.map(|c| c.blogs), Some(2));
}

#[rstest]
#[tokio::test]
async fn store_outage_surfaces_as_service_unavailable() {
    let mut blogs = MockBlogRepository::new();
    blogs
        .expect_list()
        .return_once(|| Err(BlogRepositoryError::connection("refused")));

    let err = service(blogs, MockUserRepository::new())
        .stats()
        .await
        .expect_err("outage");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}

//! End-to-end behaviour of the blog endpoints over the in-memory stack.

mod support;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use bloglist::domain::ports::{BlogRepository, UserRepository};
use bloglist::domain::{CredentialHash, User, UserId, Username};
use bloglist::middleware::TRACE_ID_HEADER;
use bloglist::test_support::InMemoryStack;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use support::json_body;

#[fixture]
fn stack() -> InMemoryStack {
    InMemoryStack::new().expect("in-memory stack")
}

fn sample_blog() -> Value {
    json!({
        "title": "Canonical string reduction",
        "author": "Edsger W. Dijkstra",
        "url": "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html"
    })
}

/// Register `username` and return its bearer token and id.
async fn signed_in<S, B>(app: &S, username: &str) -> (String, String)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let register = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({"username": username, "name": "Tester", "password": "sekret"}))
        .to_request();
    let response = actix_test::call_service(app, register).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = json_body(response).await["id"]
        .as_str()
        .expect("id")
        .to_owned();

    let login = actix_test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"username": username, "password": "sekret"}))
        .to_request();
    let response = actix_test::call_service(app, login).await;
    assert_eq!(response.status(), StatusCode::OK);
    let token = json_body(response).await["token"]
        .as_str()
        .expect("token")
        .to_owned();
    (token, id)
}

async fn create_blog<S, B>(app: &S, token: &str, payload: Value) -> ServiceResponse<B>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = actix_test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(payload)
        .to_request();
    actix_test::call_service(app, request).await
}

#[rstest]
#[actix_web::test]
async fn create_without_token_leaves_store_unchanged(stack: InMemoryStack) {
    let app = actix_test::init_service(stack.app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/blogs")
        .set_json(sample_blog())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["error"], "token missing or invalid");
    assert!(stack.blogs.list().await.expect("list").is_empty());
}

#[rstest]
#[actix_web::test]
async fn create_assigns_owner_and_links_blog(stack: InMemoryStack) {
    let app = actix_test::init_service(stack.app()).await;
    let (token, user_id) = signed_in(&app, "root").await;

    let response = create_blog(&app, &token, sample_blog()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["user"], user_id.as_str());
    assert_eq!(created["likes"], 0);

    let users = stack.users.list().await.expect("users");
    let owner = users.first().expect("registered user");
    let linked: Vec<String> = owner.blogs().iter().map(ToString::to_string).collect();
    assert_eq!(linked, vec![created["id"].as_str().expect("id").to_owned()]);

    let listing = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/blogs").to_request(),
    )
    .await;
    let listing = json_body(listing).await;
    assert_eq!(listing[0]["user"]["username"], "root");
    assert_eq!(listing[0]["user"]["id"], user_id.as_str());
}

#[rstest]
#[case(json!({"author": "a", "url": "u"}), "title missing")]
#[case(json!({"title": "t", "author": "a"}), "url missing")]
#[case(json!({"title": "  ", "author": "a", "url": "u"}), "title missing")]
#[actix_web::test]
async fn create_rejects_incomplete_blogs(
    stack: InMemoryStack,
    #[case] payload: Value,
    #[case] message: &str,
) {
    let app = actix_test::init_service(stack.app()).await;
    let (token, _) = signed_in(&app, "root").await;

    let response = create_blog(&app, &token, payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], message);
    assert!(stack.blogs.list().await.expect("list").is_empty());
}

#[rstest]
#[actix_web::test]
async fn token_for_unknown_user_is_treated_as_anonymous(stack: InMemoryStack) {
    let app = actix_test::init_service(stack.app()).await;
    let ghost = User::new(
        UserId::random(),
        Username::new("ghost").expect("valid username"),
        None,
        CredentialHash::from_encoded("$argon2id$unused"),
        Vec::new(),
    );
    let token = stack.token_for(&ghost).expect("token");

    let response = create_blog(&app, &token, sample_blog()).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["error"], "token missing or invalid");
}

#[rstest]
#[actix_web::test]
async fn only_the_creator_may_delete(stack: InMemoryStack) {
    let app = actix_test::init_service(stack.app()).await;
    let (owner_token, _) = signed_in(&app, "owner").await;
    let (other_token, _) = signed_in(&app, "intruder").await;
    let created = json_body(create_blog(&app, &owner_token, sample_blog()).await).await;
    let uri = format!("/api/blogs/{}", created["id"].as_str().expect("id"));

    let forbidden = actix_test::TestRequest::delete()
        .uri(&uri)
        .insert_header(("Authorization", format!("Bearer {other_token}")))
        .to_request();
    let response = actix_test::call_service(&app, forbidden).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(response).await["error"],
        "a blog can be deleted only by its creator"
    );
    assert_eq!(stack.blogs.list().await.expect("list").len(), 1);

    let anonymous = actix_test::TestRequest::delete().uri(&uri).to_request();
    let response = actix_test::call_service(&app, anonymous).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(stack.blogs.list().await.expect("list").len(), 1);
}

#[rstest]
#[actix_web::test]
async fn owner_delete_is_idempotent_and_unlinks(stack: InMemoryStack) {
    let app = actix_test::init_service(stack.app()).await;
    let (token, _) = signed_in(&app, "root").await;
    let created = json_body(create_blog(&app, &token, sample_blog()).await).await;
    let uri = format!("/api/blogs/{}", created["id"].as_str().expect("id"));

    for _ in 0..2 {
        let request = actix_test::TestRequest::delete()
            .uri(&uri)
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    assert!(stack.blogs.list().await.expect("list").is_empty());
    let users = stack.users.list().await.expect("users");
    assert!(users.iter().all(|user| user.blogs().is_empty()));
}

#[rstest]
#[actix_web::test]
async fn update_replaces_fields_without_a_token(stack: InMemoryStack) {
    let app = actix_test::init_service(stack.app()).await;
    let (token, user_id) = signed_in(&app, "root").await;
    let created = json_body(create_blog(&app, &token, sample_blog()).await).await;
    let uri = format!("/api/blogs/{}", created["id"].as_str().expect("id"));

    let mut payload = sample_blog();
    payload["likes"] = json!(12);
    let request = actix_test::TestRequest::put()
        .uri(&uri)
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["likes"], 12);
    assert_eq!(updated["user"], user_id.as_str());
}

#[rstest]
#[actix_web::test]
async fn update_accepts_any_spelling_of_an_owner_id(stack: InMemoryStack) {
    let app = actix_test::init_service(stack.app()).await;
    let (token, _) = signed_in(&app, "root").await;
    let (_, other_id) = signed_in(&app, "other").await;
    let created = json_body(create_blog(&app, &token, sample_blog()).await).await;
    let uri = format!("/api/blogs/{}", created["id"].as_str().expect("id"));

    let mut payload = sample_blog();
    payload["user"] = json!(other_id.to_uppercase());
    let request = actix_test::TestRequest::put()
        .uri(&uri)
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["user"], other_id.as_str());
}

#[rstest]
#[case("not-a-uuid", json!({"title": "t", "author": "a", "url": "u"}), StatusCode::BAD_REQUEST, "malformatted id")]
#[case("00000000-0000-4000-8000-000000000000", json!({"title": "t", "author": "a", "url": "u"}), StatusCode::NOT_FOUND, "blog not found")]
#[case("not-a-uuid", json!({"author": "a", "url": "u"}), StatusCode::BAD_REQUEST, "title missing")]
#[actix_web::test]
async fn update_failures(
    stack: InMemoryStack,
    #[case] id: &str,
    #[case] payload: Value,
    #[case] status: StatusCode,
    #[case] message: &str,
) {
    let app = actix_test::init_service(stack.app()).await;

    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/blogs/{id}"))
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), status);
    assert_eq!(json_body(response).await["error"], message);
}

#[rstest]
#[actix_web::test]
async fn malformed_delete_id_is_bad_request(stack: InMemoryStack) {
    let app = actix_test::init_service(stack.app()).await;
    let (token, _) = signed_in(&app, "root").await;

    let request = actix_test::TestRequest::delete()
        .uri("/api/blogs/12345")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "malformatted id");
}

#[rstest]
#[actix_web::test]
async fn stats_aggregate_stored_blogs(stack: InMemoryStack) {
    let app = actix_test::init_service(stack.app()).await;
    let (token, _) = signed_in(&app, "root").await;
    for (title, author, likes) in [
        ("React patterns", "Michael Chan", 7),
        ("Canonical string reduction", "Edsger W. Dijkstra", 12),
        ("First class tests", "Robert C. Martin", 10),
        ("Type wars", "Robert C. Martin", 2),
    ] {
        let payload = json!({"title": title, "author": author, "url": "http://example.com", "likes": likes});
        let response = create_blog(&app, &token, payload).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/blogs/stats")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let stats = json_body(response).await;
    assert_eq!(stats["totalLikes"], 31);
    assert_eq!(stats["favoriteBlog"]["title"], "Canonical string reduction");
    assert_eq!(
        stats["mostBlogs"],
        json!({"author": "Robert C. Martin", "blogs": 2})
    );
    assert_eq!(
        stats["mostLikes"],
        json!({"author": "Edsger W. Dijkstra", "likes": 12})
    );
}

#[rstest]
#[actix_web::test]
async fn stats_saturate_instead_of_overflowing(stack: InMemoryStack) {
    let app = actix_test::init_service(stack.app()).await;
    let (token, _) = signed_in(&app, "root").await;
    for title in ["Huge", "Huger"] {
        let payload = json!({"title": title, "author": "Big", "url": "http://example.com", "likes": u64::MAX});
        let response = create_blog(&app, &token, payload).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/blogs/stats")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let stats = json_body(response).await;
    assert_eq!(stats["totalLikes"], u64::MAX);
    assert_eq!(stats["mostLikes"], json!({"author": "Big", "likes": u64::MAX}));
}

#[rstest]
#[actix_web::test]
async fn empty_store_stats_are_zeroed(stack: InMemoryStack) {
    let app = actix_test::init_service(stack.app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/blogs/stats")
            .to_request(),
    )
    .await;

    let stats = json_body(response).await;
    assert_eq!(stats["totalLikes"], 0);
    assert!(stats["favoriteBlog"].is_null());
    assert!(stats["mostBlogs"].is_null());
    assert!(stats["mostLikes"].is_null());
}

#[rstest]
#[actix_web::test]
async fn responses_carry_a_trace_id(stack: InMemoryStack) {
    let app = actix_test::init_service(stack.app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/blogs").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
}

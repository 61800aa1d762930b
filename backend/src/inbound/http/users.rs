//! Users API handlers.
//!
//! ```text
//! POST /api/login {"username":"root","password":"sekret"}
//! POST /api/users {"username":"root","name":"Superuser","password":"sekret"}
//! GET  /api/users
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::UserListing;
use crate::domain::{Blog, Error, LoginCredentials, LoginGrant, Registration, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /api/login`.
///
/// Missing fields deserialise as empty strings so they surface as the same
/// validation failure as blank ones.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "root")]
    pub username: String,
    #[serde(default)]
    #[schema(example = "sekret")]
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token to send as `Authorization: Bearer <token>`.
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

impl From<LoginGrant> for LoginResponse {
    fn from(grant: LoginGrant) -> Self {
        Self {
            token: grant.token,
            username: grant.username.to_string(),
            name: grant.name,
        }
    }
}

/// Registration request body for `POST /api/users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[schema(example = "root", min_length = 3)]
    pub username: Option<String>,
    #[schema(example = "Superuser")]
    pub name: Option<String>,
    #[schema(example = "sekret", min_length = 3)]
    pub password: Option<String>,
}

/// Blog fields populated into user listings.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserBlogResponse {
    pub id: String,
    pub title: String,
    pub url: String,
    pub author: String,
}

impl From<&Blog> for UserBlogResponse {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id().to_string(),
            title: blog.title().to_owned(),
            url: blog.url().to_owned(),
            author: blog.author().to_owned(),
        }
    }
}

/// Public view of a user. The credential hash never leaves the domain.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub blogs: Vec<UserBlogResponse>,
}

impl UserResponse {
    fn new(user: &User, blogs: &[Blog]) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            name: user.name().map(str::to_owned),
            blogs: blogs.iter().map(UserBlogResponse::from).collect(),
        }
    }
}

impl From<UserListing> for UserResponse {
    fn from(listing: UserListing) -> Self {
        Self::new(&listing.user, &listing.blogs)
    }
}

/// Exchange credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 401, description = "Invalid username or password", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let LoginRequest { username, password } = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(&username, &password)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let grant = state.login.login(&credentials).await?;
    Ok(web::Json(LoginResponse::from(grant)))
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request or username taken", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "registerUser",
    security([])
)]
#[post("/users")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let RegisterRequest {
        username,
        name,
        password,
    } = payload.into_inner();
    let registration =
        Registration::try_from_parts(username.as_deref(), name.as_deref(), password.as_deref())
            .map_err(|err| Error::invalid_request(err.to_string()))?;
    let user = state.users.register(&registration).await?;
    Ok(HttpResponse::Created().json(UserResponse::new(&user, &[])))
}

/// List every user with their blogs populated.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bloglist::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 503, description = "Store unavailable", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let listings = state.users_query.list().await?;
    Ok(web::Json(listings.into_iter().map(UserResponse::from).collect()))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;

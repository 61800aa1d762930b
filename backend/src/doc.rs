//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api` endpoint, the health probes, the
//! request and response payloads, and the bearer token security scheme. The
//! document is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::blogs_dto::{
    AuthorBlogsResponse, AuthorLikesResponse, BlogListItem, BlogRequest, BlogResponse,
    BlogStatsResponse, OwnerResponse,
};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::users::{
    LoginRequest, LoginResponse, RegisterRequest, UserBlogResponse, UserResponse,
};

/// Name of the bearer security scheme in the generated document.
pub const BEARER_SCHEME: &str = "BearerToken";

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token issued by POST /api/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Bloglist API",
        description = "Blog link sharing with token-authenticated writes and aggregate statistics."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::blogs::list_blogs,
        crate::inbound::http::blogs::blog_stats,
        crate::inbound::http::blogs::create_blog,
        crate::inbound::http::blogs::update_blog,
        crate::inbound::http::blogs::delete_blog,
        crate::inbound::http::users::login,
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorBody,
        BlogRequest,
        BlogResponse,
        BlogListItem,
        OwnerResponse,
        BlogStatsResponse,
        AuthorBlogsResponse,
        AuthorLikesResponse,
        LoginRequest,
        LoginResponse,
        RegisterRequest,
        UserResponse,
        UserBlogResponse,
    )),
    tags(
        (name = "blogs", description = "Blog listing, mutation and statistics"),
        (name = "users", description = "Registration, login and user listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

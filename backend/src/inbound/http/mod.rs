//! HTTP inbound adapter exposing REST endpoints.

pub mod blogs;
pub mod blogs_dto;
pub mod error;
pub mod health;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

use actix_web::web;

/// Register every `/api` endpoint and the JSON extractor configuration.
///
/// Mount under a scope wrapped with [`crate::middleware::ResolveIdentity`]
/// so handlers see the caller's identity.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use bloglist::inbound::http::api_routes;
///
/// let app = App::new().service(web::scope("/api").configure(api_routes));
/// ```
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(users::login)
        .service(users::list_users)
        .service(users::register_user)
        .service(blogs::list_blogs)
        .service(blogs::blog_stats)
        .service(blogs::create_blog)
        .service(blogs::update_blog)
        .service(blogs::delete_blog);
}

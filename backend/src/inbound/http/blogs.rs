//! Blog API handlers.
//!
//! ```text
//! GET    /api/blogs
//! GET    /api/blogs/stats
//! POST   /api/blogs           {"title":"Type wars","author":"Robert C. Martin","url":"http://..."}
//! PUT    /api/blogs/{id}      {"title":"Type wars","author":"Robert C. Martin","url":"http://...","likes":3}
//! DELETE /api/blogs/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::RequestIdentity;
use crate::inbound::http::ApiResult;
use crate::inbound::http::blogs_dto::{BlogListItem, BlogRequest, BlogResponse, BlogStatsResponse};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// List every blog with its owner populated.
#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "Blogs", body = [BlogListItem]),
        (status = 503, description = "Store unavailable", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["blogs"],
    operation_id = "listBlogs",
    security([])
)]
#[get("/blogs")]
pub async fn list_blogs(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BlogListItem>>> {
    let listings = state.blogs_query.list().await?;
    Ok(web::Json(listings.into_iter().map(BlogListItem::from).collect()))
}

/// Aggregates across every stored blog.
#[utoipa::path(
    get,
    path = "/api/blogs/stats",
    responses(
        (status = 200, description = "Blog statistics", body = BlogStatsResponse),
        (status = 503, description = "Store unavailable", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["blogs"],
    operation_id = "blogStats",
    security([])
)]
#[get("/blogs/stats")]
pub async fn blog_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<BlogStatsResponse>> {
    let stats = state.blogs_query.stats().await?;
    Ok(web::Json(BlogStatsResponse::from(stats)))
}

/// Create a blog owned by the caller.
#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = BlogRequest,
    responses(
        (status = 201, description = "Blog created", body = BlogResponse),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 401, description = "Token missing or invalid", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["blogs"],
    operation_id = "createBlog"
)]
#[post("/blogs")]
pub async fn create_blog(
    state: web::Data<HttpState>,
    identity: RequestIdentity,
    payload: web::Json<BlogRequest>,
) -> ApiResult<HttpResponse> {
    let blog = state
        .blogs
        .create(&identity, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(BlogResponse::from(&blog)))
}

/// Replace a blog's fields.
///
/// No identity is required; `user` in the body reassigns ownership.
#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog identifier")),
    request_body = BlogRequest,
    responses(
        (status = 200, description = "Blog updated", body = BlogResponse),
        (status = 400, description = "Invalid request or malformed id", body = ErrorBody),
        (status = 404, description = "Blog not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["blogs"],
    operation_id = "updateBlog",
    security([])
)]
#[put("/blogs/{id}")]
pub async fn update_blog(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<BlogRequest>,
) -> ApiResult<web::Json<BlogResponse>> {
    let blog = state
        .blogs
        .update(path.as_str(), payload.into_inner().into())
        .await?;
    Ok(web::Json(BlogResponse::from(&blog)))
}

/// Delete a blog owned by the caller.
///
/// Deleting an absent blog succeeds.
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog identifier")),
    responses(
        (status = 204, description = "Blog deleted or already absent"),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 401, description = "Token missing or caller is not the creator", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["blogs"],
    operation_id = "deleteBlog"
)]
#[delete("/blogs/{id}")]
pub async fn delete_blog(
    state: web::Data<HttpState>,
    identity: RequestIdentity,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.blogs.delete(&identity, path.as_str()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "blogs_tests.rs"]
mod tests;

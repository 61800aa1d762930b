//! Request identity middleware.
//!
//! Reads an `Authorization: bearer <token>` header once per request, asks the
//! [`IdentityResolver`] port to verify it, and stores the resulting
//! [`RequestIdentity`] in request extensions. Handlers take the identity as
//! an extractor argument; requests without a bearer credential proceed as
//! anonymous. A credential that fails verification short-circuits with the
//! translated `invalid token` error and the handler never runs.

use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{
    Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready,
};
use actix_web::http::header::{AUTHORIZATION, HeaderMap};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{LocalBoxFuture, Ready, ready};

use crate::domain::RequestIdentity;
use crate::domain::ports::IdentityResolver;

const BEARER_PREFIX: &str = "bearer ";

/// Extract the bearer credential from `headers`.
///
/// The scheme is matched case-insensitively. Other schemes, or no header at
/// all, yield `None`.
///
/// # Examples
/// ```
/// use actix_web::http::header::{AUTHORIZATION, HeaderMap, HeaderValue};
/// use bloglist::middleware::identity::bearer_token;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
/// assert_eq!(bearer_token(&headers), Some("abc.def"));
/// ```
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_at_checked(BEARER_PREFIX.len())?;
    scheme
        .eq_ignore_ascii_case(BEARER_PREFIX)
        .then_some(token.trim())
}

/// Middleware factory attaching a [`RequestIdentity`] to each request.
#[derive(Clone)]
pub struct ResolveIdentity {
    resolver: Arc<dyn IdentityResolver>,
}

impl ResolveIdentity {
    /// Resolve identities through `resolver`.
    pub fn new(resolver: Arc<dyn IdentityResolver>) -> Self {
        Self { resolver }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ResolveIdentity
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ResolveIdentityMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ResolveIdentityMiddleware {
            service: Rc::new(service),
            resolver: Arc::clone(&self.resolver),
        }))
    }
}

/// Service wrapper produced by [`ResolveIdentity`].
pub struct ResolveIdentityMiddleware<S> {
    service: Rc<S>,
    resolver: Arc<dyn IdentityResolver>,
}

impl<S, B> Service<ServiceRequest> for ResolveIdentityMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let resolver = Arc::clone(&self.resolver);
        Box::pin(async move {
            if let Some(token) = bearer_token(req.headers()).map(str::to_owned) {
                match resolver.resolve(&token).await {
                    Ok(identity) => {
                        req.extensions_mut().insert(identity);
                    }
                    Err(err) => return Ok(req.error_response(err).map_into_right_body()),
                }
            }
            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

impl FromRequest for RequestIdentity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    /// Identity stored by [`ResolveIdentity`], or anonymous when none is.
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(req
            .extensions()
            .get::<Self>()
            .cloned()
            .unwrap_or_default()))
    }
}

//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{
    IdentityResolver, MockBlogsCommand, MockBlogsQuery, MockIdentityResolver, MockLoginService,
    MockUsersCommand, MockUsersQuery,
};
use crate::inbound::http::api_routes;
use crate::inbound::http::state::HttpState;
use crate::middleware::ResolveIdentity;

/// Mocked driving ports; tests set expectations on the fields they exercise.
#[derive(Default)]
pub struct MockPorts {
    pub login: MockLoginService,
    pub blogs: MockBlogsCommand,
    pub blogs_query: MockBlogsQuery,
    pub users: MockUsersCommand,
    pub users_query: MockUsersQuery,
    pub resolver: MockIdentityResolver,
}

/// Build the `/api` scope over mocked ports.
///
/// Bearer tokens are resolved through `ports.resolver`, so requests without
/// an `Authorization` header never touch it.
pub fn test_app(
    ports: MockPorts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let MockPorts {
        login,
        blogs,
        blogs_query,
        users,
        users_query,
        resolver,
    } = ports;
    let state = HttpState {
        login: Arc::new(login),
        blogs: Arc::new(blogs),
        blogs_query: Arc::new(blogs_query),
        users: Arc::new(users),
        users_query: Arc::new(users_query),
    };
    let resolver: Arc<dyn IdentityResolver> = Arc::new(resolver);

    App::new().app_data(web::Data::new(state)).service(
        web::scope("/api")
            .wrap(ResolveIdentity::new(resolver))
            .configure(api_routes),
    )
}

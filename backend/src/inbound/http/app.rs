//! Application assembly: routes, middleware and fallbacks.
//!
//! Every response, including preflights and unmatched paths, passes through
//! the CORS headers and the request trace middleware.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpRequest, HttpResponse, guard, web};
use serde_json::json;
use tracing::debug;

use crate::inbound::http::health::{api_info, health};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::middleware::{Trace, cors_headers};

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Answer any `OPTIONS` request with `200` and an empty body.
async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Fallback for paths and methods no route claims.
async fn endpoint_not_found(req: HttpRequest) -> HttpResponse {
    debug!(method = %req.method(), path = req.path(), "no route matched");
    HttpResponse::NotFound().json(json!({
        "success": false,
        "message": "Endpoint not found",
        "path": req.path(),
    }))
}

/// Build the Actix application around shared handler state.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use backend::inbound::http::app::build_app;
/// use backend::inbound::http::state::HttpState;
/// use backend::outbound::InMemoryUserStore;
/// use mockable::DefaultClock;
///
/// let state = HttpState::new(Arc::new(InMemoryUserStore::new()), Arc::new(DefaultClock));
/// let _app = build_app(web::Data::new(state));
/// ```
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(state)
        .wrap(cors_headers())
        .wrap(Trace)
        .service(
            web::resource("/{tail:.*}")
                .guard(guard::Options())
                .to(preflight),
        )
        .service(health)
        .service(api_info)
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user)
        .default_service(web::to(endpoint_not_found));

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

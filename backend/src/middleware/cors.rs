//! CORS header injection.
//!
//! Every response, including errors and the not-found fallback, carries a
//! permissive cross-origin policy. Preflight requests are answered by the
//! router in [`crate::inbound::http::app`].

use actix_web::middleware::DefaultHeaders;

/// Origins allowed to call the API.
pub const ALLOW_ORIGIN: &str = "*";
/// Methods advertised to browsers.
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
/// Request headers browsers may send.
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Build the middleware that stamps CORS headers onto every response.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::middleware::cors_headers;
///
/// let app = App::new().wrap(cors_headers());
/// ```
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", ALLOW_ORIGIN))
        .add(("Access-Control-Allow-Methods", ALLOW_METHODS))
        .add(("Access-Control-Allow-Headers", ALLOW_HEADERS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    #[rstest]
    #[case("/")]
    #[case("/unrouted")]
    #[actix_web::test]
    async fn stamps_cors_headers(#[case] uri: &str) {
        let app = test::init_service(
            App::new()
                .wrap(cors_headers())
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let headers = res.headers();
        assert_eq!(
            headers
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some(ALLOW_ORIGIN)
        );
        assert_eq!(
            headers
                .get("access-control-allow-methods")
                .and_then(|v| v.to_str().ok()),
            Some(ALLOW_METHODS)
        );
        assert_eq!(
            headers
                .get("access-control-allow-headers")
                .and_then(|v| v.to_str().ok()),
            Some(ALLOW_HEADERS)
        );
    }
}

mod envelope;

use crate::{utils::panic, StateTrait};
use axum::{
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, AUTHORIZATION,
            CONTENT_TYPE,
        },
        HeaderName, HeaderValue, Method,
    },
    middleware, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

const ALLOWED_HEADERS: &str = "Content-Type, Authorization, true";
const ALLOWED_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS";

pub fn middlewares<S: StateTrait>(state: S, router: Router<S>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, HeaderName::from_static("true")]);

    // The web client expects these on every response, not only on preflight.
    let allow_headers = SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    let allow_methods = SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );

    let middlewares = ServiceBuilder::new()
        .layer(CatchPanicLayer::custom(panic::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::map_response(envelope::error_envelope))
        .layer(allow_headers)
        .layer(allow_methods)
        .layer(cors_layer)
        .into_inner();

    router.layer(middlewares).with_state(state)
}

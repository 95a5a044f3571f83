use crate::Error;
use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};

/// Gives bodyless or plain text error responses, e.g. the router's 405 or an
/// extractor rejection, the same JSON envelope the handlers return.
pub async fn error_envelope(response: Response) -> Response {
    if is_json(&response) {
        return response;
    }

    let Some(error) = Error::from_status(response.status()) else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    let body = error.into_response().into_body();

    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
    );

    Response::from_parts(parts, body)
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"))
}

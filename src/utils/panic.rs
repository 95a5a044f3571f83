use crate::error;
use axum::response::{IntoResponse, Response};
use std::{any::Any, panic};

/// Routes panic messages into the log instead of stderr.
pub fn set_hook() {
    panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|location| format!("{}:{}", location.file(), location.line()))
            .unwrap_or_default();

        error!(%location, "panicked: {}", payload_message(info.payload()));
    }));
}

/// Response for a panic caught inside a handler.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    error!("handler panicked: {}", payload_message(payload.as_ref()));
    error::INTERNAL.into_response()
}

fn payload_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}

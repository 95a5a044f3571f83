mod constants;

pub use constants::*;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use sea_orm::DbErr;
use serde_json::json;

/// Error returned by the handlers.
///
/// Rendered as `{"success": false, "error": <status>, "message": <message>}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Error {
    status: StatusCode,
    message: &'static str,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    const fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// The envelope for a status the api reports, if there is one.
    pub fn from_status(status: StatusCode) -> Option<Self> {
        match status {
            StatusCode::BAD_REQUEST => Some(BAD_REQUEST),
            StatusCode::NOT_FOUND => Some(RESOURCE_NOT_FOUND),
            StatusCode::METHOD_NOT_ALLOWED => Some(METHOD_NOT_ALLOWED),
            StatusCode::UNPROCESSABLE_ENTITY => Some(UNPROCESSABLE),
            StatusCode::INTERNAL_SERVER_ERROR => Some(INTERNAL),
            _ => None,
        }
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(128).writer();

        serde_json::to_writer(
            &mut buf,
            &json!({
                "success": false,
                "error": self.status.as_u16(),
                "message": self.message,
            }),
        )
        .expect("failed to serialize error");

        buf.into_inner().freeze()
    }
}

impl IntoResponse for Error {
    #[inline]
    fn into_response(self) -> Response {
        let mut res = (self.status, self.to_bytes()).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

impl From<DbErr> for Error {
    #[inline]
    fn from(error: DbErr) -> Self {
        error!("database error: {:?}", error);
        INTERNAL
    }
}

impl From<serde_json::Error> for Error {
    #[inline]
    fn from(error: serde_json::Error) -> Self {
        error!("failed to serialize json: {:?}", error);
        INTERNAL
    }
}

macro_rules! const_error {
    ($name:ident, $status:ident, $message:literal) => {
        pub const $name: $crate::error::Error =
            $crate::error::Error::new(::axum::http::StatusCode::$status, $message);
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;

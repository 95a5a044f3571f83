#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{db, response::*, App, Seed};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use http::StatusCode;
pub use serde_json::{json, Value};
pub use trivia_backend::error;

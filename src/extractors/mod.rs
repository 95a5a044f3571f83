mod json;
mod path;

pub use json::*;
pub use path::*;

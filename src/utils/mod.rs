mod de;
mod pagination;
pub mod panic;
mod signal;

pub use de::*;
pub use pagination::*;
pub use signal::*;

pub mod api;
pub mod base;
pub mod logging;

pub use api::*;
pub use base::*;
pub use logging::*;

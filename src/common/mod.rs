pub mod errors;
pub mod http;
pub mod logger;
pub mod types;

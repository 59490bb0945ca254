pub mod classifier;
pub mod reference;
pub mod resolver;

pub use classifier::classify;
pub use reference::{ReferenceKind, SourceReference};
pub use resolver::TitleResolver;

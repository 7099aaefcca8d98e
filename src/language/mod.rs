// Vocabulary of the structural tokens found in a captured transcript

mod error;
mod sequence;
mod types;

// Re-export all public symbols
pub use error::*;
pub use sequence::*;
pub use types::*;

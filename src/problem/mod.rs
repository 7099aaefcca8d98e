// Presenting matching failures to humans

mod format;
mod messages;

// Re-export all public symbols
pub use format::*;
pub use messages::*;

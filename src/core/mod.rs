// Public modules
pub mod error;
pub mod git;
pub mod pipeline;
pub mod revisions;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use pipeline::RunReport;

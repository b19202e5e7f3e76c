//! Configuration utility types.

mod error;
mod field;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::{FieldPath, fields};

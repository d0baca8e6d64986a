// ============================================================================
// Notation Module
// Suffix and illion naming tables
// ============================================================================

pub mod config;
mod tables;

pub use config::NotationConfig;
pub use tables::{exponent_of, NotationTables};

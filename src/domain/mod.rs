// ============================================================================
// Domain Models Module
// Value types host applications store and display
// ============================================================================

pub mod large_number;

pub use large_number::LargeNumber;

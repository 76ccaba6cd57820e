//! Shared helpers for dashboard plugins: human-readable byte and duration
//! formatting, and small filesystem utilities.
pub mod bytes;
pub mod fs;

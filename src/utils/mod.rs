//! Utility modules for the tour generator.

pub mod fs;
pub mod log;
pub mod slug;

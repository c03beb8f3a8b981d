//! Preference store infrastructure module
//!
//! The persistent store is [`crate::infrastructure::XdgConfigStore`]; this
//! module holds the process-local one.

mod memory;

pub use memory::MemoryPreferences;

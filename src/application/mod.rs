//! Application layer - Use cases and port interfaces
//!
//! Contains the insert-from-clipboard workflow and the trait definitions
//! for the external systems it talks to.

pub mod insert;
pub mod ports;

// Re-export use cases
pub use insert::{
    AttachedFile, InsertCallbacks, InsertError, InsertFromClipboardUseCase, InsertInput,
    InsertOutput,
};

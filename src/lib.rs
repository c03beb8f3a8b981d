//! paste-attach - attach clipboard content to a compose session
//!
//! This crate reads the clipboard, picks the best representation of each
//! entry, optionally re-encodes images into a preferred format, and stores
//! the result as an attachment.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Content types, type selection, configuration, and errors
//! - **Application**: The insert use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard, image codecs, config file, attachment directory)
//! - **CLI**: Command-line interface, argument parsing, and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

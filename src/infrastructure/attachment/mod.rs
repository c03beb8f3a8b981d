//! Attachment sink infrastructure module

mod directory;

pub use directory::DirectoryAttachmentSink;

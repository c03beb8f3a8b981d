//! Clipboard content: types, priorities, selection and output files

pub mod content_type;
pub mod output_file;
pub mod priority;
pub mod selection;

pub use content_type::{mime, ContentType, PREFERABLE_IMAGE_TYPES};
pub use output_file::OutputFile;
pub use priority::{allowed_types, InsertMode};
pub use selection::select_type;

//! Format capability port interface

use crate::domain::content::ContentType;

/// Port answering whether the runtime can materialize a content type as a file
pub trait FormatSupport: Send + Sync {
    fn supports(&self, content_type: &ContentType) -> bool;
}

impl FormatSupport for Box<dyn FormatSupport> {
    fn supports(&self, content_type: &ContentType) -> bool {
        self.as_ref().supports(content_type)
    }
}

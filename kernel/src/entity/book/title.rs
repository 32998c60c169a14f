use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(Report::new(KernelError::IncompleteData).attach_printable("empty title"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct BookAuthor(String);

impl BookAuthor {
    pub fn new(author: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let author = author.into();
        let trimmed = author.trim();
        if trimmed.is_empty() {
            return Err(Report::new(KernelError::IncompleteData).attach_printable("empty author"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

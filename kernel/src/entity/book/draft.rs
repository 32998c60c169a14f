use destructure::Destructure;
use vodca::References;

use crate::entity::{BookAuthor, BookCategory, BookFormat, BookTitle};
use crate::KernelError;

/// A validated book that has not been stored yet, so it carries no id.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookDraft {
    title: BookTitle,
    author: BookAuthor,
    category: Option<BookCategory>,
    format: Option<BookFormat>,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        format: impl Into<String>,
    ) -> error_stack::Result<Self, KernelError> {
        Ok(Self {
            title: BookTitle::new(title)?,
            author: BookAuthor::new(author)?,
            category: BookCategory::new(category),
            format: BookFormat::new(format),
        })
    }
}

mod author;
mod category;
mod draft;
mod format;
mod id;
mod title;

pub use self::{author::*, category::*, draft::*, format::*, id::*, title::*};
use destructure::Destructure;
use vodca::References;

use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    category: Option<BookCategory>,
    format: Option<BookFormat>,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        category: Option<BookCategory>,
        format: Option<BookFormat>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            category,
            format,
        }
    }

    /// Validates raw input into a stored book. The id is checked before the
    /// text fields.
    pub fn create(
        id: impl Into<i64>,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        format: impl Into<String>,
    ) -> error_stack::Result<Self, KernelError> {
        let id = BookId::new(id)?;
        let draft = BookDraft::new(title, author, category, format)?;
        Ok(Self::from_draft(id, draft))
    }

    pub fn assign(id: impl Into<i64>, draft: BookDraft) -> error_stack::Result<Self, KernelError> {
        Ok(Self::from_draft(BookId::new(id)?, draft))
    }

    fn from_draft(id: BookId, draft: BookDraft) -> Self {
        let DestructBookDraft {
            title,
            author,
            category,
            format,
        } = draft.into_destruct();
        Self::new(id, title, author, category, format)
    }
}

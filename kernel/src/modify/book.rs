use crate::entity::{BookDraft, BookId};
use crate::KernelError;

pub trait BookModifier: 'static + Sync + Send {
    /// Stores the draft under a freshly assigned id and returns that id.
    fn add(&self, draft: BookDraft) -> error_stack::Result<BookId, KernelError>;
    fn delete(&self, book_id: &BookId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send {
    type BookModifier: BookModifier;
    fn book_modifier(&self) -> &Self::BookModifier;
}

use crate::entity::{Book, BookId};
use crate::KernelError;

pub trait BookQuery: 'static + Sync + Send {
    /// Every stored book, in storage order.
    fn list(&self) -> error_stack::Result<Vec<Book>, KernelError>;
    /// Case-insensitive substring match against title or author. A blank term
    /// matches nothing.
    fn search(&self, term: &str) -> error_stack::Result<Vec<Book>, KernelError>;
    fn find_by_id(&self, id: &BookId) -> error_stack::Result<Option<Book>, KernelError>;
    /// The id the next successful [`BookModifier::add`](crate::modify::BookModifier::add)
    /// will assign.
    fn peek_next_id(&self) -> error_stack::Result<BookId, KernelError>;
}

pub trait DependOnBookQuery: 'static + Sync + Send {
    type BookQuery: BookQuery;
    fn book_query(&self) -> &Self::BookQuery;
}

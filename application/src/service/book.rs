use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{BookDraft, BookId};
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, GetBookDto, SearchBookDto};

pub trait AddBookService: 'static + Sync + Send + DependOnBookModifier {
    /// Validates the input and hands it to storage, which picks the id.
    fn add_book(&self, dto: CreateBookDto) -> error_stack::Result<i64, KernelError> {
        let draft = BookDraft::new(dto.title, dto.author, dto.category, dto.format)?;
        let id = self.book_modifier().add(draft)?;
        Ok(id.into())
    }
}

impl<T> AddBookService for T where T: DependOnBookModifier {}

pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let id = BookId::new(dto.id)?;
        let book = self.book_query().find_by_id(&id)?;
        Ok(book.map(BookDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

pub trait ListBookService: 'static + Sync + Send + DependOnBookQuery {
    fn list_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let books = self.book_query().list()?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }

    fn next_book_id(&self) -> error_stack::Result<i64, KernelError> {
        let id = self.book_query().peek_next_id()?;
        Ok(id.into())
    }
}

impl<T> ListBookService for T where T: DependOnBookQuery {}

pub trait SearchBookService: 'static + Sync + Send + DependOnBookQuery {
    fn search_books(&self, dto: SearchBookDto) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let books = self.book_query().search(&dto.term)?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> SearchBookService for T where T: DependOnBookQuery {}

pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let id = BookId::new(dto.id)?;
        self.book_modifier().delete(&id)
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}

use std::fmt::{Display, Formatter};

use application::transfer::BookDto;

use crate::controller::Exhaust;

#[derive(Debug)]
pub struct CreatedBookResponse {
    id: i64,
}

impl Display for CreatedBookResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Book added with id {}.", self.id)
    }
}

#[derive(Debug)]
pub struct DeletedBookResponse;

impl Display for DeletedBookResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Book deleted.")
    }
}

#[derive(Debug)]
pub struct BookResponse {
    id: i64,
    title: String,
    author: String,
    category: Option<String>,
    format: Option<String>,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            author: value.author,
            category: value.category,
            format: value.format,
        }
    }
}

impl Display for BookResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} by {}", self.id, self.title, self.author)?;
        match (&self.category, &self.format) {
            (Some(category), Some(format)) => write!(f, " ({category}, {format})"),
            (Some(detail), None) | (None, Some(detail)) => write!(f, " ({detail})"),
            (None, None) => Ok(()),
        }
    }
}

#[derive(Debug)]
pub struct BookListResponse(Vec<BookResponse>);

impl Display for BookListResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No books found.");
        }
        for (index, book) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{book}")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct FoundBookResponse(Option<BookResponse>);

impl Display for FoundBookResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(book) => write!(f, "{book}"),
            None => write!(f, "No book with that id."),
        }
    }
}

pub struct BookPresenter;

impl Exhaust<i64> for BookPresenter {
    type To = CreatedBookResponse;
    fn emit(&self, input: i64) -> Self::To {
        CreatedBookResponse { id: input }
    }
}

impl Exhaust<()> for BookPresenter {
    type To = DeletedBookResponse;
    fn emit(&self, _input: ()) -> Self::To {
        DeletedBookResponse
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = BookListResponse;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        BookListResponse(input.into_iter().map(BookResponse::from).collect())
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = FoundBookResponse;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        FoundBookResponse(input.map(BookResponse::from))
    }
}

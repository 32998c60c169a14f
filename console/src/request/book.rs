use application::transfer::{CreateBookDto, DeleteBookDto, GetBookDto, SearchBookDto};

use crate::controller::Intake;

#[derive(Debug)]
pub struct AddBookRequest {
    title: String,
    author: String,
    category: String,
    format: String,
}

impl AddBookRequest {
    pub fn new(title: String, author: String, category: String, format: String) -> Self {
        Self {
            title,
            author,
            category,
            format,
        }
    }
}

#[derive(Debug)]
pub struct SearchBookRequest {
    term: String,
}

impl SearchBookRequest {
    pub fn new(term: String) -> Self {
        Self { term }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: i64,
}

impl DeleteBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: i64,
}

impl GetBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl Intake<AddBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: AddBookRequest) -> Self::To {
        CreateBookDto {
            title: input.title,
            author: input.author,
            category: input.category,
            format: input.format,
        }
    }
}

impl Intake<SearchBookRequest> for BookTransformer {
    type To = SearchBookDto;
    fn emit(&self, input: SearchBookRequest) -> Self::To {
        SearchBookDto { term: input.term }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

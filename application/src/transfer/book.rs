use kernel::prelude::entity::{Book, DestructBook};

/// Owned copy of a stored book. Changing it never touches the catalog.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    pub format: Option<String>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            category,
            format,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            category: category.map(String::from),
            format: format.map(String::from),
        }
    }
}

pub struct GetBookDto {
    pub id: i64,
}

pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub category: String,
    pub format: String,
}

pub struct SearchBookDto {
    pub term: String,
}

pub struct DeleteBookDto {
    pub id: i64,
}

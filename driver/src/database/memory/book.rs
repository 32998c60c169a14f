use std::sync::RwLock;

use error_stack::{Report, ResultExt};

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookDraft, BookId};
use kernel::KernelError;

use crate::error::ConvertError;

/// Process-lifetime book storage. Writers are serialized by the lock and
/// readers always see a consistent snapshot.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    store: RwLock<BookStore>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookQuery for InMemoryBookRepository {
    fn list(&self) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(self.store.read().convert_error()?.books.clone())
    }

    fn search(&self, term: &str) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(self.store.read().convert_error()?.search(term))
    }

    fn find_by_id(&self, id: &BookId) -> error_stack::Result<Option<Book>, KernelError> {
        let store = self.store.read().convert_error()?;
        Ok(store.books.iter().find(|book| book.id() == id).cloned())
    }

    fn peek_next_id(&self) -> error_stack::Result<BookId, KernelError> {
        BookId::new(self.store.read().convert_error()?.next_id)
    }
}

impl BookModifier for InMemoryBookRepository {
    fn add(&self, draft: BookDraft) -> error_stack::Result<BookId, KernelError> {
        self.store.write().convert_error()?.insert(draft)
    }

    fn delete(&self, book_id: &BookId) -> error_stack::Result<(), KernelError> {
        self.store.write().convert_error()?.remove(book_id)
    }
}

#[derive(Debug)]
struct BookStore {
    books: Vec<Book>,
    next_id: i64,
}

impl Default for BookStore {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }
}

impl BookStore {
    fn insert(&mut self, draft: BookDraft) -> error_stack::Result<BookId, KernelError> {
        let next_id = self.next_id;
        let book = Book::assign(next_id, draft)
            .attach_printable_lazy(|| format!("Failed to register book as #{next_id}"))?;
        let id = *book.id();
        self.books.push(book);
        self.next_id += 1;
        Ok(id)
    }

    // Stable removal: survivors keep their insertion order.
    fn remove(&mut self, book_id: &BookId) -> error_stack::Result<(), KernelError> {
        let position = self
            .books
            .iter()
            .position(|book| book.id() == book_id)
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("No book stored with id {book_id}"))
            })?;
        self.books.remove(position);
        Ok(())
    }

    fn search(&self, term: &str) -> Vec<Book> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.books
            .iter()
            .filter(|book| {
                book.title().as_ref().to_lowercase().contains(&needle)
                    || book.author().as_ref().to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{BookDraft, BookId};
    use kernel::KernelError;

    use crate::database::memory::book::InMemoryBookRepository;

    fn draft(title: &str, author: &str) -> BookDraft {
        BookDraft::new(title, author, "", "").unwrap()
    }

    fn titles(repository: &InMemoryBookRepository) -> Vec<String> {
        repository
            .list()
            .unwrap()
            .into_iter()
            .map(|book| book.title().as_ref().clone())
            .collect()
    }

    #[test]
    fn test() -> error_stack::Result<(), KernelError> {
        let repository = InMemoryBookRepository::new();
        assert!(repository.list()?.is_empty());
        assert_eq!(repository.peek_next_id()?, BookId::new(1)?);

        let id = repository.add(draft("Dune", "Frank Herbert"))?;
        assert_eq!(id, BookId::new(1)?);
        assert_eq!(repository.peek_next_id()?, BookId::new(2)?);

        let found = repository.find_by_id(&id)?.unwrap();
        assert_eq!(found.title().as_ref(), "Dune");
        assert_eq!(repository.list()?, vec![found]);

        repository.delete(&id)?;
        assert!(repository.find_by_id(&id)?.is_none());
        assert!(repository.list()?.is_empty());
        Ok(())
    }

    #[test]
    fn ids_are_never_reused() -> error_stack::Result<(), KernelError> {
        let repository = InMemoryBookRepository::new();
        let first = repository.add(draft("A", "a"))?;
        let second = repository.add(draft("B", "b"))?;
        repository.delete(&second)?;
        repository.delete(&first)?;

        let third = repository.add(draft("C", "c"))?;
        assert_eq!(i64::from(third), 3);
        assert_eq!(i64::from(repository.peek_next_id()?), 4);
        Ok(())
    }

    #[test]
    fn peek_does_not_advance_counter() -> error_stack::Result<(), KernelError> {
        let repository = InMemoryBookRepository::new();
        repository.peek_next_id()?;
        repository.peek_next_id()?;
        assert_eq!(i64::from(repository.add(draft("A", "a"))?), 1);
        Ok(())
    }

    #[test]
    fn delete_missing_book_is_not_found() -> error_stack::Result<(), KernelError> {
        let repository = InMemoryBookRepository::new();
        repository.add(draft("A", "a"))?;

        let report = repository.delete(&BookId::new(99)?).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::NotFound);
        assert_eq!(repository.list()?.len(), 1);
        Ok(())
    }

    #[test]
    fn delete_keeps_insertion_order() -> error_stack::Result<(), KernelError> {
        let repository = InMemoryBookRepository::new();
        for title in ["A", "B", "C", "D"] {
            repository.add(draft(title, "author"))?;
        }
        repository.delete(&BookId::new(2)?)?;
        assert_eq!(titles(&repository), vec!["A", "C", "D"]);
        Ok(())
    }

    #[test]
    fn search_matches_title_or_author_ignoring_case() -> error_stack::Result<(), KernelError> {
        let repository = InMemoryBookRepository::new();
        repository.add(draft("Cien años de soledad", "García Márquez"))?;
        repository.add(draft("Dune", "Frank Herbert"))?;
        repository.add(draft("El amor en los tiempos del cólera", "GABRIEL GARCÍA MÁRQUEZ"))?;

        let found = repository.search("garcía")?;
        let ids: Vec<i64> = found.iter().map(|book| i64::from(*book.id())).collect();
        assert_eq!(ids, vec![1, 3]);

        let found = repository.search("DUNE")?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].author().as_ref(), "Frank Herbert");

        assert!(repository.search("tolkien")?.is_empty());
        Ok(())
    }

    #[test]
    fn blank_search_matches_nothing() -> error_stack::Result<(), KernelError> {
        let repository = InMemoryBookRepository::new();
        repository.add(draft("Dune", "Frank Herbert"))?;
        assert!(repository.search("")?.is_empty());
        assert!(repository.search("   ")?.is_empty());
        Ok(())
    }

    #[test]
    fn listed_books_are_detached_copies() -> error_stack::Result<(), KernelError> {
        let repository = InMemoryBookRepository::new();
        repository.add(draft("Dune", "Frank Herbert"))?;

        let mut listed = repository.list()?;
        listed.clear();
        let mut searched = repository.search("dune")?;
        searched.pop();

        assert_eq!(titles(&repository), vec!["Dune"]);
        Ok(())
    }

    #[test]
    fn concurrent_adds_get_distinct_ids() -> error_stack::Result<(), KernelError> {
        let repository = std::sync::Arc::new(InMemoryBookRepository::new());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let repository = repository.clone();
                std::thread::spawn(move || repository.add(draft(&format!("Book {n}"), "author")))
            })
            .collect();
        let mut ids = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().map(i64::from))
            .collect::<Result<Vec<_>, _>>()?;
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        Ok(())
    }
}

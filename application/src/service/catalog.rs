use std::sync::Arc;

use error_stack::Report;

use kernel::interface::query::DependOnBookQuery;
use kernel::interface::repository::BookRepository;
use kernel::interface::update::DependOnBookModifier;
use kernel::KernelError;

/// Entry point for catalog operations. Owns nothing but a handle to the
/// repository it was given; every book operation comes from the service
/// traits in this module.
pub struct CatalogService<R> {
    repository: Arc<R>,
}

impl<R: BookRepository> CatalogService<R> {
    pub fn new(repository: Option<Arc<R>>) -> error_stack::Result<Self, KernelError> {
        let repository = repository.ok_or_else(|| {
            Report::new(KernelError::RepositoryNotReady)
                .attach_printable("Catalog service needs a book repository")
        })?;
        Ok(Self { repository })
    }
}

impl<R> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: BookRepository> DependOnBookQuery for CatalogService<R> {
    type BookQuery = R;
    fn book_query(&self) -> &Self::BookQuery {
        &self.repository
    }
}

impl<R: BookRepository> DependOnBookModifier for CatalogService<R> {
    type BookModifier = R;
    fn book_modifier(&self) -> &Self::BookModifier {
        &self.repository
    }
}

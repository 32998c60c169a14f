use std::sync::Arc;

use application::service::CatalogService;
use driver::database::InMemoryBookRepository;
use kernel::KernelError;
use vodca::References;

#[derive(References)]
pub struct Handler {
    catalog: CatalogService<InMemoryBookRepository>,
}

impl Handler {
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let repository = Arc::new(InMemoryBookRepository::new());
        let catalog = CatalogService::new(Some(repository))?;

        Ok(Self { catalog })
    }
}

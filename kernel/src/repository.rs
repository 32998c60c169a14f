use crate::modify::BookModifier;
use crate::query::BookQuery;

/// Full storage capability for books. Any backend implementing both halves
/// qualifies.
pub trait BookRepository: BookQuery + BookModifier {}

impl<T> BookRepository for T where T: BookQuery + BookModifier {}

use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct BookCategory(String);

impl BookCategory {
    /// Blank input means the book has no category.
    pub fn new(category: impl Into<String>) -> Option<Self> {
        let category = category.into();
        let trimmed = category.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }
}

use vodca::{AsRefln, Fromln};

/// File format of the edition, e.g. `EPUB` or `PDF`. Free text.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct BookFormat(String);

impl BookFormat {
    pub fn new(format: impl Into<String>) -> Option<Self> {
        let format = format.into();
        let trimmed = format.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }
}

use std::fmt::Display;

use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct BookId(i64);

impl BookId {
    pub fn new(id: impl Into<i64>) -> error_stack::Result<Self, KernelError> {
        let id = id.into();
        if id <= 0 {
            return Err(Report::new(KernelError::InvalidId)
                .attach_printable(format!("received book id {id}")));
        }
        Ok(Self(id))
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use crate::entity::BookId;
    use crate::KernelError;

    #[test]
    fn rejects_non_positive_ids() {
        for id in [0, -1, -5, i64::MIN] {
            let report = BookId::new(id).unwrap_err();
            assert_eq!(report.current_context(), &KernelError::InvalidId);
        }
    }

    #[test]
    fn keeps_positive_ids() {
        let id = BookId::new(42).unwrap();
        assert_eq!(i64::from(id), 42);
        assert_eq!(id.to_string(), "42");
    }
}

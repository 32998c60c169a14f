use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    InvalidId,
    IncompleteData,
    NotFound,
    RepositoryNotReady,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::InvalidId => write!(f, "Book id must be a positive number"),
            KernelError::IncompleteData => write!(f, "Book title and author are required"),
            KernelError::NotFound => write!(f, "Book not found"),
            KernelError::RepositoryNotReady => write!(f, "Book repository is not ready"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

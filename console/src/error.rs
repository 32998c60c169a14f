use std::fmt::{Display, Formatter};
use std::process::{ExitCode, Termination};

use error_stack::Report;
use kernel::KernelError;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// One-line rendering of a failed operation for the menu user.
#[derive(Debug)]
pub struct ErrorMessage(Report<KernelError>);

impl From<Report<KernelError>> for ErrorMessage {
    fn from(e: Report<KernelError>) -> Self {
        ErrorMessage(e)
    }
}

impl ErrorMessage {
    pub fn report(&self) -> &Report<KernelError> {
        &self.0
    }
}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self.0.current_context() {
            KernelError::InvalidId => "Error: the id must be a positive number.",
            KernelError::IncompleteData => "Error: title and author cannot be empty.",
            KernelError::NotFound => "Error: no book exists with that id.",
            KernelError::RepositoryNotReady => "Error: the catalog is not available.",
            KernelError::Internal => "Error: something went wrong, see the log for details.",
        };
        write!(f, "{message}")
    }
}

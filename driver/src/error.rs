use std::sync::LockResult;

use error_stack::Report;

use kernel::KernelError;

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<G> ConvertError for LockResult<G> {
    type Ok = G;
    fn convert_error(self) -> error_stack::Result<G, KernelError> {
        self.map_err(|_| {
            Report::new(KernelError::Internal).attach_printable("book store lock was poisoned")
        })
    }
}

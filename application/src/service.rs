mod book;
mod catalog;

pub use self::{book::*, catalog::*};

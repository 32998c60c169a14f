pub use crate::error::*;

mod entity;
mod error;
mod modify;
mod query;
mod repository;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod query {
        pub use crate::query::*;
    }
    pub mod update {
        pub use crate::modify::*;
    }
    pub mod repository {
        pub use crate::repository::*;
    }
}

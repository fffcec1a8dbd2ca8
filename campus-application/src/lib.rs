#[macro_use]
extern crate log;

mod change_approval_state;
mod create_place;
mod create_route;
mod delete_place;
mod delete_route;
mod update_place;
mod update_route;

pub mod prelude {
    pub use super::{
        change_approval_state::*, create_place::*, create_route::*, delete_place::*,
        delete_route::*, update_place::*, update_route::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use campus_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use campus_db_sqlite::Connections;
}

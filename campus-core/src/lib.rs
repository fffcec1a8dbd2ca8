pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use campus_entities::{
        activity::*, approval::*, campus::*, catalog::*, history::*, id::*, location::*,
        place::*, route::*, time::*,
    };
}

pub use repositories::Error as RepoError;

pub use campus_core::{repositories, usecases};

pub mod entities {
    pub use campus_core::entities::*;
}

pub mod prelude {
    pub use super::{entities::*, repositories::*};
}

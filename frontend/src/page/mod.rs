mod prelude {
    pub use crate::component::prelude::*;
    pub use crate::component::link::AppLink;
}

pub mod about;
pub mod coin;
pub mod home;
pub mod not_found;

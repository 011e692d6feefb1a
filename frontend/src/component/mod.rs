pub(crate) mod prelude {
    pub use yew::prelude::*;
    pub use coinview_common::*;
    pub use std::rc::Rc;
    pub use crate::route::{use_navigator, use_route};
}

pub mod chart;
pub mod link;
pub mod nav;

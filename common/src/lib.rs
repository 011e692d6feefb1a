pub mod error;
pub mod location;
pub mod params;
pub mod pattern;
pub mod router;
pub mod routes;

pub use error::*;
pub use location::Location;
pub use params::Params;
pub use pattern::{Pattern, Segment};
pub use router::*;
pub use routes::View;

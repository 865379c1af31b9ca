pub mod constants;
pub mod creature;
pub mod curve;
pub mod error;
pub mod interp;
pub mod params;
pub mod pose;
pub mod rotator;
pub mod steering;
pub mod swim_cycle;

pub use creature::*;
pub use curve::*;
pub use error::*;
pub use interp::*;
pub use params::*;
pub use pose::*;
pub use rotator::*;
pub use steering::*;
pub use swim_cycle::*;

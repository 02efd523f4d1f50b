mod abst;
mod types;
mod misc;

pub use abst::*;
pub use types::*;
pub use misc::*;

pub mod algo;
pub mod util;
pub mod tex;

pub use algo::{Mult, intersection_multiplicity, intersection_multiplicity_at_origin};

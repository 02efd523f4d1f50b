mod mult;
mod inter_mult;

pub use mult::Mult;
pub use inter_mult::*;

mod elem;
mod add_mon;
mod add_grp;
mod mon;
mod ring;
mod euc_ring;
mod field;

pub use elem::*;
pub use add_mon::*;
pub use add_grp::*;
pub use mon::*;
pub use ring::*;
pub use euc_ring::*;
pub use field::*;

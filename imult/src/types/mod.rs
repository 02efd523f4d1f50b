mod ratio;
mod err;
mod curve;

pub use ratio::Ratio;
pub use err::CurveError;
pub use curve::AffineCurve;

use num_bigint::BigInt;

pub type Q = Ratio<BigInt>;
pub type QCurve = AffineCurve<Q>;

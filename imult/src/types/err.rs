use derive_more::Display;

#[derive(Clone, PartialEq, Eq, Debug, Display)]
pub enum CurveError { 
    #[display("not divisible by {var}^{n} (multiplicity of {var} is {mult})")]
    NotDivisible { var: char, n: usize, mult: usize },

    #[display("malformed coefficient table: row {row} has {len} entries, expected {}", row + 1)]
    Malformed { row: usize, len: usize },
}

impl std::error::Error for CurveError {}

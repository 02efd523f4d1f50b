use std::ops::{Add, AddAssign};
use derive_more::Display;

// The value of an intersection multiplicity: a non-negative integer, 
// or infinity when the curves share a component through the point.
// `Finite(_) < Infinite` in the derived order.

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Display)]
pub enum Mult { 
    #[display("{_0}")]
    Finite(usize),

    #[display("∞")]
    Infinite
}

impl Mult { 
    pub fn is_finite(&self) -> bool { 
        matches!(self, Mult::Finite(_))
    }

    pub fn is_infinite(&self) -> bool { 
        !self.is_finite()
    }

    pub fn finite(&self) -> Option<usize> { 
        match self { 
            Mult::Finite(n) => Some(*n),
            Mult::Infinite  => None
        }
    }
}

impl Default for Mult { 
    fn default() -> Self {
        Mult::Finite(0)
    }
}

impl From<usize> for Mult { 
    fn from(n: usize) -> Self {
        Mult::Finite(n)
    }
}

impl AddAssign<usize> for Mult { 
    fn add_assign(&mut self, k: usize) {
        if let Mult::Finite(n) = self { 
            *n += k
        }
    }
}

impl Add<usize> for Mult { 
    type Output = Mult;
    fn add(mut self, k: usize) -> Mult {
        self += k;
        self
    }
}

impl Add<Mult> for Mult { 
    type Output = Mult;
    fn add(self, m: Mult) -> Mult {
        match m { 
            Mult::Finite(k) => self + k,
            Mult::Infinite  => Mult::Infinite
        }
    }
}

// k + ∞ = ∞

impl Add<Mult> for usize { 
    type Output = Mult;
    fn add(self, m: Mult) -> Mult {
        m + self
    }
}

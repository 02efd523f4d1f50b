use std::fmt::{Display, Debug};
use std::str::FromStr;
use std::cmp;
use std::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign, DivAssign, Rem, RemAssign};
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;
use crate::{Elem, AddMon, AddMonOps, AddGrp, AddGrpOps, Mon, MonOps, Ring, RingOps, EucRing, EucRingOps, Field, FieldOps, Integer, IntOps};

// `Ratio<T>` : exact fractions p/q over an integer type `T`. 
// Always stored reduced, with normalized (positive) denominator.

#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(
    into = "(T, T)", 
    try_from = "(T, T)",
    bound(
        serialize = "T: serde::Serialize + Clone", 
        deserialize = "T: serde::Deserialize<'de> + EucRing, for<'x> &'x T: EucRingOps<T>"
    )
))]
pub struct Ratio<T> {
    numer: T,
    denom: T,
}

impl<T> Ratio<T> {
    #[inline]
    const fn new_raw(numer: T, denom: T) -> Ratio<T> {
        Ratio { numer, denom }
    }

    #[inline]
    pub const fn numer(&self) -> &T {
        &self.numer
    }

    #[inline]
    pub const fn denom(&self) -> &T {
        &self.denom
    }

    pub fn into_pair(self) -> (T, T) { 
        (self.numer, self.denom)
    }
}

impl<T> Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    pub fn new(numer: T, denom: T) -> Ratio<T> {
        assert!(!denom.is_zero(), "zero denominator");

        let mut r = Ratio::new_raw(numer, denom);
        r.reduce();
        r
    }

    pub fn from_numer(a: T) -> Self {
        Self::new_raw(a, T::one())
    }

    pub fn is_numer(&self) -> bool { 
        self.denom.is_one()
    }

    // divides out the gcd, and moves the sign of the denominator to the numerator.
    fn reduce(&mut self) {
        if self.numer.is_zero() {
            self.denom = T::one();
            return
        }

        let u = self.denom.normalizing_unit();
        if !u.is_one() { 
            self.numer *= &u;
            self.denom *= &u;
        }

        let g = T::gcd(&self.numer, &self.denom);
        if !g.is_one() {
            self.numer /= &g;
            self.denom /= &g;
        }
    }

    // a/b ∘ c/d = (a·(l/b) ∘ c·(l/d)) / l, where l = lcm(b, d).
    fn merge<F>(&mut self, rhs: &Self, op: F)
    where F: Fn(&mut T, T) {
        if rhs.is_zero() { 
            return
        }

        let l = T::lcm(&self.denom, &rhs.denom);
        let mut numer = &self.numer * (&l / &self.denom);
        op(&mut numer, &rhs.numer * (&l / &rhs.denom));

        *self = Self::new(numer, l);
    }
}

impl<T> From<i32> for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn from(i: i32) -> Self {
        Self::from_numer(T::from(i))
    }
}

impl<T> TryFrom<(T, T)> for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    type Error = String;

    fn try_from(pair: (T, T)) -> Result<Self, Self::Error> {
        let (p, q) = pair;
        if q.is_zero() { 
            Err(format!("zero denominator: {p}/{q}"))
        } else { 
            Ok(Self::new(p, q))
        }
    }
}

impl<T> From<Ratio<T>> for (T, T) { 
    fn from(r: Ratio<T>) -> Self {
        r.into_pair()
    }
}

impl<T> FromStr for Ratio<T>
where T: EucRing + FromStr, for<'x> &'x T: EucRingOps<T> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(a) = s.parse::<T>() {
            return Ok(Self::from_numer(a))
        } 
        
        let r = regex::Regex::new(r"^(.+)/(.+)$").map_err(|e| e.to_string())?;
        let Some(c) = r.captures(s) else { 
            return Err(format!("cannot parse string: '{s}'"))
        };

        match (c[1].trim().parse::<T>(), c[2].trim().parse::<T>()) { 
            (Ok(a), Ok(b)) => Self::try_from((a, b)),
            _ => Err(format!("cannot parse string: '{s}'"))
        }
    }
}

impl<T> Default for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T> Display for Ratio<T>
where T: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let q = self.denom.to_string();
        if q == "1" { 
            write!(f, "{}", self.numer)
        } else { 
            write!(f, "{}/{q}", self.numer)
        }
    }
}

impl<T> Debug for Ratio<T>
where T: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<T> Zero for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn zero() -> Self {
        Self::from_numer(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T> One for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn one() -> Self {
        Self::from_numer(T::one())
    }

    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

#[auto_ops]
impl<T> AddAssign<&Ratio<T>> for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn add_assign(&mut self, rhs: &Ratio<T>) {
        self.merge(rhs, |a, b| *a += b)
    }
}

#[auto_ops]
impl<T> SubAssign<&Ratio<T>> for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn sub_assign(&mut self, rhs: &Ratio<T>) {
        self.merge(rhs, |a, b| *a -= b)
    }
}

impl<T> Neg for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        let (p, q) = self.into_pair();
        Ratio::new_raw(-p, q)
    }
}

impl<T> Neg for &Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    type Output = Ratio<T>;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

// (a/b)(c/d) = (a/g · c/h) / (b/h · d/g), where g = gcd(a, d), h = gcd(c, b).
// Both factors are already reduced, so the result is too.

#[auto_ops]
impl<T> MulAssign<&Ratio<T>> for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn mul_assign(&mut self, rhs: &Ratio<T>) {
        if self.is_zero() || rhs.is_one() { 
            return
        } 
        if rhs.is_zero() { 
            self.set_zero();
            return
        }

        let g = T::gcd(&self.numer, &rhs.denom);
        let h = T::gcd(&rhs.numer, &self.denom);

        self.numer = (&self.numer / &g) * (&rhs.numer / &h);
        self.denom = (&self.denom / &h) * (&rhs.denom / &g);
    }
}

#[auto_ops]
impl<T> DivAssign<&Ratio<T>> for Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn div_assign(&mut self, rhs: &Ratio<T>) {
        match rhs.inv() { 
            Some(r) => *self *= r,
            None => panic!("division by zero")
        }
    }
}

// Every non-zero element divides, so the remainder is always 0.

#[auto_ops]
impl<'a, 'b, T> Rem<&'b Ratio<T>> for &'a Ratio<T>
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    type Output = Ratio<T>;
    fn rem(self, rhs: &'b Ratio<T>) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");
        Ratio::zero()
    }
}

macro_rules! impl_alg_ops {
    ($($trait:ident),*) => { $(
        impl<T> $trait for Ratio<T>
        where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

        impl<T> $trait<Ratio<T>> for &Ratio<T>
        where T: EucRing, for<'x> &'x T: EucRingOps<T> {}
    )* };
}

impl_alg_ops!(AddMonOps, AddGrpOps, MonOps, RingOps, EucRingOps, FieldOps);

impl<T> Elem for Ratio<T> 
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn math_symbol() -> String {
        let t = T::math_symbol();
        if &t == "Z" { 
            String::from("Q")
        } else { 
            format!("Frac({t})")
        }
    }
}

impl<T> Mon for Ratio<T> 
where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

impl<T> AddMon for Ratio<T> 
where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

impl<T> AddGrp for Ratio<T> 
where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

impl<T> Ring for Ratio<T> 
where T: EucRing, for<'x> &'x T: EucRingOps<T> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() { 
            None
        } else { 
            let inv = Self::new(self.denom.clone(), self.numer.clone());
            Some(inv)
        }
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }

    fn normalizing_unit(&self) -> Self {
        self.inv().unwrap_or_else(Self::one)
    }
}

impl<T> EucRing for Ratio<T> 
where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

impl<T> Field for Ratio<T> 
where T: EucRing, for<'x> &'x T: EucRingOps<T> {}

impl<T> Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    pub fn is_negative(&self) -> bool { 
        self.numer.is_negative()
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() { 
            -self
        } else { 
            self.clone()
        }
    }
}

// The denominators are positive, so p/q < r/s iff ps < rq. 

impl<T> Ord for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        let l = &self.numer * &other.denom;
        let r = &other.numer * &self.denom;
        l.cmp(&r)
    }
}

impl<T> PartialOrd for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(feature = "tex")]
mod tex { 
    use crate::tex::TeX;
    use super::*;

    impl<T> TeX for Ratio<T>
    where T: Integer + TeX, for<'x> &'x T: IntOps<T> {
        fn tex_math_symbol() -> String {
            String::from("\\mathbb{Q}")
        }

        fn tex_string(&self) -> String {
            if self.is_numer() { 
                return self.numer.tex_string()
            }
            let (sign, p) = if self.is_negative() { 
                ("-", -&self.numer)
            } else { 
                ("", self.numer.clone())
            };
            format!("{sign}\\frac{{{}}}{{{}}}", p.tex_string(), self.denom.tex_string())
        }
    }
}

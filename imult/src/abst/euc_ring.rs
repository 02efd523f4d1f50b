use std::ops::{Div, DivAssign, Rem, RemAssign};
use crate::{Ring, RingOps};

// Euclidean Rings

pub trait EucRingOps<T = Self>: 
    RingOps<T> + 
    Div<T, Output = T> +
    for<'a> Div<&'a T, Output = T> +
    Rem<T, Output = T> +
    for<'a> Rem<&'a T, Output = T>
{}

pub trait EucRing: 
    Ring + 
    EucRingOps + 
    DivAssign +
    for<'a> DivAssign<&'a Self> +
    RemAssign + 
    for<'a> RemAssign<&'a Self>
where 
    for<'a> &'a Self: EucRingOps<Self>,
{
    fn divides(&self, y: &Self) -> bool { 
        !self.is_zero() && (y % self).is_zero()
    }

    fn gcd(x: &Self, y: &Self) -> Self {
        if x.is_zero() && y.is_zero() { return Self::zero() }

        let (mut x, mut y) = (x.clone(), y.clone());

        while !y.is_zero() {
            let r = &x % &y;
            (x, y) = (y, r);
        }

        let u = x.normalizing_unit();

        match u.is_one() { 
            true  => x,
            false => x * u
        }
    }

    fn lcm(x: &Self, y: &Self) -> Self { 
        let g = Self::gcd(x, y);
        x * (y / g)
    }
}

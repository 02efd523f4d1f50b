use crate::{EucRing, EucRingOps};

// Fields. Coefficients of an `AffineCurve` live here. 

pub trait FieldOps<T = Self>: 
    EucRingOps<T>
{}

pub trait Field: 
    EucRing + 
    FieldOps
where 
    for<'a> &'a Self: FieldOps<Self> 
{}

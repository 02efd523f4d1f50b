use std::fmt::{Debug, Display};

pub trait ElemBase: 
    Default + 
    PartialEq + 
    Eq + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

impl<T> ElemBase for T where T: 
    Default + 
    PartialEq + 
    Eq + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

// Coefficient domains and curves are elements of some algebraic structure, 
// named by `math_symbol` (e.g. "Z", "Q", "Q[x, y]").

pub trait Elem: ElemBase { 
    fn math_symbol() -> String;
}

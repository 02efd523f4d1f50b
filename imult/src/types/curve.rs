use std::fmt::{Display, Debug};
use std::ops::{Add, Sub, Mul, AddAssign, SubAssign, MulAssign, Neg};
use itertools::Itertools;
use num_traits::{Zero, One, Pow};
use auto_impl_ops::auto_ops;

use crate::{Elem, AddMon, AddMonOps, AddGrp, AddGrpOps, Mon, MonOps, Ring, RingOps, Field, FieldOps, CurveError};
use crate::util::format::{lc, fmt_mono2};

// `AffineCurve<R>` : the defining polynomial Σ c_{i,j} x^{i-j} y^j of a plane curve.
//
// Row `i` of `coeffs` is the homogeneous part of total degree `i`,
// ordered by the power of y: [x^i, x^{i-1}y, ..., y^i].
// Trailing zero rows are always trimmed, and the zero polynomial is [[0]],
// so structural equality is equality of polynomials.

#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(
    into = "Vec<Vec<R>>",
    try_from = "Vec<Vec<R>>",
    bound(
        serialize = "R: serde::Serialize + Clone",
        deserialize = "R: serde::Deserialize<'de> + Field, for<'x> &'x R: FieldOps<R>"
    )
))]
pub struct AffineCurve<R> {
    coeffs: Vec<Vec<R>>
}

impl<R> AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    pub fn new(coeffs: Vec<Vec<R>>) -> Result<Self, CurveError> {
        let malformed = coeffs.iter().enumerate().find(|(i, row)| row.len() != i + 1);
        if let Some((row, c)) = malformed {
            return Err(CurveError::Malformed { row, len: c.len() })
        }
        Ok(Self::new_raw(coeffs))
    }

    pub fn from_rows<S, I, J>(rows: I) -> Result<Self, CurveError>
    where R: From<S>, I: IntoIterator<Item = J>, J: IntoIterator<Item = S> {
        let coeffs = rows.into_iter().map(|row|
            row.into_iter().map(R::from).collect()
        ).collect();
        Self::new(coeffs)
    }

    // `coeffs` must be triangular.
    fn new_raw(coeffs: Vec<Vec<R>>) -> Self {
        debug_assert!(coeffs.iter().enumerate().all(|(i, row)| row.len() == i + 1));

        let mut res = Self { coeffs };
        res.trim();
        res
    }

    fn trim(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs.last().is_some_and(|row| row.iter().all(R::is_zero)) {
            self.coeffs.pop();
        }
        if self.coeffs.is_empty() {
            self.coeffs.push(vec![R::zero()]);
        }
    }

    fn zero_table(deg: usize) -> Vec<Vec<R>> {
        (0..=deg).map(|i| vec![R::zero(); i + 1]).collect()
    }

    pub fn mono(c: R, a: usize, b: usize) -> Self {
        let mut coeffs = Self::zero_table(a + b);
        coeffs[a + b][b] = c;
        Self::new_raw(coeffs)
    }

    pub fn from_const(c: R) -> Self {
        Self::new_raw(vec![vec![c]])
    }

    pub fn x() -> Self {
        Self::mono(R::one(), 1, 0)
    }

    pub fn y() -> Self {
        Self::mono(R::one(), 0, 1)
    }

    pub fn rows(&self) -> &[Vec<R>] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn constant_term(&self) -> &R {
        &self.coeffs[0][0]
    }

    pub fn is_const(&self) -> bool {
        self.degree() == 0
    }

    // `degree() == 0` does not distinguish 0 from the other constants.
    pub fn is_identically_zero(&self) -> bool {
        self.is_const() && self.constant_term().is_zero()
    }

    // coefficient of x^a y^b.
    pub fn coeff(&self, a: usize, b: usize) -> R {
        self.coeffs.get(a + b).map(|row| row[b].clone()).unwrap_or_else(R::zero)
    }

    // non-zero terms ((a, b), c) representing c x^a y^b, in ascending total degree.
    pub fn terms(&self) -> impl Iterator<Item = ((usize, usize), &R)> {
        self.coeffs.iter().enumerate().flat_map(|(i, row)|
            row.iter().enumerate().filter(|(_, c)| !c.is_zero()).map(move |(j, c)|
                ((i - j, j), c)
            )
        )
    }

    // descending total degree, then descending power of x.
    fn terms_for_display(&self) -> impl Iterator<Item = ((usize, usize), &R)> {
        self.coeffs.iter().enumerate().rev().flat_map(|(i, row)|
            row.iter().enumerate().filter(|(_, c)| !c.is_zero()).map(move |(j, c)|
                ((i - j, j), c)
            )
        )
    }

    pub fn eval(&self, p: &(R, R)) -> R {
        let (x, y) = p;
        let d = self.degree();
        let xs = powers(x, d);
        let ys = powers(y, d);

        R::sum(self.terms().map(|((a, b), c)|
            c * &xs[a] * &ys[b]
        ))
    }

    pub fn contains(&self, p: &(R, R)) -> bool {
        self.eval(p).is_zero()
    }

    // largest n such that x^n divides the polynomial.
    pub fn x_multiplicity(&self) -> usize {
        self.terms().map(|((a, _), _)| a).min().unwrap_or(0)
    }

    // largest n such that y^n divides the polynomial.
    pub fn y_multiplicity(&self) -> usize {
        self.terms().map(|((_, b), _)| b).min().unwrap_or(0)
    }

    // (c, k) for the lowest degree term cx^k free of y, or (0, 0) if y divides the polynomial.
    pub fn smallest_term_without_y(&self) -> (R, usize) {
        self.coeffs.iter().enumerate()
            .find(|(_, row)| !row[0].is_zero())
            .map(|(k, row)| (row[0].clone(), k))
            .unwrap_or_else(|| (R::zero(), 0))
    }

    // (c, k) for the highest degree term cx^k free of y, or (0, 0) if y divides the polynomial.
    pub fn largest_term_without_y(&self) -> (R, usize) {
        self.coeffs.iter().enumerate().rev()
            .find(|(_, row)| !row[0].is_zero())
            .map(|(k, row)| (row[0].clone(), k))
            .unwrap_or_else(|| (R::zero(), 0))
    }

    // divides by x^n.
    pub fn extract_xs(&self, n: usize) -> Result<Self, CurveError> {
        let mult = self.x_multiplicity();
        if mult < n {
            return Err(CurveError::NotDivisible { var: 'x', n, mult })
        }

        let d = self.degree();
        let coeffs = (0..=d - n).map(|i|
            self.coeffs[i + n][0..=i].to_vec()
        ).collect();

        Ok(Self::new_raw(coeffs))
    }

    // divides by y^n.
    pub fn extract_ys(&self, n: usize) -> Result<Self, CurveError> {
        let mult = self.y_multiplicity();
        if mult < n {
            return Err(CurveError::NotDivisible { var: 'y', n, mult })
        }

        let d = self.degree();
        let coeffs = (0..=d - n).map(|i|
            self.coeffs[i + n][n..=i + n].to_vec()
        ).collect();

        Ok(Self::new_raw(coeffs))
    }

    // Substitutes x -> x + x0, y -> y + y0,
    // so that the point p = (x0, y0) of the original curve becomes the origin.
    pub fn shift(&self, p: &(R, R)) -> Self {
        let (x0, y0) = p;
        let d = self.degree();

        let u = Self::x() + Self::from_const(x0.clone());
        let v = Self::y() + Self::from_const(y0.clone());
        let us = (0..=d).map(|k| (&u).pow(k)).collect_vec();
        let vs = (0..=d).map(|k| (&v).pow(k)).collect_vec();

        Self::sum(self.terms().map(|((a, b), c)|
            &us[a] * &vs[b] * c
        ))
    }

    // Adds up row-wise, after padding `self` up to the degree of `rhs`.
    fn combine<F>(&mut self, rhs: &Self, f: F)
    where F: Fn(&mut R, &R) {
        let n = self.coeffs.len();
        let d = rhs.degree();
        if n <= d {
            self.coeffs.extend((n..=d).map(|i| vec![R::zero(); i + 1]));
        }

        for (row, r_row) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            for (a, b) in row.iter_mut().zip(r_row.iter()) {
                f(a, b)
            }
        }

        self.trim()
    }

    fn product(&self, rhs: &Self) -> Self {
        let mut res = Self::zero_table(self.degree() + rhs.degree());
        let r_terms = rhs.terms().collect_vec();

        for ((a1, b1), c1) in self.terms() {
            for &((a2, b2), c2) in r_terms.iter() {
                let (a, b) = (a1 + a2, b1 + b2);
                res[a + b][b] += c1 * c2;
            }
        }

        Self::new_raw(res)
    }
}

fn powers<R>(x: &R, d: usize) -> Vec<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    std::iter::successors(Some(R::one()), |p| Some(p * x)).take(d + 1).collect()
}

impl<R> TryFrom<Vec<Vec<R>>> for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    type Error = CurveError;

    fn try_from(coeffs: Vec<Vec<R>>) -> Result<Self, Self::Error> {
        Self::new(coeffs)
    }
}

impl<R> From<AffineCurve<R>> for Vec<Vec<R>> {
    fn from(c: AffineCurve<R>) -> Self {
        c.coeffs
    }
}

impl<R> From<i32> for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn from(i: i32) -> Self {
        Self::from_const(R::from(i))
    }
}

impl<R> Default for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn default() -> Self {
        Self::zero()
    }
}

// `{}` renders exponents as x^2y, `{:#}` as x²y.

impl<R> Display for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unicode = f.alternate();
        let terms = self.terms_for_display().map(|((a, b), c)|
            (fmt_mono2("x", "y", a, b, unicode), c)
        );
        f.write_str(&lc(terms))
    }
}

impl<R> Debug for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<R> Zero for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn zero() -> Self {
        Self::new_raw(vec![])
    }

    fn is_zero(&self) -> bool {
        self.is_identically_zero()
    }
}

impl<R> One for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn one() -> Self {
        Self::from_const(R::one())
    }

    fn is_one(&self) -> bool {
        self.is_const() && self.constant_term().is_one()
    }
}

impl<R> Neg for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<R> Neg for &AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    type Output = AffineCurve<R>;
    fn neg(self) -> Self::Output {
        let coeffs = self.coeffs.iter().map(|row|
            row.iter().map(|c| -c).collect()
        ).collect();
        AffineCurve { coeffs }
    }
}

#[auto_ops]
impl<R> AddAssign<&AffineCurve<R>> for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn add_assign(&mut self, rhs: &AffineCurve<R>) {
        self.combine(rhs, |a, b| *a += b)
    }
}

#[auto_ops]
impl<R> SubAssign<&AffineCurve<R>> for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn sub_assign(&mut self, rhs: &AffineCurve<R>) {
        self.combine(rhs, |a, b| *a -= b)
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn mul_assign(&mut self, rhs: &R) {
        if rhs.is_zero() {
            self.set_zero();
        } else if !rhs.is_one() {
            for c in self.coeffs.iter_mut().flatten() {
                *c *= rhs;
            }
        }
    }
}

#[auto_ops]
impl<R> MulAssign<&AffineCurve<R>> for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn mul_assign(&mut self, rhs: &AffineCurve<R>) {
        if rhs.is_const() {
            *self *= rhs.constant_term()
        } else if self.is_const() {
            *self = rhs * self.constant_term()
        } else {
            *self = self.product(rhs)
        }
    }
}

// f^0 = 1 is the constant polynomial.

impl<R> Pow<usize> for &AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    type Output = AffineCurve<R>;
    fn pow(self, n: usize) -> Self::Output {
        (0..n).fold(AffineCurve::one(), |res, _| res * self)
    }
}

macro_rules! impl_alg_op {
    ($trait:ident) => {
        impl<R> $trait<Self> for AffineCurve<R>
        where R: Field, for<'x> &'x R: FieldOps<R> {}

        impl<R> $trait<AffineCurve<R>> for &AffineCurve<R>
        where R: Field, for<'x> &'x R: FieldOps<R> {}
    };
}

impl_alg_op!(AddMonOps);
impl_alg_op!(AddGrpOps);
impl_alg_op!(MonOps);
impl_alg_op!(RingOps);

impl<R> Elem for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn math_symbol() -> String {
        format!("{}[x, y]", R::math_symbol())
    }
}

impl<R> AddMon for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {}

impl<R> AddGrp for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {}

impl<R> Mon for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {}

impl<R> Ring for AffineCurve<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn inv(&self) -> Option<Self> {
        if self.is_const() {
            self.constant_term().inv().map(Self::from_const)
        } else {
            None
        }
    }

    fn is_unit(&self) -> bool {
        self.is_const() && !self.constant_term().is_zero()
    }

    fn normalizing_unit(&self) -> Self {
        let top = self.coeffs.last().and_then(|row|
            row.iter().find(|c| !c.is_zero())
        );
        match top {
            Some(c) => Self::from_const(c.normalizing_unit()),
            None    => Self::one()
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "tex")] {
        use crate::tex::TeX;

        impl<R> TeX for AffineCurve<R>
        where R: Field + TeX, for<'x> &'x R: FieldOps<R> {
            fn tex_math_symbol() -> String {
                format!("{}[x, y]", R::tex_math_symbol())
            }

            fn tex_string(&self) -> String {
                let mono = |v: &str, d: usize| match d {
                    0 => String::new(),
                    1 => v.to_string(),
                    _ => format!("{v}^{{{d}}}")
                };
                let terms = self.terms_for_display().map(|((a, b), c)| {
                    let m = mono("x", a) + &mono("y", b);
                    let m = if m.is_empty() { String::from("1") } else { m };
                    (m, c.tex_string())
                });
                lc(terms)
            }
        }
    }
}

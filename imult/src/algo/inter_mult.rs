use log::{debug, trace};

use crate::{AffineCurve, Field, FieldOps};
use super::Mult;

// Intersection multiplicity I_P(F, G) of affine plane curves, after Fulton.
//
// At the origin, I(F, G) is computed by the reduction
//
//   I(F, G) = I(F - (a/b)x^{m-n}G, G)     (ax^m, bx^n : top y-free terms of F, G, m >= n)
//   I(yF', G) = k + I(F', G)              (cx^k : lowest y-free term of G)
//
// until one of the curves misses the origin (I = 0), vanishes (I = ∞),
// or both are divisible by y (common component, I = ∞).
// Each step is a tail call once the `k` is accumulated, so the reduction runs as a loop.
//
// The steps keep the ideal (F, G), and a finite I(F, G) is at most deg F · deg G.
// A common component other than y makes the y-extractions repeat forever,
// so the accumulator exceeding that bound means I = ∞.

pub fn intersection_multiplicity<R>(f: &AffineCurve<R>, g: &AffineCurve<R>, p: &(R, R)) -> Mult
where R: Field, for<'x> &'x R: FieldOps<R> {
    debug!("I_({}, {})({f}, {g}) ..", p.0, p.1);

    let f0 = f.shift(p);
    let g0 = g.shift(p);

    trace!("shifted: {f0}, {g0}");

    let res = intersection_multiplicity_at_origin(&f0, &g0);

    debug!("I_({}, {})({f}, {g}) = {res}.", p.0, p.1);

    res
}

pub fn intersection_multiplicity_at_origin<R>(f: &AffineCurve<R>, g: &AffineCurve<R>) -> Mult
where R: Field, for<'x> &'x R: FieldOps<R> {
    let mut f = f.clone();
    let mut g = g.clone();
    let mut k_total = 0;
    let bound = f.degree() * g.degree();

    loop {
        trace!("  F = {f}, G = {g}, acc = {k_total}");

        if !f.constant_term().is_zero() || !g.constant_term().is_zero() {
            trace!("  not through the origin.");
            return Mult::Finite(k_total)
        }

        if f.is_identically_zero() || g.is_identically_zero() {
            trace!("  identically zero.");
            return Mult::Infinite
        }

        let (a, m) = f.largest_term_without_y();
        let (b, n) = g.largest_term_without_y();

        match (a.is_zero(), b.is_zero()) {
            (false, false) => {
                // cancel the top y-free term of the one with higher degree.
                if m >= n {
                    let c = AffineCurve::mono(&a / &b, m - n, 0);
                    f = &f - c * &g;
                } else {
                    let c = AffineCurve::mono(&b / &a, n - m, 0);
                    let h = &g - c * &f;
                    (f, g) = (h, f);
                }
            },
            (true, false) => {
                // F = yF', I(y, G) = k.
                let (_, k) = g.smallest_term_without_y();
                trace!("  extract y, +{k}.");

                k_total += k;
                if k_total > bound {
                    trace!("  exceeds {bound}, common component.");
                    return Mult::Infinite
                }

                f = f.extract_ys(1).expect("F must be divisible by y");
            },
            (false, true) => {
                std::mem::swap(&mut f, &mut g);
            },
            (true, true) => {
                trace!("  common component y.");
                return Mult::Infinite
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use num_traits::{Zero, One};
    use crate::Ratio;
    use super::*;

    type R = Ratio<i64>;
    type P = AffineCurve<R>;

    fn mono(c: i32, a: usize, b: usize) -> P {
        P::mono(R::from(c), a, b)
    }

    fn origin() -> (R, R) {
        (R::zero(), R::zero())
    }

    #[test]
    fn transverse_lines() {
        let f = P::x();
        let g = P::y();
        assert_eq!(intersection_multiplicity_at_origin(&f, &g), Mult::Finite(1));
        assert_eq!(intersection_multiplicity_at_origin(&g, &f), Mult::Finite(1));
    }

    #[test]
    fn tangent_parabola() {
        // y - x^2, y
        let f = mono(1, 0, 1) - mono(1, 2, 0);
        let g = P::y();
        assert_eq!(intersection_multiplicity_at_origin(&f, &g), Mult::Finite(2));
    }

    #[test]
    fn cusp() {
        // y^2 - x^3, y
        let f = mono(1, 0, 2) - mono(1, 3, 0);
        let g = P::y();
        assert_eq!(intersection_multiplicity_at_origin(&f, &g), Mult::Finite(3));
    }

    #[test]
    fn common_component() {
        // x^2 - y^2, x + y
        let f = mono(1, 2, 0) - mono(1, 0, 2);
        let g = P::x() + P::y();
        assert_eq!(intersection_multiplicity_at_origin(&f, &g), Mult::Infinite);
        assert_eq!(intersection_multiplicity_at_origin(&g, &f), Mult::Infinite);
    }

    #[test]
    fn common_curved_component() {
        // (y - x^2)(1 + x) and (y - x^2)(1 + y)
        let c = P::y() - mono(1, 2, 0);
        let f = &c * (P::one() + P::x());
        let g = &c * (P::one() + P::y());
        assert_eq!(intersection_multiplicity_at_origin(&f, &g), Mult::Infinite);
        assert_eq!(intersection_multiplicity_at_origin(&g, &f), Mult::Infinite);

        // elsewhere on the parabola.
        let p = (R::from(2), R::from(4));
        assert_eq!(intersection_multiplicity(&f, &g, &p), Mult::Infinite);
    }

    #[test]
    fn multiple_of_curve() {
        // G = A·F shares every component of F.
        let f = mono(-2, 2, 0) + mono(3, 1, 1) - P::y() * R::new(1, 3) + P::from(1);
        let a = P::x() + mono(2, 0, 1);
        let g = &a * &f;
        let p = (R::zero(), R::from(3));
        assert!(f.contains(&p));
        assert_eq!(intersection_multiplicity(&f, &g, &p), Mult::Infinite);
    }

    #[test]
    fn both_divisible_by_y() {
        let f = mono(1, 1, 1);
        let g = mono(1, 0, 2) + mono(3, 2, 1);
        assert_eq!(intersection_multiplicity_at_origin(&f, &g), Mult::Infinite);
    }

    #[test]
    fn not_through_origin() {
        let f = P::x() - P::one();
        let g = P::y();
        assert_eq!(intersection_multiplicity_at_origin(&f, &g), Mult::Finite(0));
        assert_eq!(intersection_multiplicity_at_origin(&g, &f), Mult::Finite(0));
    }

    #[test]
    fn nonzero_constant_before_zero_curve() {
        // a curve missing the origin meets the zero curve 0 times there.
        let f = P::one();
        let g = P::zero();
        assert_eq!(intersection_multiplicity_at_origin(&f, &g), Mult::Finite(0));
    }

    #[test]
    fn zero_curve() {
        let f = P::zero();
        let g = P::x();
        assert_eq!(intersection_multiplicity_at_origin(&f, &g), Mult::Infinite);
        assert_eq!(intersection_multiplicity_at_origin(&g, &f), Mult::Infinite);
    }

    #[test]
    fn at_point() {
        let f = P::x() - P::one();
        let g = P::y();
        assert_eq!(intersection_multiplicity(&f, &g, &origin()), Mult::Finite(0));
        assert_eq!(intersection_multiplicity(&f, &g, &(R::one(), R::zero())), Mult::Finite(1));
    }

    #[test]
    fn tangent_circles() {
        // x^2 + y^2 - 2x and x^2 + y^2 - 4x are tangent at the origin.
        let f = mono(1, 2, 0) + mono(1, 0, 2) - mono(2, 1, 0);
        let g = mono(1, 2, 0) + mono(1, 0, 2) - mono(4, 1, 0);
        assert_eq!(intersection_multiplicity_at_origin(&f, &g), Mult::Finite(2));
    }

    #[test]
    fn rational_coeffs() {
        // y - x^2/2 meets y = 0 at the origin with multiplicity 2,
        // and y = 2 at (2, 2) transversally.
        let f = P::y() - mono(1, 2, 0) * R::new(1, 2);
        let g = P::y() - P::from(2);
        assert_eq!(intersection_multiplicity(&f, &P::y(), &origin()), Mult::Finite(2));
        assert_eq!(intersection_multiplicity(&f, &g, &(R::from(2), R::from(2))), Mult::Finite(1));
        assert_eq!(intersection_multiplicity(&f, &g, &(R::from(-2), R::from(2))), Mult::Finite(1));
    }
}

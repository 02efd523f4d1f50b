use num_bigint::BigInt;
use num_traits::{Pow, Zero};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use imult::{intersection_multiplicity, Q, QCurve};

const SEED: u64 = 20180417;
const TRIALS: usize = 30;

fn rand_q(rng: &mut StdRng) -> Q { 
    let n = rng.gen_range(-4..=4i32);
    let d = rng.gen_range(1..=3i32);
    Q::new(BigInt::from(n), BigInt::from(d))
}

fn rand_curve(rng: &mut StdRng, max_deg: usize) -> QCurve { 
    let d = rng.gen_range(0..=max_deg);
    let rows = (0..=d).map(|i| 
        (0..=i).map(|_| 
            if rng.gen_bool(0.5) { rand_q(rng) } else { Q::zero() }
        ).collect()
    ).collect();
    QCurve::new(rows).unwrap()
}

// a random curve forced through p.
fn rand_curve_through(rng: &mut StdRng, max_deg: usize, p: &(Q, Q)) -> QCurve { 
    let f = rand_curve(rng, max_deg);
    let c = f.eval(p);
    f - QCurve::from_const(c)
}

fn rand_point(rng: &mut StdRng) -> (Q, Q) { 
    (rand_q(rng), rand_q(rng))
}

#[test]
fn add_laws() { 
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..TRIALS { 
        let (f, g, h) = (rand_curve(&mut rng, 4), rand_curve(&mut rng, 4), rand_curve(&mut rng, 4));
        assert_eq!(&f + &g, &g + &f);
        assert_eq!((&f + &g) + &h, &f + (&g + &h));
        assert_eq!(&f - &f, QCurve::zero());
        assert_eq!(&f + QCurve::zero(), f);
    }
}

#[test]
fn mul_laws() { 
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    for _ in 0..TRIALS { 
        let (f, g, h) = (rand_curve(&mut rng, 3), rand_curve(&mut rng, 3), rand_curve(&mut rng, 3));
        assert_eq!(&f * &g, &g * &f);
        assert_eq!(&f * (&g + &h), &f * &g + &f * &h);
        assert_eq!((&f * &g) * &h, &f * (&g * &h));
        assert_eq!(f.pow(2), &f * &f);
    }
}

#[test]
fn degree_is_stable() { 
    let mut rng = StdRng::seed_from_u64(SEED + 2);
    for _ in 0..TRIALS { 
        let f = rand_curve(&mut rng, 4);
        let g = QCurve::new(f.rows().to_vec()).unwrap();
        assert_eq!(f, g);
        assert_eq!(f.degree(), g.degree());

        // re-padding with zero rows does not change anything.
        let mut rows = f.rows().to_vec();
        let d = rows.len();
        rows.push(vec![Q::zero(); d + 1]);
        let h = QCurve::new(rows).unwrap();
        assert_eq!(f, h);
        assert_eq!(f.degree(), h.degree());

        if !f.is_identically_zero() { 
            let g = rand_curve(&mut rng, 3);
            if !g.is_identically_zero() { 
                assert_eq!((&f * &g).degree(), f.degree() + g.degree());
            }
        }
    }
}

#[test]
fn shift_inverse() { 
    let mut rng = StdRng::seed_from_u64(SEED + 3);
    for _ in 0..TRIALS { 
        let f = rand_curve(&mut rng, 4);
        let p = rand_point(&mut rng);
        let q = (-&p.0, -&p.1);
        assert_eq!(f.shift(&p).shift(&q), f);
        assert_eq!(f.shift(&p).constant_term(), &f.eval(&p));
    }
}

#[test]
fn mono_contains() { 
    let mut rng = StdRng::seed_from_u64(SEED + 4);
    for _ in 0..TRIALS { 
        let c = rand_q(&mut rng);
        let (a, b) = (rng.gen_range(0..4), rng.gen_range(0..4));
        let (x, y) = rand_point(&mut rng);
        let f = QCurve::mono(c.clone(), a, b);
        let v = c * (0..a).fold(Q::from(1), |r, _| r * &x) * (0..b).fold(Q::from(1), |r, _| r * &y);
        assert_eq!(f.contains(&(x, y)), v.is_zero());
    }
}

#[test]
fn symmetry() { 
    let mut rng = StdRng::seed_from_u64(SEED + 5);
    for _ in 0..TRIALS { 
        let p = rand_point(&mut rng);
        let f = rand_curve_through(&mut rng, 3, &p);
        let g = rand_curve_through(&mut rng, 3, &p);
        assert_eq!(
            intersection_multiplicity(&f, &g, &p), 
            intersection_multiplicity(&g, &f, &p)
        );
    }
}

#[test]
fn additivity() { 
    let mut rng = StdRng::seed_from_u64(SEED + 6);
    for _ in 0..TRIALS { 
        let p = rand_point(&mut rng);
        let f = rand_curve_through(&mut rng, 2, &p);
        let g = rand_curve_through(&mut rng, 2, &p);
        let h = rand_curve_through(&mut rng, 2, &p);
        assert_eq!(
            intersection_multiplicity(&f, &(&g * &h), &p), 
            intersection_multiplicity(&f, &g, &p) + intersection_multiplicity(&f, &h, &p)
        );
    }
}

#[test]
fn invariant_under_adding_multiples() { 
    let mut rng = StdRng::seed_from_u64(SEED + 7);
    for _ in 0..TRIALS { 
        let p = rand_point(&mut rng);
        let f = rand_curve_through(&mut rng, 3, &p);
        let g = rand_curve_through(&mut rng, 3, &p);
        let a = rand_curve(&mut rng, 2);
        assert_eq!(
            intersection_multiplicity(&f, &(&g + &a * &f), &p), 
            intersection_multiplicity(&f, &g, &p)
        );
    }
}

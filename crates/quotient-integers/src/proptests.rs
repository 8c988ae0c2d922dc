//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        // Canonical form

        #[test]
        fn reduce_is_idempotent(x in rational()) {
            let once = x.reduce();
            let twice = once.reduce();
            prop_assert_eq!(once.numerator(), twice.numerator());
            prop_assert_eq!(once.denominator(), twice.denominator());
        }

        #[test]
        fn reduce_is_canonical(x in rational()) {
            let r = x.reduce();
            prop_assert_eq!(r.denominator().signum(), 1);
            prop_assert!(r.numerator().gcd(r.denominator()).is_one());
            prop_assert_eq!(&r, &x);
        }

        #[test]
        fn scaled_fractions_compare_equal(x in rational(), k in non_zero_int()) {
            let k = Integer::new(k);
            let (n, d) = x.clone().into_parts();
            let scaled = Rational::new(&n * &k, &d * &k).unwrap();
            prop_assert_eq!(&scaled, &x);
            prop_assert_eq!(scaled.cmp(&x), std::cmp::Ordering::Equal);
        }

        // Field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_additive_inverse(x in rational()) {
            prop_assert!((&x + &(-&x)).is_zero());
        }

        #[test]
        fn rational_multiplicative_inverse(x in non_zero_rational()) {
            let inv = x.recip().unwrap();
            prop_assert!((&x * &inv).is_one());
        }

        #[test]
        fn division_undoes_multiplication(x in rational(), y in non_zero_rational()) {
            let back = &x.checked_div(&y).unwrap() * &y;
            let back = back.reduce();
            let expected = x.reduce();
            prop_assert_eq!(back.numerator(), expected.numerator());
            prop_assert_eq!(back.denominator(), expected.denominator());
        }

        #[test]
        fn double_inversion_round_trips(x in non_zero_rational()) {
            let back = x.recip().unwrap().recip().unwrap().reduce();
            let expected = x.reduce();
            prop_assert_eq!(back.numerator(), expected.numerator());
            prop_assert_eq!(back.denominator(), expected.denominator());
        }

        #[test]
        fn ordering_matches_subtraction_sign(a in rational(), b in rational()) {
            let expected = (&a - &b).signum().cmp(&0);
            prop_assert_eq!(a.cmp(&b), expected);
        }

        // Exponentiation

        #[test]
        fn pow_matches_repeated_multiplication(
            n in -9i64..10i64,
            d in prop_oneof![(-9i64..=-1i64), (1i64..=9i64)],
            e in 0i64..=20i64
        ) {
            let x = Rational::from_i64(n, d).unwrap();
            let mut expected = Rational::one();
            for _ in 0..e {
                expected = &expected * &x;
            }
            prop_assert_eq!(x.powi(e).unwrap(), expected);
        }

        #[test]
        fn negative_pow_inverts(x in non_zero_rational(), e in 1i64..=8i64) {
            let lhs = x.powi(-e).unwrap();
            let rhs = x.powi(e).unwrap().recip().unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        // Conversions

        #[test]
        fn finite_floats_round_trip(v in -1.0e6f64..1.0e6f64) {
            let r = Rational::from_f64(v).unwrap();
            prop_assert!((r.to_f64() - v).abs() <= v.abs() * f64::EPSILON);
        }
    }
}

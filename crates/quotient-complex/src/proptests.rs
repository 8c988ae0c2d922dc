//! Property-based tests for complex arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;
    use quotient_integers::Rational;

    use crate::{math, Complex, ComplexRational};

    fn rational() -> impl Strategy<Value = Rational> {
        (-50i64..50i64, prop_oneof![(-20i64..=-1i64), (1i64..=20i64)])
            .prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn complex_rational() -> impl Strategy<Value = ComplexRational> {
        (rational(), rational()).prop_map(|(re, im)| ComplexRational::new(re, im))
    }

    fn non_zero_complex_rational() -> impl Strategy<Value = ComplexRational> {
        complex_rational().prop_filter("non-zero", |z| !z.is_zero())
    }

    proptest! {
        #[test]
        fn multiplication_commutes(x in complex_rational(), y in complex_rational()) {
            prop_assert_eq!(&x * &y, &y * &x);
        }

        #[test]
        fn additive_inverse(x in complex_rational()) {
            prop_assert!((&x + &(-&x)).is_zero());
        }

        #[test]
        fn multiplicative_inverse(x in non_zero_complex_rational()) {
            prop_assert!((&x * &x.recip().unwrap()).is_one());
        }

        #[test]
        fn division_undoes_multiplication(x in complex_rational(), y in non_zero_complex_rational()) {
            let back = &x.checked_div(&y).unwrap() * &y;
            prop_assert_eq!(back.reduce(), x.reduce());
        }

        #[test]
        fn conjugate_product_is_real(x in complex_rational()) {
            let product = &x * &x.conjugate();
            prop_assert!(product.is_real());
            prop_assert_eq!(product.real(), &x.norm_sqr());
        }

        #[test]
        fn pow_matches_repeated_multiplication(x in complex_rational(), e in 0i64..=12i64) {
            let mut expected = ComplexRational::one();
            for _ in 0..e {
                expected = &expected * &x;
            }
            prop_assert_eq!(x.powi(e).unwrap(), expected);
        }

        #[test]
        fn imaginary_unit_has_period_four(e in -1000i64..1000i64) {
            let i = ComplexRational::i();
            let lhs = i.powi(e).unwrap();
            let rhs = i.powi(e.rem_euclid(4)).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn approximate_matches_exact(x in complex_rational(), y in complex_rational()) {
            let exact = (&x * &y).to_complex();
            let approx = x.to_complex() * y.to_complex();
            prop_assert!(math::abs(exact - approx) <= 1e-9 * (1.0 + math::abs(exact)));
        }

        #[test]
        fn exp_ln_round_trip(re in -10.0f64..10.0, im in -10.0f64..10.0) {
            let z = Complex::new(re, im);
            prop_assume!(z != Complex::ZERO);
            let back = math::exp(math::ln(z).unwrap());
            prop_assert!(math::abs(back - z) <= 1e-9 * (1.0 + math::abs(z)));
        }

        #[test]
        fn tanh_stays_finite(re in -1000.0f64..1000.0, im in -3.0f64..3.0) {
            if let Ok(t) = math::tanh(Complex::new(re, im)) {
                prop_assert!(t.real().is_finite() && t.imaginary().is_finite());
            }
        }
    }
}

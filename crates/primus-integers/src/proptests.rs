//! Property-based tests for valuations and Hensel lifting.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::valuation::{prime_power, unit_part, valuation};
    use crate::{mod_inverse, Integer};

    // Strategy for generating small primes
    fn small_prime() -> impl Strategy<Value = u64> {
        prop_oneof![Just(2u64), Just(3), Just(5), Just(7), Just(13)]
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-100_000i64..=-1i64), (1i64..=100_000i64)]
    }

    proptest! {
        #[test]
        fn unit_part_reconstructs(n in non_zero_int(), p in small_prime()) {
            let n = Integer::new(n);
            let (unit, v) = unit_part(&n, p).expect("nonzero input");
            prop_assert_eq!(unit * prime_power(p, v), n);
        }

        #[test]
        fn unit_part_is_a_unit(n in non_zero_int(), p in small_prime()) {
            let n = Integer::new(n);
            let (unit, _) = unit_part(&n, p).expect("nonzero input");
            let (_, r) = unit.div_rem(&Integer::from(p));
            prop_assert!(!r.is_zero());
        }

        #[test]
        fn valuation_of_product_adds(
            a in non_zero_int(),
            b in non_zero_int(),
            p in small_prime()
        ) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let va = valuation(&a, p).expect("nonzero");
            let vb = valuation(&b, p).expect("nonzero");
            prop_assert_eq!(valuation(&(a * b), p), Some(va + vb));
        }

        #[test]
        fn valuation_scales_with_prime_power(
            n in non_zero_int(),
            k in 0u32..8,
            p in small_prime()
        ) {
            let n = Integer::new(n);
            let v = valuation(&n, p).expect("nonzero");
            let scaled = n * prime_power(p, k);
            prop_assert_eq!(valuation(&scaled, p), Some(v + k));
        }

        #[test]
        fn mod_inverse_is_correct(a in non_zero_int(), p in small_prime(), k in 1u32..=64) {
            let a = Integer::new(a);
            prop_assume!(valuation(&a, p) == Some(0));

            let b = mod_inverse(&a, p, k).expect("unit operand");
            let m = prime_power(p, k);
            prop_assert!((a * b).rem_euclid(&m).is_one());
        }

        #[test]
        fn mod_inverse_of_multiple_is_none(n in non_zero_int(), p in small_prime()) {
            let multiple = Integer::new(n) * Integer::from(p);
            prop_assert_eq!(mod_inverse(&multiple, p, 8), None);
        }
    }
}

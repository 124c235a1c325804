/// Largest value [`digit_sum`] gives a correct answer for.
pub const MAX_INPUT: u32 = 9999;

/// Sum of the decimal digits of `x`, without a loop.
///
/// Each `x / 10^k` drops the lowest `k` digits. Adding those quotients for
/// k = 1..=3 and multiplying by nine gives exactly how much `x` exceeds its
/// digit sum, so the result only holds for numbers of at most four digits.
/// Callers must keep `x <= MAX_INPUT`.
pub fn digit_sum(x: u32) -> u32 {
    debug_assert!(x <= MAX_INPUT, "{x} has more than four digits");
    x - 9 * (x / 10 + x / 100 + x / 1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn digit_sum_by_loop(mut x: u32) -> u32 {
        let mut sum = 0;
        while x > 0 {
            sum += x % 10;
            x /= 10;
        }
        sum
    }

    #[test]
    fn known_values() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(1234), 10);
        assert_eq!(digit_sum(5000), 5);
        assert_eq!(digit_sum(9999), 36);
    }

    #[test]
    fn matches_loop_over_whole_range() {
        for x in 0..=MAX_INPUT {
            assert_eq!(digit_sum(x), digit_sum_by_loop(x), "x = {x}");
        }
    }

    proptest! {
        #[test]
        fn matches_decimal_string(x in 0..=MAX_INPUT) {
            let from_text: u32 = x.to_string().chars().filter_map(|c| c.to_digit(10)).sum();
            prop_assert_eq!(digit_sum(x), from_text);
        }

        #[test]
        fn trailing_zero_keeps_sum(x in 0..=999u32) {
            prop_assert_eq!(digit_sum(x * 10), digit_sum(x));
        }

        #[test]
        fn never_exceeds_four_nines(x in 0..=MAX_INPUT) {
            prop_assert!(digit_sum(x) <= 36);
        }
    }
}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn formula_matches_digit_extraction() {
        let x: u32 = kani::any();
        kani::assume(x <= MAX_INPUT);
        let expected = x % 10 + x / 10 % 10 + x / 100 % 10 + x / 1000;
        assert_eq!(digit_sum(x), expected);
    }
}

// Copyright 2026 Developers of the rand_gen project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Unbiased uniform integer sampling

use crate::{Error, Generator};

/// Sample an `i64` uniformly from the inclusive range `[min(a, b), max(a, b)]`.
///
/// # Implementation notes
///
/// Reducing a raw value with `%` favours the small results whenever the
/// number of possible raw values is not a multiple of `range`. Instead, the
/// generator's output space `[0, max)` is cut into `subranges = max / range`
/// equally sized buckets per result; the leftover tail `[subranges * range,
/// max]` cannot be shared out evenly and is rejected (by replacing with a new
/// raw value). A raw value `n` in the accepted zone maps to
/// `low + n / subranges`.
///
/// At most half of the output space is ever rejected, so the expected number
/// of draws is below 2.
///
/// # Errors
///
/// [`Error::RangeTooLarge`] if the range holds more than
/// [`max_value`](Generator::max_value) integers. This includes the full
/// `i64` range, which holds 2<sup>64</sup> values. No value is drawn when an
/// error is returned.
pub fn try_uniform_int<G: Generator + ?Sized>(rng: &mut G, a: i64, b: i64) -> Result<i64, Error> {
    let (low, high) = if a > b { (b, a) } else { (a, b) };

    // Number of values in the range; wraps to 0 for the full 2^64 span.
    let range = (high as u64).wrapping_sub(low as u64).wrapping_add(1);
    let max = rng.max_value();
    if range == 0 || range > max {
        return Err(Error::RangeTooLarge);
    }

    let subranges = max / range;
    let upper_bound = subranges * range;

    let n = loop {
        let n = rng.next_u64();
        if n < upper_bound {
            break n;
        }
    };
    Ok(low.wrapping_add((n / subranges) as i64))
}

/// Sample an `i64` uniformly from the inclusive range `[min(a, b), max(a, b)]`.
///
/// See [`try_uniform_int`] for the algorithm.
///
/// # Panics
///
/// If the range holds more integers than the generator's
/// [`max_value`](Generator::max_value).
///
/// # Example
///
/// ```
/// use rand_gen::KnuthLcg;
/// use rand_gen::distributions::uniform_int;
///
/// let mut rng = KnuthLcg::new(11);
/// let die = uniform_int(&mut rng, 6, 1);
/// assert!((1..=6).contains(&die));
/// ```
#[inline]
pub fn uniform_int<G: Generator + ?Sized>(rng: &mut G, a: i64, b: i64) -> i64 {
    try_uniform_int(rng, a, b).unwrap_or_else(|e| panic!("uniform_int: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rngs::mock::StepGenerator;

    #[test]
    fn test_in_range() {
        let mut rng = crate::test::rng(251);
        let ranges = [
            (0, 0),
            (0, 1),
            (-5, 5),
            (-10, -5),
            (1, 6),
            (i64::MIN, i64::MIN + 3),
            (i64::MAX - 3, i64::MAX),
            (0, i64::MAX),
            (i64::MIN, 0),
            (i64::MIN, i64::MAX - 1),
        ];
        for &(low, high) in ranges.iter() {
            for _ in 0..1000 {
                let v = uniform_int(&mut rng, low, high);
                assert!(low <= v && v <= high, "{} not in [{}, {}]", v, low, high);
                let v = uniform_int(&mut rng, high, low);
                assert!(low <= v && v <= high, "{} not in [{}, {}]", v, low, high);
            }
        }
    }

    #[test]
    fn test_rejects_tail() {
        // max = 9, range = 3: subranges = 3, accepted zone [0, 9).
        // Draws 7, 8 map to the top bucket; 9 is rejected; 0 maps to low.
        let mut rng = StepGenerator::new(7, 1, 9);
        let v: [i64; 3] = core::array::from_fn(|_| uniform_int(&mut rng, 10, 12));
        assert_eq!(v, [12, 12, 10]);
    }

    #[test]
    fn test_buckets_are_contiguous() {
        // max = 20, range = 6: subranges = 3, accepted zone [0, 18).
        let mut rng = StepGenerator::new(0, 1, 20);
        let mut counts = [0u32; 6];
        for _ in 0..21 {
            counts[uniform_int(&mut rng, 0, 5) as usize] += 1;
        }
        // 21 results consume 0..=20, 0..=2 (the 3 tail values are skipped).
        assert_eq!(counts, [6, 3, 3, 3, 3, 3]);
    }

    #[test]
    fn test_single_value() {
        let mut rng = crate::test::rng(3);
        for _ in 0..100 {
            assert_eq!(uniform_int(&mut rng, -7, -7), -7);
        }
    }

    #[test]
    fn test_swapped_bounds() {
        let mut r1 = crate::test::rng(77);
        let mut r2 = crate::test::rng(77);
        for _ in 0..1000 {
            assert_eq!(uniform_int(&mut r1, -100, 250), uniform_int(&mut r2, 250, -100));
        }
    }

    #[test]
    fn test_range_equal_to_max() {
        let mut rng = StepGenerator::new(0, 1, 9);
        let v: [i64; 10] = core::array::from_fn(|_| uniform_int(&mut rng, 1, 9));
        assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8, 9, 1]);
    }

    #[test]
    fn test_range_too_large() {
        let mut rng = StepGenerator::new(0, 1, 9);
        assert_eq!(try_uniform_int(&mut rng, 0, 9), Err(Error::RangeTooLarge));
        assert_eq!(try_uniform_int(&mut rng, 0, 100), Err(Error::RangeTooLarge));
        assert_eq!(rng.next_u64(), 0);

        let mut rng = crate::test::rng(1);
        assert_eq!(
            try_uniform_int(&mut rng, i64::MIN, i64::MAX),
            Err(Error::RangeTooLarge)
        );
        assert!(try_uniform_int(&mut rng, i64::MIN, i64::MAX - 1).is_ok());
    }

    #[test]
    #[should_panic(expected = "uniform_int: range exceeds the generator's output span")]
    fn test_full_range_panics() {
        uniform_int(&mut crate::test::rng(0), i64::MAX, i64::MIN);
    }
}

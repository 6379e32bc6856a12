// Copyright 2026 Developers of the rand_gen project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Uniform floating-point sampling

use crate::{Error, Generator};

/// Sample a `f64` uniformly from the half-open interval
/// `[min(a, b), max(a, b))`.
///
/// The bounds may be given in either order. One raw value `n` is drawn and
/// mapped with `(n / max) * (high - low) + low`, where `max` is the
/// generator's [`max_value`](Generator::max_value) and `n` is first clamped
/// to `max - 1`.
///
/// # Precision
///
/// Dividing by `max` rather than using the top 53 bits of the draw means
/// that, for a 64-bit generator, several adjacent raw values can round to the
/// same float, and that the quotient itself can round up to `1.0`. Any result
/// which rounds up to `high` is replaced by the largest `f64` below `high`,
/// so the upper bound is never returned. The bias this introduces is on the
/// order of one value in 2<sup>53</sup>.
///
/// # Errors
///
/// -   [`Error::EmptyRange`] if `a == b`.
/// -   [`Error::NonFinite`] if either bound is NaN or infinite, or if
///     `high - low` overflows.
///
/// No value is drawn when an error is returned.
pub fn try_uniform_float<G: Generator + ?Sized>(rng: &mut G, a: f64, b: f64) -> Result<f64, Error> {
    let (low, high) = if a > b { (b, a) } else { (a, b) };
    if !(low.is_finite() && high.is_finite()) {
        return Err(Error::NonFinite);
    }
    if low == high {
        return Err(Error::EmptyRange);
    }
    let scale = high - low;
    if !scale.is_finite() {
        return Err(Error::NonFinite);
    }

    let value = unit(rng) * scale + low;
    if value < high {
        Ok(value)
    } else {
        Ok(next_below(high))
    }
}

/// Sample a `f64` uniformly from `[min(a, b), max(a, b))`.
///
/// See [`try_uniform_float`] for the algorithm.
///
/// # Panics
///
/// If `a == b`, or either bound is not finite.
///
/// # Example
///
/// ```
/// use rand_gen::SplitMix64;
/// use rand_gen::distributions::uniform_float;
///
/// let mut rng = SplitMix64::new(3);
/// let x = uniform_float(&mut rng, 2.5, -2.5);
/// assert!(-2.5 <= x && x < 2.5);
/// ```
#[inline]
pub fn uniform_float<G: Generator + ?Sized>(rng: &mut G, a: f64, b: f64) -> f64 {
    try_uniform_float(rng, a, b).unwrap_or_else(|e| panic!("uniform_float: {}", e))
}

/// Sample a `f64` uniformly from `[0, 1)`.
///
/// This is `uniform_float(rng, 0.0, 1.0)`, the default when no bound is
/// given.
#[inline]
pub fn unit_float<G: Generator + ?Sized>(rng: &mut G) -> f64 {
    let value = unit(rng);
    if value < 1.0 {
        value
    } else {
        next_below(1.0)
    }
}

/// Sample a `f64` uniformly between `0` and `a`: `[0, a)` for positive `a`,
/// `[a, 0)` for negative `a`.
///
/// This is `uniform_float(rng, 0.0, a)`, the default when only one bound is
/// given.
///
/// # Panics
///
/// If `a` is zero or not finite.
#[inline]
pub fn uniform_float_to<G: Generator + ?Sized>(rng: &mut G, a: f64) -> f64 {
    try_uniform_float(rng, 0.0, a).unwrap_or_else(|e| panic!("uniform_float_to: {}", e))
}

/// One draw mapped to `[0, 1]` by dividing by the generator's maximum.
///
/// The result can only reach `1.0` through rounding.
#[inline(always)]
fn unit<G: Generator + ?Sized>(rng: &mut G) -> f64 {
    let max = rng.max_value();
    let n = rng.next_u64();
    if max == 0 {
        // A generator with a single output value.
        return 0.0;
    }
    let n = n.min(max - 1);
    n as f64 / max as f64
}

/// The largest `f64` strictly below the finite value `x`.
#[inline]
fn next_below(x: f64) -> f64 {
    if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else if x < 0.0 {
        f64::from_bits(x.to_bits() + 1)
    } else {
        -f64::from_bits(1)
    }
}

// Copyright 2026 Developers of the rand_gen project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Weighted booleans

use crate::Generator;

/// Return `true` with probability `p`.
///
/// Exactly one value is drawn and compared as a float against
/// `max_value() * p`.
///
/// `p` is not validated: `p <= 0` (or NaN) always yields `false` and
/// `p >= 1` always yields `true`.
///
/// # Example
///
/// ```
/// use rand_gen::SplitMix64;
/// use rand_gen::distributions::boolean;
///
/// let mut rng = SplitMix64::new(1);
/// assert!(!boolean(&mut rng, 0.0));
/// assert!(boolean(&mut rng, 1.0));
/// ```
#[inline]
pub fn boolean<G: Generator + ?Sized>(rng: &mut G, p: f64) -> bool {
    let threshold = rng.max_value() as f64 * p;
    let n = rng.next_u64();
    // `u64::MAX as f64` rounds up to 2^64, so draws near the top would
    // compare equal to the threshold for p = 1.
    p >= 1.0 || (n as f64) < threshold
}

/// Return `true` with probability one half.
#[inline]
pub fn coin<G: Generator + ?Sized>(rng: &mut G) -> bool {
    boolean(rng, 0.5)
}

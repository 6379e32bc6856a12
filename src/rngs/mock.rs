// Copyright 2026 Developers of the rand_gen project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mock generator

use crate::Generator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mock generator yielding very predictable output
///
/// This generates an arithmetic sequence (i.e. adds a constant each step)
/// modulo `max + 1`, so every output lies in `[0, max]`. If the increment is
/// 0 the generator yields a constant.
///
/// A small `max` is useful to exercise the rejection and clamping paths of
/// the distributions, which are practically unreachable with a full 64-bit
/// generator.
///
/// # Example
///
/// ```
/// use rand_gen::Generator;
/// use rand_gen::rngs::mock::StepGenerator;
///
/// let mut step = StepGenerator::new(8, 1, 9);
/// let sample: [u64; 3] = core::array::from_fn(|_| step.next_u64());
/// assert_eq!(sample, [8, 9, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepGenerator {
    v: u64,
    a: u64,
    max: u64,
}

impl StepGenerator {
    /// Create a `StepGenerator`, yielding an arithmetic sequence starting
    /// with `initial` and incremented by `increment` each time, wrapping
    /// around after `max`.
    ///
    /// # Panics
    ///
    /// If `initial > max`.
    pub fn new(initial: u64, increment: u64, max: u64) -> Self {
        assert!(initial <= max, "StepGenerator: initial value exceeds max");
        StepGenerator {
            v: initial,
            a: increment,
            max,
        }
    }

    #[inline]
    fn wrap(&self, x: u128) -> u64 {
        (x % (u128::from(self.max) + 1)) as u64
    }
}

impl Generator for StepGenerator {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let res = self.v;
        self.v = self.wrap(u128::from(self.v) + u128::from(self.a));
        res
    }

    #[inline]
    fn max_value(&self) -> u64 {
        self.max
    }

    /// Restart the sequence at `seed` (reduced modulo `max + 1`).
    #[inline]
    fn seed(&mut self, seed: u64) {
        self.v = self.wrap(u128::from(seed));
    }
}

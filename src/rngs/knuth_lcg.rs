// Copyright 2026 Developers of the rand_gen project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Knuth's 64-bit linear congruential generator

use core::fmt;

use crate::Generator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Multiplier and increment of Knuth's MMIX generator.
const MULTIPLIER: u64 = 6364136223846793005;
const INCREMENT: u64 = 1442695040888963407;

/// A 64-bit linear congruential generator using the constants of Knuth's
/// MMIX.
///
/// Each draw computes `state = state * 6364136223846793005 +
/// 1442695040888963407 (mod 2^64)` and returns the new state. The increment
/// is odd, so every seed (zero included) starts a sequence of full period
/// 2<sup>64</sup>.
///
/// This generator is very fast but its low-order bits have short periods
/// (bit `k` has period 2<sup>k+1</sup>). The distributions in this crate
/// only ever divide the output, which uses the high bits, so they are not
/// affected; code using the raw output with `%` or masks is.
///
/// # Example
///
/// ```
/// use rand_gen::{Generator, KnuthLcg};
///
/// let mut rng = KnuthLcg::new(42);
/// assert_eq!(rng.next_u64(), 10481999410520546993);
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnuthLcg {
    state: u64,
}

impl KnuthLcg {
    /// Construct a generator whose state is `seed`.
    #[inline]
    pub const fn new(seed: u64) -> Self {
        KnuthLcg { state: seed }
    }
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for KnuthLcg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KnuthLcg {{}}")
    }
}

impl Generator for KnuthLcg {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    #[inline(always)]
    fn max_value(&self) -> u64 {
        u64::MAX
    }

    #[inline]
    fn seed(&mut self, seed: u64) {
        self.state = seed;
    }
}

#[cfg(feature = "rand_core")]
impl_rand_core!(KnuthLcg);

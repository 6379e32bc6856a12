// Copyright 2026 Developers of the rand_gen project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The SplitMix64 generator

use core::fmt;

use crate::Generator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const PHI: u64 = 0x9e3779b97f4a7c15;

/// A SplitMix64 random number generator.
///
/// The state is a Weyl sequence (incremented by the golden-ratio constant
/// `0x9e3779b97f4a7c15` on every draw) and the output is that state passed
/// through a bijective 64-bit mixing function. Any seed, zero included, gives
/// a sequence of period 2<sup>64</sup>.
///
/// The algorithm is translated from [the `splitmix64.c` reference source
/// code](https://prng.di.unimi.it/splitmix64.c) by Sebastiano Vigna, and
/// reproduces it bit for bit.
///
/// # Example
///
/// ```
/// use rand_gen::{Generator, SplitMix64};
///
/// let mut rng = SplitMix64::new(0);
/// assert_eq!(rng.next_u64(), 0xe220a8397b1dcdaf);
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitMix64 {
    x: u64,
}

impl SplitMix64 {
    /// Construct a generator whose state is `seed`.
    ///
    /// The state is incremented before the first output is mixed, so the
    /// first value is `mix(seed + 0x9e3779b97f4a7c15)`.
    #[inline]
    pub const fn new(seed: u64) -> Self {
        SplitMix64 { x: seed }
    }
}

/// The SplitMix64 output function (Stafford's "Mix13" variant).
///
/// A bijection on `u64`: distinct inputs always give distinct outputs.
#[inline(always)]
pub(crate) fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for SplitMix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SplitMix64 {{}}")
    }
}

impl Generator for SplitMix64 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.x = self.x.wrapping_add(PHI);
        mix(self.x)
    }

    #[inline(always)]
    fn max_value(&self) -> u64 {
        u64::MAX
    }

    #[inline]
    fn seed(&mut self, seed: u64) {
        self.x = seed;
    }
}

#[cfg(feature = "rand_core")]
impl_rand_core!(SplitMix64);

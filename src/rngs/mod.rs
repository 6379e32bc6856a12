// Copyright 2026 Developers of the rand_gen project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Concrete generators.
//!
//! -   [`KnuthLcg`]: the 64-bit linear congruential generator with Knuth's
//!     MMIX constants. Tiny and fast, but the low bits are weak.
//! -   [`SplitMix64`]: a Weyl sequence passed through a 64-bit mixing
//!     function. Good statistical quality; commonly used to seed other
//!     generators.
//! -   [`mock::StepGenerator`]: an arithmetic sequence with a configurable
//!     maximum, for tests.
//!
//! With the `rand_core` feature both named generators also implement
//! `rand_core::RngCore` and `rand_core::SeedableRng`. Their 8-byte seed is
//! read little-endian and stored verbatim, exactly like
//! [`Generator::seed`](crate::Generator::seed).

/// Implement `RngCore` and `SeedableRng` by forwarding to `Generator`.
#[cfg(feature = "rand_core")]
macro_rules! impl_rand_core {
    ($ty:ident) => {
        impl rand_core::RngCore for $ty {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                // Upper half; the low bits of an LCG are weak.
                (crate::Generator::next_u64(self) >> 32) as u32
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                crate::Generator::next_u64(self)
            }

            #[inline]
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                rand_core::impls::fill_bytes_via_next(self, dest)
            }

            #[inline]
            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }

        impl rand_core::SeedableRng for $ty {
            type Seed = [u8; 8];

            #[inline]
            fn from_seed(seed: Self::Seed) -> Self {
                $ty::new(u64::from_le_bytes(seed))
            }

            /// Use `seed` as the initial state, without hashing it first.
            #[inline]
            fn seed_from_u64(seed: u64) -> Self {
                $ty::new(seed)
            }
        }
    };
}

mod knuth_lcg;
pub mod mock;
mod splitmix64;

pub use self::knuth_lcg::KnuthLcg;
pub use self::splitmix64::SplitMix64;

pub(crate) use self::splitmix64::mix;

// Copyright 2026 Developers of the rand_gen project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Small seedable random number generators.
//!
//! This crate is built around one capability, [`Generator`]: produce the
//! next integer of a deterministic sequence, report the largest value that
//! can be produced, and accept a 64-bit seed. Everything else is layered on
//! top of those three methods:
//!
//! -   [`rngs`] holds the concrete generators, [`KnuthLcg`] and
//!     [`SplitMix64`]. Each is a pure function of a single `u64` state word.
//! -   [`distributions`] maps raw draws onto a half-open float interval, an
//!     inclusive integer range (without modulo bias) or a weighted boolean.
//! -   [`seed`] derives fresh seeds from the system clock and a per-call
//!     nonce, for [`Generator::randomize`].
//!
//! The [`Rng`] extension trait exposes the distributions as methods on any
//! generator.
//!
//! ```
//! use rand_gen::{Generator, Rng, SplitMix64};
//!
//! let mut rng = SplitMix64::new(7);
//! let roll = rng.uniform_int(1, 6);
//! assert!((1..=6).contains(&roll));
//!
//! let x = rng.uniform_float(-1.0, 1.0);
//! assert!(-1.0 <= x && x < 1.0);
//! ```
//!
//! # Cryptographic security
//!
//! None of the generators here are suitable for cryptographic purposes. Both
//! are trivially predictable after observing a single output.
//!
//! # Crate features
//!
//! -   `std` (default): [`Generator::randomize`] using the system clock,
//!     forwarding for `Box<G>` and `std::error::Error` for [`Error`].
//! -   `log`: trace reseeding and entropy source failures.
//! -   `serde`: serialize generator state.
//! -   `rand_core`: implement `RngCore` and `SeedableRng` for the generators.
//! -   `getrandom`: [`seed::OsEntropy`], an operating system nonce source.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
mod log_macros;

pub mod distributions;
mod error;
mod rng;
pub mod rngs;
pub mod seed;

pub use crate::error::Error;
pub use crate::rng::Rng;
pub use crate::rngs::{KnuthLcg, SplitMix64};
pub use crate::seed::EntropySource;

/// A seedable pseudo-random number generator.
///
/// Implementations produce a deterministic sequence of raw `u64` values: for
/// a fixed seed, the same sequence of calls yields the same values on every
/// run and every platform. Drawing a value is a state transition, which is
/// why [`next_u64`] takes `&mut self`.
///
/// The distribution layer ([`distributions`], [`Rng`]) is written only in
/// terms of [`next_u64`] and [`max_value`], so any implementation of this
/// trait gets uniform floats, unbiased integers and weighted booleans for
/// free.
///
/// There is no default generator: every user picks a concrete one.
///
/// [`next_u64`]: Generator::next_u64
/// [`max_value`]: Generator::max_value
pub trait Generator {
    /// Advance the state and return the next raw value.
    ///
    /// The value is never larger than [`max_value`](Generator::max_value).
    fn next_u64(&mut self) -> u64;

    /// The largest value [`next_u64`](Generator::next_u64) can return.
    ///
    /// This is a constant of the generator type.
    fn max_value(&self) -> u64;

    /// Reset the state from `seed`.
    ///
    /// Every `u64` is a valid seed, including zero.
    fn seed(&mut self, seed: u64);

    /// Reseed from the system clock and a per-call nonce.
    ///
    /// Two generators randomized within the same clock tick still receive
    /// different seeds. See [`seed::SystemEntropy`].
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    fn randomize(&mut self) {
        self.randomize_with(&mut seed::SystemEntropy::new());
    }

    /// Reseed from an arbitrary [`EntropySource`].
    fn randomize_with(&mut self, source: &mut dyn EntropySource) {
        let seed = seed::derive_seed(source);
        self.seed(seed);
    }
}

impl<'a, G: Generator + ?Sized> Generator for &'a mut G {
    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline(always)]
    fn max_value(&self) -> u64 {
        (**self).max_value()
    }

    #[inline(always)]
    fn seed(&mut self, seed: u64) {
        (**self).seed(seed)
    }
}

#[cfg(feature = "std")]
impl<G: Generator + ?Sized> Generator for Box<G> {
    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline(always)]
    fn max_value(&self) -> u64 {
        (**self).max_value()
    }

    #[inline(always)]
    fn seed(&mut self, seed: u64) {
        (**self).seed(seed)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rngs::mock::StepGenerator;

    /// A fast, statistically decent generator for unit tests.
    pub fn rng(seed: u64) -> SplitMix64 {
        SplitMix64::new(seed)
    }

    #[test]
    fn test_forward_through_mut_ref() {
        fn draw_and_reseed<G: Generator>(mut g: G, seed: u64) -> (u64, u64) {
            let x = g.next_u64();
            g.seed(seed);
            (x, g.max_value())
        }

        let mut inner = StepGenerator::new(3, 2, 100);
        assert_eq!(draw_and_reseed(&mut inner, 10), (3, 100));
        assert_eq!(inner.next_u64(), 10);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_boxed_trait_object() {
        let mut boxed: Box<dyn Generator> = Box::new(KnuthLcg::new(42));
        let mut plain = KnuthLcg::new(42);
        for _ in 0..8 {
            assert_eq!(boxed.next_u64(), plain.next_u64());
        }
        assert_eq!(boxed.max_value(), u64::MAX);

        boxed.seed(5);
        plain.seed(5);
        assert_eq!(boxed.uniform_int(-3, 3), plain.uniform_int(-3, 3));
    }

    #[test]
    fn test_randomize_with_uses_source() {
        struct Fixed;
        impl EntropySource for Fixed {
            fn timestamp(&mut self) -> u64 {
                0xff00
            }
            fn nonce(&mut self) -> u64 {
                0x00ff
            }
        }

        let mut rng = KnuthLcg::default();
        rng.randomize_with(&mut Fixed);
        assert_eq!(rng.next_u64(), KnuthLcg::new(0xffff).next_u64());
    }
}

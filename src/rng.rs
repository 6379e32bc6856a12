// Copyright 2026 Developers of the rand_gen project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Rng`] trait

use crate::distributions;
use crate::{Error, Generator};

/// An automatically-implemented extension trait on [`Generator`] providing
/// the [`distributions`] as methods.
///
/// This is a convenience layer: every method forwards to the function of the
/// same name in [`distributions`].
///
/// # Example
///
/// ```
/// use rand_gen::{KnuthLcg, Rng};
///
/// fn roll<R: Rng + ?Sized>(rng: &mut R) -> i64 {
///     rng.uniform_int(1, 6)
/// }
///
/// let mut rng = KnuthLcg::new(2024);
/// let total: i64 = (0..10).map(|_| roll(&mut rng)).sum();
/// assert!((10..=60).contains(&total));
/// ```
pub trait Rng: Generator {
    /// A `f64` in `[min(a, b), max(a, b))`.
    ///
    /// # Panics
    ///
    /// If `a == b`, or either bound is not finite. See
    /// [`distributions::try_uniform_float`].
    #[inline]
    fn uniform_float(&mut self, a: f64, b: f64) -> f64 {
        distributions::uniform_float(self, a, b)
    }

    /// A `f64` in `[min(a, b), max(a, b))`, or the reason the range cannot
    /// be sampled.
    #[inline]
    fn try_uniform_float(&mut self, a: f64, b: f64) -> Result<f64, Error> {
        distributions::try_uniform_float(self, a, b)
    }

    /// A `f64` in `[0, 1)`.
    #[inline]
    fn unit_float(&mut self) -> f64 {
        distributions::unit_float(self)
    }

    /// A `f64` in `[0, a)`, or `[a, 0)` for negative `a`.
    ///
    /// # Panics
    ///
    /// If `a` is zero or not finite.
    #[inline]
    fn uniform_float_to(&mut self, a: f64) -> f64 {
        distributions::uniform_float_to(self, a)
    }

    /// An `i64` in `[min(a, b), max(a, b)]`, without modulo bias.
    ///
    /// # Panics
    ///
    /// If the range holds more integers than
    /// [`max_value`](Generator::max_value).
    #[inline]
    fn uniform_int(&mut self, a: i64, b: i64) -> i64 {
        distributions::uniform_int(self, a, b)
    }

    /// An `i64` in `[min(a, b), max(a, b)]`, or the reason the range cannot
    /// be sampled.
    #[inline]
    fn try_uniform_int(&mut self, a: i64, b: i64) -> Result<i64, Error> {
        distributions::try_uniform_int(self, a, b)
    }

    /// `true` with probability `p`.
    #[inline]
    fn boolean(&mut self, p: f64) -> bool {
        distributions::boolean(self, p)
    }

    /// `true` with probability one half.
    #[inline]
    fn coin(&mut self) -> bool {
        distributions::coin(self)
    }
}

impl<G: Generator + ?Sized> Rng for G {}

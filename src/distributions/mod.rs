// Copyright 2026 Developers of the rand_gen project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sampling derived distributions from a raw [`Generator`].
//!
//! The functions in this module are stateless and generic over any
//! [`Generator`]. They only use [`Generator::next_u64`] and
//! [`Generator::max_value`], so they work the same for a full 64-bit
//! generator and for one with a narrow output range.
//!
//! | function | result |
//! |----------|--------|
//! | [`uniform_float`] | `f64` in `[min(a, b), max(a, b))` |
//! | [`unit_float`] | `f64` in `[0, 1)` |
//! | [`uniform_float_to`] | `f64` in `[0, a)` (or `[a, 0)` for negative `a`) |
//! | [`uniform_int`] | `i64` in `[min(a, b), max(a, b)]`, unbiased |
//! | [`boolean`] | `true` with probability `p` |
//! | [`coin`] | `true` with probability `0.5` |
//!
//! The `try_` forms return an [`Error`](crate::Error) for ranges that cannot
//! be sampled; the plain forms panic on the same inputs.
//!
//! The same functions are available as methods through the
//! [`Rng`](crate::Rng) extension trait.
//!
//! [`Generator`]: crate::Generator
//! [`Generator::next_u64`]: crate::Generator::next_u64
//! [`Generator::max_value`]: crate::Generator::max_value

mod bernoulli;
mod float;
mod uniform_int;

pub use self::bernoulli::{boolean, coin};
pub use self::float::{try_uniform_float, uniform_float, uniform_float_to, unit_float};
pub use self::uniform_int::{try_uniform_int, uniform_int};

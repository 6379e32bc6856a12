// Copyright 2026 Developers of the rand_gen project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;

/// Error type returned from the `try_` sampling functions.
///
/// Every variant describes a violated precondition of the caller's range
/// arguments; generators themselves never fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The half-open float interval `[a, b)` is empty, i.e. `a == b`.
    EmptyRange,
    /// A bound, or the distance between the bounds, is NaN or infinite.
    NonFinite,
    /// The inclusive integer range holds more values than the generator can
    /// produce, so rejection sampling could never terminate.
    RangeTooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::EmptyRange => "low and high bounds are equal",
            Error::NonFinite => "non-finite range",
            Error::RangeTooLarge => "range exceeds the generator's output span",
        })
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}

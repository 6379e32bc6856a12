// Copyright 2026 Developers of the rand_gen project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Logging shims for the seeding layer.
//!
//! With the `log` feature each macro forwards to the `log` macro of the same
//! level. Without it the arguments are still type-checked, inside a closure
//! that is never called, so nothing is formatted at runtime.

#![allow(unused)]

macro_rules! log_at {
    ($level:ident, $($x:tt)*) => (
        #[cfg(feature = "log")]
        log::$level!($($x)*);

        #[cfg(not(feature = "log"))]
        let _ = || { let _ = format_args!($($x)*); };
    )
}

// Derived seeds.
macro_rules! trace { ($($x:tt)*) => (log_at!(trace, $($x)*)) }

// Clock anomalies.
macro_rules! debug { ($($x:tt)*) => (log_at!(debug, $($x)*)) }

// Entropy source failures.
macro_rules! warn { ($($x:tt)*) => (log_at!(warn, $($x)*)) }

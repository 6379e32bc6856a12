// Copyright 2026 Developers of the rand_gen project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Seeding from external entropy.
//!
//! [`Generator::randomize`](crate::Generator::randomize) seeds a generator
//! with `timestamp ^ nonce`, both taken from an [`EntropySource`]. The
//! timestamp changes between runs; the nonce makes two requests within the
//! same clock tick differ.
//!
//! The default nonce is a process-wide counter, incremented on every request
//! and scrambled with the SplitMix64 output function so that consecutive
//! nonces differ in about half their bits. Because that function is a
//! bijection, no two requests in one process ever get the same nonce.
//!
//! None of this is suitable for cryptographic use: the seed space is 64 bits
//! and the timestamp is guessable.

use core::sync::atomic::{AtomicU64, Ordering};

use crate::rngs::mix;

/// A source of the two inputs to a derived seed.
///
/// Implementations only need to make `timestamp() ^ nonce()` differ between
/// requests; neither value has to be uniformly distributed.
pub trait EntropySource {
    /// A reading of some clock, in any unit.
    fn timestamp(&mut self) -> u64;

    /// A value distinguishing this request from others made at the same
    /// timestamp.
    fn nonce(&mut self) -> u64;
}

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Take the next process-wide nonce.
///
/// Successive calls (from any thread) never return the same value.
#[inline]
pub fn counter_nonce() -> u64 {
    mix(COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Combine the readings of `source` into a seed.
pub fn derive_seed(source: &mut dyn EntropySource) -> u64 {
    let timestamp = source.timestamp();
    let nonce = source.nonce();
    let seed = timestamp ^ nonce;
    trace!("derived seed {:#018x} (timestamp {}, nonce {:#018x})", seed, timestamp, nonce);
    seed
}

/// Nanoseconds since the Unix epoch, or 0 for a clock set before it.
#[cfg(feature = "std")]
fn system_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    match SystemTime::now().duration_since(UNIX_EPOCH) {
        // Truncation keeps the fast-moving low bits.
        Ok(elapsed) => elapsed.as_nanos() as u64,
        Err(_) => {
            debug!("system clock is set before the Unix epoch; using timestamp 0");
            0
        }
    }
}

/// The system clock plus the process-wide [`counter_nonce`].
///
/// This is what [`Generator::randomize`](crate::Generator::randomize) uses.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEntropy;

#[cfg(feature = "std")]
impl SystemEntropy {
    /// Create a new `SystemEntropy`.
    pub fn new() -> Self {
        SystemEntropy
    }
}

#[cfg(feature = "std")]
impl EntropySource for SystemEntropy {
    #[inline]
    fn timestamp(&mut self) -> u64 {
        system_timestamp()
    }

    #[inline]
    fn nonce(&mut self) -> u64 {
        counter_nonce()
    }
}

/// A nonce drawn from the operating system's random number source.
///
/// The timestamp is the system clock when `std` is enabled and 0 otherwise.
/// If the operating system source fails, the process-wide
/// [`counter_nonce`] is used instead and a warning is logged.
///
/// # Example
///
/// ```
/// use rand_gen::{Generator, SplitMix64};
/// use rand_gen::seed::OsEntropy;
///
/// let mut rng = SplitMix64::default();
/// rng.randomize_with(&mut OsEntropy::new());
/// ```
#[cfg(feature = "getrandom")]
#[cfg_attr(docsrs, doc(cfg(feature = "getrandom")))]
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

#[cfg(feature = "getrandom")]
impl OsEntropy {
    /// Create a new `OsEntropy`.
    pub fn new() -> Self {
        OsEntropy
    }
}

#[cfg(feature = "getrandom")]
impl EntropySource for OsEntropy {
    fn timestamp(&mut self) -> u64 {
        #[cfg(feature = "std")]
        {
            system_timestamp()
        }
        #[cfg(not(feature = "std"))]
        {
            0
        }
    }

    fn nonce(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => u64::from_le_bytes(buf),
            Err(err) => {
                warn!("OsEntropy: getrandom failed: {}; falling back to counter nonce", err);
                counter_nonce()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct FrozenClock(u64);

    impl EntropySource for FrozenClock {
        fn timestamp(&mut self) -> u64 {
            self.0
        }
        fn nonce(&mut self) -> u64 {
            counter_nonce()
        }
    }

    #[test]
    fn test_counter_nonces_distinct() {
        let mut seen: [u64; 256] = [0; 256];
        for slot in seen.iter_mut() {
            *slot = counter_nonce();
        }
        seen.sort_unstable();
        assert!(seen.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn test_same_tick_different_seeds() {
        let mut clock = FrozenClock(1_700_000_000_000_000_000);
        let a = derive_seed(&mut clock);
        let b = derive_seed(&mut clock);
        assert_ne!(a, b);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_system_timestamp() {
        assert!(SystemEntropy::new().timestamp() > 0);
    }

    #[test]
    #[cfg(feature = "getrandom")]
    fn test_os_nonce() {
        let mut os = OsEntropy::new();
        assert_ne!(os.nonce(), os.nonce());
    }
}

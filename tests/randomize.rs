// Copyright 2026 Developers of the rand_gen project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![cfg(feature = "std")]

use rand_gen::seed::{counter_nonce, derive_seed, SystemEntropy};
use rand_gen::{EntropySource, Generator, KnuthLcg, SplitMix64};

/// A clock that never moves.
struct Stopped(u64);

impl EntropySource for Stopped {
    fn timestamp(&mut self) -> u64 {
        self.0
    }
    fn nonce(&mut self) -> u64 {
        counter_nonce()
    }
}

#[test]
fn back_to_back_instances_differ() {
    let mut a = KnuthLcg::default();
    let mut b = KnuthLcg::default();
    a.randomize();
    b.randomize();
    assert_ne!(a.next_u64(), b.next_u64());

    let mut a = SplitMix64::default();
    let mut b = SplitMix64::default();
    a.randomize();
    b.randomize();
    assert_ne!(a.next_u64(), b.next_u64());
}

#[test]
fn many_instances_in_one_tick() {
    let mut clock = Stopped(0x0123_4567_89ab_cdef);
    let mut firsts: Vec<u64> = (0..1000)
        .map(|_| {
            let mut rng = SplitMix64::default();
            rng.randomize_with(&mut clock);
            rng.next_u64()
        })
        .collect();
    firsts.sort_unstable();
    firsts.dedup();
    assert_eq!(firsts.len(), 1000);
}

#[test]
fn randomize_with_is_seed_of_derived_value() {
    struct Fixed;
    impl EntropySource for Fixed {
        fn timestamp(&mut self) -> u64 {
            0xdead_0000
        }
        fn nonce(&mut self) -> u64 {
            0x0000_beef
        }
    }

    assert_eq!(derive_seed(&mut Fixed), 0xdead_beef);
    let mut rng = KnuthLcg::new(1);
    rng.randomize_with(&mut Fixed);
    assert_eq!(rng, KnuthLcg::new(0xdead_beef));
}

#[test]
fn randomize_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let mut rng = KnuthLcg::default();
                rng.randomize_with(&mut Stopped(42));
                rng.next_u64()
            })
        })
        .collect();
    let mut firsts: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    firsts.sort_unstable();
    firsts.dedup();
    assert_eq!(firsts.len(), 8);
}

#[test]
fn system_entropy_seeds_in_turn_differ() {
    let mut source = SystemEntropy::new();
    let mut a = SplitMix64::default();
    let mut b = SplitMix64::default();
    a.randomize_with(&mut source);
    b.randomize_with(&mut source);
    assert_ne!(a, b);
    assert_ne!(a.next_u64(), b.next_u64());
}

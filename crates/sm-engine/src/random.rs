//! Random source capability
//!
//! The engine never touches a global RNG. It draws through [`RandomSource`],
//! so tests can script exact reels and replays stay reproducible.

use std::collections::VecDeque;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Produces uniform symbol indices
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. `bound` is at least 1.
    fn next_index(&mut self, bound: u8) -> u8;
}

/// Adapter for any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ChaCha8Rng> {
    /// Reproducible source for replays and simulations
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::new(ChaCha8Rng::from_os_rng())
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_index(&mut self, bound: u8) -> u8 {
        self.rng.random_range(0..bound.max(1))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, bound: u8) -> u8 {
        (**self).next_index(bound)
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Values are reduced modulo the requested bound so a script can never
/// produce an out-of-range reel.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<u8>,
    queue: VecDeque<u8>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = u8>) -> Self {
        let script: Vec<u8> = script.into_iter().collect();
        Self {
            queue: script.iter().copied().collect(),
            script,
        }
    }

    /// Every spin lands three of `index`
    pub fn always_matching(index: u8) -> Self {
        Self::new([index, index, index])
    }

    /// Every spin lands `0, 1, 2`
    pub fn always_losing() -> Self {
        Self::new([0, 1, 2])
    }

    /// Append one spin's worth of reels
    pub fn push_spin(&mut self, reels: [u8; 3]) {
        self.queue.extend(reels);
        self.script.extend(reels);
    }

    /// Draws left before the script cycles
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: u8) -> u8 {
        if self.queue.is_empty() {
            self.queue.extend(self.script.iter().copied());
        }
        let value = self.queue.pop_front().unwrap_or(0);
        value % bound.max(1)
    }
}

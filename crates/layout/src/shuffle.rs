//! Random permutation source for the randomized arrangement strategy.

use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces a permutation of `len` items by issuing swaps.
pub trait Shuffle {
    fn shuffle(&mut self, len: usize, swap: &mut dyn FnMut(usize, usize));
}

pub fn shuffle_slice<S: Shuffle + ?Sized, T>(shuffle: &mut S, items: &mut [T]) {
    let len = items.len();
    shuffle.shuffle(len, &mut |i, j| items.swap(i, j));
}

/// Fisher-Yates over a seedable [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededShuffle {
    rng: StdRng,
}

impl SeededShuffle {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Shuffle for SeededShuffle {
    fn shuffle(&mut self, len: usize, swap: &mut dyn FnMut(usize, usize)) {
        for i in (1..len).rev() {
            let j = self.rng.random_range(0..=i);
            swap(i, j);
        }
    }
}

/// A shuffle service shared between concurrent layout runs.
#[derive(Debug)]
pub struct SharedShuffle<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> SharedShuffle<S> {
    pub fn new(shuffle: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(shuffle)),
        }
    }
}

impl<S> Clone for SharedShuffle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Shuffle> Shuffle for SharedShuffle<S> {
    fn shuffle(&mut self, len: usize, swap: &mut dyn FnMut(usize, usize)) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.shuffle(len, swap);
    }
}

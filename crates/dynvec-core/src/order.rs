//! Reordering: predicate-driven sort and uniform shuffle.
//!
//! Shuffles draw from a process-wide [`ChaCha8Rng`] that is seeded
//! exactly once, on first use, from OS entropy (or from
//! [`seed_process_rng`] if that is called first). Creating containers
//! never touches the generator.

use std::cmp::Ordering;
use std::sync::{Mutex, OnceLock};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::vector::DynamicArray;
use crate::Item;

static PROCESS_RNG: OnceLock<Mutex<ChaCha8Rng>> = OnceLock::new();

fn process_rng() -> &'static Mutex<ChaCha8Rng> {
    PROCESS_RNG.get_or_init(|| Mutex::new(ChaCha8Rng::from_rng(&mut rand::rng())))
}

/// Seed the process-wide shuffle generator.
///
/// Only the first seeding wins: returns `false` if the generator was
/// already initialised (explicitly or by an earlier shuffle).
pub fn seed_process_rng(seed: u64) -> bool {
    PROCESS_RNG
        .set(Mutex::new(ChaCha8Rng::seed_from_u64(seed)))
        .is_ok()
}

/// Build a total ordering from an "a goes before b" predicate.
///
/// `Less` if `before(a, b)`, `Greater` if `before(b, a)`, else `Equal`.
pub fn ordering_from_predicate<F>(before: &mut F, a: Item, b: Item) -> Ordering
where
    F: FnMut(Item, Item) -> bool,
{
    if before(a, b) {
        Ordering::Less
    } else if before(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl DynamicArray {
    /// Sort ascending. Stable.
    pub fn sort(&mut self) {
        self.as_mut_slice().sort();
    }

    /// Stable sort where `before(a, b)` means `a` belongs ahead of `b`.
    ///
    /// Elements for which neither `before(a, b)` nor `before(b, a)` holds
    /// keep their relative order.
    pub fn sort_by_predicate<F>(&mut self, mut before: F)
    where
        F: FnMut(Item, Item) -> bool,
    {
        self.as_mut_slice()
            .sort_by(|&a, &b| ordering_from_predicate(&mut before, a, b));
    }

    /// Uniformly permute the elements using the process-wide generator.
    pub fn shuffle(&mut self) {
        // A poisoned lock only means another shuffle panicked mid-draw;
        // the generator state is still usable.
        let mut rng = process_rng()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.shuffle_with(&mut *rng);
    }

    /// Uniformly permute the elements (Fisher–Yates) with `rng`.
    pub fn shuffle_with<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.as_mut_slice().shuffle(rng);
    }
}

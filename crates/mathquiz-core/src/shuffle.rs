//! Unbiased in-place shuffling.

use rand::Rng;

/// Fisher–Yates shuffle.
///
/// Walks `i` from `len - 1` down to 1 and swaps element `i` with a uniformly
/// chosen index in `[0, i]`, so every permutation is equally likely given a
/// fair random source.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

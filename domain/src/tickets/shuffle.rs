//! Injectable randomness for ticket assembly.

/// Source of uniform random indices
///
/// Production code wires in a real generator; tests use
/// [`FixedSequenceSource`] to make shuffles observable.
pub trait ShuffleSource {
    /// A uniformly distributed index in `0..=upper`
    fn index_up_to(&mut self, upper: usize) -> usize;
}

/// Fisher–Yates shuffle: for `i` from the last index down to 1, swap
/// element `i` with the element at `index_up_to(i)`.
pub fn shuffle_in_place<T>(items: &mut [T], source: &mut dyn ShuffleSource) {
    for i in (1..items.len()).rev() {
        let j = source.index_up_to(i).min(i);
        items.swap(i, j);
    }
}

/// Positions `0..len` in shuffled order
pub fn shuffled_indices(len: usize, source: &mut dyn ShuffleSource) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    shuffle_in_place(&mut indices, source);
    indices
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Draws larger than the requested bound are clamped to it, so an empty
/// sequence leaves every element in place.
#[derive(Debug, Clone, Default)]
pub struct FixedSequenceSource {
    draws: Vec<usize>,
    position: usize,
}

impl FixedSequenceSource {
    pub fn new(draws: Vec<usize>) -> Self {
        Self { draws, position: 0 }
    }

    /// A source that never moves anything
    pub fn identity() -> Self {
        Self::default()
    }
}

impl ShuffleSource for FixedSequenceSource {
    fn index_up_to(&mut self, upper: usize) -> usize {
        if self.draws.is_empty() {
            return upper;
        }
        let draw = self.draws[self.position % self.draws.len()];
        self.position += 1;
        draw.min(upper)
    }
}

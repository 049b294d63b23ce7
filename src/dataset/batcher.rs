/// Random batching of samples into mosaics' worth of data
///
/// Batches are drawn one at a time: each draw picks `min(remaining, size)`
/// samples uniformly at random, without replacement, from the pool that is
/// left. The last batch is padded with placeholders so every batch holds
/// exactly `size` entries.
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use super::loader::Sample;

/// One page's worth of entries; `None` is a padding placeholder
pub type Batch = Vec<Option<Sample>>;

pub struct Batcher<R = StdRng> {
    size: usize,
    rng: R,
}

impl Batcher<StdRng> {
    /// Entropy seeded unless a seed is given
    pub fn new(size: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(size, rng)
    }
}

impl<R: Rng> Batcher<R> {
    pub fn with_rng(size: usize, rng: R) -> Self {
        Self { size: size.max(1), rng }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Split `samples` into randomly composed batches
    ///
    /// No samples gives no batches rather than one empty batch.
    pub fn batch(&mut self, samples: Vec<Sample>) -> Vec<Batch> {
        let mut pool = samples;
        let mut batches = Vec::with_capacity(pool.len().div_ceil(self.size));

        while !pool.is_empty() {
            let amount = pool.len().min(self.size);
            let picks = index::sample(&mut self.rng, pool.len(), amount);

            let mut remaining: Vec<Option<Sample>> = pool.into_iter().map(Some).collect();
            let mut batch: Batch = picks.iter().map(|i| remaining[i].take()).collect();
            batch.resize(self.size, None);

            pool = remaining.into_iter().flatten().collect();
            batches.push(batch);
        }

        batches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::label::Label;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn samples(count: usize) -> Vec<Sample> {
        (0..count)
            .map(|i| Sample {
                image: PathBuf::from(format!("img_{i:03}.jpg")),
                label: if i % 2 == 0 { Label::Clear } else { Label::Clouds },
            })
            .collect()
    }

    #[test]
    fn test_empty_input_gives_no_batches() {
        let mut batcher = Batcher::new(9, Some(1));
        assert!(batcher.batch(Vec::new()).is_empty());
    }

    proptest! {
        #[test]
        fn coverage_and_padding(count in 0usize..=60, size in 1usize..=12, seed in any::<u64>()) {
            let input = samples(count);
            let batches = Batcher::new(size, Some(seed)).batch(input.clone());

            prop_assert_eq!(batches.len(), count.div_ceil(size));
            prop_assert!(batches.iter().all(|b| b.len() == size));

            // Samples are distinct, so equal length plus equal sets means each appears once
            let drawn: Vec<&Sample> = batches.iter().flatten().flatten().collect();
            prop_assert_eq!(drawn.len(), count);
            let unique: HashSet<&Sample> = drawn.iter().copied().collect();
            let expected: HashSet<&Sample> = input.iter().collect();
            prop_assert_eq!(unique, expected);

            // Only the tail of the last batch is padding
            let placeholders = batches.iter().flatten().filter(|e| e.is_none()).count();
            prop_assert_eq!(placeholders, batches.len() * size - count);
        }
    }

    #[test]
    fn test_placeholders_only_pad_the_tail() {
        let mut batcher = Batcher::new(9, Some(7));
        let batches = batcher.batch(samples(10));

        assert!(batches[0].iter().all(Option::is_some));
        assert!(batches[1][0].is_some());
        assert!(batches[1][1..].iter().all(Option::is_none));
    }

    #[test]
    fn test_same_seed_same_batches() {
        let a = Batcher::new(4, Some(42)).batch(samples(11));
        let b = Batcher::new(4, Some(42)).batch(samples(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_batches_are_shuffled() {
        // With 50 samples a seeded draw matching input order would be absurd
        let input = samples(50);
        let batches = Batcher::new(50, Some(3)).batch(input.clone());
        let drawn: Vec<Sample> = batches[0].iter().flatten().cloned().collect();
        assert_ne!(drawn, input);
    }

    #[test]
    fn test_zero_size_is_clamped() {
        let mut batcher = Batcher::new(0, Some(0));
        assert_eq!(batcher.size(), 1);
        assert_eq!(batcher.batch(samples(3)).len(), 3);
    }
}

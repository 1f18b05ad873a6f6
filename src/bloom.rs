use crate::error::ConfigError;
use crate::hash::{
    HashFunction, default_hash_function, optimal_bit_vector_size,
    optimal_num_hashes,
};
use bitvec::{bitvec, order::Lsb0, vec::BitVec};
use derive_builder::Builder;

/// Capacity-oriented configuration for [`BloomFilter::with_config`].
///
/// Instead of picking a bit count and hash count by hand, specify the
/// expected number of elements and the target false positive rate; the
/// optimal `m` and `k` are derived from those.
#[derive(Clone, Debug, Builder)]
#[builder(pattern = "owned")]
pub struct BloomConfig {
    /// Expected number of elements
    #[builder(default = "10_000")]
    pub capacity: usize,

    /// Target false positive rate (0.0 to 1.0)
    #[builder(default = "0.01")]
    pub false_positive_rate: f64,

    /// Hash function used to derive bit indices
    #[builder(default = "default_hash_function")]
    pub hash_function: HashFunction,
}

impl BloomConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.false_positive_rate <= 0.0 || self.false_positive_rate >= 1.0 {
            return Err(ConfigError::InvalidFalsePositiveRate {
                rate: self.false_positive_rate,
            });
        }
        Ok(())
    }
}

/// Probabilistic set-membership filter with one-sided error.
///
/// An item that was added always reports present; an item that was never
/// added may report present with probability roughly `(1 - e^(-kn/m))^k`
/// after `n` insertions. Bits are only ever set, never cleared, so there
/// is no delete and no resize.
///
/// # Example
///
/// ```
/// use log_sketch_rs::BloomFilter;
///
/// let mut filter = BloomFilter::new(1000, 3).unwrap();
/// filter.add(b"password123");
///
/// assert!(filter.contains(b"password123"));
/// ```
pub struct BloomFilter {
    size: usize,
    num_hashes: usize,
    bits: BitVec<usize, Lsb0>,
    hash_function: HashFunction,
}

impl BloomFilter {
    /// Create a filter with `size` bits and `num_hashes` hash derivations
    /// per operation, all bits unset.
    pub fn new(size: usize, num_hashes: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if num_hashes == 0 {
            return Err(ConfigError::ZeroHashes);
        }

        Ok(Self {
            size,
            num_hashes,
            bits: bitvec![0; size],
            hash_function: default_hash_function,
        })
    }

    /// Create a filter sized for the configured capacity and target
    /// false positive rate.
    pub fn with_config(config: BloomConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let size =
            optimal_bit_vector_size(config.capacity, config.false_positive_rate);
        let num_hashes = optimal_num_hashes(config.capacity, size);

        Ok(Self {
            size,
            num_hashes,
            bits: bitvec![0; size],
            hash_function: config.hash_function,
        })
    }

    /// Add an item. Re-adding an already-present item changes nothing.
    pub fn add(&mut self, item: &[u8]) {
        for idx in (self.hash_function)(item, self.num_hashes, self.size) {
            self.bits.set(idx as usize, true);
        }
    }

    /// Check whether an item might have been added.
    ///
    /// `false` is definitive; `true` may be a false positive.
    pub fn contains(&self, item: &[u8]) -> bool {
        (self.hash_function)(item, self.num_hashes, self.size)
            .into_iter()
            .all(|idx| self.bits[idx as usize])
    }

    /// Total bit count (m).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Hash derivations per operation (k).
    pub fn num_hashes(&self) -> usize {
        self.num_hashes
    }

    /// Fraction of bits currently set.
    pub fn fill_ratio(&self) -> f64 {
        self.bits.count_ones() as f64 / self.size as f64
    }
}

impl std::fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter {{ size: {}, num_hashes: {}, fill_ratio: {:.4} }}",
            self.size,
            self.num_hashes,
            self.fill_ratio()
        )
    }
}

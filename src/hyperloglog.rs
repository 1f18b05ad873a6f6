use crate::error::ConfigError;
use crate::hash::hash_murmur32;

/// Lowest supported precision (16 registers).
pub const MIN_PRECISION: u8 = 4;
/// Highest supported precision (262144 registers).
pub const MAX_PRECISION: u8 = 18;

const HASH_BITS: u8 = 32;

/// HyperLogLog cardinality estimator.
///
/// Estimates the number of distinct items fed to [`add`](Self::add) using
/// `2^precision` one-byte registers. The relative standard error is
/// approximately `1.04 / sqrt(2^precision)`:
///
/// | Precision | Registers | Error  |
/// |-----------|-----------|--------|
/// | 10        | 1024      | ~3.25% |
/// | 12        | 4096      | ~1.63% |
/// | 14        | 16384     | ~0.81% |
///
/// # Example
///
/// ```
/// use log_sketch_rs::HyperLogLogEstimator;
///
/// let mut hll = HyperLogLogEstimator::new(12).unwrap();
/// for i in 0..10_000 {
///     hll.add(format!("10.0.{}.{}", i / 256, i % 256).as_bytes());
/// }
/// let estimate = hll.estimate();
/// assert!(estimate > 9000.0 && estimate < 11000.0);
/// ```
#[derive(Clone)]
pub struct HyperLogLogEstimator {
    precision: u8,
    registers: Vec<u8>,
}

impl HyperLogLogEstimator {
    /// Create an estimator with `2^precision` zeroed registers.
    ///
    /// Precision must lie in [`MIN_PRECISION`]`..=`[`MAX_PRECISION`].
    pub fn new(precision: u8) -> Result<Self, ConfigError> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
            return Err(ConfigError::PrecisionOutOfRange {
                precision,
                min: MIN_PRECISION,
                max: MAX_PRECISION,
            });
        }

        Ok(Self {
            precision,
            registers: vec![0u8; 1 << precision],
        })
    }

    /// Observe an item. Repeated identical items leave the registers
    /// unchanged after the first call.
    pub fn add(&mut self, item: &[u8]) {
        let hash = hash_murmur32(item, 0);

        // Low p bits select the register, the rest form the residual
        let idx = (hash & (self.registers.len() as u32 - 1)) as usize;
        let residual = hash >> self.precision;

        // Rank: position of the lowest set bit of the residual, 1-based.
        // An all-zero residual gets the maximal rank for its width.
        let rank = if residual == 0 {
            HASH_BITS - self.precision + 1
        } else {
            residual.trailing_zeros() as u8 + 1
        };

        if rank > self.registers[idx] {
            self.registers[idx] = rank;
        }
    }

    /// Estimate the number of distinct items observed so far.
    ///
    /// Pure read; safe to interleave with [`add`](Self::add). A freshly
    /// constructed estimator returns exactly 0.
    pub fn estimate(&self) -> f64 {
        let b = self.registers.len() as f64;
        let raw = self.raw_estimate();

        // Small range: linear counting over the still-zero registers
        if raw <= 2.5 * b {
            let zeros = self.count_zeros();
            if zeros > 0 {
                return b * (b / zeros as f64).ln();
            }
            return raw;
        }

        // Large range: correct for 32-bit hash saturation
        let two32 = (1u64 << HASH_BITS) as f64;
        if raw > two32 / 30.0 {
            return -two32 * (1.0 - raw / two32).ln();
        }

        raw
    }

    /// Precision parameter (p).
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Number of registers (b = 2^p).
    pub fn num_registers(&self) -> usize {
        self.registers.len()
    }

    /// Relative standard error of the estimate, `1.04 / sqrt(b)`.
    pub fn relative_error(&self) -> f64 {
        1.04 / (self.registers.len() as f64).sqrt()
    }

    /// Register memory in bytes.
    pub fn size_bytes(&self) -> usize {
        self.registers.len()
    }

    /// Harmonic-mean estimate before range corrections.
    fn raw_estimate(&self) -> f64 {
        let b = self.registers.len() as f64;
        let sum: f64 = self.registers.iter().map(|&r| 2f64.powi(-(r as i32))).sum();
        self.alpha() * b * b / sum
    }

    /// Bias-correction constant for the register count.
    fn alpha(&self) -> f64 {
        match self.registers.len() {
            16 => 0.673,
            32 => 0.697,
            64 => 0.709,
            b => 0.7213 / (1.0 + 1.079 / b as f64),
        }
    }

    fn count_zeros(&self) -> usize {
        self.registers.iter().filter(|&&r| r == 0).count()
    }
}

impl std::fmt::Debug for HyperLogLogEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HyperLogLogEstimator {{ precision: {}, registers: {}, estimate: {:.1} }}",
            self.precision,
            self.registers.len(),
            self.estimate()
        )
    }
}

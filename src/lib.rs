//! Approximate membership and cardinality sketches for log analysis.
//!
//! This crate provides the two probabilistic data structures most useful
//! for summarizing large, repetitive datasets without storing every
//! element, plus the ingestion glue for feeding them from access logs:
//!
//! * [`BloomFilter`] — fixed-size bit vector with a seeded hash family.
//!   Answers "was this item added?" with no false negatives and a tunable
//!   false positive rate. Used here to flag reused passwords.
//! * [`HyperLogLogEstimator`] — register-based distinct-count estimator
//!   with the standard small/large-range bias corrections. Used here to
//!   estimate unique IP addresses in a log stream.
//!
//! Both structures are insert-only, single-threaded, and purely in-memory;
//! wrap them in a lock if you share them across threads.
//!
//! # Quick start
//!
//! ```rust
//! use log_sketch_rs::{BloomFilter, HyperLogLogEstimator};
//!
//! let mut seen = BloomFilter::new(1000, 3)?;
//! seen.add(b"password123");
//! assert!(seen.contains(b"password123"));
//!
//! let mut uniques = HyperLogLogEstimator::new(10)?;
//! for ip in ["10.0.0.1", "10.0.0.2", "10.0.0.1"] {
//!     uniques.add(ip.as_bytes());
//! }
//! let unique_ips = uniques.estimate();
//! assert!(unique_ips > 0.0 && unique_ips < 4.0);
//! # Ok::<(), log_sketch_rs::ConfigError>(())
//! ```
//!
//! # Log ingestion
//!
//! [`load_ip_addresses`] streams a log file and extracts one dotted-quad
//! literal per matching line; lines without one are dropped. Missing
//! files, encoding failures, and empty result sets surface as distinct
//! [`IngestError`] variants.

mod bloom;
mod common;
mod error;
mod hash;
mod hyperloglog;
mod ingest;

pub use bloom::{
    BloomConfig, BloomConfigBuilder, BloomConfigBuilderError, BloomFilter,
};
pub use common::{bits2hr, bytes2hr};
pub use error::ConfigError;
pub use hash::{
    HashFunction, default_hash_function, optimal_bit_vector_size,
    optimal_num_hashes,
};
pub use hyperloglog::{HyperLogLogEstimator, MAX_PRECISION, MIN_PRECISION};
pub use ingest::{
    IngestError, exact_unique_count, extract_ipv4, load_ip_addresses,
};

mod common;

use common::generate_ip_like_strings;
use log_sketch_rs::{ConfigError, HyperLogLogEstimator};

// Estimates should land within ~3 standard errors of the true count
fn assert_within_expected_error(estimate: f64, truth: usize, precision: u8) {
    let rse = 1.04 / ((1usize << precision) as f64).sqrt();
    let tolerance = (3.0 * rse * truth as f64).max(5.0);
    let diff = (estimate - truth as f64).abs();
    assert!(
        diff <= tolerance,
        "p={precision}, n={truth}: estimate {estimate:.0} off by {diff:.0}, tolerance {tolerance:.0}"
    );
}

#[test]
fn test_accuracy_small_range() {
    for precision in [10u8, 14] {
        let mut hll = HyperLogLogEstimator::new(precision).unwrap();
        for ip in generate_ip_like_strings(100) {
            hll.add(ip.as_bytes());
        }
        assert_within_expected_error(hll.estimate(), 100, precision);
    }
}

#[test]
fn test_accuracy_mid_range() {
    for precision in [10u8, 14] {
        let mut hll = HyperLogLogEstimator::new(precision).unwrap();
        for ip in generate_ip_like_strings(10_000) {
            hll.add(ip.as_bytes());
        }
        assert_within_expected_error(hll.estimate(), 10_000, precision);
    }
}

#[test]
fn test_accuracy_large_range() {
    for precision in [10u8, 14] {
        let mut hll = HyperLogLogEstimator::new(precision).unwrap();
        for ip in generate_ip_like_strings(1_000_000) {
            hll.add(ip.as_bytes());
        }
        assert_within_expected_error(hll.estimate(), 1_000_000, precision);
    }
}

#[test]
fn test_unique_ip_scenario() {
    let mut hll = HyperLogLogEstimator::new(10).unwrap();
    for ip in generate_ip_like_strings(10_000) {
        hll.add(ip.as_bytes());
    }

    let estimate = hll.estimate();
    assert!(
        (9000.0..=11000.0).contains(&estimate),
        "estimate {estimate:.0} outside [9000, 11000]"
    );
}

#[test]
fn test_zero_state_estimate() {
    let hll = HyperLogLogEstimator::new(14).unwrap();
    assert_eq!(hll.estimate(), 0.0);
}

#[test]
fn test_config_rejection() {
    assert!(matches!(
        HyperLogLogEstimator::new(3).unwrap_err(),
        ConfigError::PrecisionOutOfRange { precision: 3, .. }
    ));
    assert!(matches!(
        HyperLogLogEstimator::new(19).unwrap_err(),
        ConfigError::PrecisionOutOfRange { precision: 19, .. }
    ));
}

#[test]
fn test_determinism_across_instances() {
    let items = generate_ip_like_strings(5000);

    let mut first = HyperLogLogEstimator::new(12).unwrap();
    let mut second = HyperLogLogEstimator::new(12).unwrap();
    for ip in &items {
        first.add(ip.as_bytes());
        second.add(ip.as_bytes());
    }

    assert_eq!(first.estimate(), second.estimate());
}

#[test]
fn test_estimate_interleaves_with_add() {
    let mut hll = HyperLogLogEstimator::new(12).unwrap();
    let mut last = 0.0;

    for (i, ip) in generate_ip_like_strings(20_000).into_iter().enumerate() {
        hll.add(ip.as_bytes());
        if i % 5000 == 0 {
            let estimate = hll.estimate();
            // Registers are monotonic; allow slack for the linear
            // counting to raw-estimate crossover
            assert!(estimate >= last * 0.85);
            last = estimate;
        }
    }
}

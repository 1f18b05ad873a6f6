#![allow(dead_code)]

use rand::{Rng, distr::Alphanumeric};

// Helper function to generate random string data
pub fn generate_random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

// Helper to create test data
pub fn generate_test_data(count: usize) -> Vec<String> {
    (0..count).map(|_| generate_random_string(32)).collect()
}

// Helper to generate distinct IP-like strings (distinct for count < 2^24)
pub fn generate_ip_like_strings(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            format!("10.{}.{}.{}", i >> 16 & 0xff, i >> 8 & 0xff, i & 0xff)
        })
        .collect()
}

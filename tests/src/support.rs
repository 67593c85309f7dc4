//! Shared fixtures for integration tests and benchmarks

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

/// Install a test-writer fmt subscriber once per process
///
/// Honours `RUST_LOG`; defaults to `warn`. Later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// `count` distinct random 16-byte elements, reproducible from `seed`
pub fn random_elements(seed: u64, count: usize) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(count);
    let mut elements = Vec::with_capacity(count);

    while elements.len() < count {
        let element: [u8; 16] = rng.gen();
        if seen.insert(element) {
            elements.push(element.to_vec());
        }
    }
    elements
}

/// Elements that cannot collide with [`random_elements`] output
///
/// Random elements are 16 bytes; these are 20.
pub fn absent_elements(count: usize) -> impl Iterator<Item = Vec<u8>> {
    (0..count as u64).map(|i| {
        let mut element = b"abs:".to_vec();
        element.extend_from_slice(&i.to_le_bytes());
        element.extend_from_slice(&(!i).to_le_bytes());
        element
    })
}

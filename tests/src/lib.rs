//! # Seeded-Bloom Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/
//! │   ├── support.rs          # Tracing setup, element generators
//! │   └── integration/        # End-to-end filter scenarios
//! │       ├── lifecycle.rs
//! │       ├── false_positive_rate.rs
//! │       └── hash_primitives.rs
//! └── benches/
//!     └── filter_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p seeded-bloom-tests
//!
//! # With filter logs
//! RUST_LOG=seeded_bloom=trace cargo test -p seeded-bloom-tests -- --nocapture
//!
//! # Benchmarks
//! cargo bench -p seeded-bloom-tests
//! ```

pub mod integration;
pub mod support;

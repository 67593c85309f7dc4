//! Filter configuration and validation
//!
//! # Example
//!
//! ```
//! use seeded_bloom::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .bit_capacity(1000)
//!     .expected_elements(100)
//!     .seed(42)
//!     .build()
//!     .expect("Valid config");
//!
//! assert_eq!(config.hash_count().unwrap(), 7);
//! ```

use serde::{Deserialize, Serialize};

use super::parameters;
use crate::error::FilterError;

/// Bloom filter configuration
///
/// `seed` initialises the seed generator. `None` means the wall clock is used
/// and the resulting filter is not reproducible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Total number of addressable bits (m)
    pub bit_capacity: usize,
    /// Anticipated number of insertions (n)
    pub expected_elements: usize,
    /// Explicit seed for the seed generator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            bit_capacity: 8192, // 1 KiB
            expected_elements: 1024,
            seed: None,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(bit_capacity: usize, expected_elements: usize) -> Result<Self, FilterError> {
        let config = Self {
            bit_capacity,
            expected_elements,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.bit_capacity == 0 {
            return Err(FilterError::InvalidParameters(
                "bit_capacity cannot be 0".to_string(),
            ));
        }

        // Would divide by zero in the hash count formula
        if self.expected_elements == 0 {
            return Err(FilterError::InvalidParameters(
                "expected_elements cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Hash count a filter built from this configuration will use
    pub fn hash_count(&self) -> Result<usize, FilterError> {
        parameters::hash_count(self.bit_capacity, self.expected_elements)
    }

    /// Builder-style method to set an explicit seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    bit_capacity: Option<usize>,
    expected_elements: Option<usize>,
    seed: Option<u64>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bits in the filter
    pub fn bit_capacity(mut self, bits: usize) -> Self {
        self.bit_capacity = Some(bits);
        self
    }

    /// Set the anticipated number of insertions
    pub fn expected_elements(mut self, elements: usize) -> Self {
        self.expected_elements = Some(elements);
        self
    }

    /// Fix the seed generator's initial value
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> FilterConfig {
        let defaults = FilterConfig::default();

        FilterConfig {
            bit_capacity: self.bit_capacity.unwrap_or(defaults.bit_capacity),
            expected_elements: self.expected_elements.unwrap_or(defaults.expected_elements),
            seed: self.seed.or(defaults.seed),
        }
    }
}

//! # Integration Scenarios
//!
//! Exercise the public `seeded_bloom` API end to end.

pub mod false_positive_rate;

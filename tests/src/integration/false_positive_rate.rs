//! # Empirical False Positive Rate
//!
//! Inserting n distinct elements and probing T absent ones should give a
//! positive rate close to (1 - e^(-kn/m))^k.

#[cfg(test)]
mod tests {
    use seeded_bloom::{BloomFilter, FilterConfig, Murmur3Hash, SeededHash, SipHash13, Xxh3Hash};

    use crate::support::{absent_elements, init_tracing, random_elements};

    const PROBES: usize = 200_000;

    fn observed_rate<H: SeededHash>(filter: &BloomFilter<H>) -> f64 {
        let hits = absent_elements(PROBES)
            .filter(|element| filter.query(element))
            .count();
        hits as f64 / PROBES as f64
    }

    fn fill<H: SeededHash>(filter: &mut BloomFilter<H>, seed: u64, count: usize) {
        for element in random_elements(seed, count) {
            filter.insert(&element);
        }
    }

    #[test]
    fn test_rate_near_theory_at_expected_elements() {
        init_tracing();
        let mut filter = BloomFilter::with_seed(1000, 100, 42).unwrap();
        fill(&mut filter, 42, 100);

        let theory = filter.estimated_false_positive_rate(100);
        let observed = observed_rate(&filter);

        // theory ≈ 0.0082 for m=1000, n=100, k=7
        assert!(
            observed >= theory * 0.5 && observed <= theory * 2.0,
            "Observed FPR {} should be within 2x of theory {}",
            observed,
            theory
        );
    }

    #[test]
    fn test_rate_tracks_actual_fill() {
        // Given the bits actually set, an absent probe is positive with
        // probability fill^k
        init_tracing();
        let mut filter = BloomFilter::with_seed(4096, 400, 7).unwrap();
        fill(&mut filter, 7, 400);

        let predicted = filter.fill_ratio().powi(filter.hash_count() as i32);
        let observed = observed_rate(&filter);

        assert!(
            (observed - predicted).abs() <= predicted * 0.2,
            "Observed FPR {} should be within 20% of fill^k = {}",
            observed,
            predicted
        );
    }

    #[test]
    fn test_underfilled_filter_has_lower_rate() {
        let mut half = BloomFilter::with_seed(2000, 200, 9).unwrap();
        let mut full = BloomFilter::with_seed(2000, 200, 9).unwrap();
        fill(&mut half, 9, 100);
        fill(&mut full, 9, 200);

        let half_rate = observed_rate(&half);
        let full_rate = observed_rate(&full);

        assert!(
            half_rate < full_rate,
            "n=100 rate {} should be below n=200 rate {}",
            half_rate,
            full_rate
        );
        assert!(half_rate <= half.estimated_false_positive_rate(100) * 2.0);
    }

    #[test]
    fn test_rate_bounded_for_every_primitive() {
        let config = FilterConfig::new(1000, 100).unwrap().with_seed(2718);

        let mut xxh3 = BloomFilter::with_hasher(&config, Xxh3Hash).unwrap();
        let mut murmur = BloomFilter::with_hasher(&config, Murmur3Hash).unwrap();
        let mut sip = BloomFilter::with_hasher(&config, SipHash13).unwrap();
        fill(&mut xxh3, 1, 100);
        fill(&mut murmur, 1, 100);
        fill(&mut sip, 1, 100);

        let theory = xxh3.expected_false_positive_rate();
        for (name, observed) in [
            ("xxh3", observed_rate(&xxh3)),
            ("murmur3", observed_rate(&murmur)),
            ("siphash13", observed_rate(&sip)),
        ] {
            assert!(
                observed <= theory * 2.0,
                "{}: observed FPR {} exceeds 2x theory {}",
                name,
                observed,
                theory
            );
        }
    }
}

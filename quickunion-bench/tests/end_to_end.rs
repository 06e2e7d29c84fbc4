/// End-to-end driver tests: seeded Monte Carlo runs over every variant.
use quickunion::forest::{HeightWeighted, SizeWeighted};
use quickunion_bench::pairs::{self, Variant};
use quickunion_bench::report::PairsReport;
use quickunion_bench::timing::Benchmark;
use rand::SeedableRng;
use rand_pcg::Pcg32;

#[test]
fn every_variant_reaches_one_component() {
    for variant in Variant::all() {
        let counts = pairs::pair_counts(variant, 200, 3, 11);
        for &count in &counts {
            assert!(
                count >= 199,
                "{}: connecting 200 sites took only {count} pairs",
                variant.name()
            );
        }
    }
}

#[test]
fn same_seed_same_counts_across_variant_policies() {
    // Repeating a run with the same seed must reproduce the counts exactly,
    // whatever balancing policy is in play.
    for variant in Variant::all() {
        let a = pairs::pair_counts(variant, 300, 5, 123);
        let b = pairs::pair_counts(variant, 300, 5, 123);
        assert_eq!(a, b, "{} is not seed-deterministic", variant.name());
    }
}

#[test]
fn mean_tracks_half_n_ln_n() {
    let n = 256;
    let counts = pairs::pair_counts(Variant::Height { path_compression: true }, n, 8, 7);
    let report = PairsReport::new(
        Variant::Height { path_compression: true },
        n,
        8,
        7,
        counts,
    );
    let expected = report.expected_pairs;
    assert!(expected > 700.0 && expected < 720.0);
    assert!(
        report.mean_pairs >= (n - 1) as f64,
        "mean {} below the n-1 floor",
        report.mean_pairs
    );
    assert!(
        report.mean_pairs < 10.0 * expected,
        "mean {} implausibly far above 0.5·n·ln(n) = {expected}",
        report.mean_pairs
    );
}

#[test]
fn driver_leaves_set_fully_connected() {
    let mut rng = Pcg32::seed_from_u64(3);
    let mut set = SizeWeighted::new(128);
    let pairs = pairs::random_pairs_until_connected(&mut set, &mut rng);
    assert_eq!(set.components(), 1);
    assert!(set.connected(0, 127).unwrap());
    assert!(pairs >= 127);
}

#[test]
fn timing_harness_times_pair_generation() {
    let mut rng = Pcg32::seed_from_u64(5);
    let bench = Benchmark::new(1, 3);
    let ms = bench.run_ms(|| {
        let mut set = HeightWeighted::new(512, true);
        pairs::random_pairs_until_connected(&mut set, &mut rng);
    });
    assert!(ms >= 0.0);
}

/// Monte Carlo pair generation: union random site pairs until one component
/// remains. The pair count estimates the expected number of random unions
/// needed to fully connect n sites, which converges toward `0.5 * n * ln(n)`.
use quickunion::forest::{DepthWeighted, HeightWeighted, SizeWeighted, UnionFind};
use quickunion::policy::Balance;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use rayon::prelude::*;

/// Which union-find variant drives a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Height { path_compression: bool },
    Depth,
    Size,
}

impl Variant {
    /// Parse a CLI variant name.
    pub fn from_name(name: &str) -> Option<Variant> {
        match name {
            "height" => Some(Variant::Height {
                path_compression: true,
            }),
            "height-nopc" => Some(Variant::Height {
                path_compression: false,
            }),
            "depth" => Some(Variant::Depth),
            "size" => Some(Variant::Size),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Height {
                path_compression: true,
            } => "height",
            Variant::Height {
                path_compression: false,
            } => "height-nopc",
            Variant::Depth => "depth",
            Variant::Size => "size",
        }
    }

    /// All selectable variants, in report order.
    pub fn all() -> [Variant; 4] {
        [
            Variant::Height {
                path_compression: true,
            },
            Variant::Height {
                path_compression: false,
            },
            Variant::Depth,
            Variant::Size,
        ]
    }
}

/// Draw uniform pairs from `[0, n)` and connect them until one component
/// remains. Returns the number of pairs drawn; 0 when `n <= 1`.
pub fn random_pairs_until_connected<B: Balance>(
    set: &mut UnionFind<B>,
    rng: &mut Pcg32,
) -> u64 {
    let n = set.size();
    if n <= 1 {
        return 0;
    }
    let mut pairs = 0u64;
    while set.components() != 1 {
        let p = rng.gen_range(0..n);
        let q = rng.gen_range(0..n);
        set.connect(p, q).expect("generated sites are in range");
        pairs += 1;
    }
    pairs
}

/// One Monte Carlo run on a fresh set of the given variant.
pub fn run_once(variant: Variant, n: usize, rng: &mut Pcg32) -> u64 {
    match variant {
        Variant::Height { path_compression } => {
            let mut set = HeightWeighted::new(n, path_compression);
            random_pairs_until_connected(&mut set, rng)
        }
        Variant::Depth => {
            let mut set = DepthWeighted::new(n);
            random_pairs_until_connected(&mut set, rng)
        }
        Variant::Size => {
            let mut set = SizeWeighted::new(n);
            random_pairs_until_connected(&mut set, rng)
        }
    }
}

/// Run `runs` independent Monte Carlo trials in parallel. Run `i` is seeded
/// with `seed + i`, so a given (seed, n, variant) triple is reproducible
/// regardless of thread scheduling.
pub fn pair_counts(variant: Variant, n: usize, runs: u32, seed: u64) -> Vec<u64> {
    (0..runs)
        .into_par_iter()
        .map(|run| {
            let mut rng = Pcg32::seed_from_u64(seed.wrapping_add(run as u64));
            run_once(variant, n, &mut rng)
        })
        .collect()
}

/// Mean of a run's pair counts.
pub fn mean(counts: &[u64]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    counts.iter().sum::<u64>() as f64 / counts.len() as f64
}

/// The asymptotic expectation `0.5 * n * ln(n)` for random unions.
pub fn expected_pairs(n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    0.5 * n as f64 * (n as f64).ln()
}

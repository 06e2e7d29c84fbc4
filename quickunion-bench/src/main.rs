use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use quickunion::forest::{DepthWeighted, HeightWeighted, SizeWeighted};

use quickunion_bench::pairs::{self, Variant};
use quickunion_bench::report::{self, BenchEntry, BenchReport, PairsReport};
use quickunion_bench::timing::Benchmark;

#[derive(Parser)]
#[command(name = "quickunion-bench", about = "Union-find Monte Carlo driver and timing harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate how many random unions connect n sites.
    Pairs {
        /// Number of sites.
        #[arg(long, default_value_t = 10_000)]
        n: usize,
        /// Independent Monte Carlo runs.
        #[arg(long, default_value_t = 10)]
        runs: u32,
        /// Base RNG seed; run i uses seed + i.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Variant: height, height-nopc, depth, size.
        #[arg(long, default_value = "height")]
        variant: String,
        /// Output format: terminal, json.
        #[arg(long, default_value = "terminal")]
        format: String,
    },
    /// Time pair generation per variant in milliseconds.
    Bench {
        /// Number of sites.
        #[arg(long, default_value_t = 10_000)]
        n: usize,
        /// Measured runs.
        #[arg(long, default_value_t = 20)]
        runs: u32,
        /// Warmup runs before measuring.
        #[arg(long, default_value_t = 2)]
        warmup: u32,
        /// RNG seed.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Variant to time; all four when omitted.
        #[arg(long)]
        variant: Option<String>,
        /// Output format: terminal, json.
        #[arg(long, default_value = "terminal")]
        format: String,
    },
    /// Connect random pairs then print the forest dump.
    Show {
        /// Number of sites.
        #[arg(long, default_value_t = 10)]
        n: usize,
        /// Random connects to perform before dumping.
        #[arg(long, default_value_t = 5)]
        unions: u32,
        /// RNG seed.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Variant: height, height-nopc, depth, size.
        #[arg(long, default_value = "height")]
        variant: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Pairs {
            n,
            runs,
            seed,
            variant,
            format,
        } => cmd_pairs(n, runs, seed, &variant, &format),
        Command::Bench {
            n,
            runs,
            warmup,
            seed,
            variant,
            format,
        } => cmd_bench(n, runs, warmup, seed, variant.as_deref(), &format),
        Command::Show {
            n,
            unions,
            seed,
            variant,
        } => cmd_show(n, unions, seed, &variant),
    }
}

fn parse_variant(name: &str) -> Variant {
    Variant::from_name(name).unwrap_or_else(|| {
        eprintln!("unknown variant: {name} (expected height, height-nopc, depth, size)");
        std::process::exit(1);
    })
}

fn cmd_pairs(n: usize, runs: u32, seed: u64, variant: &str, format: &str) {
    let variant = parse_variant(variant);
    let counts = pairs::pair_counts(variant, n, runs, seed);
    let report = PairsReport::new(variant, n, runs, seed, counts);

    match format {
        "json" => println!("{}", report::to_json(&report)),
        _ => report::print_pairs_terminal(&report),
    }
}

fn cmd_bench(n: usize, runs: u32, warmup: u32, seed: u64, variant: Option<&str>, format: &str) {
    let variants: Vec<Variant> = match variant {
        Some(name) => vec![parse_variant(name)],
        None => Variant::all().to_vec(),
    };

    let bench = Benchmark::new(warmup, runs);
    let entries = variants
        .iter()
        .map(|&v| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mean_ms = bench.run_ms(|| {
                pairs::run_once(v, n, &mut rng);
            });
            BenchEntry {
                variant: v.name().to_string(),
                n,
                mean_ms,
            }
        })
        .collect();

    let report = BenchReport {
        n,
        warmup,
        runs,
        seed,
        entries,
    };

    match format {
        "json" => println!("{}", report::to_json(&report)),
        _ => report::print_bench_terminal(&report),
    }
}

fn cmd_show(n: usize, unions: u32, seed: u64, variant: &str) {
    let variant = parse_variant(variant);
    let mut rng = Pcg32::seed_from_u64(seed);

    match variant {
        Variant::Height { path_compression } => {
            let mut set = HeightWeighted::new(n, path_compression);
            random_connects(&mut set, unions, n, &mut rng);
            print!("{set}");
        }
        Variant::Depth => {
            let mut set = DepthWeighted::new(n);
            random_connects(&mut set, unions, n, &mut rng);
            print!("{set}");
        }
        Variant::Size => {
            let mut set = SizeWeighted::new(n);
            random_connects(&mut set, unions, n, &mut rng);
            print!("{set}");
        }
    }
}

fn random_connects<B: quickunion::policy::Balance>(
    set: &mut quickunion::forest::UnionFind<B>,
    unions: u32,
    n: usize,
    rng: &mut Pcg32,
) {
    use rand::Rng;
    if n == 0 {
        return;
    }
    for _ in 0..unions {
        let p = rng.gen_range(0..n);
        let q = rng.gen_range(0..n);
        set.connect(p, q).expect("generated sites are in range");
    }
}

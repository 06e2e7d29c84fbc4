/// Coarse millisecond timing harness: warmup runs followed by measured runs.
use std::time::Instant;

pub struct Benchmark {
    pub warmup: u32,
    pub runs: u32,
}

impl Benchmark {
    pub fn new(warmup: u32, runs: u32) -> Self {
        Self { warmup, runs }
    }

    /// Mean wall-clock milliseconds per measured run of `f`.
    pub fn run_ms<F: FnMut()>(&self, mut f: F) -> f64 {
        for _ in 0..self.warmup {
            f();
        }
        let runs = self.runs.max(1);
        let start = Instant::now();
        for _ in 0..runs {
            f();
        }
        start.elapsed().as_secs_f64() * 1000.0 / runs as f64
    }
}

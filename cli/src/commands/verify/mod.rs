use clap::Parser;
use complex_rs::{
    branch::{exponential, log as logarithm, point_in_branch, Branch},
    complex::{add, divide, multiply, Complex, ONE},
};
use log::{debug, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use shared::{
    config::Config,
    dtos::evaluation::{Evaluation, Outcome},
};

/// ✅ Check the arithmetic identities on random points.
#[derive(Parser, Debug)]
pub struct VerifyCommand {
    /// 🎲 Number of sampled pairs, defaults to COMPLEX_VERIFY_SAMPLES
    #[arg(short, long)]
    pub samples: Option<usize>,

    /// 🌱 Seed of the sampler
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// 📏 Components are drawn from [-range, range)
    #[arg(short, long, default_value_t = 10.0)]
    pub range: f64,

    /// 🎯 Tolerance, defaults to COMPLEX_VERIFY_TOLERANCE
    #[arg(short, long)]
    pub tolerance: Option<f64>,
}

struct Property {
    name: &'static str,
    holds: fn(Complex, Complex, f64) -> bool,
}

const PROPERTIES: [Property; 8] = [
    Property {
        name: "add-commutes",
        holds: |p, q, _| add(p, q) == add(q, p),
    },
    Property {
        name: "multiply-commutes",
        holds: |p, q, _| multiply(p, q) == multiply(q, p),
    },
    Property {
        name: "inverse",
        holds: |p, _, tolerance| match p.inverse() {
            Ok(inverse) => multiply(p, inverse).approx_eq(ONE, tolerance),
            Err(_) => p.is_origin(),
        },
    },
    Property {
        name: "conjugate",
        holds: |p, _, _| {
            p.conjugate().modulus() == p.modulus() && p.conjugate().conjugate() == p
        },
    },
    Property {
        name: "divide-round-trip",
        holds: |p, q, tolerance| match divide(p, q) {
            Ok(quotient) => multiply(quotient, q).approx_eq(p, tolerance),
            Err(_) => q.is_origin(),
        },
    },
    Property {
        name: "rotation-modulus",
        holds: |p, _, tolerance| (exponential(p.re()).modulus() - 1.0).abs() <= tolerance,
    },
    Property {
        name: "exp-log-positive",
        holds: |p, _, tolerance| exp_log_round_trip(p, Branch::Positive, tolerance),
    },
    Property {
        name: "exp-log-negative",
        holds: |p, _, tolerance| exp_log_round_trip(p, Branch::Negative, tolerance),
    },
];

// Widest range whose `-range..range` width still fits in an f64.
const MAX_RANGE: f64 = f64::MAX / 2.0;

fn exp_log_round_trip(p: Complex, branch: Branch, tolerance: f64) -> bool {
    match logarithm(p, branch) {
        Ok(value) => exponential(value).approx_eq(p, tolerance),
        Err(_) => point_in_branch(p, branch),
    }
}

impl VerifyCommand {
    pub fn run(&self, config: &Config) -> Vec<Evaluation> {
        let samples = self.samples.unwrap_or(config.verify_samples);
        let tolerance = self.tolerance.unwrap_or(config.verify_tolerance);
        let range = self.range.abs();
        let arguments = vec![
            format!("samples={}", samples),
            format!("seed={}", self.seed),
            format!("tolerance={}", tolerance),
        ];
        if !(range > 0.0 && range <= MAX_RANGE) {
            return vec![Evaluation::new(
                "verify",
                arguments,
                Outcome::Failure(format!("invalid sampling range {}", self.range)),
            )];
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut sample =
            || Complex::new(rng.gen_range(-range..range), rng.gen_range(-range..range));
        let pairs: Vec<(Complex, Complex)> = (0..samples).map(|_| (sample(), sample())).collect();
        debug!("Sampled {} pairs with seed {}", pairs.len(), self.seed);

        PROPERTIES
            .iter()
            .map(|property| {
                let failures: Vec<&(Complex, Complex)> = pairs
                    .iter()
                    .filter(|(p, q)| !(property.holds)(*p, *q, tolerance))
                    .collect();
                let outcome = match failures.first() {
                    None => Outcome::Flag(true),
                    Some((p, q)) => {
                        warn!(
                            "{} failed for {} of {} samples",
                            property.name,
                            failures.len(),
                            samples
                        );
                        Outcome::Failure(format!(
                            "{} of {} samples failed, first at p = {}, q = {}",
                            failures.len(),
                            samples,
                            p,
                            q
                        ))
                    }
                };
                Evaluation::new(property.name, arguments.clone(), outcome)
            })
            .collect()
    }
}

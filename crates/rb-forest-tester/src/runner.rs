use std::collections::{HashSet, VecDeque};
use std::fmt;

use log::{debug, info};
use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rb_forest::ValidationError;
use serde::Serialize;
use thiserror::Error;

use crate::config::TesterConfig;
use crate::forest::Forest;

/// Where in a run a check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AfterInsert,
    AfterRemove { value: i64 },
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::AfterInsert => write!(f, "after inserting all values"),
            Phase::AfterRemove { value } => write!(f, "after removing {value}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TesterError {
    #[error("invalid tree {phase}: {source}")]
    Invalid {
        phase: Phase,
        #[source]
        source: ValidationError,
    },
    #[error("tree still holds {remaining} nodes after every value was removed")]
    NotEmpty { remaining: usize },
}

/// Outcome of one passing round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestReport {
    /// Seed of a randomized round, `None` for fixed values.
    pub seed: Option<u64>,
    pub inserted: usize,
    pub removed: usize,
    /// Height (in nodes) of the full tree after the insert phase.
    pub max_height: usize,
    pub black_height: usize,
}

/// Runs `config.rounds` rounds, stopping at the first failure.
///
/// Fixed `values` take precedence over random ones. With a fixed seed, round
/// `r` uses `seed + r`.
pub fn run(config: &TesterConfig) -> Result<Vec<TestReport>, TesterError> {
    let mut reports = Vec::with_capacity(config.rounds);
    for round in 0..config.rounds {
        info!("round {}/{}", round + 1, config.rounds);
        let report = match &config.values {
            Some(values) => run_with_values(values, config.print_log)?,
            None => {
                let round_config = TesterConfig {
                    seed: config.seed.map(|s| s.wrapping_add(round as u64)),
                    ..config.clone()
                };
                run_auto(&round_config)?
            }
        };
        reports.push(report);
    }
    Ok(reports)
}

/// Draws `config.nodes` distinct values from `[-2n, 2n]` and exercises the
/// tree with them.
pub fn run_auto(config: &TesterConfig) -> Result<TestReport, TesterError> {
    let seed = config.seed.unwrap_or_else(|| OsRng.next_u64());
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let bound = (config.nodes as i64).saturating_mul(2);

    let mut seen = HashSet::with_capacity(config.nodes);
    let mut values = Vec::with_capacity(config.nodes);
    while values.len() < config.nodes {
        let v = rng.gen_range(-bound..=bound);
        if seen.insert(v) {
            values.push(v);
        }
    }
    debug!("drew {} distinct values with seed {seed}", values.len());

    let mut report = exercise(&values, config.print_log)?;
    report.seed = Some(seed);
    Ok(report)
}

/// Exercises the tree with caller-supplied values.
pub fn run_with_values(values: &[i64], print_log: bool) -> Result<TestReport, TesterError> {
    exercise(values, print_log)
}

fn exercise(values: &[i64], print_log: bool) -> Result<TestReport, TesterError> {
    let mut forest = Forest::with_capacity(values.len());
    let mut queue = VecDeque::with_capacity(values.len());
    for &v in values {
        queue.push_back(forest.insert(v));
    }
    debug!("inserted {} nodes", forest.len());

    let shape = forest.check().map_err(|source| TesterError::Invalid {
        phase: Phase::AfterInsert,
        source,
    })?;
    debug!(
        "passed check after inserting: height={} black_height={}",
        shape.height, shape.black_height
    );
    if print_log {
        info!("tree after inserting:\n{}", forest.print_in_order());
    }

    let mut removed = 0;
    while let Some(idx) = queue.pop_front() {
        let value = forest.value(idx);
        forest.remove(idx);
        removed += 1;

        if !forest.is_empty() {
            forest.check().map_err(|source| TesterError::Invalid {
                phase: Phase::AfterRemove { value },
                source,
            })?;
        }
        if print_log {
            info!("removed {value}");
            if !forest.is_empty() {
                info!("\n{}", forest.print_in_order());
            }
        }
    }

    if !forest.is_empty() {
        return Err(TesterError::NotEmpty {
            remaining: forest.len(),
        });
    }

    Ok(TestReport {
        seed: None,
        inserted: values.len(),
        removed,
        max_height: shape.height,
        black_height: shape.black_height,
    })
}

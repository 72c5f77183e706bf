// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the strategy selector: the entry point which decides
//! whether a given instance is better solved with the exact dynamic
//! programming solver or with the branch-and-bound solver.
//!
//! The decision is driven by the memory the dynamic programming table would
//! require. That table is only ever allocated when its projected footprint
//! does not exceed the configured `memory_threshold`.

use std::fmt;

use derive_builder::Builder;
use tracing::{debug, warn};

use crate::{BranchAndBound, Completion, Cutoff, DpSolver, Knapsack, Solution, Solver, estimate_table_bytes};

/// The default memory threshold: 256 MiB
pub const DEFAULT_MEMORY_THRESHOLD: usize = 256 * 1024 * 1024;

/// The algorithms among which the selector chooses
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The exact dynamic programming solver (`DpSolver`)
    DynamicProgramming,
    /// The branch-and-bound solver (`BranchAndBound`)
    BranchAndBound,
}

/// The configuration of the strategy selector.
///
/// # Example
/// ```
/// # use knapdd::*;
/// let config = SolverConfigBuilder::default()
///     .memory_threshold(1024)
///     .build()
///     .unwrap();
/// assert_eq!(1024, config.memory_threshold);
/// assert_eq!(None, config.strategy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct SolverConfig {
    /// The maximum number of bytes the dynamic programming table may occupy
    #[builder(default = "DEFAULT_MEMORY_THRESHOLD")]
    pub memory_threshold: usize,
    /// When set, this strategy is used regardless of the memory estimate.
    /// Forcing the dynamic programming on an instance whose table cannot even
    /// be addressed still falls back to branch-and-bound.
    #[builder(default, setter(strip_option))]
    pub strategy: Option<Strategy>,
}
impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig { memory_threshold: DEFAULT_MEMORY_THRESHOLD, strategy: None }
    }
}

impl SolverConfig {
    /// Chooses the strategy to use for an instance of `nb_items` items with
    /// the given `capacity`.
    pub fn select(&self, nb_items: usize, capacity: usize) -> Strategy {
        if let Some(forced) = self.strategy {
            return forced;
        }
        match estimate_table_bytes(nb_items, capacity) {
            Some(bytes) if bytes <= self.memory_threshold => Strategy::DynamicProgramming,
            _ => Strategy::BranchAndBound,
        }
    }
}

/// The outcome of a resolution, regardless of the algorithm that ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The algorithm which actually produced the solution
    pub strategy: Strategy,
    /// Whether the solution is proved optimal and what its value is
    pub completion: Completion,
    /// The decision vector (in the original item order)
    pub solution: Solution,
}

/// Solves the given `problem` with the algorithm selected by `config`. The
/// `cutoff` is only consulted by the branch-and-bound (the dynamic programming
/// always runs to completion).
///
/// # Example
/// ```
/// # use knapdd::*;
/// let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]).unwrap();
/// let outcome = solve(&problem, &SolverConfig::default(), &NoCutoff);
///
/// assert_eq!(Strategy::DynamicProgramming, outcome.strategy);
/// assert_eq!("220 1\n0 1 1", outcome.to_string());
/// ```
pub fn solve(problem: &Knapsack, config: &SolverConfig, cutoff: &dyn Cutoff) -> Outcome {
    let nb_items = problem.nb_items();
    let capacity = problem.capacity();
    let strategy = config.select(nb_items, capacity);

    debug!(
        nb_items,
        capacity,
        estimated_bytes = ?estimate_table_bytes(nb_items, capacity),
        threshold       = config.memory_threshold,
        ?strategy,
        "selected strategy");

    if strategy == Strategy::DynamicProgramming {
        match DpSolver::new(problem) {
            Ok(solver) => return run(Strategy::DynamicProgramming, solver),
            Err(e) => warn!(error = %e, "falling back to branch and bound"),
        }
    }
    run(Strategy::BranchAndBound, BranchAndBound::new(problem, cutoff))
}

fn run<S: Solver>(strategy: Strategy, mut solver: S) -> Outcome {
    let completion = solver.maximize();
    let solution   = solver.best_solution().unwrap_or_default();
    Outcome { strategy, completion, solution }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DynamicProgramming => write!(f, "dynamic programming"),
            Strategy::BranchAndBound     => write!(f, "branch and bound"),
        }
    }
}

/// Prints the outcome in the output format: the best value and the
/// optimality flag on a first line, the decision vector on a second one.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.completion.best_value, self.completion.is_exact as u8)?;
        write!(f, "{}", self.solution)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

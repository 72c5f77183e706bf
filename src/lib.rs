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

//! # KNAPDD
//! KNAPDD is an exact solver for the 0/1 knapsack problem: given a set of
//! items, each of which has an integer value and weight, and a sack of
//! limited capacity, it selects the subset of items which maximizes the total
//! value without exceeding the capacity of the sack.
//!
//! Two complementary algorithms are provided:
//!
//! * `DpSolver` is the textbook dynamic program. It is always exact, but it
//!   needs a table of `(capacity + 1) x (nb_items + 1)` cells.
//! * `BranchAndBound` is a depth first branch-and-bound which explores the
//!   items by decreasing density and prunes the search with the fractional
//!   (linear) relaxation of the problem. It is exact when it is allowed to run
//!   until exhaustion, and it accepts a `Cutoff` in case you would rather have
//!   a good solution quickly.
//!
//! Both of them implement the `Solver` trait. In most cases, you will however
//! simply call `solve` which picks the dynamic program whenever its table fits
//! within the memory threshold of the `SolverConfig`, and falls back to
//! branch-and-bound otherwise.
//!
//! ## Quick Example
//! ```
//! use knapdd::*;
//!
//! // 1. Create an instance of the knapsack problem: (value, weight) pairs
//! let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]).unwrap();
//! // 2. Configure the strategy selector (here: at most 1 MiB of dp table)
//! let config  = SolverConfigBuilder::default()
//!     .memory_threshold(1024 * 1024)
//!     .build()
//!     .unwrap();
//! // 3. Solve it
//! let outcome = solve(&problem, &config, &NoCutoff);
//!
//! // 4. Do whatever you like with the optimal solution.
//! assert!(outcome.completion.is_exact);
//! assert_eq!(220, outcome.completion.best_value);
//! assert_eq!(vec![1, 2], outcome.solution.selected().collect::<Vec<_>>());
//! ```
//!
//! ## Diagnostics
//! The solvers never print anything. They emit `tracing` events instead
//! (the strategy decision, search summaries, incumbent improvements) which
//! you can collect by installing the subscriber of your choice.

mod common;
mod error;
mod abstraction;
mod implementation;
mod io;

pub use common::*;
pub use error::*;
pub use abstraction::*;
pub use implementation::*;
pub use io::*;

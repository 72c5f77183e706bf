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

//! This module provides the implementation of various cutoff heuristics that can
//! be used to bound the time spent by the branch-and-bound solver.

use std::{sync::atomic::{AtomicUsize, Ordering}, time::{Duration, Instant}};

use crate::Cutoff;

/// _This is the default cutoff heuristic._ It imposes that the search
/// proves optimality before it stops.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self) -> bool {false}
}

/// This cutoff allows one to specify a maximum time budget to solve the problem.
/// Once the time budget is elapsed, the optimization stops and the best solution
/// that has been found (so far) is returned.
///
/// # Example
/// ```
/// # use knapdd::*;
/// use std::time::Duration;
///
/// let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]).unwrap();
/// let cutoff  = TimeBudget::new(Duration::from_secs(10));
/// let mut solver = BranchAndBound::new(&problem, &cutoff);
/// let outcome = solver.maximize(); // will run for maximum 10 seconds
/// assert_eq!(220, outcome.best_value);
/// ```
#[derive(Debug, Clone)]
pub struct TimeBudget {
    /// None when the budget is too large to be represented (never stops)
    deadline: Option<Instant>,
}
impl TimeBudget {
    pub fn new(budget: Duration) -> Self {
        TimeBudget { deadline: Instant::now().checked_add(budget) }
    }
}
impl Cutoff for TimeBudget {
    fn must_stop(&self) -> bool {
        self.deadline.map_or(false, |deadline| Instant::now() >= deadline)
    }
}

/// This cutoff stops the search once a given number of nodes have been
/// processed. Each call to `must_stop` accounts for one node, so a budget of
/// `n` lets the search process exactly `n` nodes.
///
/// Contrary to a time budget, this cutoff makes a truncated search
/// reproducible.
#[derive(Debug)]
pub struct NodeBudget {
    budget: usize,
    spent : AtomicUsize,
}
impl NodeBudget {
    pub fn new(budget: usize) -> Self {
        NodeBudget { budget, spent: AtomicUsize::new(0) }
    }
    /// The number of nodes that were granted so far
    pub fn spent(&self) -> usize {
        self.spent.load(Ordering::Relaxed).min(self.budget)
    }
}
impl Cutoff for NodeBudget {
    fn must_stop(&self) -> bool {
        self.spent.fetch_add(1, Ordering::Relaxed) >= self.budget
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::{Cutoff, NoCutoff, NodeBudget, TimeBudget};

    #[test]
    fn no_cutoff_never_stops() {
        let cutoff = NoCutoff;
        for _ in 0..1000 {
            assert!(!cutoff.must_stop());
        }
    }
    #[test]
    fn an_elapsed_time_budget_stops() {
        let cutoff = TimeBudget::new(Duration::from_secs(0));
        assert!(cutoff.must_stop());
    }
    #[test]
    fn a_generous_time_budget_does_not_stop() {
        let cutoff = TimeBudget::new(Duration::from_secs(3600));
        assert!(!cutoff.must_stop());
    }
    #[test]
    fn a_huge_time_budget_does_not_panic() {
        let cutoff = TimeBudget::new(Duration::MAX);
        assert!(!cutoff.must_stop());
    }
    #[test]
    fn node_budget_grants_exactly_its_budget() {
        let cutoff = NodeBudget::new(3);
        assert!(!cutoff.must_stop());
        assert!(!cutoff.must_stop());
        assert!(!cutoff.must_stop());
        assert!(cutoff.must_stop());
        assert!(cutoff.must_stop());
        assert_eq!(3, cutoff.spent());
    }
    #[test]
    fn an_empty_node_budget_stops_immediately() {
        let cutoff = NodeBudget::new(0);
        assert!(cutoff.must_stop());
        assert_eq!(0, cutoff.spent());
    }
}

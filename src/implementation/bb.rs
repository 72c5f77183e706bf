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

//! This module provides the implementation of the depth-first branch-and-bound
//! solver. Items are explored by decreasing density and every branch whose
//! fractional relaxation cannot beat the best known solution is pruned.
//!
//! The search is driven by an explicit stack of `Branch` nodes (so its depth
//! is not bounded by the call stack). Nodes are immutable: taking or skipping
//! an item always yields a brand new node, hence the alternative which is
//! pushed on the stack can never be corrupted by the exploration of its
//! sibling.

use tracing::{debug, trace};

use crate::{Completion, Cutoff, Item, Knapsack, Reason, Solution, Solver, fractional_bound};

/// A node of the branch-and-bound search tree.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Branch {
    /// Original indices of the items selected so far
    chosen: Vec<usize>,
    /// Position (in density order) of the next item to consider
    next: usize,
    /// Accumulated value
    value: usize,
    /// Remaining capacity
    capacity: usize,
    /// Optimistic estimate of the best value reachable from this node
    bound: usize,
}

impl Branch {
    fn root(capacity: usize) -> Self {
        Branch { chosen: vec![], next: 0, value: 0, capacity, bound: 0 }
    }
    /// The node reached by putting `item` (found at position `pos` of the
    /// density order) in the sack.
    fn take(&self, pos: usize, item: &Item, bound: usize) -> Self {
        let mut chosen = self.chosen.clone();
        chosen.push(item.index());
        Branch {
            chosen,
            next    : pos + 1,
            value   : self.value + item.value(),
            capacity: self.capacity - item.weight(),
            bound,
        }
    }
    /// The node reached by leaving the item at position `pos` out of the sack.
    fn skip(&self, pos: usize, bound: usize) -> Self {
        Branch {
            chosen  : self.chosen.clone(),
            next    : pos + 1,
            value   : self.value,
            capacity: self.capacity,
            bound,
        }
    }
}

/// The depth-first branch-and-bound solver.
///
/// # Example
/// ```
/// # use knapdd::*;
/// let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]).unwrap();
/// let cutoff  = NoCutoff;
/// let mut solver = BranchAndBound::new(&problem, &cutoff);
/// let Completion { is_exact, best_value } = solver.maximize();
///
/// assert!(is_exact);
/// assert_eq!(220, best_value);
/// assert_eq!("0 1 1", solver.best_solution().unwrap().to_string());
/// ```
pub struct BranchAndBound<'a> {
    /// A reference to the problem being solved
    problem: &'a Knapsack,
    /// A cutoff heuristic meant to decide when to stop the resolution of
    /// a given problem.
    cutoff: &'a dyn Cutoff,
    /// The items having a positive weight, sorted by decreasing density
    /// (ties are broken by increasing index).
    order: Vec<Item>,
    /// The items which weigh nothing but are worth something. These are
    /// always put in the sack and never take part in the search.
    free: Vec<Item>,
    /// The number of nodes that have been popped from the stack
    explored: usize,
    /// The number of nodes which were discarded because of their bound
    pruned: usize,
    best_value: Option<usize>,
    best_sol: Option<Solution>,
    /// If we decide not to go through a complete proof of optimality, this is
    /// the reason why we took that decision.
    abort_proof: Option<Reason>,
}

impl <'a> BranchAndBound<'a> {
    pub fn new(problem: &'a Knapsack, cutoff: &'a dyn Cutoff) -> Self {
        let (zero, mut order): (Vec<Item>, Vec<Item>) = problem.items().iter()
            .copied()
            .partition(|item| item.weight() == 0);
        order.sort_by(Item::cmp_exploration_order);

        let free = zero.into_iter().filter(|item| item.value() > 0).collect();

        BranchAndBound {
            problem,
            cutoff,
            order,
            free,
            explored: 0,
            pruned: 0,
            best_value: None,
            best_sol: None,
            abort_proof: None,
        }
    }
    /// The number of nodes processed during the last call to `maximize`
    pub fn explored(&self) -> usize {
        self.explored
    }
    /// The number of nodes pruned during the last call to `maximize`
    pub fn pruned(&self) -> usize {
        self.pruned
    }

    /// Bound of the value reachable from a sack worth `value` with `capacity`
    /// left, when only the items after position `pos` remain.
    fn bound_after(&self, pos: usize, value: usize, capacity: usize) -> usize {
        fractional_bound(&self.order[pos + 1..], value, capacity)
    }

    /// Explores the search tree and returns the best branch it found.
    fn search(&mut self) -> Branch {
        let n = self.order.len();
        let mut best  = Branch::root(self.problem.capacity());
        let mut stack = vec![best.clone()];

        self.explored    = 0;
        self.pruned      = 0;
        self.abort_proof = None;

        while let Some(node) = stack.pop() {
            if self.cutoff.must_stop() {
                self.abort_proof = Some(Reason::CutoffOccurred);
                break;
            }
            self.explored += 1;

            if node.bound < best.value {
                self.pruned += 1;
                continue;
            }

            let mut current = node;
            for pos in current.next..n {
                let item = self.order[pos];
                if item.weight() > current.capacity {
                    continue;
                }
                let has_rest = pos + 1 < n;

                // take
                let take_value    = current.value + item.value();
                let take_capacity = current.capacity - item.weight();
                let take_bound    = if has_rest {
                    self.bound_after(pos, take_value, take_capacity)
                } else {
                    take_value
                };

                if take_bound >= best.value {
                    // skip: only worth remembering when the take path could
                    // not reach as much.
                    if has_rest {
                        let skip_bound = self.bound_after(pos, current.value, current.capacity);
                        if skip_bound >= best.value && skip_bound >= take_value {
                            stack.push(current.skip(pos, skip_bound));
                        } else {
                            self.pruned += 1;
                        }
                    }
                    current = current.take(pos, &item, take_bound);
                } else {
                    // the scan goes on without the item: that is the skip path
                    self.pruned += 1;
                }

                if current.value > best.value {
                    trace!(value = current.value, explored = self.explored, "improved incumbent");
                    best = current.clone();
                }
            }
        }

        debug!(
            best_value = best.value,
            explored   = self.explored,
            pruned     = self.pruned,
            exact      = self.abort_proof.is_none(),
            "branch and bound finished");
        best
    }
}

impl Solver for BranchAndBound<'_> {
    /// Runs a depth first branch-and-bound until the stack of open nodes is
    /// exhausted (which proves optimality) or until the cutoff fires.
    fn maximize(&mut self) -> Completion {
        let best = self.search();

        let free_value = self.free.iter().map(Item::value).sum::<usize>();
        let best_value = best.value + free_value;
        let selected   = best.chosen.iter().copied()
            .chain(self.free.iter().map(Item::index));

        self.best_value = Some(best_value);
        self.best_sol   = Some(Solution::from_indices(self.problem.nb_items(), selected));

        Completion { is_exact: self.abort_proof.is_none(), best_value }
    }
    fn best_value(&self) -> Option<usize> {
        self.best_value
    }
    fn best_solution(&self) -> Option<Solution> {
        self.best_sol.clone()
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################


#[cfg(test)]
mod tests {
    use crate::{BranchAndBound, Completion, Cutoff, Knapsack, NoCutoff, NodeBudget, Solver};

    fn solve(capacity: usize, items: Vec<(usize, usize)>) -> (usize, Vec<u8>) {
        let problem    = Knapsack::new(capacity, items).unwrap();
        let cutoff     = NoCutoff;
        let mut solver = BranchAndBound::new(&problem, &cutoff);
        let Completion { is_exact, best_value } = solver.maximize();
        assert!(is_exact);
        (best_value, solver.best_solution().unwrap().decisions())
    }

    #[test]
    fn nothing_is_known_before_maximize() {
        let problem = Knapsack::new(5, vec![(1, 1)]).unwrap();
        let solver  = BranchAndBound::new(&problem, &NoCutoff);
        assert_eq!(None, solver.best_value());
        assert_eq!(None, solver.best_solution());
    }
    #[test]
    fn classic_instance() {
        assert_eq!((220, vec![0, 1, 1]), solve(50, vec![(60, 10), (100, 20), (120, 30)]));
    }
    #[test]
    fn zero_capacity_selects_nothing() {
        assert_eq!((0, vec![0, 0, 0]), solve(0, vec![(60, 10), (100, 20), (120, 30)]));
    }
    #[test]
    fn empty_instance() {
        assert_eq!((0, vec![]), solve(10, vec![]));
    }
    #[test]
    fn infeasible_single_item() {
        assert_eq!((0, vec![0]), solve(10, vec![(10, 100)]));
    }
    #[test]
    fn all_items_fit() {
        assert_eq!((15, vec![1, 1, 1]), solve(100, vec![(5, 1), (5, 1), (5, 1)]));
    }
    #[test]
    fn greedy_is_not_enough() {
        // the densest item blocks the optimal pair
        assert_eq!((19, vec![0, 0, 1, 1]), solve(11, vec![(8, 4), (10, 5), (15, 8), (4, 3)]));
    }
    #[test]
    fn zero_weight_items_with_a_value_are_always_taken() {
        assert_eq!((7, vec![1, 0, 0]), solve(0, vec![(7, 0), (3, 1), (0, 0)]));
        assert_eq!((10, vec![1, 1, 0]), solve(1, vec![(7, 0), (3, 1), (0, 0)]));
    }
    #[test]
    fn ties_are_broken_by_index() {
        // both items are worth the same: the first one wins
        assert_eq!((5, vec![1, 0]), solve(1, vec![(5, 1), (5, 1)]));
    }
    #[test]
    fn repeated_solves_are_identical() {
        let items = vec![(10, 5), (40, 4), (30, 6), (50, 3), (35, 7), (25, 2)];
        let first = solve(10, items.clone());
        for _ in 0..10 {
            assert_eq!(first, solve(10, items.clone()));
        }
    }
    #[test]
    fn hopeless_alternatives_are_pruned() {
        // the dive reaches 160, then 180 from the skip of item 1. When the
        // skip of item 0 is explored, skipping item 1 as well can reach at
        // most 120: that alternative is never pushed.
        let problem    = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]).unwrap();
        let mut solver = BranchAndBound::new(&problem, &NoCutoff);
        let Completion { is_exact, best_value } = solver.maximize();
        assert!(is_exact);
        assert_eq!(220, best_value);
        assert_eq!(3, solver.explored());
        assert_eq!(1, solver.pruned());
    }
    #[test]
    fn the_root_alone_is_never_pruned() {
        let problem    = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]).unwrap();
        let mut solver = BranchAndBound::new(&problem, &NoCutoff);
        solver.maximize();
        assert!(solver.explored() >= 1);
    }

    struct StopNow;
    impl Cutoff for StopNow {
        fn must_stop(&self) -> bool { true }
    }

    #[test]
    fn an_immediate_cutoff_yields_an_inexact_empty_sack() {
        let problem    = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]).unwrap();
        let mut solver = BranchAndBound::new(&problem, &StopNow);
        let Completion { is_exact, best_value } = solver.maximize();
        assert!(!is_exact);
        assert_eq!(0, best_value);
        assert_eq!(0, solver.explored());
        assert_eq!(vec![0, 0, 0], solver.best_solution().unwrap().decisions());
    }
    #[test]
    fn a_truncated_search_returns_the_greedy_dive() {
        // the first node dives greedily: 60 + 100
        let problem    = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]).unwrap();
        let cutoff     = NodeBudget::new(1);
        let mut solver = BranchAndBound::new(&problem, &cutoff);
        let Completion { is_exact, best_value } = solver.maximize();
        assert!(!is_exact);
        assert_eq!(160, best_value);
        assert_eq!(Some(160), problem.evaluate(&solver.best_solution().unwrap()));
    }
    #[test]
    fn a_sufficient_node_budget_proves_optimality() {
        let problem    = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]).unwrap();
        let cutoff     = NodeBudget::new(1_000);
        let mut solver = BranchAndBound::new(&problem, &cutoff);
        let Completion { is_exact, best_value } = solver.maximize();
        assert!(is_exact);
        assert_eq!(220, best_value);
    }
}

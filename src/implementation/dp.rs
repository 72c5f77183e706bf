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

//! This module provides the implementation of the exact dynamic programming
//! solver. It fills a table of `(capacity + 1) x (nb_items + 1)` cells where
//! cell `[k][j]` holds the best value that can be reached using the `j` first
//! items only and a sack of capacity `k`. The optimal selection is then
//! recovered by walking the table backwards (traceback).
//!
//! Time and memory are both in O(nb_items x capacity). This is why the
//! strategy selector only ever picks this solver when the table is known to
//! fit within the configured memory threshold.

use std::mem::size_of;

use tracing::debug;

use crate::{Completion, Error, Knapsack, Solution, Solver};

/// Returns the number of cells of the table the dp solver would need to
/// solve an instance with `nb_items` and the given `capacity`; or None when
/// that number cannot even be represented.
pub fn table_cells(nb_items: usize, capacity: usize) -> Option<usize> {
    let rows = capacity.checked_add(1)?;
    let cols = nb_items.checked_add(1)?;
    rows.checked_mul(cols)
}

/// Returns the number of bytes the dynamic programming table would occupy
/// for an instance of `nb_items` items with the given `capacity`. None means
/// that this number does not even fit in a `usize`.
pub fn estimate_table_bytes(nb_items: usize, capacity: usize) -> Option<usize> {
    table_cells(nb_items, capacity)?.checked_mul(size_of::<usize>())
}

/// The exact dynamic programming solver.
///
/// # Example
/// ```
/// # use knapdd::*;
/// let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]).unwrap();
/// let mut solver = DpSolver::new(&problem).unwrap();
/// let Completion { is_exact, best_value } = solver.maximize();
///
/// assert!(is_exact);
/// assert_eq!(220, best_value);
/// assert_eq!("0 1 1", solver.best_solution().unwrap().to_string());
/// ```
#[derive(Debug)]
pub struct DpSolver<'a> {
    problem: &'a Knapsack,
    /// The number of rows (capacity + 1) of the table
    rows: usize,
    /// The number of cells of the table
    cells: usize,
    /// The table itself. Its memory is reserved upon creation of the solver
    table: Vec<usize>,
    best_value: Option<usize>,
    best_sol: Option<Solution>,
}

impl <'a> DpSolver<'a> {
    /// Creates a solver for the given problem and reserves the memory of its
    /// table. This fails with `Error::TableTooLarge` when the table cannot be
    /// addressed (its size in bytes exceeds `isize::MAX`) or when the memory
    /// cannot be obtained from the allocator.
    pub fn new(problem: &'a Knapsack) -> Result<Self, Error> {
        let nb_items  = problem.nb_items();
        let capacity  = problem.capacity();
        let too_large = || Error::TableTooLarge { nb_items, capacity };

        estimate_table_bytes(nb_items, capacity)
            .filter(|bytes| *bytes <= isize::MAX as usize)
            .ok_or_else(too_large)?;

        // checked above: cells * size_of::<usize>() does not overflow
        let cells     = (capacity + 1) * (nb_items + 1);
        let mut table = Vec::new();
        table.try_reserve_exact(cells).map_err(|_| too_large())?;

        Ok(DpSolver {
            problem,
            rows: capacity + 1,
            cells,
            table,
            best_value: None,
            best_sol: None,
        })
    }

    /// Fills the whole table, column after column. Column `j` only depends
    /// on column `j-1`.
    fn fill(&self, table: &mut Vec<usize>) {
        let rows = self.rows;
        table.clear();
        table.resize(self.cells, 0);

        for (i, item) in self.problem.items().iter().enumerate() {
            let (done, todo) = table.split_at_mut((i + 1) * rows);
            let prev = &done[i * rows..];
            let curr = &mut todo[..rows];

            curr.copy_from_slice(prev);

            let w = item.weight();
            let v = item.value();
            if w >= rows {
                // this item does not fit, not even in an empty sack
                continue;
            }
            for k in w..rows {
                let with_item = v + prev[k - w];
                if with_item > curr[k] {
                    curr[k] = with_item;
                }
            }
        }
    }

    /// Recovers the selected items from a filled table. Starting from the
    /// bottom right corner, item `j-1` is selected iff it improves on column
    /// `j-1` for the remaining capacity.
    fn traceback(&self, table: &[usize]) -> Solution {
        let rows  = self.rows;
        let items = self.problem.items();
        let mut k = self.problem.capacity();
        let mut selected = vec![];

        for j in (1..=items.len()).rev() {
            if table[j * rows + k] > table[(j - 1) * rows + k] {
                let item = &items[j - 1];
                assert!(item.weight() <= k,
                    "traceback selected item {} (weight {}) with only {} capacity left",
                    item.index(), item.weight(), k);
                selected.push(item.index());
                k -= item.weight();
            }
        }
        Solution::from_indices(items.len(), selected)
    }
}

impl Solver for DpSolver<'_> {
    fn maximize(&mut self) -> Completion {
        debug!(
            nb_items = self.problem.nb_items(),
            capacity = self.problem.capacity(),
            cells    = self.cells,
            "filling dp table");

        let mut table = std::mem::take(&mut self.table);
        self.fill(&mut table);
        let best      = table[self.cells - 1];
        let solution  = self.traceback(&table);
        self.table    = table;

        debug!(best_value = best, "dp table filled");
        self.best_value = Some(best);
        self.best_sol   = Some(solution);

        Completion { is_exact: true, best_value: best }
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

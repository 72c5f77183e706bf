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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::cmp::Ordering;
use std::fmt;

use crate::Error;

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes one of the items that may be put in the sack. An item
/// remembers its position in the original instance (`index`) so that it can
/// safely be reordered by the solvers.
///
/// Items are immutable once created: all fields are private and only exposed
/// through accessors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Item {
    index : usize,
    value : usize,
    weight: usize,
}
impl Item {
    /// Creates the item found at position `index` of the instance.
    ///
    /// # Examples:
    /// ```
    /// # use knapdd::Item;
    /// let item = Item::new(3, 60, 10);
    /// assert_eq!(3,  item.index());
    /// assert_eq!(60, item.value());
    /// assert_eq!(10, item.weight());
    /// ```
    pub fn new(index: usize, value: usize, weight: usize) -> Self {
        Item { index, value, weight }
    }
    #[inline]
    /// The position of this item in the original instance (0-based).
    pub fn index(&self) -> usize {
        self.index
    }
    #[inline]
    /// The value (profit) of this item.
    pub fn value(&self) -> usize {
        self.value
    }
    #[inline]
    /// The weight of this item.
    pub fn weight(&self) -> usize {
        self.weight
    }
    /// The value density (value / weight) of this item. It is recomputed
    /// upon each call and it is undefined (infinite or NaN) when the weight
    /// is zero.
    ///
    /// # Examples:
    /// ```
    /// # use knapdd::Item;
    /// assert_eq!(6.0, Item::new(0, 60, 10).density());
    /// assert_eq!(2.5, Item::new(1,  5,  2).density());
    /// ```
    pub fn density(&self) -> f64 {
        self.value as f64 / self.weight as f64
    }
    /// Compares the densities of two items without any loss of precision
    /// (by cross multiplication). Items with zero weight are not meant to be
    /// compared this way.
    pub fn cmp_density(&self, other: &Item) -> Ordering {
        let lhs = self.value  as u128 * other.weight as u128;
        let rhs = other.value as u128 * self.weight  as u128;
        lhs.cmp(&rhs)
    }
    /// This is the order in which the branch and bound explores the items:
    /// decreasing density first, and increasing original index to break ties.
    pub fn cmp_exploration_order(&self, other: &Item) -> Ordering {
        self.cmp_density(other).reverse()
            .then_with(|| self.index.cmp(&other.index))
    }
}

// ----------------------------------------------------------------------------
// --- KNAPSACK ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An instance of the 0/1 knapsack problem: a capacity and the items that
/// compete for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Knapsack {
    capacity: usize,
    items   : Vec<Item>,
}
impl Knapsack {
    /// Creates a new instance from a capacity and a sequence of
    /// `(value, weight)` pairs. The position of each pair in the sequence
    /// becomes the index of the corresponding item.
    ///
    /// This fails with `Error::ValueOverflow` when the sum of all values
    /// would not fit in a `usize`, as no solver could then represent the
    /// value of a solution.
    pub fn new<I>(capacity: usize, items: I) -> Result<Self, Error>
    where I: IntoIterator<Item = (usize, usize)>
    {
        let items = items.into_iter()
            .enumerate()
            .map(|(index, (value, weight))| Item::new(index, value, weight))
            .collect::<Vec<_>>();

        items.iter()
            .try_fold(0_usize, |total, item| total.checked_add(item.value))
            .ok_or(Error::ValueOverflow)?;

        Ok(Knapsack { capacity, items })
    }
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    #[inline]
    pub fn nb_items(&self) -> usize {
        self.items.len()
    }
    /// Returns the value of the given solution if it is feasible (fits in
    /// the sack and covers all items), None otherwise.
    pub fn evaluate(&self, solution: &Solution) -> Option<usize> {
        if solution.len() != self.nb_items() {
            return None;
        }
        let weight = solution.total(&self.items, Item::weight);
        if weight > self.capacity {
            None
        } else {
            Some(solution.total(&self.items, Item::value))
        }
    }
}

// ----------------------------------------------------------------------------
// --- SOLUTION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The decision vector of a solution: one flag per item of the instance (in
/// the original order) telling whether or not that item is put in the sack.
///
/// Its `Display` implementation prints the flags as space separated zeroes
/// and ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Solution {
    taken: Vec<bool>,
}
impl Solution {
    /// A solution where none of the `nb_items` items is selected.
    pub fn empty(nb_items: usize) -> Self {
        Solution { taken: vec![false; nb_items] }
    }
    /// A solution where only the items at the given (original) indices are
    /// selected.
    pub fn from_indices<I>(nb_items: usize, indices: I) -> Self
    where I: IntoIterator<Item = usize>
    {
        let mut sol = Self::empty(nb_items);
        for i in indices {
            sol.taken[i] = true;
        }
        sol
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.taken.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
    /// The indices of the selected items, in increasing order.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.taken.iter().enumerate()
            .filter(|(_, taken)| **taken)
            .map(|(i, _)| i)
    }
    /// The decision vector as zeroes and ones.
    pub fn decisions(&self) -> Vec<u8> {
        self.taken.iter().map(|t| *t as u8).collect()
    }

    fn total(&self, items: &[Item], f: fn(&Item) -> usize) -> usize {
        items.iter()
            .filter(|item| self.taken[item.index()])
            .map(f)
            .sum()
    }
}
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, taken) in self.taken.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", *taken as u8)?;
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A reason explaining why a search stopped before exhaustion
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reason {
    /// It stopped because the configured cutoff criterion was met
    CutoffOccurred
}

/// The outcome of a maximization
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Completion {
    /// is the given solution exact (proved optimal)? or is it only the best
    /// one that was found before the search got cut off ?
    pub is_exact: bool,
    /// the value of the best solution that was found
    pub best_value: usize,
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_item {
    use std::cmp::Ordering;

    use crate::Item;

    #[test]
    fn density_is_value_over_weight() {
        assert_eq!(6.0, Item::new(0, 60, 10).density());
        assert_eq!(4.0, Item::new(2, 120, 30).density());
    }
    #[test]
    fn cmp_density_detects_exact_ties() {
        let a = Item::new(0, 1, 3);
        let b = Item::new(1, 2, 6);
        assert_eq!(Ordering::Equal, a.cmp_density(&b));
    }
    #[test]
    fn cmp_density_orders_by_ratio() {
        let a = Item::new(0, 60, 10);
        let b = Item::new(1, 100, 20);
        assert_eq!(Ordering::Greater, a.cmp_density(&b));
        assert_eq!(Ordering::Less,    b.cmp_density(&a));
    }
    #[test]
    fn exploration_order_puts_densest_first_and_breaks_ties_by_index() {
        let mut items = vec![
            Item::new(0, 1, 1),
            Item::new(1, 4, 2),
            Item::new(2, 2, 1),
            Item::new(3, 9, 3),
        ];
        items.sort_by(Item::cmp_exploration_order);
        let order = items.iter().map(|i| i.index()).collect::<Vec<_>>();
        assert_eq!(vec![3, 1, 2, 0], order);
    }
}


#[cfg(test)]
mod test_solution {
    use crate::Solution;

    #[test]
    fn display_prints_space_separated_flags() {
        let sol = Solution::from_indices(4, vec![1, 3]);
        assert_eq!("0 1 0 1", sol.to_string());
    }
    #[test]
    fn display_of_an_empty_solution_is_empty() {
        assert_eq!("", Solution::empty(0).to_string());
    }
    #[test]
    fn selected_yields_increasing_indices() {
        let sol = Solution::from_indices(5, vec![4, 0, 2]);
        assert_eq!(vec![0, 2, 4], sol.selected().collect::<Vec<_>>());
        assert_eq!(vec![1, 0, 1, 0, 1], sol.decisions());
    }
}

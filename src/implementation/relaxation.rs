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

//! This module provides the linear (fractional) relaxation of the knapsack
//! problem which the branch-and-bound uses to prune its search.

use crate::Item;

/// Returns an upper bound on the total value that can be reached when
/// starting with a sack worth `value` and having `capacity` units of weight
/// left to fill with the given `items`.
///
/// The items must be sorted by decreasing density. They are put in the sack
/// in that order until the first one which does not fit; a fraction of that
/// one is used to fill the remaining capacity exactly. Because the objective
/// of any integral solution is an integer, the fractional part of the bound
/// is rounded down.
///
/// # Example
/// ```
/// # use knapdd::*;
/// let items = [Item::new(1, 100, 20), Item::new(2, 120, 30)];
/// // 60 + 100 + 2/3 * 120
/// assert_eq!(240, fractional_bound(&items, 60, 40));
/// ```
pub fn fractional_bound(items: &[Item], value: usize, capacity: usize) -> usize {
    let mut bound    = value;
    let mut capacity = capacity;

    for item in items {
        if capacity == 0 {
            break;
        }
        if item.weight() <= capacity {
            bound    = bound.saturating_add(item.value());
            capacity -= item.weight();
        } else {
            // 0 < capacity < weight: the division is safe and the fraction
            // is less than the value of the item.
            let fraction = item.value() as u128 * capacity as u128 / item.weight() as u128;
            bound    = bound.saturating_add(fraction as usize);
            capacity = 0;
        }
    }
    bound
}

#[cfg(test)]
mod tests {
    use crate::{Item, fractional_bound};

    fn sorted(pairs: &[(usize, usize)]) -> Vec<Item> {
        let mut items = pairs.iter().copied().enumerate()
            .map(|(i, (v, w))| Item::new(i, v, w))
            .collect::<Vec<_>>();
        items.sort_by(Item::cmp_exploration_order);
        items
    }

    #[test]
    fn bound_of_nothing_is_the_current_value() {
        assert_eq!(42, fractional_bound(&[], 42, 100));
    }
    #[test]
    fn bound_with_no_capacity_is_the_current_value() {
        let items = sorted(&[(60, 10), (100, 20)]);
        assert_eq!(7, fractional_bound(&items, 7, 0));
    }
    #[test]
    fn bound_sums_all_items_when_they_all_fit() {
        let items = sorted(&[(5, 1), (5, 1), (5, 1)]);
        assert_eq!(15, fractional_bound(&items, 0, 100));
    }
    #[test]
    fn bound_takes_a_fraction_of_the_critical_item() {
        let items = sorted(&[(60, 10), (100, 20), (120, 30)]);
        // 60 + 100 + 20/30 * 120
        assert_eq!(240, fractional_bound(&items, 0, 50));
    }
    #[test]
    fn bound_rounds_the_fraction_down() {
        let items = sorted(&[(10, 3)]);
        // 10 * 2 / 3 = 6.66..
        assert_eq!(6, fractional_bound(&items, 0, 2));
    }
    #[test]
    fn bound_stops_after_the_critical_item() {
        let items = [Item::new(0, 10, 4), Item::new(1, 1, 1)];
        // the second item is never considered: the first one exhausts the sack
        assert_eq!(5, fractional_bound(&items, 0, 2));
    }
    #[test]
    fn bound_never_underestimates_the_optimum() {
        // optimum is 220 (items 1 and 2)
        let items = sorted(&[(60, 10), (100, 20), (120, 30)]);
        assert!(fractional_bound(&items, 0, 50) >= 220);
    }
    #[test]
    fn bound_does_not_overflow() {
        let items = sorted(&[(usize::MAX, 1), (usize::MAX, 1)]);
        assert_eq!(usize::MAX, fractional_bound(&items, 10, 10));
    }
}

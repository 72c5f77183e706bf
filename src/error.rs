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

//! This module defines the errors that can be reported by this library.

use crate::SolverConfigBuilderError;

/// All the things that can go wrong when reading an instance, configuring
/// a solver or preparing a resolution. Note that a resolution itself never
/// fails: a search that gets cut off still yields the best solution it found.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// A line of the instance could not be understood
    #[error("ill formed instance (line {line}): {reason}")]
    Parse { line: usize, reason: String },
    /// The instance declares more items than it actually lists
    #[error("ill formed instance: {expected} items declared but only {found} found")]
    MissingItems { expected: usize, found: usize },
    /// Knapsack problems are undefined for negative quantities
    #[error("negative {what} at line {line}")]
    Negative { line: usize, what: &'static str },
    /// The sum of all item values does not fit in a machine word
    #[error("the total value of the items overflows")]
    ValueOverflow,
    /// The dynamic programming table cannot even be addressed
    #[error("a dp table for {nb_items} items and capacity {capacity} is too large")]
    TableTooLarge { nb_items: usize, capacity: usize },
    #[error("invalid configuration {0}")]
    Config(#[from] SolverConfigBuilderError),
}

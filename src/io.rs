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

//! This module provides the means to read knapsack instances and to print the
//! outcome of a resolution. None of this is needed by the solvers themselves:
//! it only serves the clients that work with the textual format.
//!
//! An instance file looks like this:
//! ```plain
//! 3 50
//! 60 10
//! 100 20
//! 120 30
//! ```
//! where the first line gives the number of items and the capacity of the
//! sack, and each following line gives the value and weight of one item.

use std::{fs::File, io::{BufReader, Read}, path::Path};

use regex::Regex;

use crate::{Error, Knapsack, Outcome};

/// Reads the instance stored in the file `fname`.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Knapsack, Error> {
    let f = File::open(fname)?;
    let mut content = String::new();
    BufReader::new(f).read_to_string(&mut content)?;
    parse_instance(&content)
}

/// Parses the textual representation of an instance. Blank lines are
/// ignored, and so is anything after the declared number of items.
///
/// # Example
/// ```
/// # use knapdd::*;
/// let problem = parse_instance("3 50\n60 10\n100 20\n120 30\n").unwrap();
/// assert_eq!(50, problem.capacity());
/// assert_eq!(3,  problem.nb_items());
/// ```
pub fn parse_instance(text: &str) -> Result<Knapsack, Error> {
    let pair = Regex::new(r"^(?P<first>\S+)\s+(?P<second>\S+)$").unwrap();

    let mut lines = text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (nb_items, capacity) = match lines.next() {
        None => return Err(Error::Parse { line: 1, reason: "missing header".to_string() }),
        Some((n, line)) => {
            let (nb, cap) = parse_pair(&pair, n, line)?;
            (non_negative(n, nb, "item count")?, non_negative(n, cap, "capacity")?)
        }
    };

    let mut items = Vec::with_capacity(nb_items.min(1 << 20));
    for (n, line) in lines.take(nb_items) {
        let (value, weight) = parse_pair(&pair, n, line)?;
        items.push((non_negative(n, value, "value")?, non_negative(n, weight, "weight")?));
    }

    if items.len() < nb_items {
        return Err(Error::MissingItems { expected: nb_items, found: items.len() });
    }
    Knapsack::new(capacity, items)
}

/// Formats the outcome of a resolution. The first line holds the best value
/// followed by 1 when it is proved optimal (0 otherwise), the second line
/// holds the decision vector.
///
/// # Example
/// ```
/// # use knapdd::*;
/// let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]).unwrap();
/// let outcome = solve(&problem, &SolverConfig::default(), &NoCutoff);
/// assert_eq!("220 1\n0 1 1", format_outcome(&outcome));
/// ```
pub fn format_outcome(outcome: &Outcome) -> String {
    outcome.to_string()
}

fn parse_pair(pair: &Regex, line: usize, text: &str) -> Result<(i128, i128), Error> {
    let caps = pair.captures(text).ok_or_else(|| Error::Parse {
        line,
        reason: format!("expected two numbers, found '{}'", text),
    })?;
    Ok((parse_int(line, &caps["first"])?, parse_int(line, &caps["second"])?))
}

fn parse_int(line: usize, token: &str) -> Result<i128, Error> {
    token.parse::<i128>().map_err(|e| Error::Parse {
        line,
        reason: format!("'{}' is not an integer ({})", token, e),
    })
}

fn non_negative(line: usize, x: i128, what: &'static str) -> Result<usize, Error> {
    if x < 0 {
        return Err(Error::Negative { line, what });
    }
    usize::try_from(x).map_err(|_| Error::Parse {
        line,
        reason: format!("{} {} is too large", what, x),
    })
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::{Error, parse_instance};

    #[test]
    fn parses_a_well_formed_instance() {
        let pb = parse_instance("3 50\n60 10\n100 20\n120 30\n").unwrap();
        assert_eq!(50, pb.capacity());
        let items = pb.items().iter().map(|i| (i.index(), i.value(), i.weight())).collect::<Vec<_>>();
        assert_eq!(vec![(0, 60, 10), (1, 100, 20), (2, 120, 30)], items);
    }
    #[test]
    fn blank_lines_and_extra_spaces_are_tolerated() {
        let pb = parse_instance("\n 2   7 \n\n5 1\r\n  3\t2\n").unwrap();
        assert_eq!(7, pb.capacity());
        assert_eq!(2, pb.nb_items());
        assert_eq!(3, pb.items()[1].value());
    }
    #[test]
    fn line_numbers_account_for_blank_lines() {
        let err = parse_instance("2 50\n\n60 10\n\n\n100 x\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 6, .. }));
    }
    #[test]
    fn trailing_lines_are_ignored() {
        let pb = parse_instance("1 7\n5 1\nthis is not an item\n").unwrap();
        assert_eq!(1, pb.nb_items());
    }
    #[test]
    fn an_empty_instance_is_fine() {
        let pb = parse_instance("0 12\n").unwrap();
        assert_eq!(0, pb.nb_items());
        assert_eq!(12, pb.capacity());
    }
    #[test]
    fn an_empty_text_is_rejected() {
        assert!(matches!(parse_instance(""), Err(Error::Parse { line: 1, .. })));
    }
    #[test]
    fn missing_items_are_reported() {
        let err = parse_instance("3 50\n60 10\n").unwrap_err();
        assert!(matches!(err, Error::MissingItems { expected: 3, found: 1 }));
    }
    #[test]
    fn non_numeric_fields_are_reported_with_their_line() {
        let err = parse_instance("2 50\n60 10\n100 abc\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }
    #[test]
    fn lines_with_the_wrong_arity_are_rejected() {
        let err = parse_instance("2 50\n60 10 3\n100 20\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
        let err = parse_instance("50\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }
    #[test]
    fn negative_quantities_are_rejected() {
        let err = parse_instance("1 50\n-60 10\n").unwrap_err();
        assert!(matches!(err, Error::Negative { line: 2, what: "value" }));
        let err = parse_instance("1 50\n60 -10\n").unwrap_err();
        assert!(matches!(err, Error::Negative { line: 2, what: "weight" }));
        let err = parse_instance("1 -50\n60 10\n").unwrap_err();
        assert!(matches!(err, Error::Negative { line: 1, what: "capacity" }));
    }
    #[test]
    fn huge_numbers_are_rejected() {
        let err = parse_instance("1 50\n99999999999999999999999999999999999999999999 10\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }
    #[test]
    fn overflowing_total_values_are_rejected() {
        let text = format!("2 50\n{} 10\n{} 10\n", usize::MAX, 1);
        assert!(matches!(parse_instance(&text), Err(Error::ValueOverflow)));
    }
}

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

use std::time::Duration;

use clap::{Parser, ValueEnum};
use knapdd::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// The exact dynamic programming
    Dp,
    /// The depth first branch-and-bound
    Bb,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Solves a 0/1 knapsack instance exactly, either with dynamic programming or
/// with branch-and-bound depending on the size of the dynamic programming table.
struct Args {
    /// The path to the instance file
    fname: String,
    /// The maximum amount of memory (in MiB) the dynamic programming table may use
    #[clap(short, long, default_value = "256")]
    memory: usize,
    /// Forces the use of one algorithm
    #[clap(short, long, value_enum)]
    algorithm: Option<Algorithm>,
    /// The maximum amount of time (in seconds) the branch-and-bound may run
    #[clap(short, long, conflicts_with = "nodes")]
    duration: Option<u64>,
    /// The maximum number of nodes the branch-and-bound may explore
    #[clap(short, long)]
    nodes: Option<usize>,
    /// Be more verbose (-v: debug, -vv: trace). RUST_LOG takes precedence.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    init_logging(args.verbose);

    let problem = read_instance(&args.fname)?;

    let mut builder = SolverConfigBuilder::default();
    builder.memory_threshold(args.memory.saturating_mul(1024 * 1024));
    match args.algorithm {
        Some(Algorithm::Dp) => { builder.strategy(Strategy::DynamicProgramming); },
        Some(Algorithm::Bb) => { builder.strategy(Strategy::BranchAndBound); },
        None => {},
    }
    let config = builder.build()?;

    let cutoff: Box<dyn Cutoff> = match (args.duration, args.nodes) {
        (Some(secs), _) => Box::new(TimeBudget::new(Duration::from_secs(secs))),
        (_, Some(n))    => Box::new(NodeBudget::new(n)),
        (None, None)    => Box::new(NoCutoff),
    };

    let outcome = solve(&problem, &config, cutoff.as_ref());
    info!(strategy = %outcome.strategy, exact = outcome.completion.is_exact, "done");

    println!("{}", format_outcome(&outcome));
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use crate::{Algorithm, Args};

    #[test]
    fn the_command_line_is_well_formed() {
        Args::command().debug_assert();
    }
    #[test]
    fn flags_are_parsed() {
        let args = Args::try_parse_from(["knapdd", "ks_4_0", "-a", "bb", "-n", "10", "-vv"]).unwrap();
        assert_eq!("ks_4_0", args.fname);
        assert_eq!(256, args.memory);
        assert_eq!(Some(Algorithm::Bb), args.algorithm);
        assert_eq!(Some(10), args.nodes);
        assert_eq!(None, args.duration);
        assert_eq!(2, args.verbose);
    }
    #[test]
    fn a_time_budget_and_a_node_budget_cannot_be_combined() {
        let args = Args::try_parse_from(["knapdd", "ks_4_0", "-d", "5", "-n", "10"]);
        assert!(args.is_err());
    }
}

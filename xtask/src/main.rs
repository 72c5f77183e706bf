//! Development tasks of knapdd. Run them with `cargo xtask <task>`.
use clap::Parser;
use xtaskops::tasks;

#[derive(Debug, clap::Parser)]
enum Args {
    /// Measures the test coverage of the solvers
    Coverage{
        /// Generate html report
        #[clap(short, long)]
        dev_mode: bool
    },
    /// Runs the checks of the continuous integration (fmt, clippy, tests)
    Ci,
    /// Builds the api documentation
    Docs,
}

fn main() -> Result<(), anyhow::Error> {
    match Args::parse() {
        Args::Coverage{dev_mode} => tasks::coverage(dev_mode),
        Args::Ci                 => tasks::ci(),
        Args::Docs               => tasks::docs(),
    }
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Normalize log lines against a pdag rulebase")]
pub struct PdagcArgs {
    /// Path to a rulebase file (one quoted sample per line).
    #[arg(long = "rulebase", short = 'r')]
    pub rulebase: PathBuf,

    /// Path to a log file to normalize; defaults to stdin.
    #[arg(long = "input", short = 'i')]
    pub input: Option<PathBuf>,

    /// Dump the compiled pdag (DOT format) to stderr before normalizing.
    #[arg(long = "dump-dot")]
    pub dump_dot: bool,

    /// Print parser/node statistics to stderr before normalizing.
    #[arg(long = "stats")]
    pub stats: bool,
}

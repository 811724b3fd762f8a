use std::fs;
use std::io::{self, BufRead, Write as _};

use clap::Parser as _;
use eyre::Result;
use pdag_core::{normalize, optimize, Context, NoopAnnotator};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

mod args;
mod config;
mod rulebase;

use args::PdagcArgs;
use config::PdagConfig;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = PdagcArgs::parse();
    let config = PdagConfig::load()?;

    let rulebase_source = fs::read_to_string(&args.rulebase)?;
    // `config.debug` (spec.md section 3's context debug flag) promotes the
    // normalizer's per-edge walk tracing from `trace!` to `debug!`; it is
    // independent of `--dump-dot`/`--stats`, which print a one-shot graph
    // view regardless of this flag.
    let mut ctx = Context::new().with_debug(config.debug);
    rulebase::load_rulebase(&mut ctx, &rulebase_source)?;
    optimize(&mut ctx);

    info!(
        nodes = ctx.node_count(),
        edges = ctx.edge_count(),
        "rulebase compiled"
    );

    if args.dump_dot {
        eprintln!("{}", pdag_core::diagnostics::to_dot(&ctx, ctx.main_root()));
    }
    if args.stats {
        let stats = pdag_core::diagnostics::stats(&ctx, ctx.main_root());
        eprintln!("{stats:#?}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let lines: Box<dyn Iterator<Item = io::Result<String>>> = match &args.input {
        Some(path) => Box::new(io::BufReader::new(fs::File::open(path)?).lines()),
        None => Box::new(io::stdin().lock().lines()),
    };

    for line in lines {
        let line = line?;
        let outcome = normalize(&ctx, &line, &NoopAnnotator);
        let result = outcome.result();
        writeln!(out, "{}", serde_json::to_string(result)?)?;
    }

    Ok(())
}

//! Evaluates scenario documents and prints one report per scenario as JSON, one per line unless
//! `--pretty` is given. Set RUST_LOG=debug to see every decision as it is made.

use std::path::PathBuf;

use anyhow::Context;

#[derive(clap::Parser, Debug)]
struct Args {
    /// scenario documents, `{"vehicles_scenario": [...]}`
    #[clap(required = true)]
    scenarios: Vec<PathBuf>,
    /// intersection layout; the standard four-way layout if not given
    #[clap(long)]
    layout: Option<PathBuf>,
    /// engine settings (TOML)
    #[clap(long)]
    config: Option<PathBuf>,
    /// overrides the trace level from the config: off, decisions or pairs
    #[clap(long)]
    trace: Option<engine::Trace>,
    #[clap(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    let args = Args::parse();

    match env_logger::try_init() {
        Ok(()) => (),
        Err(err) => eprintln!("Failed to initialize logger: {}", err),
    }

    let mut engine = engine::Engine::load_files(args.layout.as_deref(), args.config.as_deref())
        .context("failed to load the engine configuration")?;
    if let Some(trace) = args.trace {
        engine.config.trace = trace;
    }

    for path in &args.scenarios {
        log::debug!("evaluating {}", path.display());
        let report = engine
            .evaluate_file(path)
            .with_context(|| format!("failed to evaluate {}", path.display()))?;
        let output = match args.pretty {
            true => report.dump_pretty()?,
            false => report.dump()?,
        };
        println!("{}", output);
    }

    Ok(())
}

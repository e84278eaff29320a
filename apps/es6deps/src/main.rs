use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use es6deps_rules::{Config, OutputMode};
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "es6deps", version)]
#[command(about = "Generate Makefile dependency rules for ES modules", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.config);
    let cfg = cli.config;

    let Some(mode) = cfg.output_mode() else {
        Cli::command().print_help()?;
        eprintln!("{} make target is required!", "error:".red().bold());
        std::process::exit(1);
    };

    let start = Instant::now();
    let deps = es6deps_rules::run(&cfg)?;

    match mode {
        OutputMode::DependenciesOnly => es6deps_rules::write_dependencies(&mut stdout, &deps)?,
        OutputMode::Rules(targets) => es6deps_rules::write_rules(&mut stdout, targets, &deps)?,
    }
    stdout.flush()?;

    info!(
        "Finished in {}ms with {} dependencies",
        start.elapsed().as_millis(),
        deps.len()
    );
    Ok(())
}

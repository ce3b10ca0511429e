// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use siteledger::build::{catalog::load_catalog, plan_build, run_build, BuildOptions};
use siteledger::{HistoricalPath, LegacyResolver};

mod cli;
use cli::{display, Cli, Commands};

fn init_tracing(verbose: bool) {
    let default = if verbose { "siteledger=debug" } else { "siteledger=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Build {
            input,
            output,
            dry_run,
        } => build(&input, &output, dry_run),
        Commands::Resolve { catalog, paths } => resolve(&catalog, &paths),
        Commands::Inspect { input } => inspect(&input),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn build(input: &Path, output: &Path, dry_run: bool) -> siteledger::Result<()> {
    let options = BuildOptions {
        dry_run,
        progress: atty::is(atty::Stream::Stderr),
    };
    let report = run_build(input, output, options)?;
    display::print_build_summary(&report, dry_run);
    Ok(())
}

fn resolve(catalog: &Path, paths: &[String]) -> siteledger::Result<()> {
    let posts = load_catalog(catalog)?;
    let resolver = LegacyResolver::new(posts.iter().map(|p| p.identifier.as_str()));
    for raw in paths {
        let path = HistoricalPath::parse(raw);
        display::print_resolution(&path, &resolver.resolve(&path));
    }
    Ok(())
}

fn inspect(input: &Path) -> siteledger::Result<()> {
    let report = plan_build(input, BuildOptions::default())?;
    display::print_category_tree(&report);
    display::print_build_summary(&report, true);
    Ok(())
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the siteledger command-line interface.
//!
//! Three subcommands: `build` runs the whole pipeline, `resolve` tries
//! historical paths against an existing catalog, and `inspect` shows what a
//! build would produce without writing anything.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "siteledger",
    about = "Canonical post catalog, category listings and legacy redirects for static blogs",
    version
)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile sources and write catalog, listings and redirects
    Build {
        /// Input directory containing site.json
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for listings.json, _redirects and friends
        #[arg(short, long)]
        output: PathBuf,

        /// Compute everything but write nothing
        #[arg(long)]
        dry_run: bool,
    },

    /// Resolve historical paths against a catalog
    Resolve {
        /// Catalog JSON (canonical post list)
        #[arg(long)]
        catalog: PathBuf,

        /// Paths like 2013/06/sample-post
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print the category tree and listing counts for a site
    Inspect {
        /// Input directory containing site.json
        #[arg(short, long)]
        input: PathBuf,
    },
}

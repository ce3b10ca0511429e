// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the siteledger CLI.
//!
//! OneDark on dark terminals, One Light on light ones. `SITELEDGER_THEME`
//! overrides detection, then `COLORFGBG` is consulted, then dark is assumed.
//! `NO_COLOR` and non-TTY output get plain text.

use std::sync::OnceLock;

use siteledger::build::plan::NavEntry;
use siteledger::build::BuildReport;
use siteledger::{HistoricalPath, Resolution, Strategy};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// What a piece of output means. Each tone is one OneDark / One Light color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Resolved,
    Normalized,
    Fuzzy,
    Stripped,
    Warning,
    Failed,
    Heading,
    Muted,
}

impl Tone {
    fn rgb(self, light: bool) -> (u8, u8, u8) {
        match (self, light) {
            (Tone::Resolved, false) => (152, 195, 121),
            (Tone::Resolved, true) => (80, 161, 79),
            (Tone::Normalized | Tone::Heading, false) => (86, 182, 194),
            (Tone::Normalized | Tone::Heading, true) => (1, 132, 188),
            (Tone::Fuzzy, false) => (97, 175, 239),
            (Tone::Fuzzy, true) => (64, 120, 242),
            (Tone::Stripped, false) => (198, 120, 221),
            (Tone::Stripped, true) => (166, 38, 164),
            (Tone::Warning, false) => (229, 192, 123),
            (Tone::Warning, true) => (193, 132, 1),
            (Tone::Failed, false) => (224, 108, 117),
            (Tone::Failed, true) => (228, 86, 73),
            (Tone::Muted, false) => (92, 99, 112),
            (Tone::Muted, true) => (160, 161, 167),
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb(light_terminal());
        format!("\x1b[38;2;{r};{g};{b}m")
    }
}

/// `SITELEDGER_THEME=light|dark` wins, then a light `COLORFGBG` background.
fn light_terminal() -> bool {
    static LIGHT: OnceLock<bool> = OnceLock::new();
    *LIGHT.get_or_init(|| match std::env::var("SITELEDGER_THEME").as_deref() {
        Ok("light") => true,
        Ok("dark") => false,
        _ => std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
            .is_some_and(|bg| bg >= 7 && bg != 8),
    })
}

/// Colors only on a TTY, and never with `NO_COLOR` set.
fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint(tone: Tone, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    format!("{}{}{}{}", if bold { BOLD } else { "" }, tone.escape(), text, RESET)
}

/// Visible length in chars, ignoring ANSI escapes
fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    s.chars()
        .filter(|&c| match c {
            '\x1b' => {
                in_escape = true;
                false
            }
            'm' if in_escape => {
                in_escape = false;
                false
            }
            _ => !in_escape,
        })
        .count()
}

fn frame(text: &str) -> String {
    paint(Tone::Muted, false, text)
}

/// │ content          │
fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", frame("│"), content, " ".repeat(pad), frame("│"));
}

/// ┌─ LABEL ──────────┐
fn section_top(label: &str) {
    let label = paint(Tone::Heading, true, label);
    let rule = BOX_WIDTH.saturating_sub(visible_len(&label) + 3);
    println!("{}{}{}", frame("┌─ "), label, frame(&format!(" {}┐", "─".repeat(rule))));
}

/// └──────────────────┘
fn section_bot() {
    println!("{}", frame(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Strategy name colored by how loose the match was
fn strategy_badge(strategy: Strategy) -> String {
    let tone = match strategy {
        Strategy::Exact => Tone::Resolved,
        Strategy::ScriptNormalized => Tone::Normalized,
        Strategy::Prefix | Strategy::Substring => Tone::Fuzzy,
        Strategy::DigitInsensitive | Strategy::PunctuationInsensitive => Tone::Stripped,
    };
    paint(tone, false, &format!("[{}]", strategy.name()))
}

pub fn print_resolution(path: &HistoricalPath, resolution: &Resolution) {
    match resolution {
        Resolution::Matched {
            identifier,
            strategy,
        } => println!(
            "{}  →  {}  {}",
            path,
            paint(Tone::Resolved, true, identifier),
            strategy_badge(*strategy)
        ),
        Resolution::Unmatched { slug } => println!(
            "{}  →  {}",
            path,
            paint(Tone::Muted, false, &format!("no match for {slug:?}"))
        ),
        Resolution::Malformed(e) => println!("{}  →  {}", path, paint(Tone::Failed, false, &e.to_string())),
    }
}

pub fn print_build_summary(report: &BuildReport, dry_run: bool) {
    let heading = if dry_run { "DRY RUN" } else { "BUILD" };
    section_top(heading);
    row(&format!(
        "{} posts │ {} documents │ {} export entries",
        report.posts.len(),
        report.documents_loaded,
        report.export_entries
    ));
    row(&format!(
        "{} inserted │ {} replaced │ {} drafts │ {} skipped",
        report.stats.inserted,
        report.stats.replaced,
        report.stats.drafts_removed,
        report.stats.skipped
    ));
    row(&format!(
        "{} global pages │ {} category listings",
        report.plan.global.pages.len(),
        report.plan.categories.len()
    ));
    row(&format!(
        "{} redirects │ {} unmatched legacy paths",
        report.legacy.redirects.len(),
        report.legacy.unmatched
    ));
    if !report.warnings.is_empty() {
        row(&paint(Tone::Warning, true, &format!("{} warnings", report.warnings.len())));
        for warning in &report.warnings {
            row(&paint(Tone::Warning, false, &format!("  {warning}")));
        }
    }
    for path in &report.written {
        row(&paint(Tone::Muted, false, &format!("✓ {}", path.display())));
    }
    section_bot();
}

pub fn print_category_tree(report: &BuildReport) {
    section_top("CATEGORIES");
    for entry in &report.plan.navigation {
        print_nav_entry(entry, 0);
    }
    if let Some(excluded) = report.tree.by_name(&report.manifest.excluded_category) {
        row(&paint(
            Tone::Muted,
            false,
            &format!("{} (hidden from navigation)", excluded.display_name()),
        ));
    }
    section_bot();
}

fn print_nav_entry(entry: &NavEntry, depth: usize) {
    row(&format!(
        "{}{}  {}  {}",
        "  ".repeat(depth),
        paint(Tone::Heading, true, &entry.name),
        paint(Tone::Muted, false, &entry.path_identifier),
        entry.post_count
    ));
    for child in &entry.children {
        print_nav_entry(child, depth + 1);
    }
}

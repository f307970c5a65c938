//! Run the workspace tests with snapshot cleanup.
//!
//! Layout tests use inline insta snapshots. A failing snapshot leaves a `.pending-snap` file next
//! to the test source (or a `.snap.new` file for file snapshots); these are stale as soon as the
//! code changes again, so they are removed before each run.
//!
//! ## Commands
//!
//! - `run` - Run all tests, optionally with the long property test runs
//! - `clean` - Remove pending snapshot files
//! - `status` - List pending snapshot files

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Subcommand;

/// Source directories that may contain pending snapshots.
const SOURCE_DIRS: &[&str] = &["src", "scroller-config/src"];

/// File name suffixes insta uses for snapshots awaiting review.
const PENDING_SUFFIXES: &[&str] = &[".pending-snap", ".snap.new"];

#[derive(Subcommand)]
pub enum Action {
    /// Run all tests
    Run {
        /// Only run tests matching this filter
        #[arg(long, short)]
        filter: Option<String>,

        /// Keep pending snapshots from previous runs
        #[arg(long)]
        no_pre_clean: bool,

        /// Run the property tests with many more cases
        #[arg(long)]
        slow: bool,

        /// Run tests in release mode
        #[arg(long)]
        release: bool,
    },
    /// Remove pending snapshot files
    Clean {
        /// Show what would be removed without removing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// List pending snapshot files
    Status,
}

pub fn run(action: Action) -> Result<()> {
    match action {
        Action::Run {
            filter,
            no_pre_clean,
            slow,
            release,
        } => run_tests(filter, no_pre_clean, slow, release),
        Action::Clean { dry_run } => clean(dry_run),
        Action::Status => status(),
    }
}

fn run_tests(filter: Option<String>, no_pre_clean: bool, slow: bool, release: bool) -> Result<()> {
    if !no_pre_clean {
        let removed = remove_pending()?;
        if removed > 0 {
            println!("Removed {removed} stale pending snapshots\n");
        }
    }

    let mut cmd = Command::new("cargo");
    cmd.args(["test", "--workspace", "--exclude", "xtask"]);
    if release {
        cmd.arg("--release");
    }
    if let Some(filter) = &filter {
        cmd.args(["--", filter]);
    }
    if slow {
        cmd.env("RUN_SLOW_TESTS", "1");
    }

    println!("Running: {cmd:?}\n");

    let start = Instant::now();
    let status = cmd.status().context("error running cargo test")?;
    let elapsed = start.elapsed().as_secs_f64();

    if status.success() {
        println!("\nAll tests passed in {elapsed:.2}s");
        return Ok(());
    }

    let pending = find_pending();
    if !pending.is_empty() {
        println!("\n{} snapshots differ from the expected output:", pending.len());
        for path in &pending {
            println!("  {}", path.display());
        }
        println!("\nReview them with `cargo insta review`.");
    }

    bail!("tests failed after {elapsed:.2}s")
}

fn clean(dry_run: bool) -> Result<()> {
    let pending = find_pending();
    if pending.is_empty() {
        println!("No pending snapshots");
        return Ok(());
    }

    for path in &pending {
        if dry_run {
            println!("Would remove {}", path.display());
        } else {
            fs::remove_file(path).with_context(|| format!("error removing {}", path.display()))?;
            println!("Removed {}", path.display());
        }
    }

    Ok(())
}

fn status() -> Result<()> {
    let pending = find_pending();
    println!("Pending snapshots: {}", pending.len());
    for path in &pending {
        println!("  {}", path.display());
    }
    Ok(())
}

fn remove_pending() -> Result<usize> {
    let pending = find_pending();
    for path in &pending {
        fs::remove_file(path).with_context(|| format!("error removing {}", path.display()))?;
    }
    Ok(pending.len())
}

fn find_pending() -> Vec<PathBuf> {
    let mut files = Vec::new();
    for dir in SOURCE_DIRS {
        collect_pending(Path::new(dir), &mut files);
    }
    files.sort();
    files
}

fn collect_pending(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.filter_map(|entry| entry.ok()) {
        let path = entry.path();
        if path.is_dir() {
            collect_pending(&path, files);
        } else if PENDING_SUFFIXES
            .iter()
            .any(|suffix| path.to_string_lossy().ends_with(suffix))
        {
            files.push(path);
        }
    }
}

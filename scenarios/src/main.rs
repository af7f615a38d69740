//! CLI for generating git practice repositories.
//!
//! One subcommand per catalogue scenario, each taking no arguments and
//! seeding a directory named after the scenario under the current working
//! directory.

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use scenarios::catalog;
use scenarios::error::GenerateError;
use scenarios::exit_codes;
use scenarios::generate::generate;
use scenarios::logging;
use scenarios::scenario::Scenario;

#[derive(Parser)]
#[command(
    name = "scenarios",
    version,
    about = "Generate throwaway git repositories for practicing merges, resets, and rebases"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seed `merge-conflict/`, where `git merge feature` hits a conflict.
    MergeConflict,
    /// Seed `git-reset-mixed/`, a history worth regrouping with `git reset --mixed`.
    ResetMixed,
    /// Seed `git-reset-soft/`, a history worth squashing with `git reset --soft`.
    ResetSoft,
    /// Seed `when-to-rebase/`, a stale branch worth rebasing onto `master`.
    WhenToRebase,
    /// List the available scenarios.
    List {
        /// Emit the catalogue as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let code = match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FAILED
        }
    };
    process::exit(code);
}

fn run(command: Command) -> Result<i32> {
    let scenario = match command {
        Command::List { json } => {
            list(json)?;
            return Ok(exit_codes::OK);
        }
        Command::MergeConflict => catalog::merge_conflict(),
        Command::ResetMixed => catalog::reset_mixed(),
        Command::ResetSoft => catalog::reset_soft(),
        Command::WhenToRebase => catalog::when_to_rebase(),
    };

    match generate(&scenario, Path::new(".")) {
        Ok(_) => Ok(exit_codes::OK),
        Err(GenerateError::DestinationExists(_)) => {
            println!(
                "It looks like you already have a directory called '{}' here. \
                 Delete it and run this command again.",
                scenario.name
            );
            Ok(exit_codes::DEST_EXISTS)
        }
        Err(err) => Err(err).with_context(|| format!("generate scenario {}", scenario.name)),
    }
}

/// One `list` row describing a catalogue entry.
#[derive(Debug, Serialize)]
struct CatalogEntry {
    name: &'static str,
    summary: &'static str,
    commits: usize,
}

impl CatalogEntry {
    fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            name: scenario.name,
            summary: scenario.summary,
            commits: scenario.commit_count(),
        }
    }
}

fn list(json: bool) -> Result<()> {
    let entries: Vec<CatalogEntry> = catalog::all()
        .iter()
        .map(CatalogEntry::from_scenario)
        .collect();

    if json {
        let mut payload =
            serde_json::to_string_pretty(&entries).context("serialize catalogue json")?;
        payload.push('\n');
        print!("{payload}");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{:<16} {} ({} commits)",
            entry.name, entry.summary, entry.commits
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scenario_subcommands() {
        let cli = Cli::parse_from(["scenarios", "merge-conflict"]);
        assert!(matches!(cli.command, Command::MergeConflict));

        let cli = Cli::parse_from(["scenarios", "reset-mixed"]);
        assert!(matches!(cli.command, Command::ResetMixed));

        let cli = Cli::parse_from(["scenarios", "reset-soft"]);
        assert!(matches!(cli.command, Command::ResetSoft));

        let cli = Cli::parse_from(["scenarios", "when-to-rebase"]);
        assert!(matches!(cli.command, Command::WhenToRebase));
    }

    #[test]
    fn parse_list() {
        let cli = Cli::parse_from(["scenarios", "list"]);
        assert!(matches!(cli.command, Command::List { json: false }));

        let cli = Cli::parse_from(["scenarios", "list", "--json"]);
        assert!(matches!(cli.command, Command::List { json: true }));
    }

    #[test]
    fn scenario_subcommands_take_no_arguments() {
        let err = Cli::try_parse_from(["scenarios", "merge-conflict", "extra"]);
        assert!(err.is_err());
    }

    #[test]
    fn catalog_entries_serialize_with_commit_counts() {
        let entries: Vec<CatalogEntry> = catalog::all()
            .iter()
            .map(CatalogEntry::from_scenario)
            .collect();
        let json = serde_json::to_string(&entries).expect("serialize");
        assert!(json.contains("\"name\":\"merge-conflict\""));
        assert!(json.contains("\"commits\":3"));
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use pyhome::{home_stdio, probe_stdio};
use pyhome_core::{candidate::DEFAULT_PYTHON_VERSION, Configuration};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Used by `home` when no subcommand is given.
    #[command(flatten)]
    args: CommonArgs,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// PythonCore version tag to look up in the registry.
    #[arg(long, env = "PYHOME_PYTHON_VERSION", default_value = DEFAULT_PYTHON_VERSION)]
    python_version: String,

    /// Print the result as JSON.
    #[arg(short, long)]
    json: bool,

    /// Display verbose output (defaults to warnings).
    #[arg(short, long)]
    verbose: bool,
}

impl CommonArgs {
    fn configuration(&self) -> Configuration {
        Configuration {
            python_version: self.python_version.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints the Python install path found in the registry, without its trailing separator.
    Home(CommonArgs),
    /// Reads every registry candidate and reports what each one holds.
    Probe(CommonArgs),
}

impl Cli {
    fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Home(self.args))
    }
}

fn main() -> ExitCode {
    match Cli::parse().into_command() {
        Commands::Home(args) => home_stdio(args.configuration(), args.json, args.verbose),
        Commands::Probe(args) => probe_stdio(args.configuration(), args.json, args.verbose),
    }
}

// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

use std::{fmt::Display, fs::read_to_string, path::{Path, PathBuf}, process::exit};

use anyhow::Context;
use clap::Subcommand;
use colored::Colorize;
use plug::{Lexer, Parser};
use plug_interpreter::{Evaluation, Interpreter, Logger};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a Plug program.
    Run {
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    Logger::initialize(args.verbose);

    match args.command {
        Commands::Run { file } => run(&file),
    }
}

fn run(path: &Path) -> anyhow::Result<()> {
    let source_code = read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let lexer = Lexer::new(&source_code);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.diagnostics().is_empty() {
        for diagnostic in parser.diagnostics() {
            print_error(diagnostic);
        }

        exit(1);
    }

    log::debug!("Parsed {} statement(s)", program.statements.len());

    let mut interpreter = Interpreter::new(());
    if let Evaluation::Error(error) = interpreter.execute_program(&program) {
        print_error(&error);
        exit(1);
    }

    Ok(())
}

fn print_error(message: impl Display) {
    eprintln!("{}: {}", "error".red().bold(), message.to_string().bold());
}

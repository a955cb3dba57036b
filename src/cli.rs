use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "zplc", version, about = "Run PLC programs through a lexer, parser, checker and interpreter.")]
pub struct Cli {
	/// Log every pipeline stage to stderr
	#[arg(short, long, global = true)]
	pub verbose: bool,
	#[command(subcommand)]
	pub mode:    Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a program file and print the value `main` returns
	File { path: PathBuf },
	/// Read programs line by line
	Repl,
}

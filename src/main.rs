use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use zplc::cli::*;

fn main() -> ExitCode {
	let cli = Cli::parse();

	let filter = if cli.verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	let plc = zplc::Plc;
	match cli.mode {
		Mode::File { path } => match plc.run_file(&path) {
			Ok(value) => {
				println!("{value}");
				ExitCode::SUCCESS
			}
			Err(e) => {
				eprintln!("Failed run file: {e}");
				ExitCode::FAILURE
			}
		},
		Mode::Repl => {
			plc.run_prompt();
			ExitCode::SUCCESS
		}
	}
}

use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;
use tracing::{debug, info};

use crate::{PlcError, analyzer::check, interpreter::{Interpreter, value::Value}, lexer::tokenize, parser::parse};

/// Plc drives a source text through every stage: lex, parse, check, run.
pub struct Plc;

impl Plc {
	/// Run a program file, printing to stdout.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<Value, PlcError> {
		let source = read_to_string(path).context("Failed open source file")?;
		self.run(&source)
	}

	/// Run the REPL prompt. Every line is a whole program.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited zplc repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			match self.run(input.trim()) {
				Ok(value) => println!("{value}"),
				Err(e) => eprintln!("Failed run prompt: {e}"),
			}
		}
	}

	/// Run the given source code, printing to stdout.
	pub fn run(&self, source: &str) -> Result<Value, PlcError> {
		let (value, _) = self.run_with_output(source, std::io::stdout())?;
		Ok(value)
	}

	/// Run the given source code, printing to `out`, and hand `out` back.
	pub fn run_with_output<W: Write>(&self, source: &str, out: W) -> Result<(Value, W), PlcError> {
		let tokens = tokenize(source)?;
		debug!(tokens = tokens.len(), "lexed");
		let source = parse(tokens)?;
		debug!(globals = source.globals.len(), functions = source.functions.len(), "parsed");
		let source = check(source)?;
		debug!("checked");

		let mut interpreter = Interpreter::with_output(out);
		let value = interpreter.run(&source)?;
		let mut out = interpreter.into_output();
		out.flush().context("Failed flush output")?;
		info!(%value, "main returned");
		Ok((value, out))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::interpreter::RuntimeError;

	fn run(source: &str) -> Result<(Value, String), PlcError> {
		let (value, out) = Plc.run_with_output(source, Vec::new())?;
		Ok((value, String::from_utf8(out).unwrap()))
	}

	#[test]
	fn run_hello_world() {
		let (value, out) = run("FUN main(): Integer DO print(\"Hello, World!\"); RETURN 0; END").unwrap();
		assert_eq!(value.to_string(), "0");
		assert_eq!(out, "Hello, World!\n");
	}

	#[test]
	fn run_reports_the_failing_stage() {
		assert!(matches!(run("VAR x = 1 # 2;"), Err(PlcError::LexError(_))));
		assert!(matches!(run("VAR x = 1"), Err(PlcError::ParseError(_))));
		assert!(matches!(run("VAR x = 1;"), Err(PlcError::TypeError(_))));
		assert!(matches!(run("FUN main(): Integer DO RETURN 1 / 0; END"), Err(PlcError::RuntimeError(_))));
	}

	#[test]
	fn run_checks_before_running() {
		let result = run("FUN main(): Integer DO print(1); RETURN \"s\"; END");
		assert!(matches!(result, Err(PlcError::TypeError(_))));
	}

	#[test]
	fn error_messages_name_the_stage() {
		let Err(error) = run("VAR x = 01;") else { panic!("expected an error") };
		assert_eq!(error.to_string(), "Lex error at offset 9: Leading zero in number literal");
	}

	#[test]
	fn negative_integer_power_is_decimal_at_runtime() {
		// The checker types `Integer ^ Integer` as Integer whatever the exponent's sign.
		let program = "FUN main(): Integer DO LET x: Integer = 2 ^ -1; print(x); RETURN x + 1; END";
		let result = run(program);
		assert!(matches!(result, Err(PlcError::RuntimeError(RuntimeError::TypeMismatch { .. }))));

		let (value, out) = run("FUN main(): Integer DO print(2 ^ -1); RETURN 2 ^ 2; END").unwrap();
		assert_eq!(out, "0.5\n");
		assert_eq!(value.to_string(), "4");
	}

	#[test]
	fn run_missing_file() {
		let result = Plc.run_file("does/not/exist.plc");
		assert!(matches!(result, Err(PlcError::InternalError(_))));
	}
}

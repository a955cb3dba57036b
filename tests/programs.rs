use std::fs;

use walkdir::WalkDir;
use zplc::{Plc, PlcError};

/// What the first line of a program file says should happen.
enum Expectation {
	Value(String),
	Error(String),
}

fn expectation(header: &str) -> Option<Expectation> {
	let header = header.trim().strip_prefix("//")?.trim();
	if let Some(value) = header.strip_prefix("expect:") {
		return Some(Expectation::Value(value.trim().to_string()));
	}
	header.strip_prefix("error:").map(|stage| Expectation::Error(stage.trim().to_string()))
}

fn stage(error: &PlcError) -> &'static str {
	match error {
		PlcError::InternalError(_) => "internal",
		PlcError::LexError(_) => "lex",
		PlcError::ParseError(_) => "parse",
		PlcError::TypeError(_) => "type",
		PlcError::RuntimeError(_) => "runtime",
	}
}

#[test]
fn programs_behave_as_annotated() {
	let mut count = 0;
	let root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/programs");

	for entry in WalkDir::new(root)
		.sort_by_file_name()
		.into_iter()
		.filter_map(Result::ok)
		.filter(|e| e.path().extension().is_some_and(|ext| ext == "plc"))
	{
		let path = entry.path();
		let content = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
		let (header, program) = content.split_once('\n').unwrap_or((&content, ""));
		let expected = expectation(header).unwrap_or_else(|| panic!("{path:?} has no expectation header"));
		count += 1;

		let result = Plc.run_with_output(program, Vec::new());
		match (expected, result) {
			(Expectation::Value(value), Ok((actual, _))) => assert_eq!(actual.to_string(), value, "{path:?}"),
			(Expectation::Value(value), Err(e)) => panic!("{path:?} expected {value}, failed: {e}"),
			(Expectation::Error(expected), Err(e)) => assert_eq!(stage(&e), expected, "{path:?}: {e}"),
			(Expectation::Error(expected), Ok((actual, _))) => {
				panic!("{path:?} expected a {expected} error, returned {actual}")
			}
		}
	}

	assert!(count > 0, "No programs found in {root}");
}

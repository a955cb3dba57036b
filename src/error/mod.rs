pub mod analyzer;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod scope;

/// PlcError is the top-level error type of the pipeline.
#[derive(thiserror::Error, Debug)]
pub enum PlcError {
	/// Host failure outside the language, e.g. reading a source file
	#[error("CompilerInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// The first invalid character sequence
	#[error("Lex error at {0}")]
	LexError(#[from] lexer::LexError),
	/// The first grammar violation
	#[error("Parse error at {0}")]
	ParseError(#[from] parser::ParseError),
	/// The first static type violation
	#[error("Type error at {0}")]
	TypeError(#[from] analyzer::TypeError),
	/// A dynamic violation during execution
	#[error("Runtime error: {0}")]
	RuntimeError(#[from] interpreter::RuntimeError),
}

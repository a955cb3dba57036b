use num_bigint::BigInt;

use crate::error::scope::ScopeError;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur during interpretation
pub enum RuntimeError {
	/// A name missing from the runtime scope chain
	#[error(transparent)]
	Undefined(#[from] ScopeError),
	/// Integer or decimal division by zero, or inverting a zero power
	#[error("Division by zero")]
	DivisionByZero,
	/// List index outside `0..length`
	#[error("Index {index} out of bounds for list of length {length}")]
	IndexOutOfBounds { index: BigInt, length: usize },
	/// Assigning to something other than a variable or list element
	#[error("Invalid assignment receiver")]
	InvalidReceiver,
	/// Storing a list into itself, directly or through a nested list
	#[error("List cannot contain itself")]
	CyclicList,
	/// Rebinding a `VAL`
	#[error("Cannot assign to immutable '{0}'")]
	ImmutableAssignment(String),
	/// An operand or argument of the wrong runtime type
	#[error("Expected {expected}, received {found}")]
	TypeMismatch { expected: &'static str, found: String },
	/// Built-in called with the wrong number of arguments
	#[error("'{name}' expects {expected} arguments, received {found}")]
	ArityMismatch { name: &'static str, expected: usize, found: usize },
	/// An exponent that does not fit the repetition counter
	#[error("Exponent {0} is too large")]
	ExponentTooLarge(BigInt),
	/// A built-in argument outside its domain
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	/// Writing to the output sink failed
	#[error("Failed write output: {0}")]
	Output(#[from] std::io::Error),
}

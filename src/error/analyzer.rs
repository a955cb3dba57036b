use crate::{analyzer::types::Type, error::scope::ScopeError};

/// A static error, positioned at the offset of the offending AST node.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("offset {offset}: {type}")]
pub struct TypeError {
	pub offset: usize,
	pub r#type: TypeErrorType,
}

impl TypeError {
	pub fn new(offset: usize, r#type: TypeErrorType) -> Self { Self { offset, r#type } }
}

#[derive(Debug, PartialEq)]
pub enum TypeErrorType {
	Undefined(ScopeError),
	UnknownType(String),
	NotAssignable { target: Type, actual: Type },
	/// Expression statements must be calls.
	NotACall,
	/// Assignment receivers must be variable or index accesses.
	NotAReceiver,
	ImmutableAssignment(String),
	ConditionNotBoolean(Type),
	/// Only the last case of a switch may omit its value.
	MisplacedDefault,
	/// A declaration with neither a type nor an initializer.
	Untyped(String),
	InvalidOperands { operator: String, left: Type, right: Type },
	IndexNotInteger(Type),
	NotAList(String),
	/// A group that wraps anything but a binary expression.
	RedundantGroup,
	EmptyList,
	MissingMain,
}

impl std::fmt::Display for TypeErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use TypeErrorType::*;
		match self {
			Undefined(e) => write!(f, "{e}"),
			UnknownType(name) => write!(f, "Unknown type '{name}'"),
			NotAssignable { target, actual } => write!(f, "{actual} is not assignable to {target}"),
			NotACall => write!(f, "Expression statement must be a function call"),
			NotAReceiver => write!(f, "Assignment receiver must be an access expression"),
			ImmutableAssignment(name) => write!(f, "Cannot assign to immutable '{name}'"),
			ConditionNotBoolean(actual) => write!(f, "Condition must be Boolean, found {actual}"),
			MisplacedDefault => write!(f, "Only the last case may omit its value"),
			Untyped(name) => write!(f, "'{name}' needs a type or an initializer"),
			InvalidOperands { operator, left, right } => {
				write!(f, "Invalid operands for '{operator}': {left} and {right}")
			}
			IndexNotInteger(actual) => write!(f, "Index must be Integer, found {actual}"),
			NotAList(name) => write!(f, "'{name}' is not a list"),
			RedundantGroup => write!(f, "Group must wrap a binary expression"),
			EmptyList => write!(f, "List literal must hold at least one element"),
			MissingMain => write!(f, "Missing 'main/0' function"),
		}
	}
}

//! The static types and their single subsumption rule.

use std::fmt::Display;

use crate::error::analyzer::{TypeError, TypeErrorType};

/// A static type. Only the checker deals in these, runtime values carry
/// their own tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
	/// Target type that accepts everything.
	Any,
	/// Target type that accepts the ordered scalars.
	Comparable,
	Nil,
	Boolean,
	Integer,
	Decimal,
	Character,
	String,
	/// A list whose elements are all assignable to the inner type.
	List(Box<Type>),
}

impl Type {
	/// Resolve a type annotation. List types have no spelling of their own,
	/// `LIST xs: Integer` names the element type.
	pub fn from_name(name: &str) -> Option<Self> {
		Some(match name {
			"Any" => Type::Any,
			"Comparable" => Type::Comparable,
			"Nil" => Type::Nil,
			"Boolean" => Type::Boolean,
			"Integer" => Type::Integer,
			"Decimal" => Type::Decimal,
			"Character" => Type::Character,
			"String" => Type::String,
			_ => return None,
		})
	}

	pub fn list_of(element: Type) -> Self { Type::List(Box::new(element)) }

	/// Whether a value of type `actual` may be stored where `self` is expected.
	pub fn is_assignable_from(&self, actual: &Type) -> bool {
		match self {
			Type::Any => true,
			Type::Comparable => {
				matches!(actual, Type::Comparable | Type::Integer | Type::Decimal | Type::Character | Type::String)
			}
			target => target == actual,
		}
	}
}

/// Fail with a positioned [`TypeError`] unless `actual` is assignable to `target`.
pub fn require_assignable(target: &Type, actual: &Type, offset: usize) -> Result<(), TypeError> {
	if target.is_assignable_from(actual) {
		Ok(())
	} else {
		Err(TypeError::new(offset, TypeErrorType::NotAssignable { target: target.clone(), actual: actual.clone() }))
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Any => write!(f, "Any"),
			Type::Comparable => write!(f, "Comparable"),
			Type::Nil => write!(f, "Nil"),
			Type::Boolean => write!(f, "Boolean"),
			Type::Integer => write!(f, "Integer"),
			Type::Decimal => write!(f, "Decimal"),
			Type::Character => write!(f, "Character"),
			Type::String => write!(f, "String"),
			Type::List(element) => write!(f, "List<{element}>"),
		}
	}
}

/// The type of a function: what it takes and what it gives back.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
	pub parameter_types: Vec<Type>,
	pub return_type:     Type,
}

impl Signature {
	pub fn new(parameter_types: Vec<Type>, return_type: Type) -> Self { Self { parameter_types, return_type } }
}

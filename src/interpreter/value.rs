use std::{cmp::Ordering, fmt::Display};

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use Value::*;

use crate::{error::interpreter::RuntimeError, parser::expression::LiteralValue, utils::RcCell};

/// Value represents a runtime value.
///
/// Cloning a value copies it, except for lists: a cloned list is the same
/// list, and an index assignment through one binding shows through all.
#[derive(Debug, Clone)]
pub enum Value {
	Nil,
	Boolean(bool),
	Integer(BigInt),
	Decimal(BigDecimal),
	Character(char),
	String(std::string::String),
	List(RcCell<Vec<Value>>),
}

impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Nil => write!(f, "NIL"),
			Boolean(true) => write!(f, "TRUE"),
			Boolean(false) => write!(f, "FALSE"),
			Integer(i) => write!(f, "{i}"),
			Decimal(d) => write!(f, "{d}"),
			Character(c) => write!(f, "{c}"),
			String(s) => write!(f, "{s}"),
			List(elements) => {
				write!(f, "[")?;
				for (i, element) in elements.borrow().iter().enumerate() {
					if i > 0 {
						write!(f, ", ")?;
					}
					write!(f, "{element}")?;
				}
				write!(f, "]")
			}
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Nil, Nil) => true,
			(Boolean(l), Boolean(r)) => l == r,
			(Integer(l), Integer(r)) => l == r,
			(Decimal(l), Decimal(r)) => l == r,
			(Character(l), Character(r)) => l == r,
			(String(l), String(r)) => l == r,
			(List(l), List(r)) => *l.borrow() == *r.borrow(),
			_ => false,
		}
	}
}

impl From<&LiteralValue> for Value {
	fn from(literal: &LiteralValue) -> Self {
		match literal {
			LiteralValue::Nil => Nil,
			LiteralValue::Boolean(b) => Boolean(*b),
			LiteralValue::Integer(i) => Integer(i.clone()),
			LiteralValue::Decimal(d) => Decimal(d.clone()),
			LiteralValue::Character(c) => Character(*c),
			LiteralValue::String(s) => String(s.clone()),
		}
	}
}

impl Value {
	pub fn list(elements: Vec<Value>) -> Self { List(RcCell::new(elements)) }

	/// The name of the value's type, for error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			Nil => "Nil",
			Boolean(_) => "Boolean",
			Integer(_) => "Integer",
			Decimal(_) => "Decimal",
			Character(_) => "Character",
			String(_) => "String",
			List(_) => "List",
		}
	}

	/// Whether `list` is this value or can be reached through its elements.
	pub fn contains_list(&self, list: &RcCell<Vec<Value>>) -> bool {
		match self {
			List(elements) => {
				elements.ptr_eq(list) || elements.borrow().iter().any(|element| element.contains_list(list))
			}
			_ => false,
		}
	}

	/// Adds two numbers of the same type, or concatenates when either side
	/// is a string.
	pub fn add(&self, other: &Self) -> Result<Value, RuntimeError> {
		Ok(match (self, other) {
			(String(l), r) => String(format!("{l}{r}")),
			(l, String(r)) => String(format!("{l}{r}")),
			(Integer(l), Integer(r)) => Integer(l + r),
			(Decimal(l), Decimal(r)) => Decimal(l + r),
			_ => return Err(mismatch("Integer, Decimal or String operands", self, other)),
		})
	}

	pub fn subtract(&self, other: &Self) -> Result<Value, RuntimeError> {
		Ok(match (self, other) {
			(Integer(l), Integer(r)) => Integer(l - r),
			(Decimal(l), Decimal(r)) => Decimal(l - r),
			_ => return Err(mismatch("numeric operands", self, other)),
		})
	}

	pub fn multiply(&self, other: &Self) -> Result<Value, RuntimeError> {
		Ok(match (self, other) {
			(Integer(l), Integer(r)) => Integer(l * r),
			(Decimal(l), Decimal(r)) => Decimal(l * r),
			_ => return Err(mismatch("numeric operands", self, other)),
		})
	}

	/// Integer division truncates. Decimal division rounds half to even at
	/// the dividend's scale, so `1.2 / 3.4` is `0.4`.
	pub fn divide(&self, other: &Self) -> Result<Value, RuntimeError> {
		Ok(match (self, other) {
			(Integer(_), Integer(r)) if r.is_zero() => return Err(RuntimeError::DivisionByZero),
			(Decimal(_), Decimal(r)) if r.is_zero() => return Err(RuntimeError::DivisionByZero),
			(Integer(l), Integer(r)) => Integer(l / r),
			(Decimal(l), Decimal(r)) => {
				let (_, scale) = l.as_bigint_and_exponent();
				Decimal((l / r).with_scale_round(scale, RoundingMode::HalfEven))
			}
			_ => return Err(mismatch("numeric operands", self, other)),
		})
	}

	/// Raises to an integer power by repeated multiplication. A negative
	/// exponent takes the inverse of the positive power, which is always a
	/// decimal.
	pub fn power(&self, exponent: &Self) -> Result<Value, RuntimeError> {
		let Integer(exponent) = exponent else {
			return Err(mismatch("a numeric base and an Integer exponent", self, exponent));
		};
		let count = exponent.magnitude().to_u32().ok_or_else(|| RuntimeError::ExponentTooLarge(exponent.clone()))?;
		match self {
			Integer(base) => {
				let mut result = BigInt::one();
				for _ in 0..count {
					result *= base;
				}
				if exponent.is_negative() { invert(BigDecimal::from(result)) } else { Ok(Integer(result)) }
			}
			Decimal(base) => {
				let mut result = BigDecimal::one();
				for _ in 0..count {
					result = result * base;
				}
				if exponent.is_negative() { invert(result) } else { Ok(Decimal(result)) }
			}
			_ => Err(mismatch("a numeric base and an Integer exponent", self, &Integer(exponent.clone()))),
		}
	}

	/// Orders two values of the same comparable type.
	pub fn compare(&self, other: &Self) -> Result<Ordering, RuntimeError> {
		match (self, other) {
			(Integer(l), Integer(r)) => Ok(l.cmp(r)),
			(Decimal(l), Decimal(r)) => Ok(l.cmp(r)),
			(Character(l), Character(r)) => Ok(l.cmp(r)),
			(String(l), String(r)) => Ok(l.cmp(r)),
			_ => Err(mismatch("comparable operands of one type", self, other)),
		}
	}
}

fn invert(value: BigDecimal) -> Result<Value, RuntimeError> {
	if value.is_zero() {
		return Err(RuntimeError::DivisionByZero);
	}
	Ok(Decimal(BigDecimal::one() / value))
}

fn mismatch(expected: &'static str, left: &Value, right: &Value) -> RuntimeError {
	RuntimeError::TypeMismatch { expected, found: format!("{} and {}", left.type_name(), right.type_name()) }
}

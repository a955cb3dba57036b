//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `x + f(2)` as
//! nested nodes. Each node remembers where it started in the source and has a
//! write-once slot for the static type the analyzer resolves for it. Accesses
//! and calls carry a second slot for the binding their name resolved to.

use std::{cell::OnceCell, fmt::Display};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::analyzer::{FunctionBinding, VariableBinding, types::Type};

#[derive(Debug)]
pub struct Expression {
	pub kind:   ExpressionKind,
	/// Byte offset of the expression's first token.
	pub offset: usize,
	r#type:     OnceCell<Type>,
}

#[derive(Debug)]
pub enum ExpressionKind {
	Literal(LiteralValue),
	Group(Box<Expression>),
	Binary { operator: BinaryOperator, left: Box<Expression>, right: Box<Expression> },
	/// `name` or `name[index]`.
	Access { index: Option<Box<Expression>>, name: String, variable: OnceCell<VariableBinding> },
	Call { name: String, arguments: Vec<Expression>, function: OnceCell<FunctionBinding> },
	List(Vec<Expression>),
}

impl Expression {
	fn new(kind: ExpressionKind, offset: usize) -> Self { Self { kind, offset, r#type: OnceCell::new() } }

	pub fn literal(value: LiteralValue, offset: usize) -> Self { Self::new(ExpressionKind::Literal(value), offset) }

	pub fn group(inner: Expression, offset: usize) -> Self { Self::new(ExpressionKind::Group(Box::new(inner)), offset) }

	pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
		let offset = left.offset;
		Self::new(ExpressionKind::Binary { operator, left: Box::new(left), right: Box::new(right) }, offset)
	}

	pub fn access(name: String, index: Option<Expression>, offset: usize) -> Self {
		Self::new(ExpressionKind::Access { index: index.map(Box::new), name, variable: OnceCell::new() }, offset)
	}

	pub fn call(name: String, arguments: Vec<Expression>, offset: usize) -> Self {
		Self::new(ExpressionKind::Call { name, arguments, function: OnceCell::new() }, offset)
	}

	pub fn list(elements: Vec<Expression>, offset: usize) -> Self { Self::new(ExpressionKind::List(elements), offset) }

	/// The static type, once the analyzer has resolved it.
	pub fn r#type(&self) -> Option<&Type> { self.r#type.get() }

	pub(crate) fn set_type(&self, r#type: Type) { annotate(&self.r#type, r#type) }

	/// The variable an access resolved to.
	pub fn variable(&self) -> Option<&VariableBinding> {
		match &self.kind {
			ExpressionKind::Access { variable, .. } => variable.get(),
			_ => None,
		}
	}

	/// The function a call resolved to.
	pub fn function(&self) -> Option<&FunctionBinding> {
		match &self.kind {
			ExpressionKind::Call { function, .. } => function.get(),
			_ => None,
		}
	}
}

/// Fill a write-once annotation slot. A tree is checked once, a second write
/// keeps the first value.
pub(crate) fn annotate<T>(slot: &OnceCell<T>, value: T) {
	let _ = slot.set(value);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
	And,
	Or,
	Less,
	Greater,
	Equal,
	NotEqual,
	Add,
	Subtract,
	Multiply,
	Divide,
	Power,
}

impl BinaryOperator {
	pub fn from_symbol(symbol: &str) -> Option<Self> {
		use BinaryOperator::*;
		Some(match symbol {
			"&&" => And,
			"||" => Or,
			"<" => Less,
			">" => Greater,
			"==" => Equal,
			"!=" => NotEqual,
			"+" => Add,
			"-" => Subtract,
			"*" => Multiply,
			"/" => Divide,
			"^" => Power,
			_ => return None,
		})
	}

	pub fn symbol(&self) -> &'static str {
		use BinaryOperator::*;
		match self {
			And => "&&",
			Or => "||",
			Less => "<",
			Greater => ">",
			Equal => "==",
			NotEqual => "!=",
			Add => "+",
			Subtract => "-",
			Multiply => "*",
			Divide => "/",
			Power => "^",
		}
	}
}

/// Literal values in the AST, already unescaped.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
	Nil,
	Boolean(bool),
	Integer(BigInt),
	Decimal(BigDecimal),
	Character(char),
	String(String),
}

impl Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ExpressionKind::*;
		match &self.kind {
			Literal(lit) => write!(f, "{lit}"),
			Group(inner) => write!(f, "(group {inner})"),
			Binary { operator, left, right } => write!(f, "({} {left} {right})", operator.symbol()),
			Access { index: None, name, .. } => write!(f, "{name}"),
			Access { index: Some(index), name, .. } => write!(f, "{name}[{index}]"),
			Call { name, arguments, .. } => {
				write!(f, "(call {name}")?;
				for argument in arguments {
					write!(f, " {argument}")?;
				}
				write!(f, ")")
			}
			List(elements) => write!(
				f,
				"[{}]",
				elements.iter().map(|element| format!("{element}")).collect::<Vec<String>>().join(" ")
			),
		}
	}
}

impl Display for LiteralValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LiteralValue::Nil => write!(f, "NIL"),
			LiteralValue::Boolean(true) => write!(f, "TRUE"),
			LiteralValue::Boolean(false) => write!(f, "FALSE"),
			LiteralValue::Integer(i) => write!(f, "{i}"),
			LiteralValue::Decimal(d) => write!(f, "{d}"),
			LiteralValue::Character(c) => write!(f, "{c:?}"),
			LiteralValue::String(s) => write!(f, "{s:?}"),
		}
	}
}

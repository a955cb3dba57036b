//! Tree-walking interpreter.
//!
//! The interpreter walks the checked tree, executing statements for effect
//! and evaluating expressions to [`Value`]s.
//!
//! Scoping is dynamic: a call runs in a child of the caller's scope, so a
//! function body sees the caller's locals as well as the globals. Each block
//! runs in its own child scope, which is dropped when the block is left, on
//! every path.
//!
//! `RETURN` is not an error. Executing a statement yields a [`Flow`], and a
//! `Flow::Return` is passed up through every enclosing block until the call
//! that owns the function body takes its value.

pub mod callable;
pub mod value;

use std::{
	cell::RefCell,
	cmp::Ordering,
	io::{Stdout, Write},
};

use callable::{Builtin, Callable};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use tracing::trace;
use value::Value;

use crate::{
	error::interpreter::RuntimeError,
	parser::expression::{BinaryOperator, Expression, ExpressionKind},
	scope::Scope,
	statement::{Case, Source, Statement},
};

/// The interpreter's scope: value cells for variables, callables for functions.
pub type RuntimeScope<'p, 'a> = Scope<'p, RefCell<Value>, Callable<'a>>;

/// How control leaves a statement.
#[derive(Debug)]
pub enum Flow {
	/// Go on with the next statement.
	Continue,
	/// Leave the enclosing function with this value.
	Return(Value),
}

/// Interpreter that runs programs, writing `print` output to `out`.
pub struct Interpreter<W = Stdout> {
	out: W,
}

impl Interpreter {
	pub fn new() -> Self { Self { out: std::io::stdout() } }
}

impl Default for Interpreter {
	fn default() -> Self { Self::new() }
}

impl<W: Write> Interpreter<W> {
	pub fn with_output(out: W) -> Self { Self { out } }

	pub fn into_output(self) -> W { self.out }

	/// Initialize the globals, define the functions, then call `main/0` and
	/// return its value.
	pub fn run<'a>(&mut self, source: &'a Source) -> Result<Value, RuntimeError> {
		let mut scope = RuntimeScope::new();
		for builtin in Builtin::ALL {
			scope.define_function(builtin.name(), builtin.arity(), Callable::Builtin(builtin));
		}
		for global in &source.globals {
			let value = match &global.value {
				Some(value) => self.evaluate(value, &scope)?,
				None => Value::Nil,
			};
			scope.define_variable(&global.name, global.mutable, RefCell::new(value));
		}
		for function in &source.functions {
			scope.define_function(&function.name, function.parameters.len(), Callable::User(function));
		}

		let main = scope.lookup_function("main", 0)?;
		self.invoke(main.value, Vec::new(), &scope)
	}

	/// Call a function with evaluated arguments. A user function body runs in
	/// a child of `scope` holding the parameters.
	pub fn invoke<'a>(
		&mut self, callable: Callable<'a>, arguments: Vec<Value>, scope: &RuntimeScope<'_, 'a>,
	) -> Result<Value, RuntimeError> {
		match callable {
			Callable::Builtin(builtin) => {
				trace!(function = builtin.name(), "invoke builtin");
				builtin.invoke(&arguments, &mut self.out)
			}
			Callable::User(function) => {
				trace!(function = %function.name, arguments = arguments.len(), "invoke");
				let mut body = scope.child();
				for (name, value) in function.parameters.iter().zip(arguments) {
					body.define_variable(name, true, RefCell::new(value));
				}
				match self.statements(&function.statements, &mut body)? {
					Flow::Return(value) => Ok(value),
					Flow::Continue => Ok(Value::Nil),
				}
			}
		}
	}

	/// Execute statements in the given scope, stopping at the first return.
	fn statements<'a>(
		&mut self, statements: &[Statement], scope: &mut RuntimeScope<'_, 'a>,
	) -> Result<Flow, RuntimeError> {
		for statement in statements {
			if let Flow::Return(value) = self.statement(statement, scope)? {
				return Ok(Flow::Return(value));
			}
		}
		Ok(Flow::Continue)
	}

	/// Execute statements in a fresh child of the given scope.
	fn block<'a>(&mut self, statements: &[Statement], scope: &RuntimeScope<'_, 'a>) -> Result<Flow, RuntimeError> {
		self.statements(statements, &mut scope.child())
	}

	pub fn statement<'a>(
		&mut self, statement: &Statement, scope: &mut RuntimeScope<'_, 'a>,
	) -> Result<Flow, RuntimeError> {
		match statement {
			Statement::Expression(expression) => {
				self.evaluate(expression, scope)?;
			}
			Statement::Declaration(declaration) => {
				let value = match &declaration.value {
					Some(value) => self.evaluate(value, scope)?,
					None => Value::Nil,
				};
				scope.define_variable(&declaration.name, true, RefCell::new(value));
			}
			Statement::Assignment { receiver, value } => self.assign(receiver, value, scope)?,
			Statement::If { condition, then_statements, else_statements } => {
				let branch = if self.condition(condition, scope)? { then_statements } else { else_statements };
				return self.block(branch, scope);
			}
			Statement::Switch { condition, cases } => {
				let condition = self.evaluate(condition, scope)?;
				if let Some(case) = self.select(&condition, cases, scope)? {
					return self.block(&case.statements, scope);
				}
			}
			Statement::While { condition, statements } => {
				while self.condition(condition, scope)? {
					if let Flow::Return(value) = self.block(statements, scope)? {
						return Ok(Flow::Return(value));
					}
				}
			}
			Statement::Return(value) => return Ok(Flow::Return(self.evaluate(value, scope)?)),
		}
		Ok(Flow::Continue)
	}

	/// The first case whose value equals the condition, else the default.
	fn select<'c>(
		&mut self, condition: &Value, cases: &'c [Case], scope: &RuntimeScope<'_, '_>,
	) -> Result<Option<&'c Case>, RuntimeError> {
		for case in cases {
			let Some(value) = &case.value else { return Ok(Some(case)) };
			if self.evaluate(value, scope)? == *condition {
				return Ok(Some(case));
			}
		}
		Ok(None)
	}

	fn assign(&mut self, receiver: &Expression, value: &Expression, scope: &RuntimeScope) -> Result<(), RuntimeError> {
		let ExpressionKind::Access { index, name, .. } = &receiver.kind else {
			return Err(RuntimeError::InvalidReceiver);
		};
		let variable = scope.lookup_variable(name)?;
		let Some(index) = index else {
			if !variable.mutable {
				return Err(RuntimeError::ImmutableAssignment(name.clone()));
			}
			let value = self.evaluate(value, scope)?;
			*variable.value.borrow_mut() = value;
			return Ok(());
		};

		let elements = match &*variable.value.borrow() {
			Value::List(elements) => elements.clone(),
			other => return Err(list_mismatch(other)),
		};
		let index = self.integer(index, scope)?;
		let value = self.evaluate(value, scope)?;
		if value.contains_list(&elements) {
			return Err(RuntimeError::CyclicList);
		}
		let mut elements = elements.borrow_mut();
		let position = list_position(&index, elements.len())?;
		elements[position] = value;
		Ok(())
	}

	/// Evaluate a condition that must be a boolean.
	fn condition(&mut self, condition: &Expression, scope: &RuntimeScope) -> Result<bool, RuntimeError> {
		match self.evaluate(condition, scope)? {
			Value::Boolean(b) => Ok(b),
			other => Err(RuntimeError::TypeMismatch { expected: "Boolean", found: other.type_name().to_string() }),
		}
	}

	fn integer(&mut self, expression: &Expression, scope: &RuntimeScope) -> Result<BigInt, RuntimeError> {
		match self.evaluate(expression, scope)? {
			Value::Integer(i) => Ok(i),
			other => Err(RuntimeError::TypeMismatch { expected: "Integer", found: other.type_name().to_string() }),
		}
	}

	/// Evaluate the given expression and return its value.
	pub fn evaluate<'a>(&mut self, expression: &Expression, scope: &RuntimeScope<'_, 'a>) -> Result<Value, RuntimeError> {
		Ok(match &expression.kind {
			ExpressionKind::Literal(literal) => Value::from(literal),
			ExpressionKind::Group(inner) => self.evaluate(inner, scope)?,
			ExpressionKind::Binary { operator, left, right } => self.binary(*operator, left, right, scope)?,
			ExpressionKind::Access { index, name, .. } => {
				let variable = scope.lookup_variable(name)?;
				let Some(index) = index else {
					return Ok(variable.value.borrow().clone());
				};
				let elements = match &*variable.value.borrow() {
					Value::List(elements) => elements.clone(),
					other => return Err(list_mismatch(other)),
				};
				let index = self.integer(index, scope)?;
				let elements = elements.borrow();
				elements[list_position(&index, elements.len())?].clone()
			}
			ExpressionKind::Call { name, arguments, .. } => {
				let function = scope.lookup_function(name, arguments.len())?;
				let mut values = Vec::with_capacity(arguments.len());
				for argument in arguments {
					values.push(self.evaluate(argument, scope)?);
				}
				self.invoke(function.value, values, scope)?
			}
			ExpressionKind::List(elements) => {
				let mut values = Vec::with_capacity(elements.len());
				for element in elements {
					values.push(self.evaluate(element, scope)?);
				}
				Value::list(values)
			}
		})
	}

	fn binary(
		&mut self, operator: BinaryOperator, left: &Expression, right: &Expression, scope: &RuntimeScope,
	) -> Result<Value, RuntimeError> {
		use BinaryOperator::*;

		// The right operand of `&&` and `||` only runs when it decides the result.
		let apply: fn(&Value, &Value) -> Result<Value, RuntimeError> = match operator {
			And => return Ok(Value::Boolean(self.condition(left, scope)? && self.condition(right, scope)?)),
			Or => return Ok(Value::Boolean(self.condition(left, scope)? || self.condition(right, scope)?)),
			Less => |l, r| Ok(Value::Boolean(l.compare(r)? == Ordering::Less)),
			Greater => |l, r| Ok(Value::Boolean(l.compare(r)? == Ordering::Greater)),
			Equal => |l, r| Ok(Value::Boolean(l == r)),
			NotEqual => |l, r| Ok(Value::Boolean(l != r)),
			Add => Value::add,
			Subtract => Value::subtract,
			Multiply => Value::multiply,
			Divide => Value::divide,
			Power => Value::power,
		};
		let left = self.evaluate(left, scope)?;
		let right = self.evaluate(right, scope)?;
		apply(&left, &right)
	}
}

/// Bounds-check a list index.
fn list_position(index: &BigInt, length: usize) -> Result<usize, RuntimeError> {
	index
		.to_usize()
		.filter(|&position| position < length)
		.ok_or_else(|| RuntimeError::IndexOutOfBounds { index: index.clone(), length })
}

fn list_mismatch(found: &Value) -> RuntimeError {
	RuntimeError::TypeMismatch { expected: "List", found: found.type_name().to_string() }
}

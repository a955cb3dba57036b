//! Statements and the top-level items of a program.
//!
//! There is no place in the grammar where both an expression and a statement
//! are allowed. The operands of, say, `+` are always expressions, never
//! statements. The body of a `WHILE` loop is always a list of statements.

use std::cell::OnceCell;

use crate::{
	analyzer::{FunctionBinding, VariableBinding},
	parser::expression::{Expression, annotate},
};

/// A whole program: globals first, then functions.
#[derive(Debug, Default)]
pub struct Source {
	pub globals:   Vec<Global>,
	pub functions: Vec<Function>,
}

/// A `VAR`, `VAL` or `LIST` declaration at the top level.
#[derive(Debug)]
pub struct Global {
	pub name:      String,
	/// For `LIST` globals this names the element type.
	pub type_name: Option<String>,
	pub mutable:   bool,
	/// Declared with `LIST`, the initializer is a list literal.
	pub list:      bool,
	pub value:     Option<Expression>,
	pub offset:    usize,
	variable:      OnceCell<VariableBinding>,
}

impl Global {
	pub fn new(
		name: String, type_name: Option<String>, mutable: bool, list: bool, value: Option<Expression>, offset: usize,
	) -> Self {
		Self { name, type_name, mutable, list, value, offset, variable: OnceCell::new() }
	}

	pub fn variable(&self) -> Option<&VariableBinding> { self.variable.get() }

	pub(crate) fn set_variable(&self, variable: VariableBinding) { annotate(&self.variable, variable) }
}

#[derive(Debug)]
pub struct Function {
	pub name:                 String,
	pub parameters:           Vec<String>,
	/// One slot per parameter, `None` when the parameter is unannotated.
	pub parameter_type_names: Vec<Option<String>>,
	pub return_type_name:     Option<String>,
	pub statements:           Vec<Statement>,
	pub offset:               usize,
	function:                 OnceCell<FunctionBinding>,
}

impl Function {
	pub fn new(
		name: String, parameters: Vec<String>, parameter_type_names: Vec<Option<String>>,
		return_type_name: Option<String>, statements: Vec<Statement>, offset: usize,
	) -> Self {
		Self { name, parameters, parameter_type_names, return_type_name, statements, offset, function: OnceCell::new() }
	}

	pub fn function(&self) -> Option<&FunctionBinding> { self.function.get() }

	pub(crate) fn set_function(&self, function: FunctionBinding) { annotate(&self.function, function) }
}

/// A statement in a function body.
#[derive(Debug)]
pub enum Statement {
	/// An expression used as a statement, only calls pass the checker.
	Expression(Expression),
	Declaration(Declaration),
	/// `receiver = value;`, the receiver is an access for checked programs.
	Assignment { receiver: Expression, value: Expression },
	If { condition: Expression, then_statements: Vec<Statement>, else_statements: Vec<Statement> },
	/// The last case is the default one and has no value.
	Switch { condition: Expression, cases: Vec<Case> },
	While { condition: Expression, statements: Vec<Statement> },
	Return(Expression),
}

/// A `LET` statement.
#[derive(Debug)]
pub struct Declaration {
	pub name:      String,
	pub type_name: Option<String>,
	pub value:     Option<Expression>,
	pub offset:    usize,
	variable:      OnceCell<VariableBinding>,
}

impl Declaration {
	pub fn new(name: String, type_name: Option<String>, value: Option<Expression>, offset: usize) -> Self {
		Self { name, type_name, value, offset, variable: OnceCell::new() }
	}

	pub fn variable(&self) -> Option<&VariableBinding> { self.variable.get() }

	pub(crate) fn set_variable(&self, variable: VariableBinding) { annotate(&self.variable, variable) }
}

/// A `CASE value:` arm, or the `DEFAULT` arm when `value` is `None`.
#[derive(Debug)]
pub struct Case {
	pub value:      Option<Expression>,
	pub statements: Vec<Statement>,
	pub offset:     usize,
}

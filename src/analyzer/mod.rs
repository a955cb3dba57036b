//! Static checking.
//!
//! One pass over the tree, fail-fast. Children are checked before their
//! parent looks at their types. Every expression gets its static type and
//! every access or call gets the binding its name resolved to, so later
//! passes can read both without deriving them again.

pub mod types;

use std::rc::Rc;

use crate::{
	error::analyzer::{TypeError, TypeErrorType},
	interpreter::callable::Builtin,
	parser::expression::{BinaryOperator, Expression, ExpressionKind, LiteralValue, annotate},
	scope::{FunctionEntry, Scope, VariableEntry},
	statement::{Case, Declaration, Function, Global, Source, Statement},
};
use types::{Signature, Type, require_assignable};

/// The checker's scope: static types for variables, signatures for functions.
pub type StaticScope<'p> = Scope<'p, Type, Signature>;
/// The variable an access or declaration resolved to.
pub type VariableBinding = Rc<VariableEntry<Type>>;
/// The function a call or definition resolved to.
pub type FunctionBinding = Rc<FunctionEntry<Signature>>;

/// Check a parsed program and hand it back annotated.
pub fn check(source: Source) -> Result<Source, TypeError> {
	Analyzer.check_source(&source)?;
	Ok(source)
}

pub struct Analyzer;

impl Analyzer {
	pub fn check_source(&self, source: &Source) -> Result<(), TypeError> {
		let mut scope = StaticScope::new();
		for builtin in Builtin::ALL {
			scope.define_function(builtin.name(), builtin.arity(), builtin.signature());
		}

		for global in &source.globals {
			self.global(global, &mut scope)?;
		}
		for function in &source.functions {
			self.function(function, &mut scope)?;
		}

		let main = scope.lookup_function("main", 0).map_err(|_| TypeError::new(0, TypeErrorType::MissingMain))?;
		let offset = source.functions.iter().find(|f| f.name == "main" && f.parameters.is_empty()).map_or(0, |f| f.offset);
		require_assignable(&Type::Integer, &main.value.return_type, offset)
	}

	fn global(&self, global: &Global, scope: &mut StaticScope) -> Result<(), TypeError> {
		let declared = resolve_type_name(global.type_name.as_deref(), global.offset)?;
		let declared = if global.list { declared.map(Type::list_of) } else { declared };
		let r#type = self.binding_type(&global.name, declared, global.value.as_ref(), global.offset, scope)?;
		let variable = scope.define_variable(&global.name, global.mutable, r#type);
		global.set_variable(variable);
		Ok(())
	}

	fn function(&self, function: &Function, scope: &mut StaticScope) -> Result<(), TypeError> {
		let mut parameter_types = Vec::with_capacity(function.parameters.len());
		for type_name in &function.parameter_type_names {
			parameter_types.push(resolve_type_name(type_name.as_deref(), function.offset)?.unwrap_or(Type::Any));
		}
		let return_type = resolve_type_name(function.return_type_name.as_deref(), function.offset)?.unwrap_or(Type::Nil);

		// Defined before the body is checked, so the function may call itself.
		let signature = Signature::new(parameter_types, return_type);
		let binding = scope.define_function(&function.name, function.parameters.len(), signature);
		function.set_function(binding.clone());

		let mut body = scope.child();
		for (name, r#type) in function.parameters.iter().zip(&binding.value.parameter_types) {
			body.define_variable(name, true, r#type.clone());
		}
		self.statements(&function.statements, &mut body, &binding.value.return_type)
	}

	/// Check statements in the given scope.
	fn statements(&self, statements: &[Statement], scope: &mut StaticScope, return_type: &Type) -> Result<(), TypeError> {
		for statement in statements {
			self.statement(statement, scope, return_type)?;
		}
		Ok(())
	}

	/// Check statements in a child of the given scope.
	fn block(&self, statements: &[Statement], scope: &StaticScope, return_type: &Type) -> Result<(), TypeError> {
		self.statements(statements, &mut scope.child(), return_type)
	}

	fn statement(&self, statement: &Statement, scope: &mut StaticScope, return_type: &Type) -> Result<(), TypeError> {
		match statement {
			Statement::Expression(expression) => {
				if !matches!(expression.kind, ExpressionKind::Call { .. }) {
					return Err(TypeError::new(expression.offset, TypeErrorType::NotACall));
				}
				self.expression(expression, scope)?;
			}
			Statement::Declaration(declaration) => self.declaration(declaration, scope)?,
			Statement::Assignment { receiver, value } => self.assignment(receiver, value, scope)?,
			Statement::If { condition, then_statements, else_statements } => {
				self.condition(condition, scope)?;
				self.block(then_statements, scope, return_type)?;
				self.block(else_statements, scope, return_type)?;
			}
			Statement::Switch { condition, cases } => self.switch(condition, cases, scope, return_type)?,
			Statement::While { condition, statements } => {
				self.condition(condition, scope)?;
				self.block(statements, scope, return_type)?;
			}
			Statement::Return(value) => {
				let actual = self.expression(value, scope)?;
				require_assignable(return_type, &actual, value.offset)?;
			}
		}
		Ok(())
	}

	fn declaration(&self, declaration: &Declaration, scope: &mut StaticScope) -> Result<(), TypeError> {
		let declared = resolve_type_name(declaration.type_name.as_deref(), declaration.offset)?;
		let r#type =
			self.binding_type(&declaration.name, declared, declaration.value.as_ref(), declaration.offset, scope)?;
		let variable = scope.define_variable(&declaration.name, true, r#type);
		declaration.set_variable(variable);
		Ok(())
	}

	/// The type a new variable gets: the declared one, checked against the
	/// initializer, or else the initializer's own.
	fn binding_type(
		&self, name: &str, declared: Option<Type>, value: Option<&Expression>, offset: usize, scope: &StaticScope,
	) -> Result<Type, TypeError> {
		match (declared, value) {
			(Some(target), Some(value)) => {
				self.initializer(&target, value, scope)?;
				Ok(target)
			}
			(Some(target), None) => Ok(target),
			(None, Some(value)) => self.expression(value, scope),
			(None, None) => Err(TypeError::new(offset, TypeErrorType::Untyped(name.to_string()))),
		}
	}

	/// Check a value stored into a slot of type `target`. A list literal
	/// stored into a list is checked element by element.
	fn initializer(&self, target: &Type, value: &Expression, scope: &StaticScope) -> Result<(), TypeError> {
		if let (Type::List(element_type), ExpressionKind::List(elements)) = (target, &value.kind) {
			if elements.is_empty() {
				return Err(TypeError::new(value.offset, TypeErrorType::EmptyList));
			}
			for element in elements {
				let actual = self.expression(element, scope)?;
				require_assignable(element_type, &actual, element.offset)?;
			}
			value.set_type(target.clone());
			return Ok(());
		}
		let actual = self.expression(value, scope)?;
		require_assignable(target, &actual, value.offset)
	}

	fn assignment(&self, receiver: &Expression, value: &Expression, scope: &StaticScope) -> Result<(), TypeError> {
		let ExpressionKind::Access { index, name, .. } = &receiver.kind else {
			return Err(TypeError::new(receiver.offset, TypeErrorType::NotAReceiver));
		};
		let target = self.expression(receiver, scope)?;
		if index.is_none() && receiver.variable().is_some_and(|variable| !variable.mutable) {
			return Err(TypeError::new(receiver.offset, TypeErrorType::ImmutableAssignment(name.clone())));
		}
		self.initializer(&target, value, scope)
	}

	fn switch(
		&self, condition: &Expression, cases: &[Case], scope: &StaticScope, return_type: &Type,
	) -> Result<(), TypeError> {
		let condition_type = self.expression(condition, scope)?;
		for (i, case) in cases.iter().enumerate() {
			match &case.value {
				Some(value) => {
					let actual = self.expression(value, scope)?;
					require_assignable(&condition_type, &actual, value.offset)?;
				}
				None if i + 1 != cases.len() => {
					return Err(TypeError::new(case.offset, TypeErrorType::MisplacedDefault));
				}
				None => {}
			}
			self.block(&case.statements, scope, return_type)?;
		}
		Ok(())
	}

	fn condition(&self, condition: &Expression, scope: &StaticScope) -> Result<(), TypeError> {
		let actual = self.expression(condition, scope)?;
		if actual != Type::Boolean {
			return Err(TypeError::new(condition.offset, TypeErrorType::ConditionNotBoolean(actual)));
		}
		Ok(())
	}

	/// Resolve the type of an expression and record it on the node.
	pub fn expression(&self, expression: &Expression, scope: &StaticScope) -> Result<Type, TypeError> {
		let offset = expression.offset;
		let r#type = match &expression.kind {
			ExpressionKind::Literal(value) => literal_type(value),
			ExpressionKind::Group(inner) => {
				if !matches!(inner.kind, ExpressionKind::Binary { .. }) {
					return Err(TypeError::new(offset, TypeErrorType::RedundantGroup));
				}
				self.expression(inner, scope)?
			}
			ExpressionKind::Binary { operator, left, right } => {
				let left = self.expression(left, scope)?;
				let right = self.expression(right, scope)?;
				binary_type(*operator, left, right, offset)?
			}
			ExpressionKind::Access { index, name, variable } => {
				let binding = scope.lookup_variable(name).map_err(|e| TypeError::new(offset, TypeErrorType::Undefined(e)))?;
				annotate(variable, binding.clone());
				match index {
					None => binding.value.clone(),
					Some(index) => {
						let Type::List(element) = &binding.value else {
							return Err(TypeError::new(offset, TypeErrorType::NotAList(name.clone())));
						};
						let index_type = self.expression(index, scope)?;
						if index_type != Type::Integer {
							return Err(TypeError::new(index.offset, TypeErrorType::IndexNotInteger(index_type)));
						}
						(**element).clone()
					}
				}
			}
			ExpressionKind::Call { name, arguments, function } => {
				let binding = scope
					.lookup_function(name, arguments.len())
					.map_err(|e| TypeError::new(offset, TypeErrorType::Undefined(e)))?;
				annotate(function, binding.clone());
				for (argument, parameter) in arguments.iter().zip(&binding.value.parameter_types) {
					let actual = self.expression(argument, scope)?;
					require_assignable(parameter, &actual, argument.offset)?;
				}
				binding.value.return_type.clone()
			}
			ExpressionKind::List(elements) => {
				let Some((first, rest)) = elements.split_first() else {
					return Err(TypeError::new(offset, TypeErrorType::EmptyList));
				};
				let element_type = self.expression(first, scope)?;
				for element in rest {
					let actual = self.expression(element, scope)?;
					require_assignable(&element_type, &actual, element.offset)?;
				}
				Type::list_of(element_type)
			}
		};
		expression.set_type(r#type.clone());
		Ok(r#type)
	}
}

/// Resolve an optional type annotation.
fn resolve_type_name(name: Option<&str>, offset: usize) -> Result<Option<Type>, TypeError> {
	name.map(|name| Type::from_name(name).ok_or_else(|| TypeError::new(offset, TypeErrorType::UnknownType(name.into()))))
		.transpose()
}

fn literal_type(value: &LiteralValue) -> Type {
	match value {
		LiteralValue::Nil => Type::Nil,
		LiteralValue::Boolean(_) => Type::Boolean,
		LiteralValue::Integer(_) => Type::Integer,
		LiteralValue::Decimal(_) => Type::Decimal,
		LiteralValue::Character(_) => Type::Character,
		LiteralValue::String(_) => Type::String,
	}
}

fn binary_type(operator: BinaryOperator, left: Type, right: Type, offset: usize) -> Result<Type, TypeError> {
	use BinaryOperator::*;
	let numeric = |t: &Type| matches!(t, Type::Integer | Type::Decimal);
	// `Comparable` itself names no concrete type, two of them may still differ at runtime.
	let ordered = |t: &Type| matches!(t, Type::Integer | Type::Decimal | Type::Character | Type::String);
	let result = match operator {
		And | Or if left == Type::Boolean && right == Type::Boolean => Some(Type::Boolean),
		Less | Greater | Equal | NotEqual if ordered(&left) && left == right => Some(Type::Boolean),
		Add if left == Type::String || right == Type::String => Some(Type::String),
		Add | Subtract | Multiply | Divide if numeric(&left) && left == right => Some(left.clone()),
		Power if numeric(&left) && right == Type::Integer => Some(left.clone()),
		_ => None,
	};
	result.ok_or_else(|| {
		TypeError::new(offset, TypeErrorType::InvalidOperands { operator: operator.symbol().to_string(), left, right })
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{lexer::tokenize, parser::parse};

	fn analyze(input: &str) -> Result<Source, TypeError> { check(parse(tokenize(input).unwrap()).unwrap()) }

	fn ok(input: &str) -> Source {
		match analyze(input) {
			Ok(source) => source,
			Err(e) => panic!("{input:?} => {e}"),
		}
	}

	fn error(input: &str) -> TypeErrorType { analyze(input).unwrap_err().r#type }

	/// Wrap a function body in `main`.
	fn body(statements: &str) -> String { format!("FUN main(): Integer DO {statements} RETURN 0; END") }

	fn return_expression(source: &Source) -> &Expression {
		let main = source.functions.last().unwrap();
		match main.statements.last() {
			Some(Statement::Return(value)) => value,
			other => panic!("expected return, found {other:?}"),
		}
	}

	fn type_of(globals: &str, expression: &str) -> Result<Type, TypeErrorType> {
		let program = format!("{globals} FUN main(): Integer DO LET result = {expression}; RETURN 0; END");
		let source = analyze(&program).map_err(|e| e.r#type)?;
		let Some(Statement::Declaration(declaration)) = source.functions.last().unwrap().statements.first() else {
			panic!("expected declaration");
		};
		Ok(declaration.value.as_ref().unwrap().r#type().unwrap().clone())
	}

	#[test]
	fn check_globals_and_main() {
		let source = ok("VAR x = 1; VAR y = 10; FUN main(): Integer DO RETURN x + y; END");
		assert_eq!(source.globals[0].variable().unwrap().value, Type::Integer);
		let value = return_expression(&source);
		assert_eq!(value.r#type(), Some(&Type::Integer));
		let main = source.functions[0].function().unwrap();
		assert_eq!((main.name.as_str(), main.arity), ("main", 0));
		assert_eq!(main.value.return_type, Type::Integer);
	}

	#[test]
	fn check_main_is_required() {
		assert_eq!(error("VAR x = 1;"), TypeErrorType::MissingMain);
		assert_eq!(error("FUN main(x: Integer): Integer DO RETURN x; END"), TypeErrorType::MissingMain);
		assert_eq!(error("FUN main() DO END"), TypeErrorType::NotAssignable {
			target: Type::Integer,
			actual: Type::Nil,
		});
		assert!(analyze("FUN main(): Decimal DO RETURN 1.0; END").is_err());
	}

	#[test]
	fn check_literals() {
		assert_eq!(type_of("", "print(NIL)"), Ok(Type::Nil));
		assert_eq!(type_of("", "TRUE"), Ok(Type::Boolean));
		assert_eq!(type_of("", "1"), Ok(Type::Integer));
		assert_eq!(type_of("", "1.0"), Ok(Type::Decimal));
		assert_eq!(type_of("", "'c'"), Ok(Type::Character));
		assert_eq!(type_of("", "\"s\""), Ok(Type::String));
	}

	#[test]
	fn check_binary_operators() {
		assert_eq!(type_of("", "TRUE && FALSE"), Ok(Type::Boolean));
		assert_eq!(type_of("", "1 < 2"), Ok(Type::Boolean));
		assert_eq!(type_of("", "'a' == 'b'"), Ok(Type::Boolean));
		assert_eq!(type_of("", "\"a\" + 1"), Ok(Type::String));
		assert_eq!(type_of("", "1.5 + \"a\""), Ok(Type::String));
		assert_eq!(type_of("", "1 + 2"), Ok(Type::Integer));
		assert_eq!(type_of("", "1.0 * 2.0"), Ok(Type::Decimal));
		assert_eq!(type_of("", "1.0 ^ 2"), Ok(Type::Decimal));
		assert_eq!(type_of("", "2 ^ 3"), Ok(Type::Integer));

		let invalid = |operator: &str, left, right| -> Result<Type, TypeErrorType> {
			Err(TypeErrorType::InvalidOperands { operator: operator.to_string(), left, right })
		};
		assert_eq!(type_of("", "TRUE && 1"), invalid("&&", Type::Boolean, Type::Integer));
		assert_eq!(type_of("", "TRUE == TRUE"), invalid("==", Type::Boolean, Type::Boolean));
		assert_eq!(type_of("", "1 < 1.0"), invalid("<", Type::Integer, Type::Decimal));
		let mixed = "LIST xs: Comparable = [1, 'a'];";
		assert_eq!(type_of(mixed, "xs[0] < xs[1]"), invalid("<", Type::Comparable, Type::Comparable));
		assert_eq!(type_of(mixed, "xs[0] == xs[1]"), invalid("==", Type::Comparable, Type::Comparable));
		assert_eq!(type_of("VAR a: Any = 1;", "a != a"), invalid("!=", Type::Any, Type::Any));
		assert_eq!(type_of("", "1 + 1.0"), invalid("+", Type::Integer, Type::Decimal));
		assert_eq!(type_of("", "'a' - 'b'"), invalid("-", Type::Character, Type::Character));
		assert_eq!(type_of("", "2 ^ 1.0"), invalid("^", Type::Integer, Type::Decimal));
	}

	#[test]
	fn check_groups_wrap_binaries() {
		assert_eq!(type_of("", "(1 + 2) * 3"), Ok(Type::Integer));
		assert_eq!(type_of("", "(1)"), Err(TypeErrorType::RedundantGroup));
	}

	#[test]
	fn check_lists() {
		assert_eq!(type_of("LIST xs: Integer = [1, 2, 3];", "xs"), Ok(Type::list_of(Type::Integer)));
		assert_eq!(type_of("LIST xs: Integer = [1, 2, 3];", "xs[0]"), Ok(Type::Integer));
		assert_eq!(type_of("LIST xs = ['a'];", "xs[0]"), Ok(Type::Character));
		assert_eq!(type_of("", "[1, 2]"), Ok(Type::list_of(Type::Integer)));
		assert_eq!(type_of("LIST xs: Comparable = [1, 'a'];", "xs[1]"), Ok(Type::Comparable));
		assert_eq!(type_of("LIST xs: Integer = [1];", "xs[1.0]"), Err(TypeErrorType::IndexNotInteger(Type::Decimal)));
		assert_eq!(type_of("VAR x = 1;", "x[0]"), Err(TypeErrorType::NotAList("x".to_string())));
		assert_eq!(type_of("", "[1, 'a']"), Err(TypeErrorType::NotAssignable {
			target: Type::Integer,
			actual: Type::Character,
		}));
		assert!(error("LIST xs: Integer = [1, 2.0];").to_string().contains("Decimal is not assignable to Integer"));
	}

	#[test]
	fn check_empty_list_literal() {
		let scope = StaticScope::new();
		let empty = Expression::list(Vec::new(), 3);
		assert_eq!(Analyzer.expression(&empty, &scope), Err(TypeError::new(3, TypeErrorType::EmptyList)));
	}

	#[test]
	fn check_declarations() {
		assert_eq!(type_of("VAR x: Decimal;", "x"), Ok(Type::Decimal));
		assert_eq!(type_of("VAL s: Comparable = \"s\";", "s"), Ok(Type::Comparable));
		assert_eq!(error("VAR x;"), TypeErrorType::Untyped("x".to_string()));
		assert_eq!(error(&body("LET y;")), TypeErrorType::Untyped("y".to_string()));
		assert_eq!(error("VAR x: Float = 1.0;"), TypeErrorType::UnknownType("Float".to_string()));
		assert_eq!(error(&body("LET x: Integer = \"s\";")), TypeErrorType::NotAssignable {
			target: Type::Integer,
			actual: Type::String,
		});
		ok(&body("LET x: Any = 1; LET y = x;"));
	}

	#[test]
	fn check_undefined_names() {
		use crate::error::scope::ScopeError;

		assert_eq!(error(&body("LET y = x;")), TypeErrorType::Undefined(ScopeError::UndefinedVariable("x".into())));
		assert_eq!(error(&body("f();")), TypeErrorType::Undefined(ScopeError::UndefinedFunction("f".into(), 0)));
		assert_eq!(error(&body("print();")), TypeErrorType::Undefined(ScopeError::UndefinedFunction("print".into(), 0)));
	}

	#[test]
	fn check_block_scopes_end() {
		assert!(matches!(error(&body("IF TRUE DO LET y = 1; END print(y);")), TypeErrorType::Undefined(_)));
		assert!(matches!(error(&body("WHILE FALSE DO LET y = 1; END print(y);")), TypeErrorType::Undefined(_)));
		ok(&body("LET y = 1; IF TRUE DO LET y = 'c'; print(y); END y = 2;"));
	}

	#[test]
	fn check_statements() {
		ok(&body("print(1);"));
		assert_eq!(error(&body("1 + 2;")), TypeErrorType::NotACall);
		assert_eq!(error(&body("1 = 2;")), TypeErrorType::NotAReceiver);
		assert_eq!(error("VAL x = 1; FUN main(): Integer DO x = 2; RETURN x; END"), TypeErrorType::ImmutableAssignment(
			"x".to_string()
		));
		ok("LIST xs: Integer = [1]; FUN main(): Integer DO xs[0] = 2; xs = [3, 4]; RETURN xs[0]; END");
		assert_eq!(error("VAR x = 1; FUN main(): Integer DO x = 'c'; RETURN x; END"), TypeErrorType::NotAssignable {
			target: Type::Integer,
			actual: Type::Character,
		});
		assert_eq!(error(&body("IF 1 DO END")), TypeErrorType::ConditionNotBoolean(Type::Integer));
		assert_eq!(error(&body("WHILE NIL DO END")), TypeErrorType::ConditionNotBoolean(Type::Nil));
		assert_eq!(error("FUN main(): Integer DO RETURN \"s\"; END"), TypeErrorType::NotAssignable {
			target: Type::Integer,
			actual: Type::String,
		});
	}

	#[test]
	fn check_switch() {
		ok(&body("SWITCH 'y' CASE 'y': print(1); CASE 'n': DEFAULT print(2); END"));
		assert_eq!(error(&body("SWITCH 'y' CASE 1: DEFAULT END")), TypeErrorType::NotAssignable {
			target: Type::Character,
			actual: Type::Integer,
		});
	}

	#[test]
	fn check_misplaced_default() {
		let source = parse(tokenize(&body("SWITCH 1 CASE 1: DEFAULT END")).unwrap()).unwrap();
		let Statement::Switch { cases, .. } = &source.functions[0].statements[0] else { panic!("expected switch") };
		let scope = StaticScope::new();
		let mut reordered: Vec<Case> = Vec::new();
		for case in cases.iter().rev() {
			let value = case.value.as_ref().map(|_| Expression::literal(LiteralValue::Integer(1.into()), case.offset));
			reordered.push(Case { value, statements: Vec::new(), offset: case.offset });
		}
		let condition = Expression::literal(LiteralValue::Integer(1.into()), 0);
		let error = Analyzer.switch(&condition, &reordered, &scope, &Type::Integer).unwrap_err();
		assert_eq!(error.r#type, TypeErrorType::MisplacedDefault);
		assert_eq!(error.offset, reordered[0].offset);
	}

	#[test]
	fn check_functions() {
		ok("FUN f(a: Integer, b): String DO RETURN \"x\" + a + b; END FUN main(): Integer DO print(f(1, 'c')); RETURN 0; END");
		ok("FUN fact(n: Integer): Integer DO IF n < 1 DO RETURN 1; END RETURN n * fact(n - 1); END FUN main(): Integer DO RETURN fact(5); END");
		assert_eq!(error("FUN f(a: Integer) DO END FUN main(): Integer DO f(1.0); RETURN 0; END"), TypeErrorType::NotAssignable {
			target: Type::Integer,
			actual: Type::Decimal,
		});
		assert_eq!(type_of("FUN f(x) DO END", "f(1)"), Ok(Type::Nil));
		assert_eq!(type_of("", "log(2.0)"), Ok(Type::Decimal));
		assert_eq!(type_of("", "converter(10, 2)"), Ok(Type::String));
	}

	#[test]
	fn check_annotates_bindings() {
		let source = ok("VAR x = 1; FUN main(): Integer DO RETURN x; END");
		let access = return_expression(&source);
		let binding = access.variable().unwrap();
		assert!(Rc::ptr_eq(binding, source.globals[0].variable().unwrap()));
		assert!(binding.mutable);

		let source = ok("FUN f(): Integer DO RETURN 1; END FUN main(): Integer DO RETURN f(); END");
		let call = return_expression(&source);
		assert!(Rc::ptr_eq(call.function().unwrap(), source.functions[0].function().unwrap()));
	}

	#[test]
	fn check_error_offsets() {
		let error = analyze(&body("LET x: Integer = 'c';")).unwrap_err();
		assert_eq!(error.offset, 40);
		assert_eq!(error.to_string(), "offset 40: Character is not assignable to Integer");
	}
}

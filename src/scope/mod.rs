//! A chain of nested symbol tables.
//!
//! The checker and the interpreter walk the same lexical structure, so they
//! share one scope shape and differ only in what a binding holds: static
//! types and signatures for the checker, value cells and callables for the
//! interpreter.
//!
//! A child scope borrows its parent, so a parent always outlives its children
//! and dropping a child is all it takes to leave a block, on every exit path.

use std::{collections::HashMap, rc::Rc};

use crate::error::scope::ScopeError;

/// A variable binding. The `Rc` around it is the binding's identity.
#[derive(Debug)]
pub struct VariableEntry<V> {
	pub name:    String,
	pub mutable: bool,
	pub value:   V,
}

/// A function binding, keyed by name and arity.
#[derive(Debug)]
pub struct FunctionEntry<F> {
	pub name:  String,
	pub arity: usize,
	pub value: F,
}

#[derive(Debug)]
pub struct Scope<'p, V, F> {
	parent:    Option<&'p Scope<'p, V, F>>,
	variables: HashMap<String, Rc<VariableEntry<V>>>,
	functions: HashMap<(String, usize), Rc<FunctionEntry<F>>>,
}

impl<V, F> Default for Scope<'_, V, F> {
	fn default() -> Self { Self { parent: None, variables: HashMap::new(), functions: HashMap::new() } }
}

impl<'p, V, F> Scope<'p, V, F> {
	/// Create a root scope.
	pub fn new() -> Self { Self::default() }

	/// Open a nested scope whose lookups fall back to `self`.
	pub fn child(&self) -> Scope<'_, V, F> {
		Scope { parent: Some(self), variables: HashMap::new(), functions: HashMap::new() }
	}

	/// A definition doesn't just add a new variable, it also replaces one of
	/// the same name in this very scope.
	pub fn define_variable(&mut self, name: &str, mutable: bool, value: V) -> Rc<VariableEntry<V>> {
		let entry = Rc::new(VariableEntry { name: name.to_string(), mutable, value });
		self.variables.insert(name.to_string(), entry.clone());
		entry
	}

	pub fn define_function(&mut self, name: &str, arity: usize, value: F) -> Rc<FunctionEntry<F>> {
		let entry = Rc::new(FunctionEntry { name: name.to_string(), arity, value });
		self.functions.insert((name.to_string(), arity), entry.clone());
		entry
	}

	/// Find the innermost variable called `name`.
	pub fn lookup_variable(&self, name: &str) -> Result<Rc<VariableEntry<V>>, ScopeError> {
		let mut scope = Some(self);
		while let Some(current) = scope {
			if let Some(entry) = current.variables.get(name) {
				return Ok(entry.clone());
			}
			scope = current.parent;
		}
		Err(ScopeError::UndefinedVariable(name.to_string()))
	}

	/// Find the innermost function called `name` taking `arity` arguments.
	pub fn lookup_function(&self, name: &str, arity: usize) -> Result<Rc<FunctionEntry<F>>, ScopeError> {
		let key = (name.to_string(), arity);
		let mut scope = Some(self);
		while let Some(current) = scope {
			if let Some(entry) = current.functions.get(&key) {
				return Ok(entry.clone());
			}
			scope = current.parent;
		}
		Err(ScopeError::UndefinedFunction(name.to_string(), arity))
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;

	type TestScope<'p> = Scope<'p, Cell<i32>, &'static str>;

	#[test]
	fn lookup_walks_outward() {
		let mut global = TestScope::new();
		global.define_variable("x", true, Cell::new(1));
		global.define_function("f", 1, "global f");

		let mut inner = global.child();
		inner.define_variable("y", false, Cell::new(2));

		let innermost = inner.child();
		assert_eq!(innermost.lookup_variable("x").unwrap().value.get(), 1);
		assert_eq!(innermost.lookup_variable("y").unwrap().value.get(), 2);
		assert!(!innermost.lookup_variable("y").unwrap().mutable);
		assert_eq!(innermost.lookup_function("f", 1).unwrap().value, "global f");
	}

	#[test]
	fn innermost_binding_wins() {
		let mut global = TestScope::new();
		global.define_variable("x", true, Cell::new(1));
		let mut inner = global.child();
		inner.define_variable("x", true, Cell::new(2));

		assert_eq!(inner.lookup_variable("x").unwrap().value.get(), 2);
		drop(inner);
		assert_eq!(global.lookup_variable("x").unwrap().value.get(), 1);
	}

	#[test]
	fn cells_are_shared_with_children() {
		let mut global = TestScope::new();
		global.define_variable("x", true, Cell::new(1));
		{
			let inner = global.child();
			inner.lookup_variable("x").unwrap().value.set(5);
		}
		assert_eq!(global.lookup_variable("x").unwrap().value.get(), 5);
	}

	#[test]
	fn functions_are_keyed_by_arity() {
		let mut global = TestScope::new();
		global.define_function("f", 0, "nullary");
		global.define_function("f", 2, "binary");

		assert_eq!(global.lookup_function("f", 0).unwrap().value, "nullary");
		assert_eq!(global.lookup_function("f", 2).unwrap().value, "binary");
		assert_eq!(global.lookup_function("f", 1).unwrap_err(), ScopeError::UndefinedFunction("f".to_string(), 1));
	}

	#[test]
	fn undefined_names_are_errors() {
		let global = TestScope::new();
		let inner = global.child();
		assert_eq!(inner.lookup_variable("nope").unwrap_err(), ScopeError::UndefinedVariable("nope".to_string()));
	}
}

/// Failed name resolution in a scope chain.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScopeError {
	#[error("undefined variable '{0}'")]
	UndefinedVariable(String),
	#[error("undefined function '{0}/{1}'")]
	UndefinedFunction(String, usize),
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("offset {offset}: {type}")]
pub struct ParseError {
	pub offset: usize,
	pub r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(offset: usize, r#type: ParseErrorType) -> Self { Self { offset, r#type } }
}

#[derive(Debug, PartialEq)]
pub enum ParseErrorType {
	/// A specific operator or keyword was required.
	Expected(&'static str),
	ExpectedIdentifier,
	ExpectedExpression,
	/// Something other than `VAR`, `VAL`, `LIST` or `FUN` at the top level.
	ExpectedItem,
	/// A global declared after the first function.
	GlobalAfterFunction,
	/// A `SWITCH` closed without its `DEFAULT` case.
	MissingDefault,
	UnterminatedParenthesis,
	/// A number literal the numeric types could not hold.
	InvalidLiteral,
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			Expected(token) => write!(f, "Expected '{token}'"),
			ExpectedIdentifier => write!(f, "Expected identifier"),
			ExpectedExpression => write!(f, "Expected expression"),
			ExpectedItem => write!(f, "Expected VAR, VAL, LIST or FUN"),
			GlobalAfterFunction => write!(f, "Globals must be declared before functions"),
			MissingDefault => write!(f, "SWITCH requires a DEFAULT case"),
			UnterminatedParenthesis => write!(f, "Unterminated parenthesis"),
			InvalidLiteral => write!(f, "Invalid literal"),
		}
	}
}

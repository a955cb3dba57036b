/// A lexical error with the source offset of the offending character.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("offset {offset}: {type}")]
pub struct LexError {
	/// Byte offset into the source text.
	pub offset: usize,
	/// What was wrong at that offset.
	pub r#type: LexErrorType,
}

impl LexError {
	pub fn new(offset: usize, r#type: LexErrorType) -> Self { Self { offset, r#type } }
}

/// Types of lexical errors.
#[derive(Debug, PartialEq)]
pub enum LexErrorType {
	/// A character that cannot start any token.
	UnexpectedCharacter(char),
	/// `&`, `|` or `!` without its second character.
	IncompleteOperator(char),
	/// A `-` at the very end of the input.
	DanglingMinus,
	/// A `0` followed by more digits without a decimal point.
	LeadingZero,
	/// A `.` without a digit after it.
	TrailingDecimalPoint,
	/// Character literal with no character between the quotes.
	EmptyCharacter,
	/// Character literal holding more than one character.
	CharacterTooLong,
	/// Character literal reached a newline or the end of input.
	UnterminatedCharacter,
	/// String literal reached a newline or the end of input.
	UnterminatedString,
	/// A backslash followed by anything but `b n r t ' " \`.
	InvalidEscape,
}

impl std::fmt::Display for LexErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use LexErrorType::*;
		match self {
			UnexpectedCharacter(c) => write!(f, "Unexpected character '{c}'"),
			IncompleteOperator(c) => write!(f, "Incomplete operator '{c}'"),
			DanglingMinus => write!(f, "Dangling '-'"),
			LeadingZero => write!(f, "Leading zero in number literal"),
			TrailingDecimalPoint => write!(f, "Decimal point must be followed by a digit"),
			EmptyCharacter => write!(f, "Empty character literal"),
			CharacterTooLong => write!(f, "Character literal holds more than one character"),
			UnterminatedCharacter => write!(f, "Unterminated character literal"),
			UnterminatedString => write!(f, "Unterminated string"),
			InvalidEscape => write!(f, "Invalid escape sequence"),
		}
	}
}

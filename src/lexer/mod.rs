//! Turns source text into positioned tokens.
//!
//! The lexical grammar is small: identifiers, integer and decimal literals,
//! character and string literals, and operators. Whitespace separates tokens
//! and is never emitted. There are no reserved words at this level, `IF` and
//! `x` are both identifiers and the parser tells keywords apart by their text.
//!
//! Every token remembers the byte offset it started at, so later stages can
//! point back into the source when they fail.
//!
//! Lexing is fail-fast, the first invalid character sequence aborts with a
//! [`LexError`] carrying its offset.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenKind::*;
pub use token::*;

use crate::error::lexer::{LexError, LexErrorType};

/// Tokenize a whole source text.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> { Lexer::new(source).lex() }

/// A lexer over one source text
pub struct Lexer<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points just past the character consumed last
	cursor:      usize,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0 }
	}

	/// Lex all tokens, skipping whitespace between them.
	pub fn lex(mut self) -> Result<Vec<Token<'a>>, LexError> {
		let mut tokens = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			let Some(first) = self.advance() else { break };
			if first.is_whitespace() {
				continue;
			}
			let kind = self.lex_token(first)?;
			tokens.push(Token::new(kind, &self.source[self.start..self.cursor], self.start));
		}
		Ok(tokens)
	}

	/// Lex the rest of a token whose first character is already consumed.
	fn lex_token(&mut self, first: char) -> Result<TokenKind, LexError> {
		#[rustfmt::skip]
		let kind = match first {
			'\'' => self.character()?,
			'"' => self.string()?,
			'-' if self.peek().is_some_and(|c| c.is_ascii_digit()) => self.number(first)?,
			'-' if self.peek().is_none() => return Err(self.error_at_start(LexErrorType::DanglingMinus)),
			c if c.is_ascii_digit() => self.number(first)?,
			c if c.is_alphabetic() || c == '@' => self.identifier(),
			'&' => if self.match_next('&') { Operator } else { return Err(self.error_at_start(LexErrorType::IncompleteOperator('&'))) },
			'|' => if self.match_next('|') { Operator } else { return Err(self.error_at_start(LexErrorType::IncompleteOperator('|'))) },
			'!' => if self.match_next('=') { Operator } else { return Err(self.error_at_start(LexErrorType::IncompleteOperator('!'))) },
			'=' => { self.match_next('='); Operator }
			'+' | '-' | '*' | '/' | '^' | '(' | ')' | ';' | ':' | ',' | '[' | ']' | '<' | '>' => Operator,
			c => return Err(self.error_at_start(LexErrorType::UnexpectedCharacter(c))),
		};
		Ok(kind)
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the second character ahead
	fn peek_second(&mut self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	fn error_at_start(&self, r#type: LexErrorType) -> LexError { LexError::new(self.start, r#type) }

	/// Consume a run of ASCII digits.
	fn digits(&mut self) {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}
	}

	/// Scan an integer or decimal literal, `first` is a digit or a `-` known
	/// to be followed by one.
	fn number(&mut self, first: char) -> Result<TokenKind, LexError> {
		let leading = if first == '-' {
			let start = self.start;
			self.advance().ok_or(LexError::new(start, LexErrorType::DanglingMinus))?
		} else {
			first
		};
		if leading == '0' && self.peek().is_some_and(|c| c.is_ascii_digit()) {
			return Err(LexError::new(self.cursor, LexErrorType::LeadingZero));
		}
		self.digits();

		// Look for a fractional part.
		if self.peek() != Some('.') {
			return Ok(Integer);
		}
		if !self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			return Err(LexError::new(self.cursor, LexErrorType::TrailingDecimalPoint));
		}
		self.advance(); // consume '.'
		self.digits();
		Ok(Decimal)
	}

	/// Scan an identifier
	fn identifier(&mut self) -> TokenKind {
		while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '-') {
			self.advance();
		}
		Identifier
	}

	/// Scan a character literal, the opening quote is consumed.
	fn character(&mut self) -> Result<TokenKind, LexError> {
		let offset = self.cursor;
		match self.advance() {
			None | Some('\n' | '\r') => return Err(LexError::new(offset, LexErrorType::UnterminatedCharacter)),
			Some('\'') => return Err(LexError::new(offset, LexErrorType::EmptyCharacter)),
			Some('\\') => self.escape()?,
			Some(_) => {}
		}
		let offset = self.cursor;
		match self.advance() {
			Some('\'') => Ok(Character),
			None | Some('\n' | '\r') => Err(LexError::new(offset, LexErrorType::UnterminatedCharacter)),
			Some(_) => Err(LexError::new(offset, LexErrorType::CharacterTooLong)),
		}
	}

	/// Scan a string literal, the opening quote is consumed.
	fn string(&mut self) -> Result<TokenKind, LexError> {
		loop {
			let offset = self.cursor;
			match self.advance() {
				Some('"') => return Ok(String),
				Some('\\') => self.escape()?,
				None | Some('\n' | '\r') => return Err(LexError::new(offset, LexErrorType::UnterminatedString)),
				Some(_) => {}
			}
		}
	}

	/// Check the character after a backslash.
	fn escape(&mut self) -> Result<(), LexError> {
		let offset = self.cursor;
		match self.advance() {
			Some('b' | 'n' | 'r' | 't' | '\'' | '"' | '\\') => Ok(()),
			_ => Err(LexError::new(offset, LexErrorType::InvalidEscape)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn lex(input: &str, ok: bool) {
		let result = tokenize(input);
		assert!(result.is_ok() == ok, "{input:?} => {result:?}");
	}

	fn single(input: &str, kind: TokenKind) {
		let tokens = tokenize(input).unwrap();
		assert_eq!(tokens, vec![Token::new(kind, input, 0)], "{input:?}");
	}

	fn error(input: &str) -> LexError { tokenize(input).unwrap_err() }

	#[test]
	fn lex_example_statement() {
		let tokens = tokenize("LET x = 5;").unwrap();
		assert_eq!(tokens, vec![
			Token::new(Identifier, "LET", 0),
			Token::new(Identifier, "x", 4),
			Token::new(Operator, "=", 6),
			Token::new(Integer, "5", 8),
			Token::new(Operator, ";", 9),
		]);
	}

	#[test]
	fn lex_call() {
		let tokens = tokenize("print(\"Hello, World!\");").unwrap();
		assert_eq!(tokens, vec![
			Token::new(Identifier, "print", 0),
			Token::new(Operator, "(", 5),
			Token::new(String, "\"Hello, World!\"", 6),
			Token::new(Operator, ")", 21),
			Token::new(Operator, ";", 22),
		]);
	}

	#[test]
	fn lex_identifiers() {
		single("getName", Identifier);
		single("thelegend27", Identifier);
		single("a_b_c", Identifier);
		single("a-b-c", Identifier);
		single("@abc", Identifier);
		single("ABC", Identifier);
		single("abcdefghijklmnopqrstuvwxyz012346789_-", Identifier);
		lex("_abc", false);
	}

	#[test]
	fn lex_integers() {
		single("1", Integer);
		single("12345", Integer);
		single("-1", Integer);
		single("0", Integer);
		single("123456789123456789123456789", Integer);
		lex("01", false);
		lex("-01", false);
	}

	#[test]
	fn lex_decimals() {
		single("123.456", Decimal);
		single("-1.0", Decimal);
		single("0.5", Decimal);
		single("111.000", Decimal);
		single("9007199254740993.0", Decimal);
		lex("1.", false);
		lex(".5", false);
		lex("123.456.789", false);
		lex("123.letters", false);
		lex("0000000000.5", false);
	}

	#[test]
	fn lex_characters() {
		single("'c'", Character);
		single("'\\n'", Character);
		single("'ρ'", Character);
		single("' '", Character);
		single("'\\''", Character);
		single("'\\\\'", Character);
		lex("''", false);
		lex("'abc'", false);
		lex("'a", false);
		lex("'a\n'", false);
		lex("'\\'", false);
		lex("'\n'", false);
		lex("'", false);
	}

	#[test]
	fn lex_strings() {
		single("\"\"", String);
		single("\"abc\"", String);
		single("\"Hello,\\nWorld\"", String);
		single("\"ρ★⚡\"", String);
		single("\"sq\\'dq\\\"bs\\\\\"", String);
		single("\"!@#$%^&*\"", String);
		lex("\"unterminated", false);
		lex("\"invalid\\escape\"", false);
		lex("\"a\\u0000b\"", false);
		lex("\"unterminated \n\"", false);
		lex("\"", false);
	}

	#[test]
	fn lex_operators() {
		for op in ["+", "-", "*", "/", "^", "(", ")", ";", ":", ",", "[", "]", "=", "<", ">", "&&", "||", "==", "!="] {
			let text = format!("{op} x");
			let tokens = tokenize(&text).unwrap();
			assert_eq!(tokens[0], Token::new(Operator, op, 0));
		}
		lex("&", false);
		lex("a | b", false);
		lex("!x", false);
		lex("%", false);
		lex("x -", false);
	}

	#[test]
	fn lex_minus() {
		let tokens = tokenize("x - 1").unwrap();
		assert_eq!(tokens[1], Token::new(Operator, "-", 2));
		let tokens = tokenize("x -1").unwrap();
		assert_eq!(tokens[1], Token::new(Integer, "-1", 2));
	}

	#[test]
	fn lex_whitespace() {
		assert!(tokenize("").unwrap().is_empty());
		assert!(tokenize(" \t\r\n ").unwrap().is_empty());
		let tokens = tokenize("  one\n\ttwo").unwrap();
		assert_eq!(tokens, vec![Token::new(Identifier, "one", 2), Token::new(Identifier, "two", 7)]);
	}

	#[test]
	fn lex_error_offsets() {
		assert_eq!(error("x = 01;"), LexError::new(5, LexErrorType::LeadingZero));
		assert_eq!(error("a # b"), LexError::new(2, LexErrorType::UnexpectedCharacter('#')));
		assert_eq!(error("\"ab\\q\""), LexError::new(4, LexErrorType::InvalidEscape));
		assert_eq!(error("\"ab\ncd\""), LexError::new(3, LexErrorType::UnterminatedString));
		assert_eq!(error("'ab'"), LexError::new(2, LexErrorType::CharacterTooLong));
		assert_eq!(error("1 -"), LexError::new(2, LexErrorType::DanglingMinus));
	}
}

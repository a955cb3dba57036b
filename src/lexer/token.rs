/// A token produced by the lexer, borrowing its text from the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
	pub kind:    TokenKind,
	/// Raw source text, quotes and escapes included.
	pub literal: &'a str,
	/// Byte offset of the first character in the source.
	pub offset:  usize,
}

impl<'a> Token<'a> {
	pub fn new(kind: TokenKind, literal: &'a str, offset: usize) -> Self { Self { kind, literal, offset } }

	/// Offset just past the last character of this token.
	pub fn end(&self) -> usize { self.offset + self.literal.len() }

	/// Whether this is an identifier or operator spelled exactly `text`.
	///
	/// Keywords are plain identifiers at the lexical level, the parser tells
	/// them apart by their text.
	pub fn is(&self, text: &str) -> bool {
		matches!(self.kind, TokenKind::Identifier | TokenKind::Operator) && self.literal == text
	}
}

/// The lexical categories. Keywords, `TRUE`, `FALSE` and `NIL` are identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
	/// Letter or `@`, then letters, digits, `_` and `-`.
	Identifier,
	/// Optionally negative, no leading zeros, e.g. `-42`.
	Integer,
	/// Digits on both sides of exactly one `.`, e.g. `3.14`.
	Decimal,
	/// One character or escape between single quotes.
	Character,
	/// Escaped text between double quotes.
	String,
	/// `+ - * / ^ ( ) ; : , [ ] = < >` and `&& || == !=`.
	Operator,
}

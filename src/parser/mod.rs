//! The `Lexer` uses the `Lexical grammar`, its alphabet is characters.
//! The `Parser` uses the `Syntactic grammar`, its alphabet is tokens.
//!
//! Keywords are identifiers with a reserved spelling, so the parser matches
//! most tokens by their text.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Logical|&& \|\||Left
//! Comparison|< > == !=|Left
//! Additive|+ -|Left
//! Multiplicative|* / ^|Left
//!
//! Grammar:
//!
//! ``` BNF
//! source         → ( global ";" )* function* ;
//! global         → "VAR" IDENT ( ":" IDENT )? ( "=" expression )?
//!                | "VAL" IDENT ( ":" IDENT )? "=" expression
//!                | "LIST" IDENT ( ":" IDENT )? "=" "[" expression ( "," expression )* "]" ;
//! function       → "FUN" IDENT "(" ( parameter ( "," parameter )* )? ")" ( ":" IDENT )? "DO" block "END" ;
//! parameter      → IDENT ( ":" IDENT )? ;
//! block          → statement* ;
//! statement      → "LET" IDENT ( ":" IDENT )? ( "=" expression )? ";"
//!                | "IF" expression "DO" block ( "ELSE" block )? "END"
//!                | "SWITCH" expression ( "CASE" expression ":" block )* "DEFAULT" block "END"
//!                | "WHILE" expression "DO" block "END"
//!                | "RETURN" expression ";"
//!                | expression ( "=" expression )? ";" ;
//! expression     → logical ;
//! logical        → comparison ( ( "&&" | "||" ) comparison )* ;
//! comparison     → additive ( ( "<" | ">" | "==" | "!=" ) additive )* ;
//! additive       → multiplicative ( ( "+" | "-" ) multiplicative )* ;
//! multiplicative → primary ( ( "*" | "/" | "^" ) primary )* ;
//! primary        → "NIL" | "TRUE" | "FALSE" | INTEGER | DECIMAL | CHARACTER | STRING
//!                | "(" expression ")"
//!                | IDENT ( "[" expression "]" | "(" ( expression ( "," expression )* )? ")" )?
//!                | "[" expression ( "," expression )* "]" ;
//! ```
//!
//! Parsing is fail-fast. A [`ParseError`] points at the offending token, or
//! just past the previous token when the input ended early.

pub mod expression;

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{
	error::parser::{ParseError, ParseErrorType},
	lexer::{Token, TokenKind},
	parser::expression::{BinaryOperator, Expression, LiteralValue},
	statement::{Case, Declaration, Function, Global, Source, Statement},
};

/// Words that close a block.
const BLOCK_END: [&str; 4] = ["END", "ELSE", "CASE", "DEFAULT"];

/// Parse a whole program.
pub fn parse(tokens: Vec<Token<'_>>) -> Result<Source, ParseError> { Parser::new(tokens).parse_source() }

pub struct Parser<'a> {
	/// The tokens to parse.
	tokens:  Vec<Token<'a>>,
	/// Index of the next token to consume.
	current: usize,
}

impl<'a> Parser<'a> {
	pub fn new(tokens: Vec<Token<'a>>) -> Self { Self { tokens, current: 0 } }

	pub fn parse_source(&mut self) -> Result<Source, ParseError> {
		let mut source = Source::default();
		while self.peek_any(&["VAR", "VAL", "LIST"]) {
			source.globals.push(self.global()?);
			self.expect(";")?;
		}
		while self.peek("FUN") {
			source.functions.push(self.function()?);
		}
		if self.peek_any(&["VAR", "VAL", "LIST"]) {
			return Err(self.error(ParseErrorType::GlobalAfterFunction));
		}
		if !self.is_at_end() {
			return Err(self.error(ParseErrorType::ExpectedItem));
		}
		Ok(source)
	}

	/// Parse a global without its trailing `;`.
	fn global(&mut self) -> Result<Global, ParseError> {
		let keyword = self.advance()?;
		let offset = keyword.offset;
		let keyword = keyword.literal;
		let name = self.identifier()?;
		let type_name = self.type_annotation()?;
		match keyword {
			"VAR" => {
				let value = if self.match_text("=") { Some(self.expression()?) } else { None };
				Ok(Global::new(name, type_name, true, false, value, offset))
			}
			"VAL" => {
				self.expect("=")?;
				let value = self.expression()?;
				Ok(Global::new(name, type_name, false, false, Some(value), offset))
			}
			_ => {
				self.expect("=")?;
				let list_offset = self.expect("[")?.offset;
				let elements = self.expression_list("]")?;
				let value = Expression::list(elements, list_offset);
				Ok(Global::new(name, type_name, true, true, Some(value), offset))
			}
		}
	}

	fn function(&mut self) -> Result<Function, ParseError> {
		let offset = self.advance()?.offset; // consume 'FUN'
		let name = self.identifier()?;
		self.expect("(")?;
		let mut parameters = Vec::new();
		let mut parameter_type_names = Vec::new();
		if !self.match_text(")") {
			loop {
				parameters.push(self.identifier()?);
				parameter_type_names.push(self.type_annotation()?);
				if !self.match_text(",") {
					break;
				}
			}
			self.expect(")")?;
		}
		let return_type_name = self.type_annotation()?;
		self.expect("DO")?;
		let statements = self.block()?;
		self.expect("END")?;
		Ok(Function::new(name, parameters, parameter_type_names, return_type_name, statements, offset))
	}

	/// Parse `: Type` if present.
	fn type_annotation(&mut self) -> Result<Option<String>, ParseError> {
		if self.match_text(":") { Ok(Some(self.identifier()?)) } else { Ok(None) }
	}

	/// Parse statements up to, not including, a word that closes the block.
	fn block(&mut self) -> Result<Vec<Statement>, ParseError> {
		let mut statements = Vec::new();
		while !self.is_at_end() && !self.peek_any(&BLOCK_END) {
			statements.push(self.statement()?);
		}
		Ok(statements)
	}

	fn statement(&mut self) -> Result<Statement, ParseError> {
		if self.peek("LET") {
			self.declaration()
		} else if self.peek("IF") {
			self.if_statement()
		} else if self.peek("SWITCH") {
			self.switch_statement()
		} else if self.peek("WHILE") {
			self.while_statement()
		} else if self.peek("RETURN") {
			self.advance()?;
			let value = self.expression()?;
			self.expect(";")?;
			Ok(Statement::Return(value))
		} else {
			let expression = self.expression()?;
			if self.match_text("=") {
				let value = self.expression()?;
				self.expect(";")?;
				Ok(Statement::Assignment { receiver: expression, value })
			} else {
				self.expect(";")?;
				Ok(Statement::Expression(expression))
			}
		}
	}

	fn declaration(&mut self) -> Result<Statement, ParseError> {
		let offset = self.advance()?.offset; // consume 'LET'
		let name = self.identifier()?;
		let type_name = self.type_annotation()?;
		let value = if self.match_text("=") { Some(self.expression()?) } else { None };
		self.expect(";")?;
		Ok(Statement::Declaration(Declaration::new(name, type_name, value, offset)))
	}

	fn if_statement(&mut self) -> Result<Statement, ParseError> {
		self.advance()?; // consume 'IF'
		let condition = self.expression()?;
		self.expect("DO")?;
		let then_statements = self.block()?;
		let else_statements = if self.match_text("ELSE") { self.block()? } else { Vec::new() };
		self.expect("END")?;
		Ok(Statement::If { condition, then_statements, else_statements })
	}

	fn switch_statement(&mut self) -> Result<Statement, ParseError> {
		self.advance()?; // consume 'SWITCH'
		let condition = self.expression()?;
		let mut cases = Vec::new();
		while self.peek("CASE") {
			let offset = self.advance()?.offset;
			let value = self.expression()?;
			self.expect(":")?;
			let statements = self.block()?;
			cases.push(Case { value: Some(value), statements, offset });
		}
		if !self.peek("DEFAULT") {
			return Err(self.error(ParseErrorType::MissingDefault));
		}
		let offset = self.advance()?.offset;
		let statements = self.block()?;
		cases.push(Case { value: None, statements, offset });
		self.expect("END")?;
		Ok(Statement::Switch { condition, cases })
	}

	fn while_statement(&mut self) -> Result<Statement, ParseError> {
		self.advance()?; // consume 'WHILE'
		let condition = self.expression()?;
		self.expect("DO")?;
		let statements = self.block()?;
		self.expect("END")?;
		Ok(Statement::While { condition, statements })
	}

	pub fn expression(&mut self) -> Result<Expression, ParseError> { self.logical() }

	fn logical(&mut self) -> Result<Expression, ParseError> {
		let mut expression = self.comparison()?;
		while let Some(operator) = self.match_operator(&["&&", "||"]) {
			expression = Expression::binary(operator, expression, self.comparison()?);
		}
		Ok(expression)
	}

	fn comparison(&mut self) -> Result<Expression, ParseError> {
		let mut expression = self.additive()?;
		while let Some(operator) = self.match_operator(&["<", ">", "==", "!="]) {
			expression = Expression::binary(operator, expression, self.additive()?);
		}
		Ok(expression)
	}

	fn additive(&mut self) -> Result<Expression, ParseError> {
		let mut expression = self.multiplicative()?;
		while let Some(operator) = self.match_operator(&["+", "-"]) {
			expression = Expression::binary(operator, expression, self.multiplicative()?);
		}
		Ok(expression)
	}

	fn multiplicative(&mut self) -> Result<Expression, ParseError> {
		let mut expression = self.primary()?;
		while let Some(operator) = self.match_operator(&["*", "/", "^"]) {
			expression = Expression::binary(operator, expression, self.primary()?);
		}
		Ok(expression)
	}

	fn primary(&mut self) -> Result<Expression, ParseError> {
		let Some(token) = self.tokens.get(self.current).cloned() else {
			return Err(self.error(ParseErrorType::ExpectedExpression));
		};
		let offset = token.offset;
		let literal = match token.kind {
			TokenKind::Identifier => match token.literal {
				"NIL" => Some(LiteralValue::Nil),
				"TRUE" => Some(LiteralValue::Boolean(true)),
				"FALSE" => Some(LiteralValue::Boolean(false)),
				_ => None,
			},
			TokenKind::Integer => {
				Some(LiteralValue::Integer(BigInt::from_str(token.literal).map_err(|_| self.invalid_literal())?))
			}
			TokenKind::Decimal => {
				Some(LiteralValue::Decimal(BigDecimal::from_str(token.literal).map_err(|_| self.invalid_literal())?))
			}
			TokenKind::Character => {
				let value = unescape(self.unquote(token.literal)?).chars().next();
				Some(LiteralValue::Character(value.ok_or_else(|| self.invalid_literal())?))
			}
			TokenKind::String => Some(LiteralValue::String(unescape(self.unquote(token.literal)?))),
			TokenKind::Operator => None,
		};
		if let Some(literal) = literal {
			self.advance()?;
			return Ok(Expression::literal(literal, offset));
		}

		if token.kind == TokenKind::Identifier {
			self.advance()?;
			let name = token.literal.to_string();
			if self.match_text("[") {
				let index = self.expression()?;
				self.expect("]")?;
				return Ok(Expression::access(name, Some(index), offset));
			}
			if self.match_text("(") {
				let arguments = if self.match_text(")") { Vec::new() } else { self.expression_list(")")? };
				return Ok(Expression::call(name, arguments, offset));
			}
			return Ok(Expression::access(name, None, offset));
		}

		if token.is("(") {
			self.advance()?;
			let inner = self.expression()?;
			if !self.match_text(")") {
				return Err(self.error(ParseErrorType::UnterminatedParenthesis));
			}
			return Ok(Expression::group(inner, offset));
		}

		if token.is("[") {
			self.advance()?;
			let elements = self.expression_list("]")?;
			return Ok(Expression::list(elements, offset));
		}

		Err(self.error(ParseErrorType::ExpectedExpression))
	}

	/// Parse `expression ( "," expression )*` and the closing token.
	fn expression_list(&mut self, close: &'static str) -> Result<Vec<Expression>, ParseError> {
		let mut expressions = vec![self.expression()?];
		while self.match_text(",") {
			expressions.push(self.expression()?);
		}
		self.expect(close)?;
		Ok(expressions)
	}

	fn identifier(&mut self) -> Result<String, ParseError> {
		match self.tokens.get(self.current) {
			Some(token) if token.kind == TokenKind::Identifier => {
				let name = token.literal.to_string();
				self.current += 1;
				Ok(name)
			}
			_ => Err(self.error(ParseErrorType::ExpectedIdentifier)),
		}
	}

	/// Consume the operator or keyword `text`, or fail pointing at what is there instead.
	fn expect(&mut self, text: &'static str) -> Result<&Token<'a>, ParseError> {
		if !self.peek(text) {
			return Err(self.error(ParseErrorType::Expected(text)));
		}
		self.advance()
	}

	fn match_text(&mut self, text: &str) -> bool {
		if self.peek(text) {
			self.current += 1;
			true
		} else {
			false
		}
	}

	fn match_operator(&mut self, symbols: &[&str]) -> Option<BinaryOperator> {
		let token = self.tokens.get(self.current)?;
		if token.kind != TokenKind::Operator || !symbols.contains(&token.literal) {
			return None;
		}
		let operator = BinaryOperator::from_symbol(token.literal)?;
		self.current += 1;
		Some(operator)
	}

	fn peek(&self, text: &str) -> bool { self.tokens.get(self.current).is_some_and(|token| token.is(text)) }

	fn peek_any(&self, texts: &[&str]) -> bool { texts.iter().any(|text| self.peek(text)) }

	fn is_at_end(&self) -> bool { self.current >= self.tokens.len() }

	/// Advance to the next token.
	fn advance(&mut self) -> Result<&Token<'a>, ParseError> {
		if self.is_at_end() {
			return Err(self.error(ParseErrorType::ExpectedExpression));
		}
		self.current += 1;
		Ok(&self.tokens[self.current - 1])
	}

	/// An error at the next token, or just past the last one at the end of input.
	fn error(&self, r#type: ParseErrorType) -> ParseError {
		let offset = match self.tokens.get(self.current) {
			Some(token) => token.offset,
			None => self.tokens.last().map_or(0, Token::end),
		};
		ParseError::new(offset, r#type)
	}

	fn invalid_literal(&self) -> ParseError { self.error(ParseErrorType::InvalidLiteral) }

	/// The text between a literal's opening and closing quote.
	fn unquote<'t>(&self, literal: &'t str) -> Result<&'t str, ParseError> {
		literal.get(1..literal.len().saturating_sub(1)).ok_or_else(|| self.invalid_literal())
	}
}

/// Replace the escapes `\b \n \r \t \' \" \\` with the characters they stand for.
fn unescape(raw: &str) -> String {
	let mut value = String::with_capacity(raw.len());
	let mut chars = raw.chars();
	while let Some(c) = chars.next() {
		if c != '\\' {
			value.push(c);
			continue;
		}
		match chars.next() {
			Some('b') => value.push('\u{8}'),
			Some('n') => value.push('\n'),
			Some('r') => value.push('\r'),
			Some('t') => value.push('\t'),
			Some(other) => value.push(other),
			None => value.push('\\'),
		}
	}
	value
}

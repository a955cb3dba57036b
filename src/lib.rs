//! # From text to a running program
//!
//! User's source code: `VAR total = 1 + 2;`

//! ## Lexing
//!
//! Takes in the characters and converts them into tokens. Operators `+`,
//! numbers `123`, character and string literals `'c'` `"hi!"`, identifiers
//! `total` are all tokens. Keywords such as `VAR` are identifiers too, only
//! the parser knows they are special.
//!
//! Whitespace is skipped. So the tokens are
//! `["VAR", "total", "=", "1", "+", "2", ";"]`, each with the offset it
//! started at.

//! ## Parsing
//!
//! A recursive-descent `parser` builds the `abstract syntax tree` (AST) and
//! reports the first `syntax error`.
//!
//! ``` markdown
//! total (Global)
//! └── + (Binary)
//!     ├── 1 (Literal)
//!     └── 2 (Literal)
//! ```

//! ## Static analysis
//!
//! The `analyzer` resolves every name to the declaration it refers to, within
//! the `scope` where that name is visible, and checks types: if an Integer is
//! added to a Decimal, it reports a `type error`. The results are written
//! into the tree, so nothing downstream has to work them out again.

//! ## Interpretation
//!
//! A tree-walking `interpreter` executes the checked tree directly: globals
//! are initialized, functions are defined, and `main` is called. Integers and
//! decimals have arbitrary precision.

pub mod analyzer;
pub mod cli;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
mod plc;
pub mod scope;
pub mod statement;
mod utils;

pub use analyzer::check;
pub use error::PlcError;
pub use interpreter::{Interpreter, value::Value};
pub use lexer::tokenize;
pub use parser::parse;
pub use plc::Plc;

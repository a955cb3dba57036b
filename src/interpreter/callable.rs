use std::{io::Write, str::FromStr};

use bigdecimal::BigDecimal;
use num_traits::{Signed, ToPrimitive};

use crate::{
	analyzer::types::{Signature, Type},
	error::interpreter::RuntimeError,
	interpreter::value::Value,
	statement::Function,
};

/// What a function name resolves to at runtime.
#[derive(Debug, Clone, Copy)]
pub enum Callable<'a> {
	Builtin(Builtin),
	User(&'a Function),
}

/// Functions every program can call without defining them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
	/// `print(value)` writes the value and a newline to the output.
	Print,
	/// `log(x)` is the natural logarithm, computed in double precision.
	Log,
	/// `converter(number, base)` renders an integer in a base from 2 to 36.
	Converter,
}

impl Builtin {
	pub const ALL: [Builtin; 3] = [Builtin::Print, Builtin::Log, Builtin::Converter];

	pub fn name(&self) -> &'static str {
		match self {
			Builtin::Print => "print",
			Builtin::Log => "log",
			Builtin::Converter => "converter",
		}
	}

	pub fn arity(&self) -> usize { self.signature().parameter_types.len() }

	pub fn signature(&self) -> Signature {
		match self {
			Builtin::Print => Signature::new(vec![Type::Any], Type::Nil),
			Builtin::Log => Signature::new(vec![Type::Decimal], Type::Decimal),
			Builtin::Converter => Signature::new(vec![Type::Integer, Type::Integer], Type::String),
		}
	}

	pub fn invoke<W: Write>(&self, arguments: &[Value], out: &mut W) -> Result<Value, RuntimeError> {
		if arguments.len() != self.arity() {
			return Err(RuntimeError::ArityMismatch {
				name:     self.name(),
				expected: self.arity(),
				found:    arguments.len(),
			});
		}
		match (self, arguments) {
			(Builtin::Print, [value]) => {
				writeln!(out, "{value}")?;
				Ok(Value::Nil)
			}
			(Builtin::Log, [Value::Decimal(x)]) => {
				let ln = x.to_f64().map(f64::ln).filter(|ln| ln.is_finite());
				let ln = ln.and_then(|ln| BigDecimal::from_str(&ln.to_string()).ok());
				ln.map(Value::Decimal).ok_or_else(|| RuntimeError::InvalidArgument(format!("log({x})")))
			}
			(Builtin::Converter, [Value::Integer(number), Value::Integer(base)]) => {
				let radix = base.to_u32().filter(|radix| (2..=36).contains(radix));
				let radix = radix.ok_or_else(|| RuntimeError::InvalidArgument(format!("base {base}")))?;
				let digits = number.magnitude().to_str_radix(radix);
				Ok(Value::String(if number.is_negative() { format!("-{digits}") } else { digits }))
			}
			(Builtin::Log, [other]) => {
				Err(RuntimeError::TypeMismatch { expected: "Decimal", found: other.type_name().to_string() })
			}
			(_, arguments) => Err(RuntimeError::TypeMismatch {
				expected: "Integer arguments",
				found:    arguments.iter().map(Value::type_name).collect::<Vec<_>>().join(" and "),
			}),
		}
	}
}

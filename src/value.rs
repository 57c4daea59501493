use std::fmt::{self, Debug, Display};
use std::rc::Rc;

use crate::Object;

/// A dynamically typed value stored in observed data.
///
/// Cloning is cheap: strings are reference counted and objects are
/// shared handles.
#[derive(Clone)]
pub enum Value {
	Null,
	Bool(bool),
	Number(f64),
	String(Rc<str>),
	Object(Object),
}

impl Value {
	/// Strict equality.
	///
	/// Primitives compare by value, objects by identity. `NaN` is never
	/// the same as anything, itself included.
	pub fn is_same(&self, other: &Value) -> bool {
		match (self, other) {
			(Value::Null, Value::Null) => true,
			(Value::Bool(a), Value::Bool(b)) => a == b,
			(Value::Number(a), Value::Number(b)) => a == b,
			(Value::String(a), Value::String(b)) => a == b,
			(Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
			_ => false,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::Number(n) => Some(*n),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Value::Object(o) => Some(o),
			_ => None,
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		self.is_same(other)
	}
}

impl Default for Value {
	fn default() -> Self {
		Value::Null
	}
}

impl From<()> for Value {
	fn from(_: ()) -> Self {
		Value::Null
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

macro_rules! from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Value::Number(value as f64)
				}
			}
		)*
	};
}

from_number!(i32, i64, u32, u64, f32, f64);

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value.into())
	}
}

impl From<Rc<str>> for Value {
	fn from(value: Rc<str>) -> Self {
		Value::String(value)
	}
}

impl From<Object> for Value {
	fn from(value: Object) -> Self {
		Value::Object(value)
	}
}

impl<T> From<Option<T>> for Value
where
	T: Into<Value>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Null, Into::into)
	}
}

impl Debug for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => f.write_str("null"),
			Value::Bool(b) => Debug::fmt(b, f),
			Value::Number(n) => Display::fmt(&Number(*n), f),
			Value::String(s) => Debug::fmt(s, f),
			Value::Object(o) => Debug::fmt(o, f),
		}
	}
}

/// Renders the value the way it would appear in interpolated text:
/// strings without quotes, integral numbers without a fraction.
impl Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::String(s) => f.write_str(s),
			other => Debug::fmt(other, f),
		}
	}
}

struct Number(f64);

impl Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let n = self.0;
		if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
			write!(f, "{}", n as i64)
		} else {
			write!(f, "{}", n)
		}
	}
}

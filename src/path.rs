use std::fmt::{self, Debug, Display};
use std::rc::Rc;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::{Error, Object, Result, Value};

/// A parsed dotted path such as `user.address.city`.
///
/// Segments are identifiers made of ASCII letters, digits, `_` and `$`.
/// There is no index or escape syntax.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Path {
	source: Rc<str>,
	segments: SmallVec<[Rc<str>; 4]>,
}

impl Path {
	pub fn parse(expr: &str) -> Result<Self> {
		let invalid = |reason| Error::InvalidPath {
			expr: expr.to_owned(),
			reason,
		};

		let source = expr.trim();
		if source.is_empty() {
			return Err(invalid("expression is empty"));
		}

		let mut segments = SmallVec::new();
		for segment in source.split('.') {
			if segment.is_empty() {
				return Err(invalid("empty segment"));
			}

			if !segment
				.chars()
				.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
			{
				return Err(invalid("segments must be identifiers"));
			}

			segments.push(Rc::from(segment));
		}

		Ok(Path {
			source: source.into(),
			segments,
		})
	}

	pub fn as_str(&self) -> &str {
		&self.source
	}

	pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
		self.segments.iter().map(|s| &**s)
	}

	/// Walks the path from `root`, reading every step through the object,
	/// so a running evaluation subscribes to each level.
	pub fn resolve(&self, root: &Object) -> Result<Value> {
		self.segments
			.iter()
			.try_fold(Value::Object(root.clone()), |current, key| {
				self.step(&current, key)
			})
	}

	/// Assigns the last segment of the path, walking the others from
	/// `root`. The write goes through the field so subscribers are
	/// notified.
	pub fn assign(&self, root: &Object, value: impl Into<Value>) -> Result<()> {
		let (last, parents) = match self.segments.split_last() {
			Some(split) => split,
			None => unreachable!("paths have at least one segment"),
		};

		let parent = parents
			.iter()
			.try_fold(Value::Object(root.clone()), |current, key| {
				self.step(&current, key)
			})?;

		match parent {
			Value::Object(object) => object.set(last, value),
			_ => Err(self.not_an_object(last)),
		}
	}

	fn step(&self, current: &Value, key: &str) -> Result<Value> {
		match current {
			Value::Object(object) => object.get(key).ok_or_else(|| Error::MissingKey {
				path: self.source.to_string(),
				key: key.to_owned(),
			}),
			_ => Err(self.not_an_object(key)),
		}
	}

	fn not_an_object(&self, key: &str) -> Error {
		Error::NotAnObject {
			path: self.source.to_string(),
			key: key.to_owned(),
		}
	}
}

impl FromStr for Path {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Path::parse(s)
	}
}

impl TryFrom<&str> for Path {
	type Error = Error;

	fn try_from(value: &str) -> Result<Self> {
		Path::parse(value)
	}
}

impl Display for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.source)
	}
}

impl Debug for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Path({})", self.source)
	}
}

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// The expression is not a sequence of dot separated identifiers.
	#[error("invalid path expression `{expr}`: {reason}")]
	InvalidPath { expr: String, reason: &'static str },

	/// A segment of the path names a key that the object does not have.
	#[error("cannot resolve `{path}`: key `{key}` is missing")]
	MissingKey { path: String, key: String },

	/// The path tries to descend into a value that is not an object.
	#[error("cannot resolve `{path}`: cannot read `{key}` of a non-object value")]
	NotAnObject { path: String, key: String },

	/// The data root of a watcher was dropped.
	#[error("data root of `{path}` no longer exists")]
	RootDropped { path: String },
}

impl Error {
	/// Whether this is a path resolution failure, as opposed to a
	/// malformed expression or a dead root.
	pub fn is_unresolved(&self) -> bool {
		matches!(self, Error::MissingKey { .. } | Error::NotAnObject { .. })
	}
}

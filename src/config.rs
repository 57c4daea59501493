/// What a watcher does when its path no longer resolves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unresolved {
	/// Return the error to whoever triggered the evaluation.
	#[default]
	Fail,
	/// Log a warning and keep the last value.
	Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
	pub unresolved: Unresolved,
	/// Invoke the callback once with the initial value when a watcher is
	/// created.
	pub initial_callback: bool,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			unresolved: Unresolved::Fail,
			initial_callback: true,
		}
	}
}

impl Config {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_unresolved(mut self, unresolved: Unresolved) -> Self {
		self.unresolved = unresolved;
		self
	}

	pub fn with_initial_callback(mut self, initial_callback: bool) -> Self {
		self.initial_callback = initial_callback;
		self
	}
}

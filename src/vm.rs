use crate::{instrument, Config, Object, Path, Result, Value, Watcher};

/// Owns an observed data root.
///
/// Creating a `Vm` instruments the whole data graph. Root keys can be
/// read and written directly on the vm, deeper values through dotted
/// paths.
///
/// ```
/// use bindwatch::{object, Vm};
///
/// let vm = Vm::new(object! { "user" => object! { "name" => "Alice" } });
/// let greeting = vm.watch("user.name", |name| println!("Hello, {}", name)).unwrap();
///
/// vm.set_path("user.name", "Bob").unwrap();
/// assert_eq!(greeting.value(), Some("Bob".into()));
/// ```
pub struct Vm {
	data: Object,
	config: Config,
}

impl Vm {
	pub fn new(data: Object) -> Self {
		Self::with_config(data, Config::default())
	}

	pub fn with_config(data: Object, config: Config) -> Self {
		instrument(&Value::Object(data.clone()));
		tracing::debug!(keys = data.len(), "observing data root");
		Vm { data, config }
	}

	pub fn data(&self) -> &Object {
		&self.data
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn get(&self, key: &str) -> Option<Value> {
		self.data.get(key)
	}

	pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<()> {
		self.data.set(key, value)
	}

	pub fn get_path(&self, expr: &str) -> Result<Value> {
		Path::parse(expr)?.resolve(&self.data)
	}

	/// Assigns the value at `expr` through the observed fields, so every
	/// watcher depending on it is updated before this returns.
	pub fn set_path(&self, expr: &str, value: impl Into<Value>) -> Result<()> {
		Path::parse(expr)?.assign(&self.data, value)
	}

	pub fn watch(&self, expr: &str, callback: impl Fn(&Value) + 'static) -> Result<Watcher> {
		Watcher::with_config(&self.data, Path::parse(expr)?, self.config, callback)
	}
}

impl std::fmt::Debug for Vm {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Vm").field("data", &self.data).finish()
	}
}

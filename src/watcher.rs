use std::cell::RefCell;
use std::rc::Rc;

use crate::evaluation::Evaluation;
use crate::subscribers::Subscriber;
use crate::{Config, Error, Object, Path, Result, Unresolved, Value, WeakObject};

/// Re-evaluates a path whenever one of the fields it read is written,
/// and calls back when the resulting value changes.
///
/// A watcher subscribes itself to every field along its path each time
/// it evaluates. It stays alive as long as any of those fields (or a
/// clone of the handle) does.
#[derive(Clone)]
pub struct Watcher {
	body: Rc<WatcherBody>,
}

pub(crate) struct WatcherBody {
	root: WeakObject,
	path: Path,
	config: Config,
	callback: Box<dyn Fn(&Value)>,
	last: RefCell<Option<Value>>,
}

impl Watcher {
	/// Watches `expr` on `root` with the default [`Config`].
	///
	/// The callback fires once right away with the current value.
	pub fn new(root: &Object, expr: &str, callback: impl Fn(&Value) + 'static) -> Result<Self> {
		Self::with_config(root, Path::parse(expr)?, Config::default(), callback)
	}

	pub fn with_config(
		root: &Object,
		path: Path,
		config: Config,
		callback: impl Fn(&Value) + 'static,
	) -> Result<Self> {
		let body = Rc::new(WatcherBody {
			root: root.downgrade(),
			path,
			config,
			callback: Box::new(callback),
			last: RefCell::new(None),
		});

		// NOTE: runs before there is a baseline, so it always calls back
		if body.config.initial_callback {
			body.recompute()?;
		}

		if let Some(value) = body.tracked()? {
			*body.last.borrow_mut() = Some(value);
		}

		Ok(Watcher { body })
	}

	/// Tracked evaluation of the path.
	pub fn evaluate(&self) -> Result<Value> {
		self.body.evaluate()
	}

	/// Re-evaluates and calls back if the value changed.
	pub fn update(&self) -> Result<()> {
		self.body.recompute()
	}

	/// The last value this watcher captured.
	pub fn value(&self) -> Option<Value> {
		self.body.last.borrow().clone()
	}

	pub fn path(&self) -> &Path {
		&self.body.path
	}

	pub fn config(&self) -> &Config {
		&self.body.config
	}

	pub fn ptr_eq(&self, other: &Watcher) -> bool {
		Rc::ptr_eq(&self.body, &other.body)
	}

	pub(crate) fn as_subscriber(&self) -> Rc<dyn Subscriber> {
		self.body.clone()
	}
}

impl WatcherBody {
	fn evaluate(self: &Rc<Self>) -> Result<Value> {
		let root = self.root.upgrade().ok_or_else(|| Error::RootDropped {
			path: self.path.to_string(),
		})?;

		let _evaluation = Evaluation::start(self.clone());
		self.path.resolve(&root)
	}

	/// Evaluates, applying the unresolved path policy. `Ok(None)` means
	/// the path did not resolve and the policy says to skip.
	fn tracked(self: &Rc<Self>) -> Result<Option<Value>> {
		match self.evaluate() {
			Ok(value) => Ok(Some(value)),
			Err(err) if err.is_unresolved() && self.config.unresolved == Unresolved::Skip => {
				tracing::warn!(path = %self.path, error = %err, "skipping unresolved path");
				Ok(None)
			}
			Err(err) => Err(err),
		}
	}

	fn recompute(self: &Rc<Self>) -> Result<()> {
		let value = match self.tracked()? {
			Some(value) => value,
			None => return Ok(()),
		};

		{
			let mut last = self.last.borrow_mut();
			if matches!(&*last, Some(previous) if previous.is_same(&value)) {
				return Ok(());
			}
			*last = Some(value.clone());
		}

		tracing::debug!(path = %self.path, value = ?value, "changed");
		(self.callback)(&value);
		Ok(())
	}
}

impl Subscriber for WatcherBody {
	fn update(self: Rc<Self>) -> Result<()> {
		self.recompute()
	}
}

impl std::fmt::Debug for Watcher {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Watcher")
			.field("path", &self.body.path)
			.field("value", &self.body.last.borrow())
			.finish()
	}
}

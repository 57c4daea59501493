use std::cell::RefCell;
use std::rc::Rc;

use crate::subscribers::Subscribers;
use crate::{evaluation, observer, Result, Value};

/// An intercepted field: the current value of one key of an object
/// together with the registry of everything that read it.
pub(crate) struct Field {
	key: Rc<str>,
	value: RefCell<Value>,
	subscribers: Subscribers,
}

impl Field {
	pub fn new(key: Rc<str>, value: Value) -> Self {
		Field {
			key,
			value: RefCell::new(value),
			subscribers: Subscribers::new(),
		}
	}

	pub fn get(&self) -> Value {
		if let Some(reader) = evaluation::active() {
			if self.subscribers.add(reader) {
				tracing::trace!(key = %self.key, "subscribed");
			}
		}

		self.value.borrow().clone()
	}

	/// Reads without subscribing the active reader.
	pub fn peek(&self) -> Value {
		self.value.borrow().clone()
	}

	pub fn set(&self, value: Value) -> Result<()> {
		{
			let mut current = self.value.borrow_mut();
			if current.is_same(&value) {
				return Ok(());
			}
			*current = value.clone();
		}

		observer::instrument(&value);
		self.subscribers.notify()
	}

	pub fn subscribers(&self) -> &Subscribers {
		&self.subscribers
	}
}

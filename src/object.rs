use std::cell::RefCell;
use std::fmt::{self, Debug};
use std::rc::{Rc, Weak};

use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::addr::RcAddr;
use crate::field::Field;
use crate::{Result, Value, Watcher};

pub(crate) enum Slot {
	Plain(Value),
	Observed(Rc<Field>),
}

impl Slot {
	fn peek(&self) -> Value {
		match self {
			Slot::Plain(value) => value.clone(),
			Slot::Observed(field) => field.peek(),
		}
	}
}

pub(crate) type Slots = IndexMap<Rc<str>, Slot, FxBuildHasher>;

/// A shared, insertion ordered keyed mapping.
///
/// Objects are handles: clones refer to the same mapping. Keys start out
/// as plain slots and become intercepted fields once the object is passed
/// through [`instrument`](crate::instrument).
#[derive(Clone, Default)]
pub struct Object {
	body: Rc<ObjectBody>,
}

#[derive(Default)]
pub(crate) struct ObjectBody {
	pub(crate) slots: RefCell<Slots>,
}

/// A non-owning handle to an [`Object`].
#[derive(Clone)]
pub struct WeakObject {
	body: Weak<ObjectBody>,
}

impl WeakObject {
	pub fn upgrade(&self) -> Option<Object> {
		self.body.upgrade().map(|body| Object { body })
	}
}

impl Object {
	pub fn new() -> Self {
		Self::default()
	}

	/// Reads `key`. If the key is observed and a tracked evaluation is
	/// running, the evaluating watcher subscribes to it.
	pub fn get(&self, key: &str) -> Option<Value> {
		let field = match self.body.slots.borrow().get(key)? {
			Slot::Plain(value) => return Some(value.clone()),
			Slot::Observed(field) => field.clone(),
		};

		Some(field.get())
	}

	/// Reads `key` without subscribing anything.
	pub fn peek(&self, key: &str) -> Option<Value> {
		self.body.slots.borrow().get(key).map(Slot::peek)
	}

	/// Writes `key`.
	///
	/// Observed keys go through their field: unchanged values are ignored,
	/// new values are instrumented and subscribers are notified. Plain and
	/// missing keys are stored as plain values without notification.
	pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<()> {
		let value = value.into();
		let field = {
			let mut slots = self.body.slots.borrow_mut();
			match slots.get_mut(key) {
				Some(Slot::Observed(field)) => field.clone(),
				Some(Slot::Plain(slot)) => {
					*slot = value;
					return Ok(());
				}
				None => {
					slots.insert(key.into(), Slot::Plain(value));
					return Ok(());
				}
			}
		};

		field.set(value)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.body.slots.borrow().contains_key(key)
	}

	pub fn keys(&self) -> Vec<Rc<str>> {
		self.body.slots.borrow().keys().cloned().collect()
	}

	pub fn len(&self) -> usize {
		self.body.slots.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.body.slots.borrow().is_empty()
	}

	/// Whether `key` is an intercepted field.
	pub fn is_observed(&self, key: &str) -> bool {
		matches!(self.body.slots.borrow().get(key), Some(Slot::Observed(_)))
	}

	/// Number of watchers subscribed to `key`, `None` if it is not observed.
	pub fn subscriber_count(&self, key: &str) -> Option<usize> {
		match self.body.slots.borrow().get(key)? {
			Slot::Observed(field) => Some(field.subscribers().len()),
			Slot::Plain(_) => None,
		}
	}

	pub fn is_subscribed(&self, key: &str, watcher: &Watcher) -> bool {
		match self.body.slots.borrow().get(key) {
			Some(Slot::Observed(field)) => field.subscribers().contains(&watcher.as_subscriber()),
			_ => false,
		}
	}

	pub fn ptr_eq(&self, other: &Object) -> bool {
		Rc::ptr_eq(&self.body, &other.body)
	}

	pub fn downgrade(&self) -> WeakObject {
		WeakObject {
			body: Rc::downgrade(&self.body),
		}
	}

	pub(crate) fn body(&self) -> &ObjectBody {
		&self.body
	}
}

impl<K, V> FromIterator<(K, V)> for Object
where
	K: Into<Rc<str>>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let slots = iter
			.into_iter()
			.map(|(key, value)| (key.into(), Slot::Plain(value.into())))
			.collect();

		Object {
			body: Rc::new(ObjectBody {
				slots: RefCell::new(slots),
			}),
		}
	}
}

thread_local! {
	/// Objects whose `Debug` output is being written on this thread.
	static FORMATTING: RefCell<SmallVec<[RcAddr<ObjectBody>; 4]>> = RefCell::new(SmallVec::new());
}

/// Marks an object as being formatted until dropped.
struct Formatting;

impl Formatting {
	/// Returns `None` if the object is already being formatted further up
	/// the stack, i.e. the data is cyclic.
	fn enter(object: &Object) -> Option<Self> {
		let addr = RcAddr::new(object.body.clone());
		FORMATTING.with(|formatting| {
			let mut formatting = formatting.borrow_mut();
			if formatting.contains(&addr) {
				return None;
			}
			formatting.push(addr);
			Some(Formatting)
		})
	}
}

impl Drop for Formatting {
	fn drop(&mut self) {
		FORMATTING.with(|formatting| formatting.borrow_mut().pop());
	}
}

impl Debug for Object {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let _formatting = match Formatting::enter(self) {
			Some(formatting) => formatting,
			None => return f.write_str("{..}"),
		};

		let slots = match self.body.slots.try_borrow() {
			Ok(slots) => slots,
			Err(_) => return f.write_str("{..}"),
		};

		let mut map = f.debug_map();
		for (key, slot) in slots.iter() {
			map.entry(&format_args!("{}", key), &slot.peek());
		}
		map.finish()
	}
}

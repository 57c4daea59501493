use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::addr::RcAddr;
use crate::Result;

pub(crate) trait Subscriber: 'static {
	/// Called when one of the fields this subscriber read was written.
	fn update(self: Rc<Self>) -> Result<()>;
}

type List = SmallVec<[RcAddr<dyn Subscriber>; 2]>;

/// Subscriber registry of a single observed field.
///
/// Keeps subscribers in registration order. A subscriber is only
/// recorded once no matter how many times it reads the field.
#[derive(Default)]
pub(crate) struct Subscribers {
	list: RefCell<List>,
}

impl Subscribers {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `false` if the subscriber was already registered.
	pub fn add(&self, subscriber: Rc<dyn Subscriber>) -> bool {
		let addr = RcAddr::new(subscriber);
		let mut list = self.list.borrow_mut();
		if list.contains(&addr) {
			return false;
		}

		list.push(addr);
		true
	}

	pub fn contains(&self, subscriber: &Rc<dyn Subscriber>) -> bool {
		let addr = RcAddr::new(subscriber.clone());
		self.list.borrow().contains(&addr)
	}

	pub fn len(&self) -> usize {
		self.list.borrow().len()
	}

	/// Updates every registered subscriber in registration order.
	///
	/// Works on a snapshot: subscribers registered while the round is
	/// running are not visited until the next one. Stops at the first
	/// error and returns it.
	pub fn notify(&self) -> Result<()> {
		let snapshot: SmallVec<[Rc<dyn Subscriber>; 2]> = self
			.list
			.borrow()
			.iter()
			.cloned()
			.map(RcAddr::into_inner)
			.collect();

		tracing::debug!(subscribers = snapshot.len(), "notify");

		for subscriber in snapshot {
			subscriber.update()?;
		}

		Ok(())
	}
}

use std::cell::RefCell;
use std::rc::Rc;

use crate::subscribers::Subscriber;

thread_local! {
	/// The subscriber whose tracked evaluation is in flight on this thread.
	static ACTIVE: RefCell<Option<Rc<dyn Subscriber>>> = const { RefCell::new(None) };
}

/// Marks a tracked evaluation. While it is alive every observed field
/// read on this thread registers the reader as a subscriber.
///
/// This is a single slot, not a stack: evaluations do not nest.
pub(crate) struct Evaluation {
	_private: (),
}

impl Evaluation {
	pub(crate) fn start(reader: Rc<dyn Subscriber>) -> Self {
		ACTIVE.with(|active| {
			let previous = active.borrow_mut().replace(reader);
			debug_assert!(previous.is_none(), "tracked evaluations cannot nest");
		});

		Evaluation { _private: () }
	}
}

impl Drop for Evaluation {
	fn drop(&mut self) {
		ACTIVE.with(|active| active.borrow_mut().take());
	}
}

pub(crate) fn active() -> Option<Rc<dyn Subscriber>> {
	ACTIVE.with(|active| active.borrow().clone())
}

/// Whether a tracked evaluation is running on the current thread.
pub fn is_tracking() -> bool {
	ACTIVE.with(|active| active.borrow().is_some())
}

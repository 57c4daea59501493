use std::rc::Rc;

use smallvec::SmallVec;

use crate::field::Field;
use crate::object::Slot;
use crate::Value;

/// Makes every key of `value` observable, depth first.
///
/// Plain keys are replaced in place with intercepted fields, each owning
/// a fresh subscriber registry, and the values they hold are instrumented
/// in turn. Keys that are already intercepted are left untouched, so
/// calling this twice is harmless and cyclic data terminates. Anything
/// other than an object is ignored.
pub fn instrument(value: &Value) {
	let object = match value {
		Value::Object(object) => object,
		_ => return,
	};

	let mut fresh: SmallVec<[Value; 8]> = SmallVec::new();
	{
		let mut slots = object.body().slots.borrow_mut();
		for (key, slot) in slots.iter_mut() {
			if let Slot::Plain(value) = slot {
				let value = std::mem::take(value);
				tracing::trace!(key = %key, "instrument");
				if let Value::Object(_) = value {
					fresh.push(value.clone());
				}
				*slot = Slot::Observed(Rc::new(Field::new(key.clone(), value)));
			}
		}
	}

	for value in &fresh {
		instrument(value);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Object;

	#[test]
	fn ignores_primitives() {
		instrument(&Value::Null);
		instrument(&Value::from(1));
		instrument(&Value::from("text"));
	}

	#[test]
	fn instruments_nested_objects() {
		let inner: Object = [("b", 1)].into_iter().collect();
		let root: Object = [("a", Value::from(inner.clone())), ("c", Value::from(2))]
			.into_iter()
			.collect();

		instrument(&Value::from(root.clone()));

		assert!(root.is_observed("a"));
		assert!(root.is_observed("c"));
		assert!(inner.is_observed("b"));
		assert_eq!(root.peek("c"), Some(Value::from(2)));
	}

	#[test]
	fn is_idempotent() {
		let root: Object = [("a", 1)].into_iter().collect();
		instrument(&Value::from(root.clone()));
		instrument(&Value::from(root.clone()));
		assert_eq!(root.subscriber_count("a"), Some(0));
	}
}

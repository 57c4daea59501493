use std::ops::Deref;
use std::rc::Rc;

/// Compares shared pointers by the address of their allocation.
pub struct RcAddr<T: ?Sized> {
	ptr: Rc<T>,
}

impl<T: ?Sized> RcAddr<T> {
	pub fn new(ptr: Rc<T>) -> Self {
		RcAddr { ptr }
	}

	pub fn into_inner(self) -> Rc<T> {
		self.ptr
	}

	fn addr(&self) -> *const () {
		// Thin pointer: vtables of the same allocation may differ between
		// codegen units.
		Rc::as_ptr(&self.ptr) as *const ()
	}
}

impl<T: ?Sized> Clone for RcAddr<T> {
	fn clone(&self) -> Self {
		RcAddr {
			ptr: self.ptr.clone(),
		}
	}
}

impl<T: ?Sized> Deref for RcAddr<T> {
	type Target = Rc<T>;
	fn deref(&self) -> &Self::Target {
		&self.ptr
	}
}

impl<T: ?Sized> PartialEq for RcAddr<T> {
	fn eq(&self, other: &Self) -> bool {
		self.addr().eq(&other.addr())
	}
}

impl<T: ?Sized> Eq for RcAddr<T> {}

impl<T: ?Sized> std::fmt::Debug for RcAddr<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "RcAddr({:p})", self.addr())
	}
}

//! Dependency-tracking reactive data.
//!
//! Plain keyed data is turned into observed fields by [`instrument`].
//! A [`Watcher`] evaluates a dotted path against such data; every field
//! it reads along the way records it as a subscriber. Writing one of
//! those fields later re-evaluates the watcher synchronously, and its
//! callback runs if the value changed.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use bindwatch::{object, Value, Vm};
//!
//! let vm = Vm::new(object! {
//!     "user" => object! { "name" => "Alice", "age" => 30 },
//! });
//!
//! let ages = Rc::new(RefCell::new(Vec::new()));
//! let _watcher = vm
//!     .watch("user.age", {
//!         let ages = ages.clone();
//!         move |age: &Value| ages.borrow_mut().push(age.to_string())
//!     })
//!     .unwrap();
//!
//! vm.set_path("user.age", 31).unwrap();
//! vm.set_path("user.name", "Bob").unwrap();
//!
//! assert_eq!(*ages.borrow(), ["30", "31"]);
//! ```

pub mod macros;

mod addr;
mod config;
mod error;
mod evaluation;
mod field;
mod object;
mod observer;
mod path;
mod subscribers;
mod value;
mod vm;
mod watcher;

pub use config::{Config, Unresolved};
pub use error::{Error, Result};
pub use evaluation::is_tracking;
pub use object::{Object, WeakObject};
pub use observer::instrument;
pub use path::Path;
pub use value::Value;
pub use vm::Vm;
pub use watcher::Watcher;

pub use enclose::*;

/// Builds a plain [`Object`](crate::Object) from `key => value` pairs.
#[macro_export]
macro_rules! object {
    () => {
        $crate::Object::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        [$( ($key, $crate::Value::from($value)) ),+]
            .into_iter()
            .collect::<$crate::Object>()
    };
}

/// Creates a [`Watcher`](crate::Watcher), optionally cloning captures
/// into the callback the way `enclose!` does.
///
/// ```
/// use bindwatch::{object, watch, Vm};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let vm = Vm::new(object! { "count" => 1 });
/// let seen = Rc::new(Cell::new(0.0));
/// let _watcher = watch!((seen) vm.data(), "count" => |value| {
///     seen.set(value.as_f64().unwrap());
/// })
/// .unwrap();
///
/// vm.set("count", 2).unwrap();
/// assert_eq!(seen.get(), 2.0);
/// ```
#[macro_export]
macro_rules! watch {
    (( $($d_tt:tt)* ) $root:expr, $path:expr => |$value:ident| $($b:tt)*) => {
        $crate::Watcher::new($root, $path, $crate::macros::enclose!(($( $d_tt )*) move |$value: &$crate::Value| { $($b)* }))
    };
    ($root:expr, $path:expr => |$value:ident| $($b:tt)*) => {
        $crate::Watcher::new($root, $path, move |$value: &$crate::Value| { $($b)* })
    };
}

//! Callback type for observers injected into components.
//!
//! ## Example
//!
//! ```
//! use lemon_pages::Callback;
//!
//! let on_date = Callback::new(|date: String| {
//!     println!("date selected: {}", date);
//! });
//! on_date.call("2025-06-01".to_string());
//! ```

use std::sync::Arc;

/// A type-safe, cloneable callback wrapper.
///
/// `Callback` wraps a function in an `Arc`, making it cheaply cloneable and
/// shareable across threads.
///
/// ## Type Parameters
///
/// - `Args`: The argument type the callback receives
/// - `Ret`: The return type of the callback (defaults to `()`)
pub struct Callback<Args, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use parking_lot::Mutex;

	#[test]
	fn test_callback_creation() {
		let callback = Callback::new(|_: i32| 42);
		assert_eq!(callback.call(0), 42);
	}

	#[test]
	fn test_callback_clone_shares_function() {
		let callback1 = Callback::new(|x: i32| x * 2);
		let callback2 = callback1.clone();

		assert_eq!(callback1.call(5), 10);
		assert_eq!(callback2.call(5), 10);
	}

	#[test]
	fn test_callback_with_captured_state() {
		let seen = Arc::new(Mutex::new(Vec::new()));
		let callback: Callback<String> = Callback::new({
			let seen = Arc::clone(&seen);
			move |date: String| seen.lock().push(date)
		});

		callback.call("2025-06-01".to_string());
		callback.call("".to_string());

		assert_eq!(*seen.lock(), vec!["2025-06-01".to_string(), String::new()]);
	}

	#[test]
	fn test_callback_debug() {
		let callback = Callback::new(|_: ()| {});
		let debug_str = format!("{:?}", callback);
		assert!(debug_str.contains("Callback"));
	}
}

//! Turn panicking async operations into [`Outcome`] values.
//!
//! [`resultify`] wraps any `Fn(..) -> impl Future` so that calling it resolves to an
//! [`Outcome`] instead of unwinding:
//!
//! ```
//! use resultify::{Outcome, resultify};
//!
//! async fn double(x: i32) -> i32 {
//!     x * 2
//! }
//!
//! # futures_util::FutureExt::now_or_never(async {
//! let doubled = resultify(double);
//! assert_eq!(doubled.call((21,)).await.value(), Some(&42));
//! # }).unwrap();
//! ```
//!
//! The value types live in `resultify-types` and are re-exported here.

mod adapter;
mod call;
mod ext;

pub use adapter::{Resultify, resultify};
pub use call::AsyncCall;
pub use ext::{CatchPanic, CatchPanicExt};
pub use resultify_types::{Outcome, Panic, Parts, Raised, raise};

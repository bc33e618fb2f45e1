//! Outcome value types for resultify.
//!
//! This crate contains pure value types with no IO, no async, and minimal dependencies.
//! The async adapter that produces these values lives in the `resultify` crate.
//!
//! - **`Outcome`**: the two-variant success/failure union
//! - **`Panic`**: an opaque, verbatim captured panic payload
//! - **`Raised`**: the failure payload when an operation can fail two ways

mod outcome;
mod panic;
mod raised;

pub use outcome::{Outcome, Parts};
pub use panic::{Panic, raise};
pub use raised::Raised;

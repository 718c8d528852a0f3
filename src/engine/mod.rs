//! Validation and dispatch engine
//!
//! Checks the option tokens of an invocation, then computes each value
//! from the injected date, persists it and collects it for output.

mod calendar;
mod dispatch;
mod validate;

pub use calendar::DateParts;
pub use dispatch::{default_date, dispatch, Modifiers};
pub use validate::validate;

//! Environment seams shared by the controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module isolates one outside concern (clock, storage, timers) behind
//! a trait so the controller can be driven by fakes in tests.

pub mod clock;
pub mod persistence;
pub mod schedule;

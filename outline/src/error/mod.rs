//! Error types
//!
//! Both errors are non-fatal. The controller catches them where the async
//! call completes, logs them and carries on with whatever it already has.

mod destination;
mod fetch;

pub use destination::*;
pub use fetch::*;

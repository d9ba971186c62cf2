//! Game engine
//!
//! Pure submission evaluation plus a session type that owns the round state
//! and applies outcomes to it.

mod evaluate;
mod session;

pub use evaluate::{evaluate, score};
pub use session::Session;

//! Ports (trait boundaries) between the game core and its drivers.
//!
//! Agents choose moves; observers watch a series of games. Concrete
//! adapters live in [`crate::pipeline`].

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;

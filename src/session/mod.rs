#[cfg(feature = "desktop")]
pub mod commands;
pub mod controller;
pub mod state;

pub use controller::{Clock, SessionController, SessionSnapshot};
pub use state::SessionState;

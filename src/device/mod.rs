#[cfg(feature = "desktop")]
pub mod commands;
pub mod config;
pub mod controller;
pub mod reader;

pub use config::DeviceConfig;
pub use controller::{DeviceController, DeviceStatus};
pub use reader::{CardReader, ConnectionProbe};

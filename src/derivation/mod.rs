pub mod alerts;
pub mod stock;
pub mod trigger;

pub use alerts::generate_alerts;
pub use stock::{classify_stock, StockStatus};
pub use trigger::{Always, Never, RandomTrigger, SystemAlertTrigger};

/// Medicines expiring in fewer days than this are flagged.
pub const EXPIRY_WARNING_DAYS: i64 = 30;
pub const LOW_STOCK_RATIO: f64 = 0.20;
pub const MEDIUM_STOCK_RATIO: f64 = 0.50;
/// Chance that a regeneration carries the "update available" system alert.
pub const SYSTEM_ALERT_PROBABILITY: f64 = 0.3;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Medicine;

use super::{EXPIRY_WARNING_DAYS, LOW_STOCK_RATIO, MEDIUM_STOCK_RATIO};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StockStatus {
    ExpiringSoon,
    Low,
    Medium,
    Good,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::ExpiringSoon => "Expiring Soon",
            StockStatus::Low => "Low Stock",
            StockStatus::Medium => "Medium Stock",
            StockStatus::Good => "Good Stock",
        }
    }

    /// CSS class of the inventory badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            StockStatus::ExpiringSoon => "expiring",
            StockStatus::Low => "low",
            StockStatus::Medium => "medium",
            StockStatus::Good => "good",
        }
    }

    /// 3 is the most severe.
    pub fn severity(&self) -> u8 {
        match self {
            StockStatus::ExpiringSoon => 3,
            StockStatus::Low => 2,
            StockStatus::Medium => 1,
            StockStatus::Good => 0,
        }
    }
}

/// Classify a medicine. Expiry proximity always wins over the stock level.
pub fn classify_stock(medicine: &Medicine, today: NaiveDate) -> StockStatus {
    if medicine.days_to_expiry(today) < EXPIRY_WARNING_DAYS {
        return StockStatus::ExpiringSoon;
    }

    let ratio = medicine.remaining_ratio();
    if ratio < LOW_STOCK_RATIO {
        StockStatus::Low
    } else if ratio < MEDIUM_STOCK_RATIO {
        StockStatus::Medium
    } else {
        StockStatus::Good
    }
}

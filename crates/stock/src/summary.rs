//! Point-in-time aggregate snapshot of a stock.

use serde::{Deserialize, Serialize};

use storestock_core::ValueObject;

/// Aggregates of a stock at the moment it was taken.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StockSummary {
    pub size: usize,
    pub total_cost: f64,
    pub required_storage_volume: f64,
}

impl ValueObject for StockSummary {}

//! Row type shared by both output datasets.

/// One row of a generated dataset. Field order is the CSV column order:
/// order_type, order_volume, order_price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// Categorical order type; opaque here, interpreted by the consuming engine.
    pub order_type: i64,
    /// Signed order quantity.
    pub order_volume: i64,
    /// Simulated traded price, erratic or random-walk depending on dataset.
    pub order_price: i64,
}

impl Record {
    pub fn new(order_type: i64, order_volume: i64, order_price: i64) -> Self {
        Self {
            order_type,
            order_volume,
            order_price,
        }
    }
}

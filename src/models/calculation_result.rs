//! Calculation result model.

use serde::{Deserialize, Serialize};

use super::line_item::LineItemCategory;

/// Category subtotals and the grand total for one record.
///
/// Always derived from a [`PaystubRecord`](super::PaystubRecord) by
/// [`calculate_totals`](crate::calculation::calculate_totals); values are
/// unrounded dollars.
///
/// # Example
///
/// ```
/// use paystub_engine::models::PaystubCalculation;
///
/// let calc = PaystubCalculation {
///     routes_total: 280.0,
///     incentives_total: 37.5,
///     stat_delivery_total: 30.0,
///     grand_total: 347.5,
/// };
/// let json = serde_json::to_string(&calc).unwrap();
/// assert!(json.contains("\"grandTotal\":347.5"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaystubCalculation {
    /// Routes subtotal.
    pub routes_total: f64,
    /// Incentives subtotal.
    pub incentives_total: f64,
    /// STAT delivery subtotal.
    pub stat_delivery_total: f64,
    /// Sum of the three subtotals.
    pub grand_total: f64,
}

impl PaystubCalculation {
    /// The subtotal for one category.
    pub fn subtotal(&self, category: LineItemCategory) -> f64 {
        match category {
            LineItemCategory::Routes => self.routes_total,
            LineItemCategory::Incentives => self.incentives_total,
            LineItemCategory::StatDelivery => self.stat_delivery_total,
        }
    }
}

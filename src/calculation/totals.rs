//! Whole-record totals.

use crate::models::{Category, CategoryFields, PaystubCalculation, PaystubRecord};

use super::category_total::compute_category_total;
use super::grand_total::compute_grand_total;

/// Computes all subtotals and the grand total for a record.
///
/// Pure and deterministic: the record is only read, and the same record
/// always yields the same calculation.
///
/// # Example
///
/// ```
/// use paystub_engine::calculation::calculate_totals;
/// use paystub_engine::models::PaystubRecord;
///
/// let mut record = PaystubRecord::default();
/// record.routes.quantities.four_hour_routes = 2;
/// record.routes.quantities.six_hour_routes = 1;
/// record.incentives.quantities.pick_up = 1;
/// record.incentives.quantities.gas = 1;
/// record.stat_delivery.quantities.miles = 25.0;
///
/// let calc = calculate_totals(&record);
/// assert_eq!(calc.routes_total, 280.0);
/// assert_eq!(calc.incentives_total, 37.5);
/// assert_eq!(calc.stat_delivery_total, 30.0);
/// assert_eq!(calc.grand_total, 347.5);
/// ```
pub fn calculate_totals(record: &PaystubRecord) -> PaystubCalculation {
    let routes_total = subtotal(&record.routes);
    let incentives_total = subtotal(&record.incentives);
    let stat_delivery_total = subtotal(&record.stat_delivery);

    PaystubCalculation {
        routes_total,
        incentives_total,
        stat_delivery_total,
        grand_total: compute_grand_total(routes_total, incentives_total, stat_delivery_total),
    }
}

fn subtotal<Q: CategoryFields>(category: &Category<Q>) -> f64 {
    compute_category_total(&category.quantities, &category.rates, &category.custom_items)
}

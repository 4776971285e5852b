//! Grand total calculation.

/// Sums the three category subtotals.
///
/// No rounding, fees or taxes are applied.
///
/// # Example
///
/// ```
/// use paystub_engine::calculation::compute_grand_total;
///
/// assert_eq!(compute_grand_total(280.0, 37.5, 30.0), 347.5);
/// ```
pub fn compute_grand_total(routes_total: f64, incentives_total: f64, stat_delivery_total: f64) -> f64 {
    routes_total + incentives_total + stat_delivery_total
}

//! Category subtotal calculation.
//!
//! A category subtotal is the sum of `quantity * rate` over the category's
//! named fields, followed by the same sum over its custom items.

use crate::models::{CategoryFields, CustomItem};

/// Computes the subtotal for one category.
///
/// Named fields are summed in the fixed order of `Q::FIELDS`, then custom
/// items in insertion order, so repeated calls perform the same
/// floating-point operations and return bit-identical results. Quantities and
/// rates are not validated; negative values give negative contributions.
///
/// # Arguments
///
/// * `quantities` - The named field quantities
/// * `rates` - The rates paired with `quantities`
/// * `custom_items` - Custom items for the category
///
/// # Examples
///
/// ```
/// use paystub_engine::calculation::compute_category_total;
/// use paystub_engine::models::{RouteRates, Routes};
///
/// let routes = Routes { four_hour_routes: 2, six_hour_routes: 1 };
/// let rates = RouteRates { four_hour_rate: 80.0, six_hour_rate: 120.0 };
///
/// assert_eq!(compute_category_total(&routes, &rates, &[]), 280.0);
/// ```
pub fn compute_category_total<Q: CategoryFields>(
    quantities: &Q,
    rates: &Q::Rates,
    custom_items: &[CustomItem],
) -> f64 {
    let named: f64 = Q::FIELDS
        .iter()
        .map(|field| (field.quantity)(quantities) * (field.rate)(rates))
        .fold(0.0, |acc, amount| acc + amount);

    let custom: f64 = custom_items
        .iter()
        .map(CustomItem::amount)
        .fold(0.0, |acc, amount| acc + amount);

    named + custom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncentiveRates, Incentives, RouteRates, Routes, StatDelivery, StatRate};
    use proptest::prelude::*;

    #[test]
    fn test_routes_subtotal() {
        let routes = Routes {
            four_hour_routes: 2,
            six_hour_routes: 1,
        };
        assert_eq!(
            compute_category_total(&routes, &RouteRates::default(), &[]),
            280.0
        );
    }

    #[test]
    fn test_incentives_subtotal() {
        let incentives = Incentives {
            pick_up: 1,
            gas: 1,
            ..Incentives::default()
        };
        assert_eq!(
            compute_category_total(&incentives, &IncentiveRates::default(), &[]),
            37.5
        );
    }

    #[test]
    fn test_stat_delivery_subtotal() {
        let stat = StatDelivery { miles: 25.0 };
        assert_eq!(
            compute_category_total(&stat, &StatRate::default(), &[]),
            30.0
        );
    }

    #[test]
    fn test_custom_items_are_added_after_named_fields() {
        let routes = Routes {
            four_hour_routes: 1,
            six_hour_routes: 0,
        };
        let custom = vec![
            CustomItem::new("Training", 1.0, 45.0),
            CustomItem::new("Half route", 0.5, 40.0),
        ];
        assert_eq!(
            compute_category_total(&routes, &RouteRates::default(), &custom),
            80.0 + 45.0 + 20.0
        );
    }

    #[test]
    fn test_all_zero_quantities_give_zero() {
        assert_eq!(
            compute_category_total(&Incentives::default(), &IncentiveRates::default(), &[]),
            0.0
        );
    }

    #[test]
    fn test_negative_quantity_is_not_rejected() {
        let routes = Routes {
            four_hour_routes: -1,
            six_hour_routes: 0,
        };
        assert_eq!(
            compute_category_total(&routes, &RouteRates::default(), &[]),
            -80.0
        );
    }

    proptest! {
        #[test]
        fn prop_doubling_quantities_doubles_total(
            four in 0i32..10_000,
            six in 0i32..10_000,
            four_rate in 0.0f64..1_000.0,
            six_rate in 0.0f64..1_000.0,
            custom_qty in 0.0f64..1_000.0,
            custom_rate in 0.0f64..1_000.0,
        ) {
            let rates = RouteRates { four_hour_rate: four_rate, six_hour_rate: six_rate };
            let single = Routes { four_hour_routes: four, six_hour_routes: six };
            let doubled = Routes { four_hour_routes: four * 2, six_hour_routes: six * 2 };
            let custom = vec![CustomItem::new("Extra", custom_qty, custom_rate)];
            let custom_doubled = vec![CustomItem::new("Extra", custom_qty * 2.0, custom_rate)];

            let base = compute_category_total(&single, &rates, &custom);
            let twice = compute_category_total(&doubled, &rates, &custom_doubled);
            prop_assert_eq!(twice, 2.0 * base);
        }

        #[test]
        fn prop_repeated_calls_are_bit_identical(
            miles in 0.0f64..10_000.0,
            rate in 0.0f64..10.0,
        ) {
            let stat = StatDelivery { miles };
            let rates = StatRate { mile_rate: rate };
            let first = compute_category_total(&stat, &rates, &[]);
            let second = compute_category_total(&stat, &rates, &[]);
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }
    }
}

//! Concrete paystub categories: routes, incentives and STAT deliveries.
//!
//! Each quantities struct carries its field table through
//! [`CategoryFields`]; the paired rates struct defaults to the standard
//! MDSE pay rates.

use serde::{Deserialize, Serialize};

use super::line_item::{CategoryFields, LineField, LineItemCategory};

/// Route counts for the pay period.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routes {
    /// Number of 4-hour routes driven.
    #[serde(default)]
    pub four_hour_routes: i32,
    /// Number of 6-hour routes driven.
    #[serde(default)]
    pub six_hour_routes: i32,
}

/// Dollar rates per route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRates {
    /// Pay per 4-hour route.
    pub four_hour_rate: f64,
    /// Pay per 6-hour route.
    pub six_hour_rate: f64,
}

impl Default for RouteRates {
    fn default() -> Self {
        Self {
            four_hour_rate: 80.0,
            six_hour_rate: 120.0,
        }
    }
}

impl CategoryFields for Routes {
    type Rates = RouteRates;

    const CATEGORY: LineItemCategory = LineItemCategory::Routes;

    const FIELDS: &'static [LineField<Routes, RouteRates>] = &[
        LineField {
            key: "fourHourRoutes",
            label: "4-Hour Routes",
            quantity: |q: &Routes| f64::from(q.four_hour_routes),
            rate: |r: &RouteRates| r.four_hour_rate,
        },
        LineField {
            key: "sixHourRoutes",
            label: "6-Hour Routes",
            quantity: |q: &Routes| f64::from(q.six_hour_routes),
            rate: |r: &RouteRates| r.six_hour_rate,
        },
    ];
}

/// Incentive event counts for the pay period.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incentives {
    /// Pick-ups made.
    #[serde(default)]
    pub pick_up: i32,
    /// Gas reimbursements.
    #[serde(default)]
    pub gas: i32,
    /// Rush-hour deliveries.
    #[serde(default)]
    pub rush_hour_delivery: i32,
    /// Late-night deliveries.
    #[serde(default)]
    pub late_night_delivery: i32,
    /// High-quantity deliveries.
    #[serde(default)]
    pub high_quantity_delivery: i32,
}

/// Dollar rates per incentive event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncentiveRates {
    /// Pay per pick-up.
    pub pick_up_rate: f64,
    /// Pay per gas reimbursement.
    pub gas_rate: f64,
    /// Pay per rush-hour delivery.
    pub rush_hour_rate: f64,
    /// Pay per late-night delivery.
    pub late_night_rate: f64,
    /// Pay per high-quantity delivery.
    pub high_quantity_rate: f64,
}

impl Default for IncentiveRates {
    fn default() -> Self {
        Self {
            pick_up_rate: 17.5,
            gas_rate: 20.0,
            rush_hour_rate: 5.0,
            late_night_rate: 5.0,
            high_quantity_rate: 5.0,
        }
    }
}

impl CategoryFields for Incentives {
    type Rates = IncentiveRates;

    const CATEGORY: LineItemCategory = LineItemCategory::Incentives;

    const FIELDS: &'static [LineField<Incentives, IncentiveRates>] = &[
        LineField {
            key: "pickUp",
            label: "Pick Up",
            quantity: |q: &Incentives| f64::from(q.pick_up),
            rate: |r: &IncentiveRates| r.pick_up_rate,
        },
        LineField {
            key: "gas",
            label: "Gas",
            quantity: |q: &Incentives| f64::from(q.gas),
            rate: |r: &IncentiveRates| r.gas_rate,
        },
        LineField {
            key: "rushHourDelivery",
            label: "Rush Hour Delivery",
            quantity: |q: &Incentives| f64::from(q.rush_hour_delivery),
            rate: |r: &IncentiveRates| r.rush_hour_rate,
        },
        LineField {
            key: "lateNightDelivery",
            label: "Late Night Delivery",
            quantity: |q: &Incentives| f64::from(q.late_night_delivery),
            rate: |r: &IncentiveRates| r.late_night_rate,
        },
        LineField {
            key: "highQuantityDelivery",
            label: "High Quantity Delivery",
            quantity: |q: &Incentives| f64::from(q.high_quantity_delivery),
            rate: |r: &IncentiveRates| r.high_quantity_rate,
        },
    ];
}

/// STAT delivery mileage for the pay period.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatDelivery {
    /// Miles driven on STAT deliveries (fractional miles allowed).
    #[serde(default)]
    pub miles: f64,
}

/// Dollar rate per STAT mile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRate {
    /// Pay per mile.
    pub mile_rate: f64,
}

impl Default for StatRate {
    fn default() -> Self {
        Self { mile_rate: 1.2 }
    }
}

impl CategoryFields for StatDelivery {
    type Rates = StatRate;

    const CATEGORY: LineItemCategory = LineItemCategory::StatDelivery;

    const FIELDS: &'static [LineField<StatDelivery, StatRate>] = &[LineField {
        key: "miles",
        label: "STAT Delivery Mileage",
        quantity: |q: &StatDelivery| q.miles,
        rate: |r: &StatRate| r.mile_rate,
    }];
}

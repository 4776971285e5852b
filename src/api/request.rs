//! Request bodies for the remote paystub service.

use serde::{Deserialize, Serialize};

use crate::models::{
    CustomItem, IncentiveRates, Incentives, PaystubRecord, RouteRates, Routes, StatDelivery,
    StatRate,
};

/// Driver block of the wire format; the name is sent as one field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDriverInfo {
    /// Full name, `first last`.
    pub name: String,
    /// Mailing address.
    #[serde(default)]
    pub address: String,
    /// Last four SSN digits.
    #[serde(default)]
    pub ssn: String,
    /// Pay-period start, omitted when not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_period_start: Option<String>,
    /// Pay-period end, omitted when not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_period_end: Option<String>,
}

/// A complete paystub as the remote service expects it.
///
/// Categories are flattened into quantity, rate and custom-item fields.
///
/// # Example
///
/// ```
/// use paystub_engine::api::ApiPaystubData;
/// use paystub_engine::models::PaystubRecord;
///
/// let mut record = PaystubRecord::default();
/// record.driver_info.first_name = "Jo".to_string();
/// record.driver_info.last_name = "Park".to_string();
///
/// let data = ApiPaystubData::from(&record);
/// let json = serde_json::to_value(&data).unwrap();
///
/// assert_eq!(json["driverInfo"]["name"], "Jo Park");
/// assert_eq!(json["routeRates"]["fourHourRate"], 80.0);
/// assert!(json["driverInfo"].get("payPeriodEnd").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPaystubData {
    /// Driver identity and period.
    pub driver_info: ApiDriverInfo,
    /// Route quantities.
    pub routes: Routes,
    /// Route rates.
    pub route_rates: RouteRates,
    /// Custom route items.
    #[serde(default)]
    pub custom_routes: Vec<CustomItem>,
    /// Incentive quantities.
    pub incentives: Incentives,
    /// Incentive rates.
    pub incentive_rates: IncentiveRates,
    /// Custom incentive items.
    #[serde(default)]
    pub custom_incentives: Vec<CustomItem>,
    /// STAT delivery mileage.
    pub stat_delivery: StatDelivery,
    /// STAT mileage rate.
    pub stat_rate: StatRate,
    /// Custom STAT items.
    #[serde(default)]
    pub custom_stat_deliveries: Vec<CustomItem>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

impl From<&PaystubRecord> for ApiPaystubData {
    fn from(record: &PaystubRecord) -> Self {
        let info = &record.driver_info;
        Self {
            driver_info: ApiDriverInfo {
                name: info.full_name(),
                address: info.address.clone(),
                ssn: info.ssn.clone(),
                pay_period_start: non_empty(&info.pay_period_start),
                pay_period_end: non_empty(&info.pay_period_end),
            },
            routes: record.routes.quantities.clone(),
            route_rates: record.routes.rates.clone(),
            custom_routes: record.routes.custom_items.clone(),
            incentives: record.incentives.quantities.clone(),
            incentive_rates: record.incentives.rates.clone(),
            custom_incentives: record.incentives.custom_items.clone(),
            stat_delivery: record.stat_delivery.quantities.clone(),
            stat_rate: record.stat_delivery.rates.clone(),
            custom_stat_deliveries: record.stat_delivery.custom_items.clone(),
            notes: record.notes.clone(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Body for saving a named template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCreateTemplateRequest {
    /// Template name.
    pub name: String,
    /// The paystub to store.
    pub data: ApiPaystubData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomItem;

    fn create_test_record() -> PaystubRecord {
        let mut record = PaystubRecord::default();
        record.driver_info.first_name = "Dana".to_string();
        record.driver_info.last_name = "Whitfield".to_string();
        record.driver_info.pay_period_start = "2026-02-01".to_string();
        record.driver_info.pay_period_end = "2026-02-14".to_string();
        record.routes.quantities.six_hour_routes = 3;
        record.incentives.rates.gas_rate = 22.0;
        record
            .stat_delivery
            .add_custom_item(CustomItem::new("Tolls", 2.0, 4.5));
        record
    }

    #[test]
    fn test_wire_shape_is_flattened_camel_case() {
        let json = serde_json::to_value(ApiPaystubData::from(&create_test_record())).unwrap();

        assert_eq!(json["driverInfo"]["name"], "Dana Whitfield");
        assert_eq!(json["driverInfo"]["payPeriodStart"], "2026-02-01");
        assert_eq!(json["routes"]["sixHourRoutes"], 3);
        assert_eq!(json["incentiveRates"]["gasRate"], 22.0);
        assert_eq!(json["statRate"]["mileRate"], 1.2);
        assert_eq!(json["customStatDeliveries"][0]["name"], "Tolls");
        assert_eq!(json["customRoutes"], serde_json::json!([]));
        assert!(json["notes"].as_str().unwrap().starts_with("This payment"));
    }

    #[test]
    fn test_wire_data_deserializes_back() {
        let data = ApiPaystubData::from(&create_test_record());
        let json = serde_json::to_string(&data).unwrap();
        let parsed: ApiPaystubData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_template_request_shape() {
        let request = ApiCreateTemplateRequest {
            name: "Weekly".to_string(),
            data: ApiPaystubData::from(&PaystubRecord::default()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "Weekly");
        assert_eq!(json["data"]["driverInfo"]["name"], "");
    }
}

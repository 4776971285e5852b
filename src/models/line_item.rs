//! Generic line-item category model.
//!
//! Every paystub category has the same shape: a fixed, ordered table of
//! named quantity/rate pairs followed by an open-ended list of custom items.
//! [`Category`] captures that shape once; each concrete category only
//! supplies its field table through [`CategoryFields`].

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the three fixed paystub categories.
///
/// The declaration order is the display order on the paystub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineItemCategory {
    /// Completed delivery routes.
    Routes,
    /// Per-event incentives and bonuses.
    Incentives,
    /// STAT delivery mileage.
    StatDelivery,
}

impl LineItemCategory {
    /// All categories in display order.
    pub const ALL: [LineItemCategory; 3] = [
        LineItemCategory::Routes,
        LineItemCategory::Incentives,
        LineItemCategory::StatDelivery,
    ];
}

/// A user-defined line item appended to a category.
///
/// # Example
///
/// ```
/// use paystub_engine::models::CustomItem;
///
/// let item = CustomItem::new("Weekend bonus", 2.0, 15.0);
/// assert_eq!(item.amount(), 30.0);
/// assert!(!item.id.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomItem {
    /// Unique identifier within the record.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Number of units (may be fractional).
    pub quantity: f64,
    /// Dollars per unit.
    pub rate: f64,
}

impl CustomItem {
    /// Creates a custom item with a freshly generated id.
    pub fn new(name: impl Into<String>, quantity: f64, rate: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            quantity,
            rate,
        }
    }

    /// The line amount, `quantity * rate`.
    pub fn amount(&self) -> f64 {
        self.quantity * self.rate
    }
}

/// Descriptor for one named field of a category.
///
/// Pairs the wire/field key and display label with typed accessors for
/// the quantity and the matching rate.
pub struct LineField<Q, R> {
    /// The field key (e.g. `fourHourRoutes`).
    pub key: &'static str,
    /// The label printed on the paystub (e.g. `4-Hour Routes`).
    pub label: &'static str,
    /// Reads the quantity for this field.
    pub quantity: fn(&Q) -> f64,
    /// Reads the rate for this field.
    pub rate: fn(&R) -> f64,
}

impl<Q, R> Debug for LineField<Q, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineField")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish()
    }
}

/// Implemented by each category's quantities struct.
pub trait CategoryFields:
    Debug + Clone + PartialEq + Default + Serialize + DeserializeOwned + 'static
{
    /// The rates struct paired 1:1 with the quantities.
    type Rates: Debug + Clone + PartialEq + Default + Serialize + DeserializeOwned + 'static;

    /// Which category this is.
    const CATEGORY: LineItemCategory;

    /// Named fields in display order.
    const FIELDS: &'static [LineField<Self, Self::Rates>];
}

/// A resolved named field: label plus the numbers read through its accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedLine {
    /// The field key.
    pub key: &'static str,
    /// The display label.
    pub label: &'static str,
    /// The quantity.
    pub quantity: f64,
    /// The rate.
    pub rate: f64,
}

impl NamedLine {
    /// The line amount, `quantity * rate`.
    pub fn amount(&self) -> f64 {
        self.quantity * self.rate
    }
}

/// Quantities, rates and custom items for one category.
///
/// # Example
///
/// ```
/// use paystub_engine::models::{Category, CustomItem, Routes};
///
/// let mut routes: Category<Routes> = Category::default();
/// routes.quantities.four_hour_routes = 2;
/// routes.add_custom_item(CustomItem::new("Training route", 1.0, 50.0));
///
/// let labels: Vec<_> = routes.named_lines().map(|line| line.label).collect();
/// assert_eq!(labels, vec!["4-Hour Routes", "6-Hour Routes"]);
/// assert_eq!(routes.custom_items.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct Category<Q: CategoryFields> {
    /// Named field quantities.
    pub quantities: Q,
    /// Named field rates.
    pub rates: Q::Rates,
    /// Custom items in entry order.
    #[serde(default)]
    pub custom_items: Vec<CustomItem>,
}

impl<Q: CategoryFields> Category<Q> {
    /// Creates an empty category (all quantities zero) with the given rates.
    pub fn with_rates(rates: Q::Rates) -> Self {
        Self {
            quantities: Q::default(),
            rates,
            custom_items: Vec::new(),
        }
    }

    /// The category kind.
    pub fn kind(&self) -> LineItemCategory {
        Q::CATEGORY
    }

    /// Iterates the named fields in their fixed order.
    pub fn named_lines(&self) -> impl Iterator<Item = NamedLine> + '_ {
        Q::FIELDS.iter().map(move |field| NamedLine {
            key: field.key,
            label: field.label,
            quantity: (field.quantity)(&self.quantities),
            rate: (field.rate)(&self.rates),
        })
    }

    /// Appends a custom item after all existing ones.
    pub fn add_custom_item(&mut self, item: CustomItem) {
        self.custom_items.push(item);
    }

    /// Removes the custom item with `id`, keeping the order of the rest.
    pub fn remove_custom_item(&mut self, id: &str) -> Option<CustomItem> {
        let index = self.custom_items.iter().position(|item| item.id == id)?;
        Some(self.custom_items.remove(index))
    }

    /// Mutable access to a custom item by id.
    pub fn custom_item_mut(&mut self, id: &str) -> Option<&mut CustomItem> {
        self.custom_items.iter_mut().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Incentives, Routes, StatDelivery};

    #[test]
    fn test_custom_item_ids_are_unique() {
        let a = CustomItem::new("A", 1.0, 1.0);
        let b = CustomItem::new("A", 1.0, 1.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_custom_item_amount_allows_negative_quantity() {
        let item = CustomItem::new("Correction", -2.0, 10.0);
        assert_eq!(item.amount(), -20.0);
    }

    #[test]
    fn test_field_tables_have_expected_keys() {
        let routes: Vec<_> = Routes::FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(routes, vec!["fourHourRoutes", "sixHourRoutes"]);

        let incentives: Vec<_> = Incentives::FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(
            incentives,
            vec![
                "pickUp",
                "gas",
                "rushHourDelivery",
                "lateNightDelivery",
                "highQuantityDelivery"
            ]
        );

        let stat: Vec<_> = StatDelivery::FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(stat, vec!["miles"]);
    }

    #[test]
    fn test_named_lines_read_through_accessors() {
        let mut routes: Category<Routes> = Category::default();
        routes.quantities.four_hour_routes = 3;
        routes.rates.six_hour_rate = 99.5;

        let lines: Vec<NamedLine> = routes.named_lines().collect();
        assert_eq!(lines[0].quantity, 3.0);
        assert_eq!(lines[0].rate, 80.0);
        assert_eq!(lines[1].quantity, 0.0);
        assert_eq!(lines[1].rate, 99.5);
    }

    #[test]
    fn test_remove_custom_item_preserves_order() {
        let mut stat: Category<StatDelivery> = Category::default();
        let first = CustomItem::new("First", 1.0, 1.0);
        let second = CustomItem::new("Second", 1.0, 1.0);
        let third = CustomItem::new("Third", 1.0, 1.0);
        let second_id = second.id.clone();
        stat.add_custom_item(first);
        stat.add_custom_item(second);
        stat.add_custom_item(third);

        let removed = stat.remove_custom_item(&second_id).unwrap();
        assert_eq!(removed.name, "Second");

        let names: Vec<_> = stat.custom_items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Third"]);
        assert!(stat.remove_custom_item("missing").is_none());
    }

    #[test]
    fn test_custom_item_mut_updates_in_place() {
        let mut incentives: Category<Incentives> = Category::default();
        let item = CustomItem::new("Holiday", 1.0, 10.0);
        let id = item.id.clone();
        incentives.add_custom_item(item);

        incentives.custom_item_mut(&id).unwrap().quantity = 4.0;
        assert_eq!(incentives.custom_items[0].amount(), 40.0);
    }

    #[test]
    fn test_category_serializes_with_camel_case_keys() {
        let mut routes: Category<Routes> = Category::default();
        routes.quantities.six_hour_routes = 2;
        routes.add_custom_item(CustomItem::new("Training route", 1.0, 50.0));

        let value = serde_json::to_value(&routes).unwrap();
        assert_eq!(value["quantities"]["sixHourRoutes"], 2);
        assert_eq!(value["rates"]["fourHourRate"], 80.0);
        assert_eq!(value["customItems"][0]["name"], "Training route");

        let back: Category<Routes> = serde_json::from_value(value).unwrap();
        assert_eq!(back, routes);
    }

    #[test]
    fn test_category_without_custom_items_deserializes() {
        let stat: Category<StatDelivery> = serde_json::from_str(
            r#"{"quantities": {"miles": 12.5}, "rates": {"mileRate": 0.6}}"#,
        )
        .unwrap();
        assert_eq!(stat.quantities.miles, 12.5);
        assert!(stat.custom_items.is_empty());
    }

    #[test]
    fn test_category_kind() {
        assert_eq!(Category::<Routes>::default().kind(), LineItemCategory::Routes);
        assert_eq!(
            Category::<StatDelivery>::default().kind(),
            LineItemCategory::StatDelivery
        );
    }
}

//! The fixed-layout paystub document.
//!
//! [`render_document`] maps a record and its calculation onto a
//! [`PaystubDocument`]: every string that will appear on the page, already
//! formatted, in page order. The HTML writer and any other output only lay
//! these strings out; they never compute or format amounts themselves.

use serde::Serialize;

use crate::models::{
    Category, CategoryFields, LineItemCategory, PaystubCalculation, PaystubRecord,
};

use super::currency::{format_currency, format_quantity};
use super::dates::format_date;

/// Shown in place of a missing name, address or payment date.
pub const FIELD_PLACEHOLDER: &str = "_______________";

/// Shown when no SSN digits were entered.
pub const SSN_PLACEHOLDER: &str = "XXX-XX-____";

/// Shown when either pay-period bound is missing.
pub const PAY_PERIOD_UNSPECIFIED: &str = "Not specified";

/// Organization mark printed at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branding {
    /// Organization name, also used as the logo's alt text.
    pub name: String,
    /// Path or URL of the logo image.
    pub logo_path: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: "MDSCRIPTS express".to_string(),
            logo_path: "/images/mdscripts-logo.png".to_string(),
        }
    }
}

/// Header block: organization mark plus driver and period details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentHeader {
    /// Organization mark.
    pub branding: Branding,
    /// Driver full name or placeholder.
    pub name: String,
    /// Driver address or placeholder.
    pub address: String,
    /// Masked SSN (`XXX-XX-1234`).
    pub ssn: String,
    /// `MM/DD/YYYY - MM/DD/YYYY` or `Not specified`.
    pub pay_period: String,
    /// Formatted pay-period end or placeholder.
    pub payment_date: String,
}

/// One table row: label, quantity, rate and line amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Item label.
    pub label: String,
    /// Quantity as entered.
    pub quantity: String,
    /// Rate in currency format.
    pub rate: String,
    /// `quantity * rate` in currency format.
    pub amount: String,
}

/// A category table ending with its subtotal row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionTable {
    /// Which category this table shows.
    pub category: LineItemCategory,
    /// Section heading.
    pub title: &'static str,
    /// Heading of the label column.
    pub type_header: &'static str,
    /// Named fields first, then custom items in entry order.
    pub rows: Vec<TableRow>,
    /// Label of the bold subtotal row.
    pub subtotal_label: &'static str,
    /// Category subtotal in currency format.
    pub subtotal: String,
}

/// A fully formatted single-page paystub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaystubDocument {
    /// Header block.
    pub header: DocumentHeader,
    /// Routes, Incentives and StatDelivery tables, in that order.
    pub sections: Vec<SectionTable>,
    /// Grand total in currency format.
    pub grand_total: String,
    /// Note lines, or `None` when there are no notes. Empty lines are kept.
    pub notes: Option<Vec<String>>,
}

/// Renders a paystub with the default branding.
///
/// # Example
///
/// ```
/// use paystub_engine::calculation::calculate_totals;
/// use paystub_engine::models::PaystubRecord;
/// use paystub_engine::render::render_document;
///
/// let mut record = PaystubRecord::default();
/// record.driver_info.first_name = "Jo".to_string();
/// record.driver_info.last_name = "Park".to_string();
/// record.routes.quantities.four_hour_routes = 2;
///
/// let calc = calculate_totals(&record);
/// let doc = render_document(&record, &calc);
///
/// assert_eq!(doc.header.name, "Jo Park");
/// assert_eq!(doc.sections[0].subtotal, "$160.00");
/// assert_eq!(doc.grand_total, "$160.00");
/// ```
pub fn render_document(record: &PaystubRecord, calculation: &PaystubCalculation) -> PaystubDocument {
    render_document_with(record, calculation, &Branding::default())
}

/// Renders a paystub with the given organization mark.
pub fn render_document_with(
    record: &PaystubRecord,
    calculation: &PaystubCalculation,
    branding: &Branding,
) -> PaystubDocument {
    PaystubDocument {
        header: render_header(record, branding),
        sections: vec![
            render_section(&record.routes, calculation),
            render_section(&record.incentives, calculation),
            render_section(&record.stat_delivery, calculation),
        ],
        grand_total: format_currency(calculation.grand_total),
        notes: split_notes(&record.notes),
    }
}

fn render_header(record: &PaystubRecord, branding: &Branding) -> DocumentHeader {
    let info = &record.driver_info;

    let name = non_empty_or(info.full_name(), FIELD_PLACEHOLDER);
    let address = non_empty_or(info.address.clone(), FIELD_PLACEHOLDER);
    let ssn = if info.ssn.is_empty() {
        SSN_PLACEHOLDER.to_string()
    } else {
        format!("XXX-XX-{}", info.ssn)
    };

    let start = format_date(&info.pay_period_start);
    let end = format_date(&info.pay_period_end);
    let pay_period = match (&start, &end) {
        (Some(start), Some(end)) => format!("{} - {}", start, end),
        _ => PAY_PERIOD_UNSPECIFIED.to_string(),
    };
    let payment_date = end.unwrap_or_else(|| FIELD_PLACEHOLDER.to_string());

    DocumentHeader {
        branding: branding.clone(),
        name,
        address,
        ssn,
        pay_period,
        payment_date,
    }
}

fn render_section<Q: CategoryFields>(
    category: &Category<Q>,
    calculation: &PaystubCalculation,
) -> SectionTable {
    let kind = category.kind();
    let (title, type_header, subtotal_label) = section_labels(kind);

    let named = category.named_lines().map(|line| TableRow {
        label: line.label.to_string(),
        quantity: format_quantity(line.quantity),
        rate: format_currency(line.rate),
        amount: format_currency(line.amount()),
    });
    let custom = category.custom_items.iter().map(|item| TableRow {
        label: item.name.clone(),
        quantity: format_quantity(item.quantity),
        rate: format_currency(item.rate),
        amount: format_currency(item.amount()),
    });

    SectionTable {
        category: kind,
        title,
        type_header,
        rows: named.chain(custom).collect(),
        subtotal_label,
        subtotal: format_currency(calculation.subtotal(kind)),
    }
}

fn section_labels(category: LineItemCategory) -> (&'static str, &'static str, &'static str) {
    match category {
        LineItemCategory::Routes => ("ROUTES COMPLETED", "Route Type", "Routes Subtotal:"),
        LineItemCategory::Incentives => (
            "INCENTIVES & BONUSES",
            "Incentive Type",
            "Incentives Subtotal:",
        ),
        LineItemCategory::StatDelivery => ("STAT DELIVERIES", "Type", "STAT Delivery Subtotal:"),
    }
}

fn split_notes(notes: &str) -> Option<Vec<String>> {
    if notes.is_empty() {
        return None;
    }
    Some(
        notes
            .split('\n')
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect(),
    )
}

fn non_empty_or(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

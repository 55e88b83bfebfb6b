//! Types embedded in several resources.
//!
//! These are not resources themselves; they appear inside purchase orders,
//! invoices and shipments. Money amounts are integer minor units (cents).

use serde::{Deserialize, Serialize};

use crate::rest::FieldErrors;

/// A line of a purchase order or invoice.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LineItem {
    /// Stock keeping unit.
    pub sku: String,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of units. Must be greater than zero.
    pub quantity: u32,

    /// Price of one unit in minor currency units. Must not be negative.
    pub unit_price_cents: i64,
}

impl LineItem {
    /// Creates a line item without description.
    #[must_use]
    pub fn new(sku: impl Into<String>, quantity: u32, unit_price_cents: i64) -> Self {
        Self {
            sku: sku.into(),
            description: None,
            quantity,
            unit_price_cents,
        }
    }

    /// Returns `quantity * unit_price_cents`, or `None` on overflow.
    #[must_use]
    pub fn total_cents(&self) -> Option<i64> {
        self.unit_price_cents.checked_mul(i64::from(self.quantity))
    }
}

/// A postal address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Address {
    /// Recipient or company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// First address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,

    /// Second address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State, province or region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// ISO 3166-1 alpha-2 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A package in a shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Package {
    /// Weight in grams. Must be greater than zero.
    pub weight_grams: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Carrier tracking number of this package, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

/// Checks that there is at least one line item and that every item has a
/// SKU, a positive quantity and a non-negative unit price.
pub(crate) fn check_line_items(mut errors: FieldErrors, items: &[LineItem]) -> FieldErrors {
    errors = errors.check(!items.is_empty(), "line_items", "must contain at least one item");

    for (index, item) in items.iter().enumerate() {
        errors = errors
            .require(&item.sku, format!("line_items[{index}].sku"))
            .check(
                item.quantity > 0,
                format!("line_items[{index}].quantity"),
                "must be greater than 0",
            )
            .check(
                item.unit_price_cents >= 0,
                format!("line_items[{index}].unit_price_cents"),
                "must not be negative",
            );
    }

    errors
}

/// Checks that `currency` is a three-letter ISO 4217 code.
pub(crate) fn check_currency(errors: FieldErrors, currency: &str, field: &str) -> FieldErrors {
    let valid = currency.len() == 3 && currency.bytes().all(|b| b.is_ascii_alphabetic());
    errors.check(valid, field, "must be a 3-letter currency code")
}

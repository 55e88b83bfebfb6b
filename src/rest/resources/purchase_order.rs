//! Purchase order resource.
//!
//! Purchase orders move through `DRAFT -> SUBMITTED -> CONFIRMED -> SHIPPED
//! -> DELIVERED`, and can be `CANCELLED`. Transitions are enacted by the
//! server through action endpoints:
//! - [`ResourceClient::submit`]
//! - [`ResourceClient::confirm`]
//! - [`ResourceClient::cancel`]
//! - [`ResourceClient::mark_delivered`]
//!
//! Command responses wrap the record in `update_purchase_orders_by_pk`.
//!
//! # Example
//!
//! ```rust,ignore
//! use commerce_api::rest::resources::{
//!     CreatePurchaseOrder, LineItem, PurchaseOrderListParams, PurchaseOrderStatus,
//! };
//!
//! let orders = client.purchase_orders();
//!
//! let order = orders
//!     .create(&CreatePurchaseOrder {
//!         supplier_id: "sup_42".to_string(),
//!         line_items: vec![LineItem::new("BOLT-M8", 500, 12)],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let order = orders.submit(&order.id).await?;
//!
//! let open = orders
//!     .list(&PurchaseOrderListParams {
//!         status: Some(vec![PurchaseOrderStatus::Submitted, PurchaseOrderStatus::Confirmed]),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{resource_status, FieldErrors, Resource, ResourceClient, ResourceError};

use super::common::{check_line_items, Address, LineItem};

resource_status! {
    /// The lifecycle status of a purchase order.
    PurchaseOrderStatus {
        /// Being edited; not yet sent to the supplier.
        Draft => "DRAFT",
        /// Sent to the supplier.
        Submitted => "SUBMITTED",
        /// Accepted by the supplier.
        Confirmed => "CONFIRMED",
        /// Goods are on their way.
        Shipped => "SHIPPED",
        /// Goods were received.
        Delivered => "DELIVERED",
        /// Cancelled before delivery.
        Cancelled => "CANCELLED",
    }
}

impl PurchaseOrderStatus {
    #[must_use]
    pub const fn is_draft(self) -> bool {
        matches!(self, Self::Draft)
    }

    #[must_use]
    pub const fn is_submitted(self) -> bool {
        matches!(self, Self::Submitted)
    }

    #[must_use]
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }

    #[must_use]
    pub const fn is_shipped(self) -> bool {
        matches!(self, Self::Shipped)
    }

    #[must_use]
    pub const fn is_delivered(self) -> bool {
        matches!(self, Self::Delivered)
    }

    #[must_use]
    pub const fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns `true` once the order can no longer change.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

/// A purchase order placed with a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseOrder {
    pub id: String,

    pub status: PurchaseOrderStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,

    #[serde(default)]
    pub line_items: Vec<LineItem>,

    /// ISO 4217 currency code of all amounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cents: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_delivery_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Reason given when the order was cancelled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Filters for listing purchase orders.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PurchaseOrderListParams {
    /// Only orders in one of these statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<PurchaseOrderStatus>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Body of a purchase order create request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePurchaseOrder {
    pub supplier_id: String,

    /// At least one item is required.
    pub line_items: Vec<LineItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of a purchase order update request. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePurchaseOrder {
    /// Replaces all line items when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Resource for PurchaseOrder {
    type Status = PurchaseOrderStatus;
    type ListParams = PurchaseOrderListParams;
    type CreatePayload = CreatePurchaseOrder;
    type UpdatePayload = UpdatePurchaseOrder;

    const NAME: &'static str = "PurchaseOrder";
    const PATH: &'static str = "purchase-orders";
    const ENVELOPE: Option<&'static str> = Some("update_purchase_orders_by_pk");

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Self::Status {
        self.status
    }

    fn validate_create(payload: &CreatePurchaseOrder) -> Result<(), ResourceError> {
        let errors = FieldErrors::new(Self::NAME).require(&payload.supplier_id, "supplier_id");
        check_line_items(errors, &payload.line_items).finish()
    }

    fn validate_update(payload: &UpdatePurchaseOrder) -> Result<(), ResourceError> {
        let errors = FieldErrors::new(Self::NAME);
        match &payload.line_items {
            Some(items) => check_line_items(errors, items).finish(),
            None => errors.finish(),
        }
    }
}

impl ResourceClient<'_, PurchaseOrder> {
    /// Sends a draft order to the supplier.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::StateConflict`] if the order is not a draft.
    pub async fn submit(&self, id: &str) -> Result<PurchaseOrder, ResourceError> {
        self.action(id, "submit", None).await
    }

    /// Records the supplier's acceptance.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::StateConflict`] if the order was not submitted.
    pub async fn confirm(&self, id: &str) -> Result<PurchaseOrder, ResourceError> {
        self.action(id, "confirm", None).await
    }

    /// Cancels the order, optionally recording a reason.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::StateConflict`] if the order is already
    /// delivered or cancelled.
    pub async fn cancel(
        &self,
        id: &str,
        reason: Option<&str>,
    ) -> Result<PurchaseOrder, ResourceError> {
        let body = reason.map(|reason| serde_json::json!({ "reason": reason }));
        self.action(id, "cancel", body).await
    }

    /// Records receipt of the goods.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::StateConflict`] if the order was not shipped.
    pub async fn mark_delivered(&self, id: &str) -> Result<PurchaseOrder, ResourceError> {
        self.action(id, "mark-delivered", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{encode_query, normalize, ResourceOperation, ResourceStatus};
    use serde_json::json;

    #[test]
    fn test_resource_configuration() {
        assert_eq!(PurchaseOrder::NAME, "PurchaseOrder");
        assert_eq!(PurchaseOrder::PATH, "purchase-orders");
        assert_eq!(PurchaseOrder::ENVELOPE, Some("update_purchase_orders_by_pk"));
        assert_eq!(PurchaseOrderStatus::ALL.len(), 6);
    }

    #[test]
    fn test_status_predicates() {
        assert!(PurchaseOrderStatus::Draft.is_draft());
        assert!(PurchaseOrderStatus::Shipped.is_shipped());
        assert!(!PurchaseOrderStatus::Shipped.is_final());
        assert!(PurchaseOrderStatus::Delivered.is_final());
        assert!(PurchaseOrderStatus::Cancelled.is_final());
        assert_eq!(
            PurchaseOrderStatus::parse("CONFIRMED"),
            Some(PurchaseOrderStatus::Confirmed)
        );
    }

    #[test]
    fn test_deserializes_from_envelope() {
        let order: PurchaseOrder = normalize(
            json!({
                "update_purchase_orders_by_pk": {
                    "id": "po_1",
                    "status": "SUBMITTED",
                    "supplier_id": "sup_42",
                    "line_items": [
                        {"sku": "BOLT-M8", "quantity": 500, "unit_price_cents": 12}
                    ],
                    "expected_delivery_date": "2024-06-30",
                    "created_at": "2024-06-01T09:30:00Z"
                }
            }),
            ResourceOperation::Action("submit"),
        )
        .unwrap();

        assert_eq!(order.id, "po_1");
        assert!(order.status.is_submitted());
        assert_eq!(order.line_items[0].quantity, 500);
        assert_eq!(
            order.expected_delivery_date,
            NaiveDate::from_ymd_opt(2024, 6, 30)
        );
    }

    #[test]
    fn test_validate_create() {
        let valid = CreatePurchaseOrder {
            supplier_id: "sup_42".to_string(),
            line_items: vec![LineItem::new("BOLT-M8", 500, 12)],
            ..Default::default()
        };
        assert!(PurchaseOrder::validate_create(&valid).is_ok());

        let Err(ResourceError::Validation { errors, .. }) =
            PurchaseOrder::validate_create(&CreatePurchaseOrder::default())
        else {
            panic!("Expected Validation error");
        };
        assert!(errors.contains_key("supplier_id"));
        assert!(errors.contains_key("line_items"));
    }

    #[test]
    fn test_validate_update_checks_only_given_items() {
        assert!(PurchaseOrder::validate_update(&UpdatePurchaseOrder::default()).is_ok());

        let update = UpdatePurchaseOrder {
            line_items: Some(vec![LineItem::new("BOLT-M8", 0, 12)]),
            ..Default::default()
        };
        assert!(matches!(
            PurchaseOrder::validate_update(&update),
            Err(ResourceError::Validation { .. })
        ));
    }

    #[test]
    fn test_list_params_query() {
        let params = PurchaseOrderListParams {
            status: Some(vec![PurchaseOrderStatus::Draft, PurchaseOrderStatus::Submitted]),
            supplier_id: Some("sup_42".to_string()),
            ..Default::default()
        };

        let query = encode_query(PurchaseOrder::NAME, &params).unwrap();
        assert_eq!(
            query,
            vec![
                ("status[]".to_string(), "DRAFT".to_string()),
                ("status[]".to_string(), "SUBMITTED".to_string()),
                ("supplier_id".to_string(), "sup_42".to_string()),
            ]
        );
    }
}

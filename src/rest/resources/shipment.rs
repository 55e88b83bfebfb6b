//! Shipment resource.
//!
//! Shipments carry one or more packages from an origin to a destination.
//! Besides the offset/limit `list`, shipments expose a page-number listing
//! at `shipments/paged` for [`ResourceClient::auto_paging`].
//!
//! Command responses wrap the record in `update_shipments_by_pk`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::ops::ControlFlow;
//! use commerce_api::rest::resources::{ShipmentListParams, ShipmentStatus};
//!
//! let shipments = client.shipments();
//!
//! let shipment = shipments.ship("shp_1", "1Z999AA10123456784").await?;
//! assert!(shipment.status.is_in_transit());
//!
//! // Walk every in-transit shipment
//! shipments
//!     .auto_paging(ShipmentListParams {
//!         status: Some(vec![ShipmentStatus::InTransit]),
//!         ..Default::default()
//!     })
//!     .each(|shipment| {
//!         println!("{} via {:?}", shipment.id, shipment.carrier_id);
//!         ControlFlow::Continue(())
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{
    resource_status, FieldErrors, PagedResource, Resource, ResourceClient, ResourceError,
};

use super::common::{Address, Package};

resource_status! {
    /// The delivery status of a shipment.
    ShipmentStatus {
        /// Created, not yet handed to the carrier.
        Pending => "PENDING",
        InTransit => "IN_TRANSIT",
        Delivered => "DELIVERED",
        /// The carrier reported a problem (damage, failed delivery, ...).
        Exception => "EXCEPTION",
        Cancelled => "CANCELLED",
    }
}

impl ShipmentStatus {
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn is_in_transit(self) -> bool {
        matches!(self, Self::InTransit)
    }

    #[must_use]
    pub const fn is_delivered(self) -> bool {
        matches!(self, Self::Delivered)
    }

    #[must_use]
    pub const fn is_exception(self) -> bool {
        matches!(self, Self::Exception)
    }

    #[must_use]
    pub const fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// A shipment of goods.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shipment {
    pub id: String,

    pub status: ShipmentStatus,

    /// The order being shipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    #[serde(default)]
    pub packages: Vec<Package>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipped_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<Utc>>,
}

impl Shipment {
    /// Returns the combined weight of all packages in grams.
    #[must_use]
    pub fn total_weight_grams(&self) -> u64 {
        self.packages
            .iter()
            .map(|p| u64::from(p.weight_grams))
            .sum()
    }
}

/// Filters for listing shipments. Used by both listings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShipmentListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<ShipmentStatus>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipped_after: Option<DateTime<Utc>>,

    /// Page size. The page-number listing also honors it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Ignored by the page-number listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Body of a shipment create request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateShipment {
    pub order_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<String>,

    /// At least one package is required.
    pub packages: Vec<Package>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Address>,
}

/// Body of a shipment update request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateShipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<NaiveDate>,
}

impl Resource for Shipment {
    type Status = ShipmentStatus;
    type ListParams = ShipmentListParams;
    type CreatePayload = CreateShipment;
    type UpdatePayload = UpdateShipment;

    const NAME: &'static str = "Shipment";
    const PATH: &'static str = "shipments";
    const ENVELOPE: Option<&'static str> = Some("update_shipments_by_pk");

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Self::Status {
        self.status
    }

    fn validate_create(payload: &CreateShipment) -> Result<(), ResourceError> {
        let mut errors = FieldErrors::new(Self::NAME)
            .require(&payload.order_id, "order_id")
            .check(
                !payload.packages.is_empty(),
                "packages",
                "must contain at least one package",
            );

        for (index, package) in payload.packages.iter().enumerate() {
            errors = errors.check(
                package.weight_grams > 0,
                format!("packages[{index}].weight_grams"),
                "must be greater than 0",
            );
        }

        errors.finish()
    }
}

impl PagedResource for Shipment {
    const PAGED_PATH: &'static str = "shipments/paged";
}

impl ResourceClient<'_, Shipment> {
    /// Hands the shipment to the carrier under `tracking_number`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] without a request if the
    /// tracking number is blank, and [`ResourceError::StateConflict`] if the
    /// shipment is not pending.
    pub async fn ship(&self, id: &str, tracking_number: &str) -> Result<Shipment, ResourceError> {
        FieldErrors::new(Shipment::NAME)
            .require(tracking_number, "tracking_number")
            .finish()?;

        let body = serde_json::json!({ "tracking_number": tracking_number });
        self.action(id, "ship", Some(body)).await
    }

    /// Records delivery of the shipment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::StateConflict`] if the shipment is not in
    /// transit.
    pub async fn mark_delivered(&self, id: &str) -> Result<Shipment, ResourceError> {
        self.action(id, "mark-delivered", None).await
    }

    /// Cancels the shipment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::StateConflict`] if the shipment was already
    /// delivered.
    pub async fn cancel(&self, id: &str) -> Result<Shipment, ResourceError> {
        self.action(id, "cancel", None).await
    }
}

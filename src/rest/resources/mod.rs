//! Concrete Commerce API resources.
//!
//! Each resource is configuration data for the generic
//! [`ResourceClient`](crate::rest::ResourceClient): a record type, a closed
//! status enum, list filters, create/update payloads, pre-flight checks and
//! its state-transition actions.
//!
//! | Resource | Path | Actions | Paged listing |
//! |---|---|---|---|
//! | [`PurchaseOrder`] | `purchase-orders` | submit, confirm, cancel, mark_delivered | - |
//! | [`Invoice`] | `invoices` | issue, mark_paid, void | - |
//! | [`Payment`] | `payments` | capture, refund | - |
//! | [`Shipment`] | `shipments` | ship, mark_delivered, cancel | `shipments/paged` |
//! | [`Carrier`] | `carriers` | activate, deactivate | `carriers/paged` |
//!
//! # Example
//!
//! ```rust,ignore
//! use commerce_api::rest::resources::{CarrierListParams, CarrierStatus};
//!
//! let active = client
//!     .carriers()
//!     .list(&CarrierListParams {
//!         status: Some(vec![CarrierStatus::Active]),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

mod carrier;
mod common;
mod invoice;
mod payment;
mod purchase_order;
mod shipment;

pub use carrier::{
    Carrier, CarrierListParams, CarrierStatus, CreateCarrier, UpdateCarrier,
    TRACKING_NUMBER_PLACEHOLDER,
};
pub use common::{Address, LineItem, Package};
pub use invoice::{CreateInvoice, Invoice, InvoiceListParams, InvoiceStatus, UpdateInvoice};
pub use payment::{CreatePayment, Payment, PaymentListParams, PaymentStatus, UpdatePayment};
pub use purchase_order::{
    CreatePurchaseOrder, PurchaseOrder, PurchaseOrderListParams, PurchaseOrderStatus,
    UpdatePurchaseOrder,
};
pub use shipment::{
    CreateShipment, Shipment, ShipmentListParams, ShipmentStatus, UpdateShipment,
};

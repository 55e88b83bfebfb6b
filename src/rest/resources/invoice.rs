//! Invoice resource.
//!
//! Invoices are created as drafts, issued to the customer, then either paid
//! or voided. An issued invoice past its due date is reported as `OVERDUE`
//! by the server.
//!
//! # Example
//!
//! ```rust,ignore
//! use commerce_api::rest::resources::{InvoiceListParams, InvoiceStatus};
//!
//! let invoices = client.invoices();
//!
//! let outstanding = invoices
//!     .list(&InvoiceListParams {
//!         status: Some(vec![InvoiceStatus::Issued, InvoiceStatus::Overdue]),
//!         limit: Some(100),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for invoice in outstanding.iter() {
//!     println!("{} due {:?}", invoice.id, invoice.due_date);
//! }
//!
//! let paid = invoices.mark_paid("inv_123").await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{resource_status, FieldErrors, Resource, ResourceClient, ResourceError};

use super::common::{check_currency, check_line_items, LineItem};

resource_status! {
    /// The lifecycle status of an invoice.
    InvoiceStatus {
        Draft => "DRAFT",
        Issued => "ISSUED",
        Paid => "PAID",
        /// Issued and past its due date.
        Overdue => "OVERDUE",
        Void => "VOID",
    }
}

impl InvoiceStatus {
    #[must_use]
    pub const fn is_draft(self) -> bool {
        matches!(self, Self::Draft)
    }

    #[must_use]
    pub const fn is_issued(self) -> bool {
        matches!(self, Self::Issued)
    }

    #[must_use]
    pub const fn is_paid(self) -> bool {
        matches!(self, Self::Paid)
    }

    #[must_use]
    pub const fn is_overdue(self) -> bool {
        matches!(self, Self::Overdue)
    }

    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(self, Self::Void)
    }

    /// Returns `true` if payment is still expected.
    #[must_use]
    pub const fn is_outstanding(self) -> bool {
        matches!(self, Self::Issued | Self::Overdue)
    }
}

/// An invoice sent to a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Invoice {
    pub id: String,

    pub status: InvoiceStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// The purchase order this invoice bills, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_order_id: Option<String>,

    #[serde(default)]
    pub line_items: Vec<LineItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cents: Option<i64>,

    /// Remaining balance; zero once paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_due_cents: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Filters for listing invoices.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<InvoiceStatus>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_id: Option<String>,

    /// Only invoices due on or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_before: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Body of an invoice create request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInvoice {
    pub customer_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_id: Option<String>,

    pub line_items: Vec<LineItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of an invoice update request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateInvoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Resource for Invoice {
    type Status = InvoiceStatus;
    type ListParams = InvoiceListParams;
    type CreatePayload = CreateInvoice;
    type UpdatePayload = UpdateInvoice;

    const NAME: &'static str = "Invoice";
    const PATH: &'static str = "invoices";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Self::Status {
        self.status
    }

    fn validate_create(payload: &CreateInvoice) -> Result<(), ResourceError> {
        let mut errors = FieldErrors::new(Self::NAME).require(&payload.customer_id, "customer_id");
        if let Some(currency) = &payload.currency {
            errors = check_currency(errors, currency, "currency");
        }
        check_line_items(errors, &payload.line_items).finish()
    }

    fn validate_update(payload: &UpdateInvoice) -> Result<(), ResourceError> {
        let errors = FieldErrors::new(Self::NAME);
        match &payload.line_items {
            Some(items) => check_line_items(errors, items).finish(),
            None => errors.finish(),
        }
    }
}

impl ResourceClient<'_, Invoice> {
    /// Issues a draft invoice to the customer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::StateConflict`] if the invoice is not a draft.
    pub async fn issue(&self, id: &str) -> Result<Invoice, ResourceError> {
        self.action(id, "issue", None).await
    }

    /// Records full payment of the invoice.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::StateConflict`] if the invoice is not
    /// outstanding.
    pub async fn mark_paid(&self, id: &str) -> Result<Invoice, ResourceError> {
        self.action(id, "mark-paid", None).await
    }

    /// Voids the invoice.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::StateConflict`] if the invoice is paid.
    pub async fn void(&self, id: &str) -> Result<Invoice, ResourceError> {
        self.action(id, "void", None).await
    }
}

//! Payment resource.
//!
//! Card-style payments are authorized first and captured later; other
//! methods go straight to `PAID`. Paid payments can be refunded in full or
//! in part.
//!
//! # Example
//!
//! ```rust,ignore
//! use commerce_api::rest::resources::CreatePayment;
//!
//! let payments = client.payments();
//!
//! let payment = payments
//!     .create(&CreatePayment {
//!         invoice_id: Some("inv_123".to_string()),
//!         amount_cents: 12_500,
//!         currency: "USD".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let payment = payments.capture(&payment.id).await?;
//!
//! // Partial refund of 25.00
//! let payment = payments.refund(&payment.id, Some(2_500)).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{resource_status, FieldErrors, Resource, ResourceClient, ResourceError};

use super::common::check_currency;

resource_status! {
    /// The status of a payment.
    PaymentStatus {
        Pending => "PENDING",
        /// Funds are reserved but not yet captured.
        Authorized => "AUTHORIZED",
        Paid => "PAID",
        Failed => "FAILED",
        Refunded => "REFUNDED",
    }
}

impl PaymentStatus {
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn is_authorized(self) -> bool {
        matches!(self, Self::Authorized)
    }

    #[must_use]
    pub const fn is_paid(self) -> bool {
        matches!(self, Self::Paid)
    }

    #[must_use]
    pub const fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }

    #[must_use]
    pub const fn is_refunded(self) -> bool {
        matches!(self, Self::Refunded)
    }
}

/// A payment against an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payment {
    pub id: String,

    pub status: PaymentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Payment method, e.g. "card" or "bank_transfer".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunded_amount_cents: Option<i64>,

    /// Processor message for failed payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Filters for listing payments.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<PaymentStatus>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Body of a payment create request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,

    /// Amount in minor units. Must be greater than zero.
    pub amount_cents: i64,

    /// ISO 4217 code, e.g. "USD".
    pub currency: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of a payment update request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl Resource for Payment {
    type Status = PaymentStatus;
    type ListParams = PaymentListParams;
    type CreatePayload = CreatePayment;
    type UpdatePayload = UpdatePayment;

    const NAME: &'static str = "Payment";
    const PATH: &'static str = "payments";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Self::Status {
        self.status
    }

    fn validate_create(payload: &CreatePayment) -> Result<(), ResourceError> {
        let errors = FieldErrors::new(Self::NAME).check(
            payload.amount_cents > 0,
            "amount_cents",
            "must be greater than 0",
        );
        check_currency(errors, &payload.currency, "currency").finish()
    }
}

impl ResourceClient<'_, Payment> {
    /// Captures an authorized payment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::StateConflict`] if the payment is not
    /// authorized.
    pub async fn capture(&self, id: &str) -> Result<Payment, ResourceError> {
        self.action(id, "capture", None).await
    }

    /// Refunds a paid payment, fully when `amount_cents` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] without a request if
    /// `amount_cents` is not positive, and [`ResourceError::StateConflict`]
    /// if the payment cannot be refunded.
    pub async fn refund(
        &self,
        id: &str,
        amount_cents: Option<i64>,
    ) -> Result<Payment, ResourceError> {
        let body = match amount_cents {
            Some(amount) => {
                FieldErrors::new(Payment::NAME)
                    .check(amount > 0, "amount_cents", "must be greater than 0")
                    .finish()?;
                Some(serde_json::json!({ "amount_cents": amount }))
            }
            None => None,
        };
        self.action(id, "refund", body).await
    }
}

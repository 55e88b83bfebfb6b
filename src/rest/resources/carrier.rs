//! Carrier resource.
//!
//! Carriers are the shipping companies shipments are handed to. Inactive
//! carriers stay listed but cannot take new shipments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{
    resource_status, FieldErrors, PagedResource, Resource, ResourceClient, ResourceError,
};

/// Placeholder replaced by the tracking number in tracking URL templates.
pub const TRACKING_NUMBER_PLACEHOLDER: &str = "{tracking_number}";

resource_status! {
    /// Whether a carrier accepts new shipments.
    CarrierStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

impl CarrierStatus {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn is_inactive(self) -> bool {
        matches!(self, Self::Inactive)
    }
}

/// A shipping carrier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Carrier {
    pub id: String,

    pub status: CarrierStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short unique code, e.g. "UPS".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// URL template containing `{tracking_number}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_url_template: Option<String>,

    /// Service levels offered, e.g. "ground", "express".
    #[serde(default)]
    pub services: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Carrier {
    /// Builds the public tracking URL for a tracking number.
    ///
    /// Returns `None` if the carrier has no template.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commerce_api::rest::resources::{Carrier, CarrierStatus};
    ///
    /// let carrier = Carrier {
    ///     id: "car_1".to_string(),
    ///     status: CarrierStatus::Active,
    ///     name: Some("Parcel Co".to_string()),
    ///     code: Some("PCL".to_string()),
    ///     tracking_url_template: Some("https://track.example.com/{tracking_number}".to_string()),
    ///     services: vec![],
    ///     created_at: None,
    /// };
    ///
    /// assert_eq!(
    ///     carrier.tracking_url("AB 12").as_deref(),
    ///     Some("https://track.example.com/AB%2012")
    /// );
    /// ```
    #[must_use]
    pub fn tracking_url(&self, tracking_number: &str) -> Option<String> {
        self.tracking_url_template.as_ref().map(|template| {
            template.replace(
                TRACKING_NUMBER_PLACEHOLDER,
                &urlencoding::encode(tracking_number),
            )
        })
    }
}

/// Filters for listing carriers. Used by both listings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CarrierListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<CarrierStatus>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Body of a carrier create request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCarrier {
    pub name: String,

    pub code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url_template: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
}

/// Body of a carrier update request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCarrier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url_template: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
}

impl Resource for Carrier {
    type Status = CarrierStatus;
    type ListParams = CarrierListParams;
    type CreatePayload = CreateCarrier;
    type UpdatePayload = UpdateCarrier;

    const NAME: &'static str = "Carrier";
    const PATH: &'static str = "carriers";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Self::Status {
        self.status
    }

    fn validate_create(payload: &CreateCarrier) -> Result<(), ResourceError> {
        FieldErrors::new(Self::NAME)
            .require(&payload.name, "name")
            .require(&payload.code, "code")
            .finish()
    }

    fn validate_update(payload: &UpdateCarrier) -> Result<(), ResourceError> {
        let errors = FieldErrors::new(Self::NAME);
        match &payload.name {
            Some(name) => errors.require(name, "name").finish(),
            None => errors.finish(),
        }
    }
}

impl PagedResource for Carrier {
    const PAGED_PATH: &'static str = "carriers/paged";
}

impl ResourceClient<'_, Carrier> {
    /// Lets the carrier take new shipments.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::StateConflict`] if the carrier is already
    /// active.
    pub async fn activate(&self, id: &str) -> Result<Carrier, ResourceError> {
        self.action(id, "activate", None).await
    }

    /// Stops the carrier from taking new shipments.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::StateConflict`] if the carrier is already
    /// inactive.
    pub async fn deactivate(&self, id: &str) -> Result<Carrier, ResourceError> {
        self.action(id, "deactivate", None).await
    }
}

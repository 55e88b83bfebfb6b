//! Per-resource configuration traits.
//!
//! A resource is described as data: its name, collection path, optional
//! command-response envelope key, closed status enum and payload types.
//! [`ResourceClient`](crate::rest::ResourceClient) supplies the behavior
//! once for all of them.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use commerce_api::rest::{Resource, ResourceStatus};
//!
//! impl Resource for Carrier {
//!     type Status = CarrierStatus;
//!     type ListParams = CarrierListParams;
//!     type CreatePayload = CreateCarrier;
//!     type UpdatePayload = UpdateCarrier;
//!
//!     const NAME: &'static str = "Carrier";
//!     const PATH: &'static str = "carriers";
//!
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//!
//!     fn status(&self) -> Self::Status {
//!         self.status
//!     }
//! }
//! ```

use std::fmt::{Debug, Display};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::rest::ResourceError;

/// A closed set of server-side states for one resource type.
///
/// Statuses tag normalized records. They carry no transition rules; the
/// server decides which transitions are legal.
pub trait ResourceStatus:
    Copy + Eq + Debug + Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Every member of the enum.
    const ALL: &'static [Self];

    /// Returns the wire value (e.g. `"IN_TRANSIT"`).
    fn as_str(&self) -> &'static str;

    /// Parses a wire value, returning `None` for values outside the enum.
    #[must_use]
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Configuration data for one API resource.
///
/// Implementors are the typed records returned by the API. Records always
/// carry a non-empty `id` and a known `status`; the normalizer enforces both
/// before deserializing.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + Sized {
    /// The closed status enum.
    type Status: ResourceStatus;

    /// Filter params for `list`, flattened into the query string.
    type ListParams: Serialize + Default + Send + Sync;

    /// Body of `create`.
    type CreatePayload: Serialize + Send + Sync;

    /// Body of `update`.
    type UpdatePayload: Serialize + Send + Sync;

    /// The resource name used in errors and logs (e.g., "Shipment").
    const NAME: &'static str;

    /// The collection path relative to the base URL (e.g., "shipments").
    const PATH: &'static str;

    /// Key wrapping the record in command responses, if the API uses one.
    const ENVELOPE: Option<&'static str> = None;

    /// Returns the record's id.
    fn id(&self) -> &str;

    /// Returns the record's status.
    fn status(&self) -> Self::Status;

    /// Structural checks on a create payload, run before any request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] for malformed payloads.
    fn validate_create(_payload: &Self::CreatePayload) -> Result<(), ResourceError> {
        Ok(())
    }

    /// Structural checks on an update payload, run before any request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] for malformed payloads.
    fn validate_update(_payload: &Self::UpdatePayload) -> Result<(), ResourceError> {
        Ok(())
    }
}

/// A resource that also exposes a page-number listing returning
/// `{data, has_more}`.
pub trait PagedResource: Resource {
    /// Path of the paged listing (e.g., "shipments/paged").
    const PAGED_PATH: &'static str;
}

/// Declares a status enum and its [`ResourceStatus`] implementation.
macro_rules! resource_status {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $crate::rest::ResourceStatus for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::rest::ResourceStatus::as_str(self))
            }
        }
    };
}

pub(crate) use resource_status;

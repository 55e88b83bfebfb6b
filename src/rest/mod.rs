//! The generic resource layer.
//!
//! Every API resource (purchase orders, invoices, payments, ...) shares one
//! implementation of list/get/create/update/delete and state-transition
//! actions. A resource only supplies configuration data through the
//! [`Resource`] trait: its name, collection path, optional envelope key,
//! closed status enum and payload types.
//!
//! - **[`ResourceClient`]**: the generic client, one instance per resource type
//! - **[`normalize`]**: validates and types raw response bodies
//! - **[`ResourceError`]**: error taxonomy and the HTTP error mapper
//! - **[`ListResponse`]** / **[`Page`]**: the two list shapes of the API
//! - **[`AutoPager`]**: page-number auto-pagination with early stop
//!
//! # Example
//!
//! ```rust,ignore
//! use commerce_api::{AccessToken, ClientConfig, CommerceClient};
//! use commerce_api::rest::resources::{CreatePurchaseOrder, LineItem};
//!
//! let config = ClientConfig::builder()
//!     .access_token(AccessToken::new("sk_live_...")?)
//!     .build()?;
//! let client = CommerceClient::new(&config)?;
//!
//! let order = client
//!     .purchase_orders()
//!     .create(&CreatePurchaseOrder {
//!         supplier_id: "sup_42".to_string(),
//!         line_items: vec![LineItem::new("SKU-1", 10, 1_250)],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let order = client.purchase_orders().submit(&order.id).await?;
//! assert!(order.status.is_submitted());
//! ```
//!
//! # Key Types
//!
//! - [`Resource`], [`ResourceStatus`], [`PagedResource`]: per-resource configuration
//! - [`ResourceOperation`]: operation ids used for methods, errors and logs
//! - [`FieldErrors`]: pre-flight validation helper
//! - [`resources`]: the concrete resources

mod client;
mod errors;
mod normalize;
mod pagination;
mod path;
mod query;
mod resource;
mod response;
mod validation;

pub mod resources;

// Public exports
pub use client::ResourceClient;
pub use errors::ResourceError;
pub use normalize::{normalize, normalize_list, normalize_page};
pub use pagination::{AutoPager, PageSource, PagedList};
pub use path::{action_path, member_path, ResourceOperation};
pub use query::encode_query;
pub use resource::{PagedResource, Resource, ResourceStatus};
pub use response::{ListResponse, OffsetPagination, Page};
pub use validation::{require_id, FieldErrors};

pub(crate) use resource::resource_status;

//! Operation identifiers and URL path building for resources.
//!
//! Every resource lives under one collection path (e.g. `purchase-orders`).
//! Members are addressed as `{collection}/{id}` and actions as
//! `{collection}/{id}/{action}`. Ids are opaque strings and are
//! percent-encoded when placed in a path.
//!
//! # Example
//!
//! ```rust
//! use commerce_api::rest::{action_path, member_path};
//!
//! assert_eq!(member_path("invoices", "inv_1"), "invoices/inv_1");
//! assert_eq!(member_path("invoices", "a/b"), "invoices/a%2Fb");
//! assert_eq!(action_path("invoices", "inv_1", "void"), "invoices/inv_1/void");
//! ```

use std::fmt;

use crate::clients::HttpMethod;

/// An operation performed against a resource.
///
/// Used to pick the HTTP method, to tag errors with the operation that
/// failed, and to decide how a 400 is classified: on an action it is an
/// illegal state transition, elsewhere a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List resources with offset/limit pagination (GET /resources).
    List,
    /// List one page of resources with page-number pagination.
    ListPage,
    /// Fetch one resource by id (GET /resources/{id}).
    Get,
    /// Create a resource (POST /resources).
    Create,
    /// Update a resource (PUT /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
    /// Trigger a server-side state transition (POST /resources/{id}/{action}).
    Action(&'static str),
}

impl ResourceOperation {
    /// Returns the HTTP method used for this operation.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::List | Self::ListPage | Self::Get => HttpMethod::Get,
            Self::Create | Self::Action(_) => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::ListPage => "list_page",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Action(name) => *name,
        }
    }

    /// Returns `true` for state-transition actions.
    #[must_use]
    pub const fn is_action(&self) -> bool {
        matches!(self, Self::Action(_))
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the path of a single resource.
#[must_use]
pub fn member_path(collection: &str, id: &str) -> String {
    format!("{collection}/{}", urlencoding::encode(id))
}

/// Builds the path of an action on a single resource.
#[must_use]
pub fn action_path(collection: &str, id: &str, action: &str) -> String {
    format!("{}/{action}", member_path(collection, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_http_methods() {
        assert_eq!(ResourceOperation::List.http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::ListPage.http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::Get.http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::Create.http_method(), HttpMethod::Post);
        assert_eq!(ResourceOperation::Update.http_method(), HttpMethod::Put);
        assert_eq!(ResourceOperation::Delete.http_method(), HttpMethod::Delete);
        assert_eq!(
            ResourceOperation::Action("submit").http_method(),
            HttpMethod::Post
        );
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(ResourceOperation::Get.to_string(), "get");
        assert_eq!(ResourceOperation::Action("mark-delivered").to_string(), "mark-delivered");
    }

    #[test]
    fn test_only_actions_are_actions() {
        assert!(ResourceOperation::Action("cancel").is_action());
        assert!(!ResourceOperation::Create.is_action());
        assert!(!ResourceOperation::Update.is_action());
    }

    #[test]
    fn test_member_path_encodes_id() {
        assert_eq!(member_path("carriers", "car_1"), "carriers/car_1");
        assert_eq!(member_path("carriers", "car 1"), "carriers/car%201");
    }

    #[test]
    fn test_action_path() {
        assert_eq!(
            action_path("shipments", "shp_9", "mark-delivered"),
            "shipments/shp_9/mark-delivered"
        );
    }
}

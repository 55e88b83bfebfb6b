//! Pre-flight request validation.
//!
//! These checks run before any network I/O and only catch structurally
//! broken requests (blank ids, empty line items, non-positive quantities).
//! Business rules stay with the server.

use std::collections::HashMap;

use crate::rest::ResourceError;

/// Collects field errors for one request and turns them into a
/// [`ResourceError::Validation`].
///
/// # Example
///
/// ```rust
/// use commerce_api::rest::FieldErrors;
///
/// let quantity = 0;
/// let result = FieldErrors::new("PurchaseOrder")
///     .check(quantity > 0, "line_items[0].quantity", "must be greater than 0")
///     .finish();
/// assert!(result.is_err());
/// ```
#[derive(Debug)]
#[must_use]
pub struct FieldErrors {
    resource: &'static str,
    errors: HashMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Starts collecting errors for the given resource.
    pub fn new(resource: &'static str) -> Self {
        Self {
            resource,
            errors: HashMap::new(),
        }
    }

    /// Records `message` against `field` unless `condition` holds.
    pub fn check(mut self, condition: bool, field: impl Into<String>, message: &str) -> Self {
        if !condition {
            self.errors
                .entry(field.into())
                .or_default()
                .push(message.to_string());
        }
        self
    }

    /// Records an error if `value` is empty or whitespace.
    pub fn require(self, value: &str, field: impl Into<String>) -> Self {
        self.check(!value.trim().is_empty(), field, "can't be blank")
    }

    /// Returns `true` if no error has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Finishes validation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] carrying every recorded field
    /// error, if there is at least one.
    pub fn finish(self) -> Result<(), ResourceError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(
                resource = self.resource,
                fields = self.errors.len(),
                "Request rejected by pre-flight validation"
            );
            Err(ResourceError::invalid(self.resource, self.errors))
        }
    }
}

/// Rejects blank resource ids before they are placed in a path.
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] with an `id` field error.
pub fn require_id(resource: &'static str, id: &str) -> Result<(), ResourceError> {
    FieldErrors::new(resource).require(id, "id").finish()
}

//! Response normalization.
//!
//! Turns raw 2xx bodies into typed records:
//!
//! 1. a non-null `error` field rejects the whole body
//! 2. the resource's envelope key, when present, is unwrapped
//! 3. the record must be an object with a non-empty `id` and a `status`
//! 4. the status must belong to the resource's enum
//! 5. the object is deserialized into the record type
//!
//! Missing fields are never defaulted; every failure is an error.

use serde_json::{Map, Value};

use crate::rest::{
    ListResponse, OffsetPagination, Page, Resource, ResourceError, ResourceOperation,
    ResourceStatus,
};

/// Normalizes a single-record body.
///
/// # Errors
///
/// - [`ResourceError::Rejected`] if the body carries an `error` field
/// - [`ResourceError::MalformedResponse`] if `id` or `status` is missing or
///   the record does not deserialize
/// - [`ResourceError::UnknownStatus`] if the status is outside the enum
pub fn normalize<R: Resource>(body: Value, operation: ResourceOperation) -> Result<R, ResourceError> {
    check_rejected::<R>(&body, operation)?;

    let body = match (R::ENVELOPE, body) {
        (Some(key), Value::Object(mut map)) if map.contains_key(key) => {
            map.remove(key).unwrap_or(Value::Null)
        }
        (_, body) => body,
    };

    normalize_record(body, operation)
}

/// Normalizes an offset/limit list body: `{items, pagination}`.
///
/// # Errors
///
/// Returns [`ResourceError::MalformedResponse`] if `items` or `pagination`
/// is missing, and any error of [`normalize`] for individual items.
pub fn normalize_list<R: Resource>(body: Value) -> Result<ListResponse<R>, ResourceError> {
    let operation = ResourceOperation::List;
    check_rejected::<R>(&body, operation)?;

    let mut map = into_object::<R>(body, operation)?;

    let pagination: OffsetPagination = match map.remove("pagination") {
        Some(value) => serde_json::from_value(value)
            .map_err(|e| malformed::<R>(operation, format!("invalid pagination: {e}")))?,
        None => return Err(malformed::<R>(operation, "missing pagination")),
    };

    let items = take_array::<R>(&mut map, "items", operation)?
        .into_iter()
        .map(|item| normalize_record(item, operation))
        .collect::<Result<Vec<R>, _>>()?;

    Ok(ListResponse::new(items, pagination))
}

/// Normalizes a page-number list body: `{data, has_more}`.
///
/// # Errors
///
/// Returns [`ResourceError::MalformedResponse`] if `data` or `has_more` is
/// missing, and any error of [`normalize`] for individual items.
pub fn normalize_page<R: Resource>(body: Value) -> Result<Page<R>, ResourceError> {
    let operation = ResourceOperation::ListPage;
    check_rejected::<R>(&body, operation)?;

    let mut map = into_object::<R>(body, operation)?;

    let has_more = map
        .get("has_more")
        .and_then(Value::as_bool)
        .ok_or_else(|| malformed::<R>(operation, "missing has_more"))?;

    let data = take_array::<R>(&mut map, "data", operation)?
        .into_iter()
        .map(|item| normalize_record(item, operation))
        .collect::<Result<Vec<R>, _>>()?;

    Ok(Page::new(data, has_more))
}

/// Fails if a successful body carries a non-null `error` field.
pub(crate) fn check_rejected<R: Resource>(
    body: &Value,
    operation: ResourceOperation,
) -> Result<(), ResourceError> {
    match body.get("error") {
        None | Some(Value::Null) => Ok(()),
        Some(error) => {
            let message = error
                .as_str()
                .map_or_else(|| error.to_string(), ToString::to_string);
            tracing::debug!(
                resource = R::NAME,
                operation = %operation,
                message = %message,
                "Response body carried an error"
            );
            Err(ResourceError::Rejected {
                resource: R::NAME,
                operation,
                message,
            })
        }
    }
}

fn normalize_record<R: Resource>(
    record: Value,
    operation: ResourceOperation,
) -> Result<R, ResourceError> {
    let mut map = into_object::<R>(record, operation)?;

    let numeric_id = match map.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => None,
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => return Err(malformed::<R>(operation, "missing id")),
    };
    if let Some(id) = numeric_id {
        map.insert("id".to_string(), Value::String(id));
    }

    let status = match map.get("status") {
        Some(Value::String(status)) => status.clone(),
        Some(_) => return Err(malformed::<R>(operation, "status is not a string")),
        None => return Err(malformed::<R>(operation, "missing status")),
    };
    if R::Status::parse(&status).is_none() {
        tracing::debug!(resource = R::NAME, status = %status, "Unknown status in response");
        return Err(ResourceError::UnknownStatus {
            resource: R::NAME,
            status,
        });
    }

    serde_json::from_value(Value::Object(map)).map_err(|e| malformed::<R>(operation, e.to_string()))
}

fn into_object<R: Resource>(
    value: Value,
    operation: ResourceOperation,
) -> Result<Map<String, Value>, ResourceError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(malformed::<R>(
            operation,
            format!("expected an object, got {}", json_kind(&other)),
        )),
    }
}

fn take_array<R: Resource>(
    map: &mut Map<String, Value>,
    key: &str,
    operation: ResourceOperation,
) -> Result<Vec<Value>, ResourceError> {
    match map.remove(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(malformed::<R>(operation, format!("{key} is not an array"))),
        None => Err(malformed::<R>(operation, format!("missing {key}"))),
    }
}

fn malformed<R: Resource>(operation: ResourceOperation, reason: impl Into<String>) -> ResourceError {
    let reason = reason.into();
    tracing::debug!(
        resource = R::NAME,
        operation = %operation,
        reason = %reason,
        "Malformed response"
    );
    ResourceError::MalformedResponse {
        resource: R::NAME,
        operation,
        reason,
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resource_status;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    resource_status! {
        WidgetStatus {
            Active => "ACTIVE",
            Retired => "RETIRED",
        }
    }

    #[derive(Debug, Clone, Deserialize)]
    struct Widget {
        id: String,
        status: WidgetStatus,
        #[serde(default)]
        name: Option<String>,
    }

    #[derive(Serialize, Default)]
    struct NoParams {}

    impl Resource for Widget {
        type Status = WidgetStatus;
        type ListParams = NoParams;
        type CreatePayload = NoParams;
        type UpdatePayload = NoParams;

        const NAME: &'static str = "Widget";
        const PATH: &'static str = "widgets";
        const ENVELOPE: Option<&'static str> = Some("update_widgets_by_pk");

        fn id(&self) -> &str {
            &self.id
        }

        fn status(&self) -> Self::Status {
            self.status
        }
    }

    #[test]
    fn test_normalizes_plain_record() {
        let widget: Widget = normalize(
            json!({"id": "w_1", "status": "ACTIVE", "name": "Bolt"}),
            ResourceOperation::Get,
        )
        .unwrap();

        assert_eq!(widget.id(), "w_1");
        assert_eq!(widget.status(), WidgetStatus::Active);
        assert_eq!(widget.name.as_deref(), Some("Bolt"));
    }

    #[test]
    fn test_unwraps_envelope() {
        let widget: Widget = normalize(
            json!({"update_widgets_by_pk": {"id": "w_2", "status": "RETIRED"}}),
            ResourceOperation::Action("retire"),
        )
        .unwrap();

        assert_eq!(widget.id, "w_2");
        assert_eq!(widget.status, WidgetStatus::Retired);
    }

    #[test]
    fn test_null_envelope_is_malformed() {
        let result: Result<Widget, _> = normalize(
            json!({"update_widgets_by_pk": null}),
            ResourceOperation::Update,
        );
        assert!(matches!(
            result,
            Err(ResourceError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_error_field_rejects() {
        let result: Result<Widget, _> = normalize(
            json!({"error": "widget is locked"}),
            ResourceOperation::Update,
        );
        assert!(matches!(
            result,
            Err(ResourceError::Rejected { message, operation: ResourceOperation::Update, .. })
                if message == "widget is locked"
        ));
    }

    #[test]
    fn test_null_error_field_is_ignored() {
        let widget: Widget = normalize(
            json!({"id": "w_3", "status": "ACTIVE", "error": null}),
            ResourceOperation::Get,
        )
        .unwrap();
        assert_eq!(widget.id, "w_3");
    }

    #[test]
    fn test_missing_status_is_malformed() {
        let result: Result<Widget, _> = normalize(json!({"id": "w_1"}), ResourceOperation::Get);

        let Err(ResourceError::MalformedResponse { reason, .. }) = result else {
            panic!("Expected MalformedResponse");
        };
        assert_eq!(reason, "missing status");
    }

    #[test]
    fn test_missing_or_blank_id_is_malformed() {
        for body in [
            json!({"status": "ACTIVE"}),
            json!({"id": "", "status": "ACTIVE"}),
            json!({"id": null, "status": "ACTIVE"}),
        ] {
            let result: Result<Widget, _> = normalize(body, ResourceOperation::Get);
            assert!(matches!(
                result,
                Err(ResourceError::MalformedResponse { reason, .. }) if reason == "missing id"
            ));
        }
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        let widget: Widget =
            normalize(json!({"id": 42, "status": "ACTIVE"}), ResourceOperation::Get).unwrap();
        assert_eq!(widget.id, "42");
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let result: Result<Widget, _> = normalize(
            json!({"id": "w_1", "status": "MELTED"}),
            ResourceOperation::Get,
        );
        assert!(matches!(
            result,
            Err(ResourceError::UnknownStatus { status, .. }) if status == "MELTED"
        ));
    }

    #[test]
    fn test_non_object_body_is_malformed() {
        let result: Result<Widget, _> = normalize(json!([1, 2]), ResourceOperation::Get);
        assert!(matches!(
            result,
            Err(ResourceError::MalformedResponse { reason, .. }) if reason.contains("an array")
        ));
    }

    #[test]
    fn test_normalize_list_checks_every_item() {
        let list: ListResponse<Widget> = normalize_list(json!({
            "items": [
                {"id": "w_1", "status": "ACTIVE"},
                {"id": "w_2", "status": "RETIRED"}
            ],
            "pagination": {"total": 2, "limit": 20, "offset": 0}
        }))
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.pagination().total, 2);

        let result: Result<ListResponse<Widget>, _> = normalize_list(json!({
            "items": [
                {"id": "w_1", "status": "ACTIVE"},
                {"id": "w_2"}
            ],
            "pagination": {"total": 2, "limit": 20, "offset": 0}
        }));
        assert!(matches!(
            result,
            Err(ResourceError::MalformedResponse { operation: ResourceOperation::List, .. })
        ));
    }

    #[test]
    fn test_normalize_list_requires_pagination() {
        let result: Result<ListResponse<Widget>, _> = normalize_list(json!({"items": []}));
        assert!(matches!(
            result,
            Err(ResourceError::MalformedResponse { reason, .. }) if reason == "missing pagination"
        ));
    }

    #[test]
    fn test_normalize_page() {
        let page: Page<Widget> = normalize_page(json!({
            "data": [{"id": "w_1", "status": "ACTIVE"}],
            "has_more": true
        }))
        .unwrap();
        assert_eq!(page.data.len(), 1);
        assert!(page.has_more);

        let result: Result<Page<Widget>, _> = normalize_page(json!({"data": []}));
        assert!(matches!(
            result,
            Err(ResourceError::MalformedResponse { reason, .. }) if reason == "missing has_more"
        ));
    }
}

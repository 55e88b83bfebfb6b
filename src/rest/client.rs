//! The generic resource client.
//!
//! [`ResourceClient`] implements list/get/create/update/delete and action
//! calls once for every [`Resource`]. Each call follows the same path:
//! pre-flight validation, request, error mapping for non-2xx responses,
//! then normalization of the body.

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use crate::clients::{
    DataType, HttpClient, HttpError, HttpRequest, HttpResponse, HttpResponseError,
};
use crate::rest::normalize::{check_rejected, normalize, normalize_list, normalize_page};
use crate::rest::{
    action_path, encode_query, member_path, require_id, AutoPager, ListResponse, Page,
    PagedList, PagedResource, Resource, ResourceError, ResourceOperation,
};

/// Client for one resource type, borrowing the shared transport.
///
/// Resource clients are cheap to create and hold no state besides the
/// transport reference, so any number of them can be used concurrently.
///
/// # Example
///
/// ```rust,ignore
/// use commerce_api::rest::resources::{CreateInvoice, InvoiceListParams, InvoiceStatus};
///
/// let invoices = client.invoices();
///
/// let overdue = invoices
///     .list(&InvoiceListParams {
///         status: Some(vec![InvoiceStatus::Overdue]),
///         ..Default::default()
///     })
///     .await?;
///
/// let invoice = invoices.get("inv_123").await?;
/// let paid = invoices.mark_paid(&invoice.id).await?;
/// assert!(paid.status.is_paid());
/// ```
pub struct ResourceClient<'a, R> {
    http: &'a HttpClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ResourceClient<'_, R> {}

impl<R: Resource> fmt::Debug for ResourceClient<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("resource", &R::NAME)
            .field("base_url", self.http.base_url())
            .finish()
    }
}

impl<'a, R: Resource> ResourceClient<'a, R> {
    /// Creates a resource client on top of the given transport.
    #[must_use]
    pub const fn new(http: &'a HttpClient) -> Self {
        Self {
            http,
            _resource: PhantomData,
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http(&self) -> &'a HttpClient {
        self.http
    }

    /// Lists records with offset/limit pagination.
    ///
    /// Unset filter params are left out of the query string; list filters
    /// are sent as repeated `key[]` pairs.
    ///
    /// # Errors
    ///
    /// Returns a mapped [`ResourceError`] for failed requests, and
    /// [`ResourceError::MalformedResponse`] or
    /// [`ResourceError::UnknownStatus`] if any item fails normalization.
    pub async fn list(&self, params: &R::ListParams) -> Result<ListResponse<R>, ResourceError> {
        let query = encode_query(R::NAME, params)?;
        let operation = ResourceOperation::List;
        let result = self.send(operation, R::PATH, query, None).await;
        let body = Self::success_body(operation, None, result)?;
        normalize_list(body)
    }

    /// Fetches one record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] carrying `id` on a 404, and
    /// [`ResourceError::Validation`] without a request if `id` is blank.
    pub async fn get(&self, id: &str) -> Result<R, ResourceError> {
        require_id(R::NAME, id)?;

        let operation = ResourceOperation::Get;
        let result = self
            .send(operation, &member_path(R::PATH, id), Vec::new(), None)
            .await;
        let body = Self::success_body(operation, Some(id), result)?;
        normalize(body, operation)
    }

    /// Creates a record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if pre-flight checks fail (no
    /// request is sent) or the server answers 400.
    pub async fn create(&self, payload: &R::CreatePayload) -> Result<R, ResourceError> {
        R::validate_create(payload)?;

        let operation = ResourceOperation::Create;
        let body = Self::to_body(payload)?;
        let result = self.send(operation, R::PATH, Vec::new(), Some(body)).await;
        let body = Self::success_body(operation, None, result)?;
        normalize(body, operation)
    }

    /// Updates a record.
    ///
    /// # Errors
    ///
    /// Same mapping as [`create`](Self::create), plus
    /// [`ResourceError::NotFound`] on a 404.
    pub async fn update(&self, id: &str, payload: &R::UpdatePayload) -> Result<R, ResourceError> {
        require_id(R::NAME, id)?;
        R::validate_update(payload)?;

        let operation = ResourceOperation::Update;
        let body = Self::to_body(payload)?;
        let result = self
            .send(operation, &member_path(R::PATH, id), Vec::new(), Some(body))
            .await;
        let body = Self::success_body(operation, Some(id), result)?;
        normalize(body, operation)
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on a 404 and
    /// [`ResourceError::Rejected`] if the body carries an `error`.
    pub async fn delete(&self, id: &str) -> Result<(), ResourceError> {
        require_id(R::NAME, id)?;

        let operation = ResourceOperation::Delete;
        let result = self
            .send(operation, &member_path(R::PATH, id), Vec::new(), None)
            .await;
        let body = Self::success_body(operation, Some(id), result)?;
        check_rejected::<R>(&body, operation)
    }

    /// Triggers a server-side state transition.
    ///
    /// Sends `POST {path}/{id}/{action}` and normalizes the returned record.
    /// No transition rules are checked locally; an illegal transition comes
    /// back as a 400 and is mapped to [`ResourceError::StateConflict`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::StateConflict`] on a 400,
    /// [`ResourceError::NotFound`] on a 404, and any normalization error.
    pub async fn action(
        &self,
        id: &str,
        action: &'static str,
        body: Option<Value>,
    ) -> Result<R, ResourceError> {
        require_id(R::NAME, id)?;

        let operation = ResourceOperation::Action(action);
        let body = body.unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        let result = self
            .send(operation, &action_path(R::PATH, id, action), Vec::new(), Some(body))
            .await;
        let body = Self::success_body(operation, Some(id), result)?;
        normalize(body, operation)
    }

    /// Sends the request for `operation` with the operation's HTTP method.
    async fn send(
        &self,
        operation: ResourceOperation,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(operation.http_method(), path).query(query);
        if let Some(body) = body {
            builder = builder.body(body).body_type(DataType::Json);
        }
        self.http.request(builder.build()?).await
    }

    /// Serializes a payload into a JSON body.
    pub(crate) fn to_body<T: serde::Serialize>(payload: &T) -> Result<Value, ResourceError> {
        serde_json::to_value(payload).map_err(|source| ResourceError::Serialization {
            resource: R::NAME,
            source,
        })
    }

    /// Returns the body of a 2xx response, mapping everything else.
    fn success_body(
        operation: ResourceOperation,
        id: Option<&str>,
        result: Result<HttpResponse, HttpError>,
    ) -> Result<Value, ResourceError> {
        let response =
            result.map_err(|e| ResourceError::from_http_error(e, R::NAME, operation, id))?;

        if !response.is_ok() {
            tracing::debug!(
                resource = R::NAME,
                operation = %operation,
                status = response.code,
                "Request failed"
            );
            let error = HttpError::Response(HttpResponseError::from_response(response));
            return Err(ResourceError::from_http_error(error, R::NAME, operation, id));
        }

        Ok(response.body)
    }
}

impl<'a, R: PagedResource> ResourceClient<'a, R> {
    /// Fetches one page of the page-number listing.
    ///
    /// Sends the filter params plus `page=<page>`.
    ///
    /// # Errors
    ///
    /// Returns a mapped [`ResourceError`] for failed requests, and
    /// [`ResourceError::MalformedResponse`] if `data` or `has_more` is
    /// missing.
    pub async fn list_page(
        &self,
        params: &R::ListParams,
        page: u32,
    ) -> Result<Page<R>, ResourceError> {
        let mut query = encode_query(R::NAME, params)?;
        query.retain(|(key, _)| key != "page");
        query.push(("page".to_string(), page.to_string()));

        let operation = ResourceOperation::ListPage;
        let result = self.send(operation, R::PAGED_PATH, query, None).await;
        let body = Self::success_body(operation, None, result)?;
        normalize_page(body)
    }

    /// Returns an auto-pager over the page-number listing.
    ///
    /// Nothing is requested until the pager is driven.
    #[must_use]
    pub const fn auto_paging(&self, params: R::ListParams) -> AutoPager<PagedList<'a, R>> {
        AutoPager::new(PagedList::new(*self, params))
    }
}

// Verify ResourceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient<'static, crate::rest::resources::Invoice>>();
};

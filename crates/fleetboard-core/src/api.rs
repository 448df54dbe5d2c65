//! Request descriptors for the remote device API
//!
//! Builders validate their path parameters and return a [`RequestAction`]
//! describing the HTTP call. Executing it, retrying, and turning the response
//! into `*_SUCCESS` / `*_FAIL` actions is left to whoever dispatches it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Default page size of a timeline fetch
pub const TIMELINE_DEFAULT_LIMIT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// Every request the dashboard knows how to issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiAction {
    DevicesFetch,
    DeviceFetch,
    DeviceUpdate,
    DeviceCreate,
    DeviceDelete,
    TimelineFetch,
    TimelineResolve,
    DeviceDetailsFetch,
    DeviceDetailsUpdate,
    DeviceDashboardFetch,
    DeviceAvailableOrganizationsFetch,
    DeviceMetadataUpdate,
}

impl ApiAction {
    pub fn type_name(&self) -> &'static str {
        match self {
            ApiAction::DevicesFetch => "API_DEVICES_FETCH",
            ApiAction::DeviceFetch => "API_DEVICE_FETCH",
            ApiAction::DeviceUpdate => "API_DEVICE_UPDATE",
            ApiAction::DeviceCreate => "API_DEVICE_CREATE",
            ApiAction::DeviceDelete => "API_DEVICE_DELETE",
            ApiAction::TimelineFetch => "API_TIMELINE_FETCH",
            ApiAction::TimelineResolve => "API_TIMELINE_RESOLVE",
            ApiAction::DeviceDetailsFetch => "API_DEVICE_DETAILS_FETCH",
            ApiAction::DeviceDetailsUpdate => "API_DEVICE_DETAILS_UPDATE",
            ApiAction::DeviceDashboardFetch => "API_DEVICE_DASHBOARD_FETCH",
            ApiAction::DeviceAvailableOrganizationsFetch => {
                "API_DEVICE_AVAILABLE_ORGANIZATIONS_FETCH"
            }
            ApiAction::DeviceMetadataUpdate => "API_DEVICE_METADATA_UPDATE",
        }
    }

    pub fn success_type(&self) -> String {
        format!("{}_SUCCESS", self.type_name())
    }

    pub fn failure_type(&self) -> String {
        format!("{}_FAIL", self.type_name())
    }
}

impl fmt::Display for ApiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Declarative HTTP request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<BTreeMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl RequestDescriptor {
    fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            params: None,
            body: None,
        }
    }

    fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A request tagged with the action it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestAction {
    pub kind: ApiAction,
    pub request: RequestDescriptor,
}

impl RequestAction {
    fn new(kind: ApiAction, request: RequestDescriptor) -> Self {
        tracing::debug!("Built {} -> {} {}", kind, request.method, request.url);
        Self { kind, request }
    }
}

/// Path parameters shared by the device builders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceParams {
    pub org_id: Option<u64>,
    pub device_id: Option<u64>,
}

impl DeviceParams {
    pub fn org(org_id: u64) -> Self {
        Self {
            org_id: Some(org_id),
            device_id: None,
        }
    }

    pub fn device(org_id: u64, device_id: u64) -> Self {
        Self {
            org_id: Some(org_id),
            device_id: Some(device_id),
        }
    }

    fn org_id(&self) -> Result<u64, ApiError> {
        self.org_id.ok_or(ApiError::MissingParameter("orgId"))
    }

    fn device_id(&self) -> Result<u64, ApiError> {
        self.device_id.ok_or(ApiError::MissingParameter("deviceId"))
    }
}

/// Timeline query. Unset window and paging values fall back to the defaults:
/// the whole history up to now, 50 events from offset 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineQuery {
    pub org_id: Option<u64>,
    pub device_id: Option<u64>,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Parameters for resolving a timeline event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveParams {
    pub org_id: Option<u64>,
    pub device_id: Option<u64>,
    pub event_id: Option<u64>,
    pub comment: Option<String>,
}

pub fn devices_fetch(params: &DeviceParams) -> Result<RequestAction, ApiError> {
    let org_id = params.org_id()?;
    Ok(RequestAction::new(
        ApiAction::DevicesFetch,
        RequestDescriptor::new(Method::Get, format!("/devices/{}", org_id)),
    ))
}

pub fn device_fetch(params: &DeviceParams) -> Result<RequestAction, ApiError> {
    let org_id = params.org_id()?;
    let device_id = params.device_id()?;
    Ok(RequestAction::new(
        ApiAction::DeviceFetch,
        RequestDescriptor::new(Method::Get, format!("/devices/{}/{}", org_id, device_id)),
    ))
}

/// Update a device; the device itself travels in the body
pub fn device_update(params: &DeviceParams, device: Value) -> Result<RequestAction, ApiError> {
    let org_id = params.org_id()?;
    Ok(RequestAction::new(
        ApiAction::DeviceUpdate,
        RequestDescriptor::new(Method::Post, format!("/devices/{}", org_id)).with_body(device),
    ))
}

pub fn device_create(params: &DeviceParams, device: Value) -> Result<RequestAction, ApiError> {
    let org_id = params.org_id()?;
    Ok(RequestAction::new(
        ApiAction::DeviceCreate,
        RequestDescriptor::new(Method::Put, format!("/devices/{}", org_id)).with_body(device),
    ))
}

pub fn device_delete(params: &DeviceParams) -> Result<RequestAction, ApiError> {
    let org_id = params.org_id()?;
    let device_id = params.device_id()?;
    Ok(RequestAction::new(
        ApiAction::DeviceDelete,
        RequestDescriptor::new(Method::Delete, format!("/devices/{}/{}", org_id, device_id)),
    ))
}

/// Fetch a page of a device's timeline. `now_ms` is the default upper bound.
pub fn timeline_fetch(query: &TimelineQuery, now_ms: i64) -> Result<RequestAction, ApiError> {
    let org_id = query.org_id.ok_or(ApiError::MissingParameter("orgId"))?;
    let device_id = query
        .device_id
        .ok_or(ApiError::MissingParameter("deviceId"))?;

    let mut params = BTreeMap::new();
    params.insert("orgId".to_string(), Value::from(org_id));
    params.insert("deviceId".to_string(), Value::from(device_id));
    params.insert("from".to_string(), Value::from(query.from.unwrap_or(0)));
    params.insert("to".to_string(), Value::from(query.to.unwrap_or(now_ms)));
    params.insert(
        "limit".to_string(),
        Value::from(query.limit.unwrap_or(TIMELINE_DEFAULT_LIMIT)),
    );
    params.insert("offset".to_string(), Value::from(query.offset.unwrap_or(0)));

    let mut request = RequestDescriptor::new(
        Method::Get,
        format!("/devices/{}/{}/timeline", org_id, device_id),
    );
    request.params = Some(params);
    Ok(RequestAction::new(ApiAction::TimelineFetch, request))
}

pub fn timeline_resolve(params: &ResolveParams) -> Result<RequestAction, ApiError> {
    let org_id = params.org_id.ok_or(ApiError::MissingParameter("orgId"))?;
    let device_id = params
        .device_id
        .ok_or(ApiError::MissingParameter("deviceId"))?;
    let event_id = params
        .event_id
        .ok_or(ApiError::MissingParameter("eventId"))?;

    Ok(RequestAction::new(
        ApiAction::TimelineResolve,
        RequestDescriptor::new(
            Method::Post,
            format!(
                "/devices/{}/{}/resolveEvent/{}",
                org_id, device_id, event_id
            ),
        )
        .with_body(serde_json::json!({ "comment": params.comment })),
    ))
}

pub fn device_details_fetch(params: &DeviceParams) -> Result<RequestAction, ApiError> {
    let org_id = params.org_id()?;
    let device_id = params.device_id()?;
    Ok(RequestAction::new(
        ApiAction::DeviceDetailsFetch,
        RequestDescriptor::new(Method::Get, format!("/devices/{}/{}", org_id, device_id)),
    ))
}

pub fn device_details_update(
    params: &DeviceParams,
    device: Value,
) -> Result<RequestAction, ApiError> {
    let org_id = params.org_id()?;
    let device_id = params.device_id()?;
    Ok(RequestAction::new(
        ApiAction::DeviceDetailsUpdate,
        RequestDescriptor::new(Method::Post, format!("/devices/{}/{}", org_id, device_id))
            .with_body(device),
    ))
}

pub fn device_dashboard_fetch(params: &DeviceParams) -> Result<RequestAction, ApiError> {
    let org_id = params.org_id()?;
    Ok(RequestAction::new(
        ApiAction::DeviceDashboardFetch,
        RequestDescriptor::new(Method::Get, format!("/devices/{}", org_id)),
    ))
}

/// Organizations the current user may move devices to. Takes no parameters.
pub fn available_organizations_fetch() -> RequestAction {
    RequestAction::new(
        ApiAction::DeviceAvailableOrganizationsFetch,
        RequestDescriptor::new(Method::Get, "/organization".to_string()),
    )
}

pub fn device_metadata_update(
    params: &DeviceParams,
    metadata: Value,
) -> Result<RequestAction, ApiError> {
    let org_id = params.org_id()?;
    let device_id = params.device_id()?;
    Ok(RequestAction::new(
        ApiAction::DeviceMetadataUpdate,
        RequestDescriptor::new(
            Method::Post,
            format!("/devices/{}/{}/updateMetaField", org_id, device_id),
        )
        .with_body(metadata),
    ))
}

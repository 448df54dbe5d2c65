//! Client-side store and the reducers that fill it
//!
//! Actions are applied one at a time. Reducers only react to the success paths
//! they know about; anything else leaves their slice untouched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{ApiAction, RequestAction};
use crate::device::Device;
use crate::event::EventType;
use crate::metadata::{fetch_template, update_template, MetaField};

/// Something that happened, as seen by the reducers
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A request was dispatched
    Request(RequestAction),
    /// The request completed; `data` is the decoded response body
    Success { origin: RequestAction, data: Value },
    /// The request failed
    Failure { origin: RequestAction, error: String },
    /// Samples for a widget are being fetched
    WidgetDataLoading { widget_id: u64 },
    /// Samples for a widget arrived, keyed by pin key
    WidgetDataLoaded {
        widget_id: u64,
        pins: HashMap<String, PinData>,
    },
}

impl Action {
    /// Redux style type string, e.g. `API_DEVICES_FETCH_SUCCESS`
    pub fn type_name(&self) -> String {
        match self {
            Action::Request(request) => request.kind.type_name().to_string(),
            Action::Success { origin, .. } => origin.kind.success_type(),
            Action::Failure { origin, .. } => origin.kind.failure_type(),
            Action::WidgetDataLoading { .. } => "WIDGET_DATA_LOADING".to_string(),
            Action::WidgetDataLoaded { .. } => "WIDGET_DATA_LOADED".to_string(),
        }
    }

    fn success_of(&self, kind: ApiAction) -> Option<(&RequestAction, &Value)> {
        match self {
            Action::Success { origin, data } if origin.kind == kind => Some((origin, data)),
            _ => None,
        }
    }
}

/// A slice of the store that folds actions into itself
pub trait Reducer {
    fn reduce(&mut self, action: &Action);
}

/// Trailing numeric path segment of a request, e.g. the event id of a resolve
fn trailing_id(origin: &RequestAction) -> Option<u64> {
    origin.request.url.rsplit('/').next()?.parse().ok()
}

fn devices_from(data: &Value, template: fn() -> Vec<MetaField>) -> Vec<Device> {
    let records = match data {
        Value::Array(records) => records,
        other => {
            tracing::warn!("Expected a device list, got {}", other);
            return Vec::new();
        }
    };
    records
        .iter()
        .map(|record| Device::from_record(record.clone(), template()))
        .collect()
}

/// Cached device list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DevicesState {
    pub devices: Vec<Device>,
}

impl Reducer for DevicesState {
    fn reduce(&mut self, action: &Action) {
        if let Some((_, data)) = action.success_of(ApiAction::DevicesFetch) {
            self.devices = devices_from(data, fetch_template);
        } else if let Some((_, data)) = action.success_of(ApiAction::DeviceUpdate) {
            self.devices = devices_from(data, update_template);
        } else if let Some((origin, _)) = action.success_of(ApiAction::DeviceDelete) {
            if let Some(id) = trailing_id(origin) {
                self.devices.retain(|d| d.id != Some(id));
            }
        }
    }
}

/// The device open in the details view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceDetailsState {
    pub device: Option<Device>,
}

impl Reducer for DeviceDetailsState {
    fn reduce(&mut self, action: &Action) {
        if let Some((_, data)) = action.success_of(ApiAction::DeviceDetailsFetch) {
            if data.is_object() {
                self.device = Some(Device::from(data.clone()));
            } else {
                tracing::warn!("Ignoring malformed device details: {}", data);
            }
        } else if let Some((origin, _)) = action.success_of(ApiAction::DeviceDelete) {
            let deleted = trailing_id(origin);
            if deleted.is_some() && self.device.as_ref().and_then(|d| d.id) == deleted {
                self.device = None;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: u64,
    pub event_type: EventType,
    #[serde(default)]
    pub ts: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_resolved: bool,
    #[serde(default)]
    pub resolved_comment: Option<String>,
}

/// One page of a device timeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineState {
    pub total_critical: u32,
    pub total_warning: u32,
    pub total_resolved: u32,
    pub event_list: Vec<TimelineEvent>,
}

impl Reducer for TimelineState {
    fn reduce(&mut self, action: &Action) {
        if let Some((_, data)) = action.success_of(ApiAction::TimelineFetch) {
            match serde_json::from_value::<TimelineState>(data.clone()) {
                Ok(page) => *self = page,
                Err(e) => tracing::warn!("Ignoring malformed timeline: {}", e),
            }
        } else if let Some((origin, _)) = action.success_of(ApiAction::TimelineResolve) {
            let comment = origin
                .request
                .body
                .as_ref()
                .and_then(|b| b.get("comment"))
                .and_then(Value::as_str)
                .map(str::to_string);
            let Some(event_id) = trailing_id(origin) else {
                return;
            };
            if let Some(event) = self
                .event_list
                .iter_mut()
                .find(|e| e.id == event_id && !e.is_resolved)
            {
                event.is_resolved = true;
                event.resolved_comment = comment;
                self.total_resolved += 1;
            }
        }
    }
}

/// A single telemetry sample: epoch ms and value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: i64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PinData {
    pub data: Vec<Sample>,
}

/// Telemetry held for one widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetData {
    pub loading: bool,
    pub pins: HashMap<String, PinData>,
}

/// Telemetry for every widget on screen, keyed by widget id
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WidgetsState {
    widgets: HashMap<u64, WidgetData>,
}

impl WidgetsState {
    pub fn get(&self, widget_id: u64) -> Option<&WidgetData> {
        self.widgets.get(&widget_id)
    }

    pub fn insert(&mut self, widget_id: u64, data: WidgetData) {
        self.widgets.insert(widget_id, data);
    }

    pub fn set_loading(&mut self, widget_id: u64, loading: bool) {
        self.widgets.entry(widget_id).or_default().loading = loading;
    }
}

impl Reducer for WidgetsState {
    fn reduce(&mut self, action: &Action) {
        match action {
            Action::WidgetDataLoading { widget_id } => self.set_loading(*widget_id, true),
            Action::WidgetDataLoaded { widget_id, pins } => self.insert(
                *widget_id,
                WidgetData {
                    loading: false,
                    pins: pins.clone(),
                },
            ),
            _ => {}
        }
    }
}

/// Most recent failure, kept for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LastError {
    pub action: String,
    pub error: String,
}

/// The whole client-side store
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Store {
    pub devices: DevicesState,
    pub details: DeviceDetailsState,
    pub timeline: TimelineState,
    pub widgets: WidgetsState,
    pub last_error: Option<LastError>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action to every slice
    pub fn dispatch(&mut self, action: &Action) {
        tracing::debug!("Dispatching {}", action.type_name());
        if let Action::Failure { error, .. } = action {
            tracing::warn!("{} failed: {}", action.type_name(), error);
            self.last_error = Some(LastError {
                action: action.type_name(),
                error: error.clone(),
            });
        }
        self.devices.reduce(action);
        self.details.reduce(action);
        self.timeline.reduce(action);
        self.widgets.reduce(action);
    }
}

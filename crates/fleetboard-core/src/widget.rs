//! Dashboard widgets and their data sources

use serde::{Deserialize, Serialize};

use crate::placement::{Rect, Size};

/// Prefix of virtual pin keys in the widget data store
pub const VIRTUAL_PIN_PREFIX: &str = "V";

/// Pin number meaning "no pin bound"
pub const UNBOUND_PIN: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WidgetType {
    LinearChart,
    Label,
    Switch,
}

/// Reference to a device data stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataStreamRef {
    #[serde(default)]
    pub name: String,
    pub pin: i32,
}

impl DataStreamRef {
    pub fn is_bound(&self) -> bool {
        self.pin != UNBOUND_PIN
    }

    /// Key under which samples for this pin are stored, e.g. `V3`
    pub fn pin_key(&self) -> String {
        format!("{}{}", VIRTUAL_PIN_PREFIX, self.pin)
    }
}

/// One plotted source of a widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub label: String,
    pub color: String,
    #[serde(default)]
    pub data_stream: Option<DataStreamRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: u64,
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    #[serde(default)]
    pub label: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub sources: Vec<DataSource>,
}

impl Widget {
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

/// Next free widget id: one above the current maximum, or the lowest unused
/// id once the maximum is `u64::MAX`
pub fn next_id(widgets: &[Widget]) -> u64 {
    let max = widgets.iter().map(|w| w.id).max();
    match max.map_or(Some(1), |max| max.checked_add(1)) {
        Some(id) => id,
        None => {
            let mut ids: Vec<u64> = widgets.iter().map(|w| w.id).collect();
            ids.sort_unstable();
            ids.dedup();
            let mut candidate = 1;
            for id in ids {
                if id > candidate {
                    break;
                }
                if id == candidate {
                    candidate = candidate.saturating_add(1);
                }
            }
            candidate
        }
    }
}

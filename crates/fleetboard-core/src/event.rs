//! Product event definitions and the event editing form

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Online,
    Offline,
    Information,
    Warning,
    Critical,
}

impl EventType {
    pub fn title(&self) -> &'static str {
        match self {
            EventType::Online => "Online",
            EventType::Offline => "Offline",
            EventType::Information => "Information",
            EventType::Warning => "Warning",
            EventType::Critical => "Critical",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventFormError {
    #[error("Event name is required")]
    MissingName,

    #[error("Event code is required")]
    MissingCode,
}

/// Editable values of a product event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub event_type: EventType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub event_code: String,
    #[serde(default)]
    pub description: String,
}

impl EventForm {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            name: String::new(),
            event_code: String::new(),
            description: String::new(),
        }
    }

    /// A form fixed to the critical event type
    pub fn critical() -> Self {
        Self::new(EventType::Critical)
    }

    pub fn validate(&self) -> Result<(), EventFormError> {
        if self.name.trim().is_empty() {
            return Err(EventFormError::MissingName);
        }
        if self.event_code.trim().is_empty() {
            return Err(EventFormError::MissingCode);
        }
        Ok(())
    }

    /// Copy for the clone action; the copy keeps the type and gets a new name
    pub fn duplicate(&self) -> Self {
        Self {
            name: format!("{} Copy", self.name),
            ..self.clone()
        }
    }
}

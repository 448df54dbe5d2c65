//! Typed metadata fields attached to devices and products

use serde::{Deserialize, Serialize};

use crate::error::MetaFieldError;
use crate::role::Role;

/// A named, role-scoped descriptive attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub role: Role,
    #[serde(flatten)]
    pub value: MetaValue,
}

/// Type-specific payload, tagged by `type` on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MetaValue {
    Text {
        #[serde(default)]
        value: String,
    },
    Number {
        #[serde(default)]
        value: f64,
    },
    #[serde(rename_all = "camelCase")]
    Cost {
        currency: String,
        price: f64,
        per_value: f64,
        units: String,
    },
    Time {
        time: i64,
    },
    Contact(Box<Contact>),
    Range {
        from: f64,
        to: f64,
    },
    Measurement {
        units: String,
        #[serde(default)]
        value: f64,
    },
}

/// Contact card; every part can be toggled on or off individually
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub contact: String,
    pub first_name: String,
    pub is_first_name_enabled: bool,
    pub last_name: String,
    pub is_last_name_enabled: bool,
    pub email: String,
    pub is_email_enabled: bool,
    pub phone: String,
    pub is_phone_enabled: bool,
    pub street_address: String,
    pub is_street_address_enabled: bool,
    pub city: String,
    pub is_city_enabled: bool,
    pub state: String,
    pub is_state_enabled: bool,
    pub zip: String,
    pub is_zip_enabled: bool,
    pub is_defaults_enabled: bool,
}

impl MetaValue {
    /// The `type` tag as sent over the wire
    pub fn type_name(&self) -> &'static str {
        match self {
            MetaValue::Text { .. } => "Text",
            MetaValue::Number { .. } => "Number",
            MetaValue::Cost { .. } => "Cost",
            MetaValue::Time { .. } => "Time",
            MetaValue::Contact(_) => "Contact",
            MetaValue::Range { .. } => "Range",
            MetaValue::Measurement { .. } => "Measurement",
        }
    }
}

impl MetaField {
    pub fn new(name: impl Into<String>, role: Role, value: MetaValue) -> Self {
        Self {
            id: None,
            name: name.into(),
            role,
            value,
        }
    }

    pub fn validate(&self) -> Result<(), MetaFieldError> {
        if self.name.trim().is_empty() {
            return Err(MetaFieldError::EmptyName);
        }
        if let MetaValue::Range { from, to } = self.value {
            if from > to {
                return Err(MetaFieldError::InvertedRange {
                    name: self.name.clone(),
                    from,
                    to,
                });
            }
        }
        Ok(())
    }
}

/// Field kinds offered by the "add new metadata field" toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewFieldKind {
    Text,
    Number,
    Unit,
    Cost,
    Contact,
}

impl NewFieldKind {
    pub const ALL: [NewFieldKind; 5] = [
        NewFieldKind::Text,
        NewFieldKind::Number,
        NewFieldKind::Unit,
        NewFieldKind::Cost,
        NewFieldKind::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NewFieldKind::Text => "Text",
            NewFieldKind::Number => "Number",
            NewFieldKind::Unit => "Unit",
            NewFieldKind::Cost => "Cost",
            NewFieldKind::Contact => "Contact",
        }
    }

    /// A blank field of this kind, owned by admins until edited.
    /// Units are stored as measurement fields.
    pub fn blank(&self) -> MetaField {
        let value = match self {
            NewFieldKind::Text => MetaValue::Text {
                value: String::new(),
            },
            NewFieldKind::Number => MetaValue::Number { value: 0.0 },
            NewFieldKind::Unit => MetaValue::Measurement {
                units: String::new(),
                value: 0.0,
            },
            NewFieldKind::Cost => MetaValue::Cost {
                currency: "USD".to_string(),
                price: 0.0,
                per_value: 1.0,
                units: String::new(),
            },
            NewFieldKind::Contact => MetaValue::Contact(Box::default()),
        };
        MetaField::new(String::new(), Role::Admin, value)
    }
}

fn text(name: &str, value: &str) -> MetaField {
    MetaField::new(
        name,
        Role::Admin,
        MetaValue::Text {
            value: value.to_string(),
        },
    )
}

/// Demonstration metadata attached to every fetched device
pub fn fetch_template() -> Vec<MetaField> {
    vec![
        MetaField::new(
            "Farm of Smith",
            Role::Admin,
            MetaValue::Cost {
                currency: "USD".to_string(),
                price: 9.99,
                per_value: 1.0,
                units: "Gallon".to_string(),
            },
        ),
        MetaField::new(
            "Some Time",
            Role::Admin,
            MetaValue::Time {
                time: 1_492_697_668_006,
            },
        ),
        MetaField::new(
            "Smith Contacts",
            Role::Admin,
            MetaValue::Contact(Box::new(Contact {
                contact: "Tech Support".to_string(),
                first_name: "Dmitriy".to_string(),
                last_name: "Dumanskiy".to_string(),
                email: "dmitriy@blynk.cc".to_string(),
                phone: "+38063673333".to_string(),
                street_address: "My street".to_string(),
                city: "Kyiv".to_string(),
                state: "Ukraine".to_string(),
                zip: "03322".to_string(),
                ..Contact::default()
            })),
        ),
        MetaField::new(
            "Range for Farm of Smith",
            Role::Admin,
            MetaValue::Range {
                from: 60.0,
                to: 120.0,
            },
        ),
        MetaField::new(
            "Farm of Smith",
            Role::Admin,
            MetaValue::Measurement {
                units: "Celsius".to_string(),
                value: 36.0,
            },
        ),
        text("Device Name", "My Device 0"),
        text("Device Owner", "owner@example.com"),
        text("Location Name", "Trenton New York Farm"),
        MetaField::new(
            "Cost of Pump 1",
            Role::Admin,
            MetaValue::Number { value: 10.23 },
        ),
    ]
}

/// Demonstration metadata attached to devices after an update
pub fn update_template() -> Vec<MetaField> {
    vec![
        text("Device Name", "My Device 0"),
        text("Device Owner", "owner@example.com"),
        text("Location Name", "Trenton New York Farm"),
    ]
}

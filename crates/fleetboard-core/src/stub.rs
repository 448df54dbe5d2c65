//! Read-only field stub formatting

/// Placeholder shown for empty values
pub const NO_VALUE: &str = "No Value";

/// What a static field stub renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStub {
    pub class: String,
    pub text: String,
    /// Clamp to a single line with an ellipsis
    pub clamp: bool,
}

impl FieldStub {
    pub fn new(value: Option<&str>, inline: bool, multiple_lines: bool) -> Self {
        let value = value.filter(|v| !v.is_empty());

        let mut classes = vec![if inline {
            "product-metadata-static-field-inline"
        } else {
            "product-metadata-static-field"
        }];
        if value.is_none() {
            classes.push("no-value");
        }

        Self {
            class: classes.join(" "),
            text: value.unwrap_or(NO_VALUE).to_string(),
            clamp: !multiple_lines,
        }
    }
}

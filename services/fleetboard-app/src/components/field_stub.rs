//! Static metadata field stub

use fleetboard_core::stub::FieldStub as Stub;
use leptos::prelude::*;

/// Read-only rendering of a metadata value, "No Value" when empty
#[component]
pub fn FieldStub(
    #[prop(optional_no_strip)] value: Option<String>,
    #[prop(optional)] inline: bool,
    #[prop(optional)] multiple_lines: bool,
) -> impl IntoView {
    let stub = Stub::new(value.as_deref(), inline, multiple_lines);

    let body = if stub.clamp {
        view! {
            <div style="overflow: hidden; white-space: nowrap; text-overflow: ellipsis;">
                {stub.text}
            </div>
        }
        .into_any()
    } else {
        view! { <p>{stub.text}</p> }.into_any()
    };

    view! {
        <div class=stub.class style="word-wrap: break-word;">
            {body}
        </div>
    }
}

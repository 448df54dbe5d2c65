//! Critical event editor

use fleetboard_core::event::EventForm;
use leptos::prelude::*;

/// Product event form locked to the critical event type
#[component]
pub fn CriticalEvent(
    #[prop(optional)] initial_values: Option<EventForm>,
    #[prop(optional)] on_change: Option<Callback<EventForm>>,
    #[prop(optional)] on_clone: Option<Callback<EventForm>>,
    #[prop(optional)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    let initial = initial_values
        .map(|form| EventForm {
            event_type: fleetboard_core::event::EventType::Critical,
            ..form
        })
        .unwrap_or_else(EventForm::critical);
    let form = RwSignal::new(initial);

    let edit = move |apply: fn(&mut EventForm, String), value: String| {
        form.update(|f| apply(f, value));
        if let Some(on_change) = on_change {
            on_change.run(form.get_untracked());
        }
    };

    let error = move || form.with(|f| f.validate().err().map(|e| e.to_string()));

    view! {
        <div class="product-event product-event--critical">
            <div class="product-event-type">{move || form.with(|f| f.event_type.title())}</div>
            <input
                placeholder="Event name"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| edit(|f, v| f.name = v, event_target_value(&ev))
            />
            <input
                placeholder="Event code"
                prop:value=move || form.with(|f| f.event_code.clone())
                on:input=move |ev| edit(|f, v| f.event_code = v, event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| edit(|f, v| f.description = v, event_target_value(&ev))
            />
            {move || error().map(|message| view! { <p class="product-event-error">{message}</p> })}
            <div class="product-event-tools">
                <button
                    type="button"
                    on:click=move |_| {
                        if let Some(on_clone) = on_clone {
                            on_clone.run(form.get_untracked().duplicate());
                        }
                    }
                >
                    "Clone"
                </button>
                <button
                    type="button"
                    on:click=move |_| {
                        if let Some(on_delete) = on_delete {
                            on_delete.run(());
                        }
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

//! User role selector component

use fleetboard_core::role::{Role, RoleView};
use leptos::prelude::*;

/// Shows a user's role. The protected super admin role renders as plain text;
/// every other role renders a selector over the assignable roles.
#[component]
pub fn RoleSelect(role: Role, #[prop(optional)] on_change: Option<Callback<Role>>) -> impl IntoView {
    let current = RwSignal::new(role);

    move || match RoleView::for_role(current.get()) {
        RoleView::ReadOnly { title } => view! { <div>{title}</div> }.into_any(),
        RoleView::Editable { selected, options } => view! {
            <select
                class="user--role-select"
                on:change=move |ev| {
                    let Ok(role) = event_target_value(&ev).parse::<Role>() else {
                        return;
                    };
                    if role.is_protected() {
                        return;
                    }
                    current.set(role);
                    if let Some(on_change) = on_change {
                        on_change.run(role);
                    }
                }
            >
                {options.into_iter().map(|option| {
                    view! {
                        <option value={option.value()} selected={option == selected}>
                            {option.title()}
                        </option>
                    }
                }).collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
    }
}

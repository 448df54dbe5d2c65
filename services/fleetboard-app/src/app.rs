//! Main App component

use crate::components::add_metadata_field::AddNewMetadataField;
use crate::components::critical_event::CriticalEvent;
use crate::components::dashboard_grid::DashboardGrid;
use crate::components::device_table::DeviceTable;
use crate::components::field_stub::FieldStub;
use crate::components::role_select::RoleSelect;
use fleetboard_core::metadata::MetaField;
use fleetboard_core::role::Role;
use fleetboard_core::store::Store;
use fleetboard_core::widget::Widget;
use leptos::prelude::*;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let store = RwSignal::new(Store::new());
    provide_context(store);

    let widgets = RwSignal::new(Vec::<Widget>::new());
    let meta_fields = RwSignal::new(Vec::<MetaField>::new());
    let devices = vec![
        (1, "Test Device 1".to_string()),
        (2, "Test Device 2".to_string()),
        (3, "Test Device 3".to_string()),
    ];

    view! {
        <main style="font-family: system-ui, sans-serif; max-width: 1200px; margin: 0 auto; padding: 1rem;">
            <h1>"Fleetboard"</h1>
            <DeviceTable />
            <section>
                <h2>"Dashboard"</h2>
                <DashboardGrid fields=widgets devices=devices />
            </section>
            <section>
                <h2>"Metadata"</h2>
                <AddNewMetadataField on_add=Callback::new(move |field: MetaField| {
                    meta_fields.update(|fields| fields.push(field));
                }) />
                {move || meta_fields.get().into_iter().map(|field| {
                    let value = field.value.type_name().to_string();
                    view! { <FieldStub value=Some(value) /> }
                }).collect::<Vec<_>>()}
            </section>
            <section>
                <h2>"Events"</h2>
                <CriticalEvent />
            </section>
            <section>
                <h2>"Role"</h2>
                <RoleSelect role=Role::Admin />
            </section>
        </main>
    }
}

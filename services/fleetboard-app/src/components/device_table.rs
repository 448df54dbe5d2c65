//! Device list component

use fleetboard_core::device::Device;
use fleetboard_core::metadata::MetaValue;
use leptos::prelude::*;

use crate::api::fetch_devices;
use crate::components::field_stub::FieldStub;

fn text_field(device: &Device, name: &str) -> Option<String> {
    device.meta_fields.iter().find_map(|field| match &field.value {
        MetaValue::Text { value } if field.name == name => Some(value.clone()),
        _ => None,
    })
}

/// Fetches /api/devices and lists the devices with a few metadata fields
#[component]
pub fn DeviceTable() -> impl IntoView {
    let devices = Resource::new(
        || (),
        |_| async move { fetch_devices().await.unwrap_or_default() },
    );

    view! {
        <section>
            <h2>"Devices"</h2>
            <Suspense fallback=move || view! { <p>"Loading devices..."</p> }>
                {move || {
                    devices.get().map(|data| {
                        if data.is_empty() {
                            view! { <p>"No devices yet."</p> }.into_any()
                        } else {
                            view! {
                                <table style="width: 100%; border-collapse: collapse;">
                                    <thead>
                                        <tr style="border-bottom: 2px solid #dee2e6;">
                                            <th style="padding: 0.5rem; text-align: left;">"Name"</th>
                                            <th style="padding: 0.5rem; text-align: left;">"Owner"</th>
                                            <th style="padding: 0.5rem; text-align: left;">"Location"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {data.into_iter().map(|d| {
                                            let owner = text_field(&d, "Device Owner");
                                            let location = text_field(&d, "Location Name");
                                            view! {
                                                <tr style="border-bottom: 1px solid #dee2e6;">
                                                    <td style="padding: 0.5rem;">
                                                        <FieldStub value=d.name.clone() inline=true />
                                                    </td>
                                                    <td style="padding: 0.5rem;">
                                                        <FieldStub value=owner inline=true />
                                                    </td>
                                                    <td style="padding: 0.5rem;">
                                                        <FieldStub value=location inline=true />
                                                    </td>
                                                </tr>
                                            }
                                        }).collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }.into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}

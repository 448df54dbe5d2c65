//! Editable widget grid

use fleetboard_core::dashboard::{DashboardScene, DEFAULT_BREAKPOINT};
use fleetboard_core::placement::Breakpoint;
use fleetboard_core::widget::{DataSource, Widget, WidgetType};
use leptos::prelude::*;

use crate::components::linear_chart::LinearChart;

const NEW_CHART_WIDTH: u32 = 4;
const NEW_CHART_HEIGHT: u32 = 3;

fn new_chart() -> Widget {
    Widget {
        id: 0,
        widget_type: WidgetType::LinearChart,
        label: "Chart".to_string(),
        x: 0,
        y: 0,
        width: NEW_CHART_WIDTH,
        height: NEW_CHART_HEIGHT,
        sources: vec![DataSource {
            label: "Source".to_string(),
            color: "#3f8fe0".to_string(),
            data_stream: None,
        }],
    }
}

fn cell_style(widget: &Widget) -> String {
    format!(
        "grid-column: {} / span {}; grid-row: {} / span {}; border: 1px solid #dee2e6; \
         border-radius: 0.25rem; padding: 0.5rem; min-height: 0;",
        widget.x + 1,
        widget.width,
        widget.y + 1,
        widget.height
    )
}

/// Device id chosen in the preview selector, `None` for anything unparseable
fn device_selection(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

/// Dashboard editor. Widgets live in `fields`, the surrounding form's
/// collection; adding, cloning and deleting go through the dashboard scene.
#[component]
pub fn DashboardGrid(
    fields: RwSignal<Vec<Widget>>,
    #[prop(optional)] fetch_real_data: bool,
    #[prop(optional)] devices: Vec<(u64, String)>,
) -> impl IntoView {
    let breakpoint = Breakpoint::Lg;
    let selected_device = RwSignal::new(devices.first().map(|(id, _)| *id));

    let add = move |_| {
        fields.update(|widgets| {
            DashboardScene::new(widgets).add_widget(new_chart());
        });
    };

    let grid_style = format!(
        "display: grid; grid-template-columns: repeat({}, 1fr); grid-auto-rows: 80px; gap: 0.5rem;",
        breakpoint.columns()
    );

    view! {
        <div class="products-manage-dashboard">
            <div class="products-manage-dashboard--tools">
                <div class="products-manage-dashboard--tools--widget-add">
                    <button type="button" on:click=add>"+ Add Chart"</button>
                </div>
                <div class="products-manage-dashboard--tools--device-select">
                    <select
                        prop:value=move || {
                            selected_device.get().map(|id| id.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            selected_device.set(device_selection(&event_target_value(&ev)));
                        }
                    >
                        {devices.into_iter().map(|(id, name)| {
                            view! { <option value={id.to_string()}>{name}</option> }
                        }).collect::<Vec<_>>()}
                    </select>
                </div>
            </div>
            <div class="products-manage-dashboard--grid" style=grid_style>
                <For
                    each=move || fields.get()
                    key=|widget| widget.id
                    children=move |widget: Widget| {
                        let id = widget.id;
                        let fallback = widget.clone();
                        let current = Signal::derive(move || {
                            fields
                                .with(|ws| ws.iter().find(|w| w.id == id).cloned())
                                .unwrap_or_else(|| fallback.clone())
                        });
                        view! {
                            <div style=move || cell_style(&current.get())>
                                <div style="display: flex; justify-content: space-between;">
                                    <strong>{move || current.get().label}</strong>
                                    <span>
                                        <button
                                            type="button"
                                            on:click=move |_| {
                                                fields.update(|widgets| {
                                                    let mut scene = DashboardScene::new(widgets);
                                                    if let Err(e) = scene.clone_widget(id, DEFAULT_BREAKPOINT) {
                                                        leptos::logging::warn!("{}", e);
                                                    }
                                                });
                                            }
                                        >
                                            "Clone"
                                        </button>
                                        <button
                                            type="button"
                                            on:click=move |_| {
                                                fields.update(|widgets| {
                                                    DashboardScene::new(widgets).delete_widget(id);
                                                });
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </span>
                                </div>
                                <LinearChart widget=current fetch_real_data=fetch_real_data />
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

//! Linear chart widget component

use fleetboard_core::chart::ChartWidget;
use fleetboard_core::store::{Action, Store, WidgetsState};
use fleetboard_core::widget::Widget;
use leptos::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::api::fetch_widget_pins;

/// Renders a widget's chart as a Plotly spec in `data-chart`; the host page
/// draws it. Without `fetch_real_data` the chart shows placeholder series.
#[component]
pub fn LinearChart(
    #[prop(into)] widget: Signal<Widget>,
    #[prop(optional)] fetch_real_data: bool,
) -> impl IntoView {
    let store = use_context::<RwSignal<Store>>();
    let initial = widget.get_untracked();
    let widget_id = initial.id;

    let mut rng = StdRng::seed_from_u64(widget_id);
    let chart = StoredValue::new(ChartWidget::mount(
        widget_id,
        initial.width,
        initial.sources,
        fetch_real_data,
        &mut rng,
    ));
    let rng = StoredValue::new(rng);
    let revision = RwSignal::new(0u64);

    Effect::new(move |_| {
        let current = widget.get();
        chart.update_value(|c| {
            c.set_width(current.width);
            rng.update_value(|r| c.update_sources(current.sources, r));
        });
        revision.update(|r| *r += 1);
    });

    if fetch_real_data {
        if let Some(store) = store {
            store.update(|s| s.dispatch(&Action::WidgetDataLoading { widget_id }));
            let pins = Resource::new(
                move || widget_id,
                |id| async move { fetch_widget_pins(id).await.unwrap_or_default() },
            );
            Effect::new(move |_| {
                if let Some(pins) = pins.get() {
                    store.update(|s| s.dispatch(&Action::WidgetDataLoaded { widget_id, pins }));
                }
            });
        }
    }

    move || {
        revision.track();
        let spec = match store {
            Some(store) => store.with(|s| chart.with_value(|c| c.render(&s.widgets))),
            None => chart.with_value(|c| c.render(&WidgetsState::default())),
        };
        spec.map(|spec| {
            let json = serde_json::to_string(&spec).unwrap_or_default();
            view! { <div class="grid-linear-widget" data-chart=json></div> }
        })
    }
}

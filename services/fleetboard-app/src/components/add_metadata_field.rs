//! Toolbar for adding metadata fields to a product

use fleetboard_core::metadata::{MetaField, NewFieldKind};
use leptos::prelude::*;

/// One dashed button per addable field kind; a click hands a blank field of
/// that kind to `on_add`
#[component]
pub fn AddNewMetadataField(#[prop(optional)] on_add: Option<Callback<MetaField>>) -> impl IntoView {
    view! {
        <div class="products-add-new-metadata-field">
            <div class="products-add-new-metadata-field-title">"+ Add new Metadata Field:"</div>
            <div class="products-add-new-metadata-field-fields">
                {NewFieldKind::ALL.into_iter().map(|kind| {
                    view! {
                        <button
                            type="button"
                            class="ant-btn ant-btn-dashed"
                            on:click=move |_| {
                                if let Some(on_add) = on_add {
                                    on_add.run(kind.blank());
                                }
                            }
                        >
                            {kind.label()}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

//! Item Form Modal Component
//!
//! Overlay form for creating a new item. Shown while the creation modal is
//! open; the draft itself lives in the shared state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_inventory;
use crate::models::DraftField;

#[component]
pub fn ItemFormModal() -> impl IntoView {
    let ctrl = use_inventory();
    let state = *ctrl.state();

    // Numeric inputs only get written back when the number itself changes,
    // so partial input like "1." survives while typing.
    let name = Memo::new(move |_| state.with(|s| s.draft.name.clone()));
    let price = Memo::new(move |_| state.with(|s| s.draft.price));
    let quantity = Memo::new(move |_| state.with(|s| s.draft.quantity));

    let submit_ctrl = ctrl.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let ctrl = submit_ctrl.clone();
        spawn_local(async move {
            ctrl.submit().await;
        });
    };

    // One handler for every input, keyed by the input's name attribute
    let input_ctrl = ctrl.clone();
    let on_input = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        match DraftField::from_str(&input.name()) {
            Some(field) => input_ctrl.change_field(field, &input.value()),
            None => log::warn!("[FORM] Input without a draft field: {:?}", input.name()),
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>"Add New Item"</h2>

                <form on:submit=on_submit>
                    <input
                        type="text"
                        name=DraftField::Name.as_str()
                        placeholder="Item name"
                        prop:value=move || name.get()
                        on:input=on_input.clone()
                        required
                    />
                    <input
                        type="number"
                        name=DraftField::Price.as_str()
                        placeholder="Price"
                        step="any"
                        prop:value=move || price.get().to_string()
                        on:input=on_input.clone()
                        required
                    />
                    <input
                        type="number"
                        name=DraftField::Quantity.as_str()
                        placeholder="Quantity"
                        prop:value=move || quantity.get().to_string()
                        on:input=on_input
                        required
                    />

                    <div class="modal-buttons">
                        <button type="submit">"Save"</button>
                        <button type="button" on:click=move |_| ctrl.cancel_form()>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

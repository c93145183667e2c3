//! Inventory Frontend App
//!
//! Single page: item table, add button, creation modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpItemsApi;
use crate::components::{ItemFormModal, ItemTable, NoticeBanner};
use crate::config::ApiConfig;
use crate::context::provide_inventory;
use crate::controller::InventoryController;
use crate::state::InventoryState;

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(InventoryState::new());
    let controller = InventoryController::new(HttpItemsApi::new(ApiConfig::default()), state);
    provide_inventory(controller.clone());

    // Load items on mount
    let loader = controller.clone();
    Effect::new(move |_| {
        let loader = loader.clone();
        log::debug!("[APP] Initial load");
        spawn_local(async move {
            loader.refresh().await;
        });
    });

    view! {
        <main class="inventory">
            <h1>"Item Management"</h1>

            <NoticeBanner />

            <button class="add-btn" on:click=move |_| controller.open_form()>
                "➕ Add Item"
            </button>

            <h2>"All Items"</h2>
            <ItemTable />

            <Show when=move || state.with(|s| s.is_form_open())>
                <ItemFormModal />
            </Show>
        </main>
    }
}

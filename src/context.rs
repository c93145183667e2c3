//! Application Context
//!
//! The controller is provided once by `App` and pulled out by components.

use leptos::prelude::*;

use crate::api::HttpItemsApi;
use crate::controller::InventoryController;
use crate::state::InventoryState;

/// Controller wired to the real backend and the page's state signal
pub type AppController = InventoryController<HttpItemsApi, RwSignal<InventoryState>>;

pub fn provide_inventory(controller: AppController) {
    provide_context(controller);
}

/// Get the controller from context
pub fn use_inventory() -> AppController {
    expect_context::<AppController>()
}

//! Inventory Controller
//!
//! The async operations behind the page: load the list, edit the draft,
//! create, delete. Every successful write is followed by a full re-fetch;
//! the list is never patched locally.
//!
//! Read failures are only logged. Write failures are logged and surfaced as
//! an error notice.

use leptos::prelude::*;

use crate::api::ItemsApi;
use crate::models::DraftField;
use crate::state::{InventoryState, NoticeKind};

pub const CREATED_MESSAGE: &str = "Item created successfully!";
pub const CREATE_FAILED_MESSAGE: &str = "Error creating item";
pub const DELETE_FAILED_MESSAGE: &str = "Error deleting item";
pub const NAME_REQUIRED_MESSAGE: &str = "Item name is required";

/// Shared handle to the view state.
///
/// Both accessors return `None` once the underlying storage is gone, e.g.
/// when a request resolves after the page was torn down.
pub trait StateCell: Clone + 'static {
    fn with_state<R>(&self, f: impl FnOnce(&InventoryState) -> R) -> Option<R>;
    fn update_state<R>(&self, f: impl FnOnce(&mut InventoryState) -> R) -> Option<R>;
}

impl StateCell for RwSignal<InventoryState> {
    fn with_state<R>(&self, f: impl FnOnce(&InventoryState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut InventoryState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Failed,
    /// Required field missing; nothing was sent
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed,
}

#[derive(Clone)]
pub struct InventoryController<A, S> {
    api: A,
    state: S,
}

impl<A, S> InventoryController<A, S>
where
    A: ItemsApi,
    S: StateCell,
{
    pub fn new(api: A, state: S) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Re-fetch the full collection. Returns whether the list was replaced.
    pub async fn refresh(&self) -> bool {
        match self.api.list_items().await {
            Ok(items) => {
                log::debug!("[INVENTORY] Loaded {} items", items.len());
                self.state.update_state(|s| s.replace_items(items)).is_some()
            }
            Err(e) => {
                log::error!("[INVENTORY] Failed to fetch items: {}", e);
                false
            }
        }
    }

    pub fn change_field(&self, field: DraftField, raw: &str) {
        self.state.update_state(|s| s.set_field(field, raw));
    }

    pub fn open_form(&self) {
        self.state.update_state(|s| s.open_form());
    }

    pub fn cancel_form(&self) {
        self.state.update_state(|s| s.cancel_form());
    }

    pub fn dismiss_notice(&self, seq: u32) {
        self.state.update_state(|s| s.dismiss_notice(seq));
    }

    /// Send the current draft. On success the modal closes, the draft
    /// resets and the list reloads; on failure both are left as they were.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(draft) = self.state.with_state(|s| s.draft.clone()) else {
            return SubmitOutcome::Rejected;
        };
        if !draft.is_submittable() {
            log::warn!("[INVENTORY] Ignoring submit: item name is required");
            self.state.update_state(|s| s.notify(NoticeKind::Error, NAME_REQUIRED_MESSAGE));
            return SubmitOutcome::Rejected;
        }

        match self.api.create_item(&draft).await {
            Ok(()) => {
                log::info!("[INVENTORY] Created item {:?}", draft.name);
                self.state.update_state(|s| {
                    s.notify(NoticeKind::Success, CREATED_MESSAGE);
                    s.finish_create();
                });
                self.refresh().await;
                SubmitOutcome::Created
            }
            Err(e) => {
                log::error!("[INVENTORY] Failed to create item: {}", e);
                self.state.update_state(|s| s.notify(NoticeKind::Error, CREATE_FAILED_MESSAGE));
                SubmitOutcome::Failed
            }
        }
    }

    /// Delete without confirmation, then reload on success
    pub async fn delete(&self, id: u32) -> DeleteOutcome {
        match self.api.delete_item(id).await {
            Ok(()) => {
                log::info!("[INVENTORY] Deleted item {}", id);
                self.refresh().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                log::error!("[INVENTORY] Failed to delete item {}: {}", id, e);
                self.state.update_state(|s| s.notify(NoticeKind::Error, DELETE_FAILED_MESSAGE));
                DeleteOutcome::Failed
            }
        }
    }
}

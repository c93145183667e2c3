//! Items API
//!
//! Frontend bindings to the REST backend. Components never call HTTP
//! directly; they go through [`ItemsApi`] so the controller can be driven
//! by an in-memory backend in tests.

mod http;

use crate::error::ApiError;
use crate::models::{Draft, Item};

pub use http::HttpItemsApi;

/// Operations the inventory view needs from the backend
#[allow(async_fn_in_trait)]
pub trait ItemsApi {
    /// `GET /api/items`, in server order
    async fn list_items(&self) -> Result<Vec<Item>, ApiError>;

    /// `POST /api/items`; the created record is not needed client-side
    async fn create_item(&self, draft: &Draft) -> Result<(), ApiError>;

    /// `DELETE /api/items/{id}`
    async fn delete_item(&self, id: u32) -> Result<(), ApiError>;
}

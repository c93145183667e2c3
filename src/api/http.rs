//! HTTP Items API
//!
//! `gloo-net` fetch implementation of [`ItemsApi`].

use gloo_net::http::{Request, Response};

use super::ItemsApi;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Draft, Item};

#[derive(Debug, Clone, Default)]
pub struct HttpItemsApi {
    config: ApiConfig,
}

impl HttpItemsApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

/// Any non-2xx status is a failure
fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

impl ItemsApi for HttpItemsApi {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        let url = self.config.items_url();
        log::debug!("[API] GET {}", url);
        let resp = Request::get(&url).send().await.map_err(network)?;
        let resp = ensure_ok(resp)?;
        resp.json::<Vec<Item>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_item(&self, draft: &Draft) -> Result<(), ApiError> {
        let url = self.config.items_url();
        log::debug!("[API] POST {} name={:?}", url, draft.name);
        let resp = Request::post(&url)
            .json(draft)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(network)?;
        ensure_ok(resp)?;
        Ok(())
    }

    async fn delete_item(&self, id: u32) -> Result<(), ApiError> {
        let url = self.config.item_url(id);
        log::debug!("[API] DELETE {}", url);
        let resp = Request::delete(&url).send().await.map_err(network)?;
        ensure_ok(resp)?;
        Ok(())
    }
}

//! Remote Gateway
//!
//! Generic REST data endpoint: `GET base`, `POST base`, `DELETE base/{id}`.
//! No auth, pagination or retries.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};

use crate::domain::{Item, ItemId};
use super::error::{GatewayError, GatewayResult};
use super::mapping::RecordSchema;
use super::traits::PersistenceGateway;

#[derive(Debug, Clone)]
pub struct RemoteGateway {
    client: Client,
    base_url: Url,
    schema: RecordSchema,
}

impl RemoteGateway {
    pub fn new(base_url: Url, schema: RecordSchema) -> Self {
        Self {
            client: Client::new(),
            base_url,
            schema,
        }
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), id)
    }
}

/// Map non-2xx responses to `GatewayError::Status`
fn check_status(response: Response) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(GatewayError::Status(status.as_u16()))
    }
}

#[async_trait(?Send)]
impl PersistenceGateway for RemoteGateway {
    fn describe(&self) -> &'static str {
        "remote"
    }

    async fn list(&self) -> GatewayResult<Vec<Item>> {
        log::debug!("[GATEWAY] GET {}", self.base_url);
        let response = self.client.get(self.base_url.clone()).send().await?;
        let body: serde_json::Value = check_status(response)?.json().await?;
        let items = self.schema.decode_list(body)?;
        log::info!("[GATEWAY] Loaded {} records", items.len());
        Ok(items)
    }

    async fn create(&self, item: &Item) -> GatewayResult<()> {
        log::debug!("[GATEWAY] POST {} #{}", self.base_url, item.id);
        let body = self.schema.encode(item)?;
        let response = self
            .client
            .post(self.base_url.clone())
            .json(&body)
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }

    async fn remove(&self, id: ItemId) -> GatewayResult<()> {
        let url = self.item_url(id);
        log::debug!("[GATEWAY] DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        check_status(response)?;
        Ok(())
    }
}

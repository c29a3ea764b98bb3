//! In-Memory Gateway
//!
//! Session-only persistence: records live as long as the gateway value.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::domain::{Entity, Item, ItemId};
use super::error::{GatewayError, GatewayResult};
use super::traits::PersistenceGateway;

#[derive(Debug, Default)]
pub struct InMemoryGateway {
    records: RefCell<Vec<Item>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing records
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            records: RefCell::new(items),
        }
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

#[async_trait(?Send)]
impl PersistenceGateway for InMemoryGateway {
    fn describe(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> GatewayResult<Vec<Item>> {
        Ok(self.records.borrow().clone())
    }

    async fn create(&self, item: &Item) -> GatewayResult<()> {
        let mut records = self.records.borrow_mut();
        if records.iter().any(|r| r.id() == item.id) {
            return Err(GatewayError::Conflict(item.id));
        }
        records.push(item.clone());
        Ok(())
    }

    async fn remove(&self, id: ItemId) -> GatewayResult<()> {
        self.records.borrow_mut().retain(|r| r.id() != id);
        Ok(())
    }
}

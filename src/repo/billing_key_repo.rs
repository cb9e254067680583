use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Customer key to billing key mapping used for recurring charges.
#[async_trait]
pub trait BillingKeyStore: Send + Sync {
    /// Inserts or overwrites; the last write for a customer wins.
    async fn put(&self, customer_key: &str, billing_key: &str) -> Result<()>;
    async fn get(&self, customer_key: &str) -> Result<Option<String>>;
    async fn count(&self) -> Result<usize>;
}

/// Process-local store. Entries are never evicted and do not survive a restart.
#[derive(Default, Clone)]
pub struct InMemoryBillingKeyStore {
    keys: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryBillingKeyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BillingKeyStore for InMemoryBillingKeyStore {
    async fn put(&self, customer_key: &str, billing_key: &str) -> Result<()> {
        let mut keys = self.keys.write().await;
        keys.insert(customer_key.to_string(), billing_key.to_string());
        Ok(())
    }

    async fn get(&self, customer_key: &str) -> Result<Option<String>> {
        let keys = self.keys.read().await;
        Ok(keys.get(customer_key).cloned())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.keys.read().await.len())
    }
}

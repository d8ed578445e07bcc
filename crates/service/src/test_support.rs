use std::collections::BTreeMap;

use async_trait::async_trait;
use models::ResourceKind;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::errors::ServiceError;
use crate::resource::repository::ResourceRepository;

/// Fresh SQLite file under the temp dir with `K`'s table migrated.
pub async fn scratch_db<K: ResourceKind>() -> Result<DatabaseConnection, anyhow::Error> {
    let path = std::env::temp_dir().join(format!("service-{}-{}.db", K::COLLECTION, uuid::Uuid::new_v4()));
    let db = models::db::connect(&format!("sqlite://{}", path.display())).await?;
    K::migrate(&db).await?;
    Ok(db)
}

/// In-memory repository with store-like id assignment (ids never reused).
pub struct MemoryRepository<K: ResourceKind> {
    state: Mutex<(i32, BTreeMap<i32, K::Record>)>,
}

impl<K: ResourceKind> Default for MemoryRepository<K> {
    fn default() -> Self { Self { state: Mutex::new((0, BTreeMap::new())) } }
}

#[async_trait]
impl<K: ResourceKind> ResourceRepository<K> for MemoryRepository<K> {
    async fn list(&self) -> Result<Vec<K::Record>, ServiceError> {
        Ok(self.state.lock().await.1.values().cloned().collect())
    }

    async fn create(&self, input: K::Input) -> Result<K::Record, ServiceError> {
        let mut state = self.state.lock().await;
        state.0 += 1;
        let id = state.0;
        let rec = K::assemble(id, input);
        state.1.insert(id, rec.clone());
        Ok(rec)
    }

    async fn get(&self, id: i32) -> Result<Option<K::Record>, ServiceError> {
        Ok(self.state.lock().await.1.get(&id).cloned())
    }

    async fn update(&self, id: i32, input: K::Input) -> Result<Option<K::Record>, ServiceError> {
        let mut state = self.state.lock().await;
        match state.1.get_mut(&id) {
            Some(slot) => {
                *slot = K::assemble(id, input);
                Ok(Some(slot.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.state.lock().await.1.remove(&id).is_some())
    }
}

use async_trait::async_trait;
use models::ResourceKind;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Storage for one resource kind. Every method is a single statement.
#[async_trait]
pub trait ResourceRepository<K: ResourceKind>: Send + Sync {
    async fn list(&self) -> Result<Vec<K::Record>, ServiceError>;
    async fn create(&self, input: K::Input) -> Result<K::Record, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<K::Record>, ServiceError>;
    async fn update(&self, id: i32, input: K::Input) -> Result<Option<K::Record>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation, usable for any kind.
#[derive(Clone)]
pub struct SeaOrmRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl<K: ResourceKind> ResourceRepository<K> for SeaOrmRepository {
    async fn list(&self) -> Result<Vec<K::Record>, ServiceError> {
        Ok(K::list(&self.db).await?)
    }

    async fn create(&self, input: K::Input) -> Result<K::Record, ServiceError> {
        Ok(K::create(&self.db, input).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<K::Record>, ServiceError> {
        Ok(K::get(&self.db, id).await?)
    }

    async fn update(&self, id: i32, input: K::Input) -> Result<Option<K::Record>, ServiceError> {
        Ok(K::replace(&self.db, id, input).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(K::delete(&self.db, id).await?)
    }
}

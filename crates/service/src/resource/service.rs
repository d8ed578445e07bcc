use std::marker::PhantomData;
use std::sync::Arc;

use models::ResourceKind;
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::resource::repository::ResourceRepository;

/// Application service encapsulating the CRUD rules of one resource kind.
///
/// Ids must be positive, inputs are validated before storage is touched, and
/// a missing row on get/update/delete is always reported as `NotFound`.
pub struct ResourceService<K: ResourceKind, R: ResourceRepository<K>> {
    repo: Arc<R>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ResourceKind, R: ResourceRepository<K>> ResourceService<K, R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo, _kind: PhantomData } }

    pub async fn list(&self) -> Result<Vec<K::Record>, ServiceError> {
        let rows = self.repo.list().await?;
        debug!(resource = K::COLLECTION, count = rows.len(), "listed");
        Ok(rows)
    }

    #[instrument(skip_all, fields(resource = K::COLLECTION))]
    pub async fn create(&self, input: K::Input) -> Result<K::Record, ServiceError> {
        K::validate(&input)?;
        let created = self.repo.create(input).await?;
        info!(id = K::record_id(&created), "created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<K::Record, ServiceError> {
        ensure_positive(id)?;
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(K::NAME, id))
    }

    /// Replace every field of record `id`; the id itself never changes.
    #[instrument(skip(self, input), fields(resource = K::COLLECTION))]
    pub async fn update(&self, id: i32, input: K::Input) -> Result<K::Record, ServiceError> {
        ensure_positive(id)?;
        K::validate(&input)?;
        let updated = self.repo.update(id, input).await?.ok_or_else(|| ServiceError::not_found(K::NAME, id))?;
        info!("updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(resource = K::COLLECTION))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        ensure_positive(id)?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(K::NAME, id));
        }
        info!("deleted");
        Ok(())
    }
}

fn ensure_positive(id: i32) -> Result<(), ServiceError> {
    if id <= 0 {
        return Err(ServiceError::Validation { field: "id", reason: "ensure this value is greater than 0".into() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryRepository;
    use models::{task, user_v1, Task, UserV1};

    fn tasks() -> ResourceService<Task, MemoryRepository<Task>> {
        ResourceService::new(Arc::new(MemoryRepository::default()))
    }

    fn milk() -> task::Input {
        task::Input { title: "Buy milk".into(), description: "2 liters".into(), done: false }
    }

    #[tokio::test]
    async fn create_then_list_contains_record_once() -> Result<(), ServiceError> {
        let svc = tasks();
        let created = svc.create(milk()).await?;
        let all = svc.list().await?;
        assert_eq!(all.iter().filter(|t| **t == created).count(), 1);
        assert_eq!(created, Task::assemble(created.id, milk()));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_create_appends_nothing() -> Result<(), ServiceError> {
        let svc = tasks();
        let bad = task::Input { title: "t".repeat(33), ..milk() };
        let err = svc.create(bad).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation { field: "title", .. }));
        assert!(svc.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn non_positive_ids_fail_before_lookup() {
        let svc = tasks();
        for id in [0, -1] {
            assert!(matches!(svc.get(id).await, Err(ServiceError::Validation { field: "id", .. })));
            assert!(matches!(svc.update(id, milk()).await, Err(ServiceError::Validation { field: "id", .. })));
            assert!(matches!(svc.delete(id).await, Err(ServiceError::Validation { field: "id", .. })));
        }
    }

    #[tokio::test]
    async fn update_keeps_id_and_replaces_fields() -> Result<(), ServiceError> {
        let svc = tasks();
        let created = svc.create(milk()).await?;
        let next = task::Input { title: "Buy bread".into(), description: "rye".into(), done: true };
        let updated = svc.update(created.id, next.clone()).await?;
        assert_eq!(updated, Task::assemble(created.id, next));
        assert_eq!(svc.get(created.id).await?, updated);
        Ok(())
    }

    #[tokio::test]
    async fn update_validates_before_not_found() {
        let svc = tasks();
        let bad = task::Input { description: "d".repeat(129), ..milk() };
        assert!(matches!(svc.update(7, bad).await, Err(ServiceError::Validation { .. })));
        assert!(matches!(svc.update(7, milk()).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() -> Result<(), ServiceError> {
        let svc = tasks();
        let created = svc.create(milk()).await?;
        svc.delete(created.id).await?;
        match svc.get(created.id).await {
            Err(ServiceError::NotFound(msg)) => assert_eq!(msg, format!("Task not found with {} id", created.id)),
            other => panic!("expected not found, got {other:?}"),
        }
        assert!(matches!(svc.delete(created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn user_kind_reports_missing_rows_too() {
        let svc: ResourceService<UserV1, MemoryRepository<UserV1>> = ResourceService::new(Arc::new(MemoryRepository::default()));
        let input = user_v1::Input { username: "ivan".into(), email: "ivan@example.com".into(), password: "pw".into() };
        match svc.update(3, input).await {
            Err(ServiceError::NotFound(msg)) => assert_eq!(msg, "User not found with 3 id"),
            other => panic!("expected not found, got {other:?}"),
        }
        assert!(matches!(svc.delete(3).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn ids_are_pairwise_distinct() -> Result<(), ServiceError> {
        let svc = tasks();
        let mut ids = Vec::new();
        for _ in 0..20 {
            ids.push(svc.create(milk()).await?.id);
        }
        let mut dedup = ids.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), ids.len());
        Ok(())
    }
}

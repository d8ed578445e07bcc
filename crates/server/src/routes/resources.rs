use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use common::types::Message;
use models::ResourceKind;
use service::{ResourceService, SeaOrmRepository};

use crate::errors::JsonApiError;
use crate::extract::{AppJson, AppPath};

pub type SharedService<K> = Arc<ResourceService<K, SeaOrmRepository>>;

/// Every stored record of the deployment's kind.
pub async fn list<K: ResourceKind>(State(svc): State<SharedService<K>>) -> Result<Json<Vec<K::Record>>, JsonApiError> {
    Ok(Json(svc.list().await?))
}

pub async fn create<K: ResourceKind>(
    State(svc): State<SharedService<K>>,
    AppJson(input): AppJson<K::Input>,
) -> Result<(StatusCode, Json<K::Record>), JsonApiError> {
    let created = svc.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn read<K: ResourceKind>(
    State(svc): State<SharedService<K>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<K::Record>, JsonApiError> {
    Ok(Json(svc.get(id).await?))
}

pub async fn update<K: ResourceKind>(
    State(svc): State<SharedService<K>>,
    AppPath(id): AppPath<i32>,
    AppJson(input): AppJson<K::Input>,
) -> Result<Json<K::Record>, JsonApiError> {
    Ok(Json(svc.update(id, input).await?))
}

pub async fn remove<K: ResourceKind>(
    State(svc): State<SharedService<K>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Message>, JsonApiError> {
    svc.delete(id).await?;
    Ok(Json(Message::new(format!("{} deleted", K::NAME))))
}

/// Insert `count` synthetic records.
#[cfg(feature = "fixtures")]
pub async fn seed<K: service::fixtures::Synthetic>(
    State(svc): State<SharedService<K>>,
    AppPath(count): AppPath<usize>,
) -> Result<Json<Message>, JsonApiError> {
    let stored = service::fixtures::seed(svc.as_ref(), count).await?;
    Ok(Json(Message::new(format!("{stored} fake {} created", K::COLLECTION))))
}

//! The shape shared by every resource kind.
//!
//! A kind pairs an Input shape (what clients send) with a Stored shape (the
//! same fields plus the id the store assigned) and knows how to run each CRUD
//! operation as one statement against its own table.

use std::fmt::Debug;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ModelError;

#[async_trait]
pub trait ResourceKind: Send + Sync + 'static {
    type Input: DeserializeOwned + Serialize + Clone + Debug + Send + Sync + 'static;
    type Record: DeserializeOwned + Serialize + Clone + Debug + PartialEq + Send + Sync + 'static;

    /// Singular display name used in messages, e.g. `Task`.
    const NAME: &'static str;
    /// Collection path segment, e.g. `tasks`.
    const COLLECTION: &'static str;
    /// Whether `GET /{collection}/{id}` is exposed.
    const ITEM_READ: bool;

    /// Check every field constraint of the kind.
    fn validate(input: &Self::Input) -> Result<(), ModelError>;

    fn record_id(record: &Self::Record) -> i32;

    /// Stored shape for `input` under `id`.
    fn assemble(id: i32, input: Self::Input) -> Self::Record;

    /// Create the kind's table if it does not exist yet.
    async fn migrate(db: &DatabaseConnection) -> Result<(), ModelError>;

    async fn list(db: &DatabaseConnection) -> Result<Vec<Self::Record>, ModelError>;

    async fn create(db: &DatabaseConnection, input: Self::Input) -> Result<Self::Record, ModelError>;

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Self::Record>, ModelError>;

    /// Overwrite every field of row `id`; `None` when no such row exists.
    async fn replace(db: &DatabaseConnection, id: i32, input: Self::Input) -> Result<Option<Self::Record>, ModelError>;

    /// `true` when a row was removed.
    async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError>;
}

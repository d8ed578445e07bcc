
/// CRUD operations tests for every resource kind
pub mod crud_tests;

use sea_orm::DatabaseConnection;

use crate::{db, ResourceKind};

/// Fresh database file under the system temp dir with `K`'s table migrated.
pub(crate) async fn scratch_db<K: ResourceKind>() -> anyhow::Result<DatabaseConnection> {
    let path = std::env::temp_dir().join(format!("models-{}-{}.db", K::COLLECTION, uuid::Uuid::new_v4()));
    let db = db::connect(&format!("sqlite://{}", path.display())).await?;
    K::migrate(&db).await?;
    Ok(db)
}

//! Schema migrators, one per deployment.
//!
//! Every resource kind lives in its own SQLite file, so each gets a migrator
//! that only knows about its own table.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_users_v1;
mod m20240301_000002_create_users_v2;
mod m20240301_000003_create_tasks;

/// Account-style users: username / email / password.
pub struct UsersV1Migrator;

#[async_trait::async_trait]
impl MigratorTrait for UsersV1Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240301_000001_create_users_v1::Migration)]
    }
}

/// Profile-style users: names, birthday, email, address.
pub struct UsersV2Migrator;

#[async_trait::async_trait]
impl MigratorTrait for UsersV2Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240301_000002_create_users_v2::Migration)]
    }
}

pub struct TasksMigrator;

#[async_trait::async_trait]
impl MigratorTrait for TasksMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240301_000003_create_tasks::Migration)]
    }
}

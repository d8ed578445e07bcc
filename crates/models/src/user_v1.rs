use async_trait::async_trait;
use migration::{MigratorTrait, UsersV1Migrator};
use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{crud, errors::ModelError, resource::ResourceKind, validation};

pub const USERNAME_MAX: usize = 32;
pub const EMAIL_MAX: usize = 128;
pub const PASSWORD_MAX: usize = 64;

/// Account-style user row. The password is kept and returned as supplied.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Input {
    /// Only length bounds apply; the email is free text for this kind.
    pub fn validate(&self) -> Result<(), ModelError> {
        validation::max_chars("username", &self.username, USERNAME_MAX)?;
        validation::max_chars("email", &self.email, EMAIL_MAX)?;
        validation::max_chars("password", &self.password, PASSWORD_MAX)?;
        Ok(())
    }

    fn into_active_model(self, id: Option<i32>) -> ActiveModel {
        ActiveModel {
            id: id.map(Set).unwrap_or(NotSet),
            username: Set(self.username),
            email: Set(self.email),
            password: Set(self.password),
        }
    }
}

pub async fn create(db: &DatabaseConnection, input: Input) -> Result<Model, ModelError> {
    crud::insert(db, input.into_active_model(None)).await
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    crud::list::<Entity>(db, Column::Id).await
}

pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    crud::find::<Entity>(db, id).await
}

pub async fn replace(db: &DatabaseConnection, id: i32, input: Input) -> Result<Option<Model>, ModelError> {
    crud::replace(db, input.into_active_model(Some(id))).await
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    crud::delete::<Entity>(db, id).await
}

pub struct UserV1;

#[async_trait]
impl ResourceKind for UserV1 {
    type Input = Input;
    type Record = Model;

    const NAME: &'static str = "User";
    const COLLECTION: &'static str = "users";
    const ITEM_READ: bool = false;

    fn validate(input: &Input) -> Result<(), ModelError> { input.validate() }

    fn record_id(record: &Model) -> i32 { record.id }

    fn assemble(id: i32, input: Input) -> Model {
        Model { id, username: input.username, email: input.email, password: input.password }
    }

    async fn migrate(db: &DatabaseConnection) -> Result<(), ModelError> {
        Ok(UsersV1Migrator::up(db, None).await?)
    }

    async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> { list(db).await }

    async fn create(db: &DatabaseConnection, input: Input) -> Result<Model, ModelError> { create(db, input).await }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> { get(db, id).await }

    async fn replace(db: &DatabaseConnection, id: i32, input: Input) -> Result<Option<Model>, ModelError> {
        replace(db, id, input).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> { delete(db, id).await }
}

use async_trait::async_trait;
use migration::{MigratorTrait, TasksMigrator};
use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{crud, errors::ModelError, resource::ResourceKind, validation};

pub const TITLE_MAX: usize = 32;
pub const DESCRIPTION_MAX: usize = 128;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub done: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Client-supplied task fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub title: String,
    pub description: String,
    pub done: bool,
}

impl Input {
    pub fn validate(&self) -> Result<(), ModelError> {
        validation::max_chars("title", &self.title, TITLE_MAX)?;
        validation::max_chars("description", &self.description, DESCRIPTION_MAX)?;
        Ok(())
    }

    fn into_active_model(self, id: Option<i32>) -> ActiveModel {
        ActiveModel {
            id: id.map(Set).unwrap_or(NotSet),
            title: Set(self.title),
            description: Set(self.description),
            done: Set(self.done),
        }
    }
}

pub async fn create(db: &DatabaseConnection, input: Input) -> Result<Model, ModelError> {
    crud::insert(db, input.into_active_model(None)).await
}

/// All tasks in insertion order.
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

/// To-do items: title, description, done flag.
pub struct Task;

#[async_trait]
impl ResourceKind for Task {
    type Input = Input;
    type Record = Model;

    const NAME: &'static str = "Task";
    const COLLECTION: &'static str = "tasks";
    const ITEM_READ: bool = true;

    fn validate(input: &Input) -> Result<(), ModelError> { input.validate() }

    fn record_id(record: &Model) -> i32 { record.id }

    fn assemble(id: i32, input: Input) -> Model {
        Model { id, title: input.title, description: input.description, done: input.done }
    }

    async fn migrate(db: &DatabaseConnection) -> Result<(), ModelError> {
        Ok(TasksMigrator::up(db, None).await?)
    }

    async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> { list(db).await }

    async fn create(db: &DatabaseConnection, input: Input) -> Result<Model, ModelError> { create(db, input).await }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> { get(db, id).await }

    async fn replace(db: &DatabaseConnection, id: i32, input: Input) -> Result<Option<Model>, ModelError> {
        replace(db, id, input).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> { delete(db, id).await }
}

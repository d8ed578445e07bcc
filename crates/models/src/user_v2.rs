use async_trait::async_trait;
use migration::{MigratorTrait, UsersV2Migrator};
use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{crud, errors::ModelError, resource::ResourceKind, validation};

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 32;
pub const EMAIL_MAX: usize = 90;
pub const ADDRESS_MIN: usize = 5;
pub const ADDRESS_MAX: usize = 128;

/// Profile-style user row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birthday: Date,
    pub email: String,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// `birthday` travels as `YYYY-MM-DD`; anything else fails deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub first_name: String,
    pub last_name: String,
    pub birthday: Date,
    pub email: String,
    pub address: String,
}

impl Input {
    pub fn validate(&self) -> Result<(), ModelError> {
        validation::char_range("first_name", &self.first_name, NAME_MIN, NAME_MAX)?;
        validation::char_range("last_name", &self.last_name, NAME_MIN, NAME_MAX)?;
        validation::email("email", &self.email, EMAIL_MAX)?;
        validation::char_range("address", &self.address, ADDRESS_MIN, ADDRESS_MAX)?;
        Ok(())
    }

    fn into_active_model(self, id: Option<i32>) -> ActiveModel {
        ActiveModel {
            id: id.map(Set).unwrap_or(NotSet),
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            birthday: Set(self.birthday),
            email: Set(self.email),
            address: Set(self.address),
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

pub struct UserV2;

#[async_trait]
impl ResourceKind for UserV2 {
    type Input = Input;
    type Record = Model;

    const NAME: &'static str = "User";
    const COLLECTION: &'static str = "users";
    const ITEM_READ: bool = false;

    fn validate(input: &Input) -> Result<(), ModelError> { input.validate() }

    fn record_id(record: &Model) -> i32 { record.id }

    fn assemble(id: i32, input: Input) -> Model {
        Model {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            birthday: input.birthday,
            email: input.email,
            address: input.address,
        }
    }

    async fn migrate(db: &DatabaseConnection) -> Result<(), ModelError> {
        Ok(UsersV2Migrator::up(db, None).await?)
    }

    async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> { list(db).await }

    async fn create(db: &DatabaseConnection, input: Input) -> Result<Model, ModelError> { create(db, input).await }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> { get(db, id).await }

    async fn replace(db: &DatabaseConnection, id: i32, input: Input) -> Result<Option<Model>, ModelError> {
        replace(db, id, input).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> { delete(db, id).await }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn input() -> Input {
        Input {
            first_name: "Anna".into(),
            last_name: "Petrova".into(),
            birthday: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            email: "anna@example.com".into(),
            address: "Moscow, Tverskaya 1".into(),
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn short_names_and_address_are_rejected() {
        let short_first = Input { first_name: "A".into(), ..input() };
        assert!(matches!(short_first.validate(), Err(ModelError::Validation { field: "first_name", .. })));
        let short_last = Input { last_name: "B".into(), ..input() };
        assert!(matches!(short_last.validate(), Err(ModelError::Validation { field: "last_name", .. })));
        let short_addr = Input { address: "abcd".into(), ..input() };
        assert!(matches!(short_addr.validate(), Err(ModelError::Validation { field: "address", .. })));
    }

    #[test]
    fn email_must_be_well_formed() {
        let bad = Input { email: "anna.example.com".into(), ..input() };
        assert!(matches!(bad.validate(), Err(ModelError::Validation { field: "email", .. })));
    }

    #[test]
    fn birthday_parses_from_iso_date() {
        let body = r#"{"first_name":"Anna","last_name":"Petrova","birthday":"1990-05-17","email":"anna@example.com","address":"Moscow, Tverskaya 1"}"#;
        let parsed: Input = serde_json::from_str(body).unwrap();
        assert_eq!(parsed, input());
    }

    #[test]
    fn malformed_birthday_fails_to_parse() {
        let body = r#"{"first_name":"Anna","last_name":"Petrova","birthday":"17.05.1990","email":"anna@example.com","address":"Moscow, Tverskaya 1"}"#;
        assert!(serde_json::from_str::<Input>(body).is_err());
    }
}

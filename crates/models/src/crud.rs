//! Single-statement CRUD shared by every entity with an `i32` primary key.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PrimaryKeyTrait,
    QueryOrder,
};

use crate::errors::ModelError;

type ModelOf<A> = <<A as ActiveModelTrait>::Entity as EntityTrait>::Model;

pub async fn insert<A>(db: &DatabaseConnection, am: A) -> Result<ModelOf<A>, ModelError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    ModelOf<A>: IntoActiveModel<A>,
{
    Ok(am.insert(db).await?)
}

/// All rows ordered by `order` ascending.
pub async fn list<E: EntityTrait>(db: &DatabaseConnection, order: E::Column) -> Result<Vec<E::Model>, ModelError> {
    Ok(E::find().order_by_asc(order).all(db).await?)
}

pub async fn find<E>(db: &DatabaseConnection, id: i32) -> Result<Option<E::Model>, ModelError>
where
    E: EntityTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Ok(E::find_by_id(id).one(db).await?)
}

/// Overwrite the row `am` points at; `None` when no row matched.
pub async fn replace<A>(db: &DatabaseConnection, am: A) -> Result<Option<ModelOf<A>>, ModelError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    ModelOf<A>: IntoActiveModel<A>,
{
    match am.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// `true` when a row was removed.
pub async fn delete<E>(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError>
where
    E: EntityTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let res = E::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

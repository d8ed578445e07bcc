use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    /// `<Name> not found with <id> id`
    pub fn not_found(entity: &str, id: i32) -> Self { Self::NotFound(format!("{entity} not found with {id} id")) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation { field, reason } => Self::Validation { field, reason },
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

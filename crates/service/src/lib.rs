//! Service layer providing the CRUD operations of one resource kind.
//! - Separates business rules (id checks, validation, not-found policy) from storage.
//! - Storage sits behind `ResourceRepository`; `SeaOrmRepository` is the real one.

pub mod errors;
pub mod resource;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
#[cfg(test)]
pub mod test_support;

pub use resource::repository::{ResourceRepository, SeaOrmRepository};
pub use resource::service::ResourceService;

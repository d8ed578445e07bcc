pub mod errors;
pub mod db;
pub mod crud;
pub mod validation;
pub mod resource;
pub mod user_v1;
pub mod user_v2;
pub mod task;

pub use resource::ResourceKind;
pub use task::Task;
pub use user_v1::UserV1;
pub use user_v2::UserV2;

#[cfg(test)]
mod tests;

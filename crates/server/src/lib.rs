pub mod errors;
pub mod extract;
pub mod launcher;
pub mod routes;
pub mod startup;

pub use launcher::launch;
pub use startup::{app, run};

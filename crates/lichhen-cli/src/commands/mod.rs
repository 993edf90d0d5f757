//! Command implementations.

pub mod batch;
pub mod config;
pub mod extract;
pub mod predict;

pub use self::batch::execute_batch;
pub use self::config::execute_config;
pub use self::extract::execute_extract;
pub use self::predict::execute_predict;

pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repo;
pub mod store;
pub mod testing;

pub use config::Config;
pub use error::ChirpyError;
pub use logging::init_logging;
pub use store::{Document, DocumentStore, FileStore};
pub use testing::TestStore;

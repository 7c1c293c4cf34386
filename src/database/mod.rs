pub mod postgres_service;
pub mod store;
pub mod update_builder;

pub use postgres_service::DatabaseService;
pub use store::NotificationStore;
pub use update_builder::UpdateBuilder;

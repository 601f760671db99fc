//! MongoDB storage layer

pub mod mongo;
pub mod schemas;
mod store;

pub use mongo::{IntoIndexes, MongoClient, MongoCollection, MutMetadata};
pub use store::ContentStore;

// Service exports
pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::{InMemoryStore, SeedData};
pub use postgres::PostgresClient;
pub use store::{AnswerStore, LocationStore, PlaceStore, QuestionStore, Store, StoreError};

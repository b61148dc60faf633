// Service exports
pub mod matching;
pub mod memory;
pub mod postgres;
pub mod store;

pub use matching::{find_matches, MatchingError};
pub use memory::InMemoryStore;
pub use postgres::PostgresStore;
pub use store::{NoticeStore, ProfileStore, StoreError};

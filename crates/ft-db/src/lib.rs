pub mod error;
pub mod stores;

pub use error::{DbError, Result};
pub use stores::memory_user_store::MemoryUserStore;
pub use stores::sqlite_user_store::SqliteUserStore;
pub use stores::user_store::UserStore;

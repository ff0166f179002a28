//! Persistence layer: the profile store contract and its two backends.

pub mod init;
pub mod memory;
pub mod pg;
pub mod players;

pub use init::DbPool;
pub use memory::MemoryProfileStore;
pub use pg::PgProfileStore;
pub use players::{Profile, ProfilePatch, ProfileStore, StoreError};

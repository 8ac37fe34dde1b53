//! State queries, action dispatch and the in-memory store
//!
//! The sidebar never mutates folder state directly. It reads through
//! [`FolderState`] and requests changes through [`ActionDispatcher`]; the
//! store decides what those requests do.

mod actions;
mod memory;
mod state_file;
mod traits;

pub use actions::{FolderAction, PendingModal};
pub use memory::InMemoryFolderStore;
pub use state_file::StateFile;
pub use traits::{ActionDispatcher, FolderState};

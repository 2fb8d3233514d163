//! In-memory data stores
//!
//! Each store owns its map behind an `Arc<Mutex<..>>` so multiple instances
//! can coexist (tests construct their own) instead of sharing process-wide
//! globals. Guards are held only across map operations, never across an
//! await point.

use thiserror::Error;

mod cart;
mod catalog;
mod users;

pub use cart::CartStore;
pub use catalog::WorksheetStore;
pub use users::UserStore;

/// Store-level failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    NotFound(String),
}

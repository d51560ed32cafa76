//! rowlab-core: shared foundation for the rowlab crates.
//!
//! Provides the unified error type and the typed record identifier used
//! by the persistence layer and the CLI procedures.

pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::RecordId;

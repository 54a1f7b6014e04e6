//! This crate contains the shared Care4All data types: the NGO record shown
//! by the verification card, its demo fallback, outbound link builders and
//! card preferences.

pub mod directory;
pub mod links;
pub mod ngo;
pub mod prefs;

pub use directory::Directory;
pub use ngo::Ngo;

/// Errors raised while loading NGO records.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid NGO data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate NGO id: {0}")]
    DuplicateId(String),
}

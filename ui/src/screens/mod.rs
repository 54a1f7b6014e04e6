//! Screens of the demo shell hosting the verification card.
pub mod directory;
pub mod profile;

//! Shared components. `verification_card` is the Care4All overlay; the rest
//! are the primitives it and the screens are built from.
pub mod empty_state;
pub mod icons;
pub mod pico;
pub mod remote_image;
pub mod toaster;
pub mod verification_card;

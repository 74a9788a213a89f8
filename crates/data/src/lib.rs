//! Loading and validation for the card catalog document.

pub mod load;

pub use load::*;

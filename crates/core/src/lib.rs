//! Core deck-building logic. Keep this crate free of IO and platform concerns.

pub mod builder;
pub mod cards;
pub mod catalog;
pub mod deck;
pub mod events;
pub mod gesture;
pub mod history;
pub mod matcher;
pub mod render;
pub mod voice;

pub use builder::*;
pub use cards::*;
pub use catalog::*;
pub use deck::*;
pub use events::*;
pub use gesture::*;
pub use history::*;
pub use matcher::*;
pub use render::*;
pub use voice::*;

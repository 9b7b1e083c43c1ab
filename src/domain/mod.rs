//! Доменная модель блэкджека: карты, колода, руки, фишки, игрок и казино.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;

/// Порядковый номер раунда в рамках сессии.
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;

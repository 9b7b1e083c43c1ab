use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Колода карт. Верх колоды – конец вектора.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Полная 52-карточная колода, порядок: ранг за рангом (A..K),
    /// внутри ранга – масти ♥ ♣ ♦ ♠.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Вернуть колоду в полное, неперемешанное состояние.
    pub fn reset(&mut self) {
        *self = Self::standard_52();
    }

    /// Перемешать текущие карты. Случайность даёт переданный RNG.
    pub fn shuffle_with<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды (при `face_down` – рубашкой вверх).
    /// `None`, если колода пуста.
    pub fn draw(&mut self, face_down: bool) -> Option<Card> {
        let mut card = self.cards.pop()?;
        if face_down {
            card.hide();
        } else {
            card.reveal();
        }
        Some(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard_52()
    }
}

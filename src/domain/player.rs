use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Hand;

/// Игрок: имя, баланс фишек и текущая рука.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    name: String,
    chips: Chips,
    hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: Chips) -> Self {
        Self {
            name: name.into(),
            chips,
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chips(&self) -> Chips {
        self.chips
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn receive_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Изменить баланс на `delta` (отрицательное значение – проигрыш).
    pub fn add_chips(&mut self, delta: i64) {
        self.chips = self.chips.apply_delta(delta);
    }

    pub fn has_chips(&self) -> bool {
        !self.chips.is_zero()
    }

    pub fn can_wager(&self, amount: Chips) -> bool {
        self.chips >= amount
    }
}

/// Казино (дилер). Фишек нет, только рука.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct House {
    hand: Hand,
}

impl House {
    pub fn new() -> Self {
        Self { hand: Hand::new() }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn receive_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub fn reveal_hand(&mut self) {
        self.hand.reveal();
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }
}

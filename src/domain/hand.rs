use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Лучший возможный итог руки; всё, что выше, – перебор.
pub const BLACKJACK: u32 = 21;

/// Туз считается за 11, пока набранная сумма меньше этого порога.
pub const ACE_HIGH_LIMIT: u32 = 11;

/// Значение руки. Пока в руке есть закрытая карта – `Unknown`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandValue {
    Known(u32),
    Unknown,
}

impl HandValue {
    pub fn known(self) -> Option<u32> {
        match self {
            HandValue::Known(v) => Some(v),
            HandValue::Unknown => None,
        }
    }

    pub fn is_bust(self) -> bool {
        matches!(self, HandValue::Known(v) if v > BLACKJACK)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandValue::Known(v) => write!(f, "{v}"),
            HandValue::Unknown => write!(f, "--"),
        }
    }
}

/// Рука игрока или казино: карты в порядке получения.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
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

    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(Card::is_hidden)
    }

    /// Ограничений на размер нет – добор ограничивает политика, а не рука.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Натуральный блэкджек: ровно две карты, туз + десятка/картинка.
    /// Три карты на 21 блэкджеком не считаются.
    pub fn is_natural_blackjack(&self) -> bool {
        match self.cards.as_slice() {
            [a, b] => {
                (a.is_ace() && b.rank().is_ten_valued()) || (b.is_ace() && a.rank().is_ten_valued())
            }
            _ => false,
        }
    }

    /// Сумма очков с нарастающим итогом: туз идёт за 11, только если
    /// набранное до него меньше 11. Результат зависит от порядка карт.
    pub fn total_value(&self) -> HandValue {
        if self.has_hidden() {
            return HandValue::Unknown;
        }

        let total = self
            .cards
            .iter()
            .fold(0, |acc, card| acc + card.face_value(acc < ACE_HIGH_LIMIT));

        HandValue::Known(total)
    }

    pub fn is_bust(&self) -> bool {
        self.total_value().is_bust()
    }

    /// Открыть все карты. Повторный вызов ничего не меняет.
    pub fn reveal(&mut self) {
        for card in self.cards.iter_mut() {
            card.reveal();
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .cards
            .iter()
            .map(|c| format!("{:^5}", c.to_string()))
            .collect();
        write!(f, "{}", rendered.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(cards: &[&str]) -> Hand {
        Hand::from_cards(cards.iter().map(|s| s.parse().unwrap()).collect())
    }

    #[test]
    fn ace_counts_high_until_running_total_reaches_eleven() {
        assert_eq!(hand(&["Ah", "6c"]).total_value(), HandValue::Known(17));
        assert_eq!(hand(&["6c", "5d", "Ah"]).total_value(), HandValue::Known(12));
        // Два туза: второй уже идёт за 1.
        assert_eq!(hand(&["Ah", "As"]).total_value(), HandValue::Known(12));
    }

    #[test]
    fn total_is_order_dependent() {
        // Туз первым – 11, дальше 9 + 5 уводят в перебор.
        assert_eq!(hand(&["Ah", "9c", "5d"]).total_value(), HandValue::Known(25));
        // Тот же набор, туз последним – идёт за 1.
        assert_eq!(hand(&["9c", "5d", "Ah"]).total_value(), HandValue::Known(15));
    }

    #[test]
    fn empty_hand_is_zero() {
        assert_eq!(Hand::new().total_value(), HandValue::Known(0));
        assert!(!Hand::new().is_natural_blackjack());
    }

    #[test]
    fn unknown_value_renders_as_dashes() {
        assert_eq!(HandValue::Unknown.to_string(), "--");
        assert_eq!(HandValue::Known(19).to_string(), "19");
        assert!(!HandValue::Unknown.is_bust());
    }
}

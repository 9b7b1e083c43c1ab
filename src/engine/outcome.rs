use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Итог раунда с точки зрения игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Натуральный блэкджек на первых двух картах, платится сразу.
    PlayerBlackjack,
    PlayerWin,
    /// Казино перебрало.
    HouseBust,
    /// Игрок перебрал.
    PlayerBust,
    HouseWin,
    Push,
}

impl RoundOutcome {
    pub fn is_player_win(self) -> bool {
        matches!(
            self,
            RoundOutcome::PlayerBlackjack | RoundOutcome::PlayerWin | RoundOutcome::HouseBust
        )
    }

    pub fn is_house_win(self) -> bool {
        matches!(self, RoundOutcome::PlayerBust | RoundOutcome::HouseWin)
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RoundOutcome::PlayerBlackjack => "Блэкджек! Вы выиграли.",
            RoundOutcome::PlayerWin => "Вы выиграли!",
            RoundOutcome::HouseBust => "Казино перебрало. Вы выиграли!",
            RoundOutcome::PlayerBust => "Перебор. Вы проиграли!",
            RoundOutcome::HouseWin => "Казино выигрывает.",
            RoundOutcome::Push => "Ничья.",
        };
        write!(f, "{msg}")
    }
}

/// Изменение баланса игрока по итогу раунда.
pub fn settlement_delta(outcome: RoundOutcome, wager: Chips) -> i64 {
    let w = i64::try_from(wager.0).unwrap_or(i64::MAX);
    match outcome {
        RoundOutcome::PlayerBlackjack => w.saturating_mul(2),
        RoundOutcome::PlayerWin | RoundOutcome::HouseBust => w,
        RoundOutcome::PlayerBust | RoundOutcome::HouseWin => -w,
        RoundOutcome::Push => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settlement_by_outcome() {
        let w = Chips(25);
        assert_eq!(settlement_delta(RoundOutcome::PlayerBlackjack, w), 50);
        assert_eq!(settlement_delta(RoundOutcome::PlayerWin, w), 25);
        assert_eq!(settlement_delta(RoundOutcome::HouseBust, w), 25);
        assert_eq!(settlement_delta(RoundOutcome::PlayerBust, w), -25);
        assert_eq!(settlement_delta(RoundOutcome::HouseWin, w), -25);
        assert_eq!(settlement_delta(RoundOutcome::Push, w), 0);
    }

    #[test]
    fn win_and_loss_classification_is_exclusive() {
        for o in [
            RoundOutcome::PlayerBlackjack,
            RoundOutcome::PlayerWin,
            RoundOutcome::HouseBust,
            RoundOutcome::PlayerBust,
            RoundOutcome::HouseWin,
            RoundOutcome::Push,
        ] {
            assert!(!(o.is_player_win() && o.is_house_win()));
        }
        assert!(!RoundOutcome::Push.is_player_win());
        assert!(!RoundOutcome::Push.is_house_win());
    }
}

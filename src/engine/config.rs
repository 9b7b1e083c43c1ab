use serde::{Deserialize, Serialize};

use crate::domain::Chips;

pub use crate::domain::hand::BLACKJACK;

/// Казино добирает, пока его сумма не больше этого значения
/// (и не больше суммы игрока).
pub const HOUSE_HIT_CEILING: u32 = 16;

/// Стартовый баланс нового игрока.
pub const STARTING_CHIPS: Chips = Chips(100);

/// Параметры сессии. Правила раздачи не настраиваются.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub starting_chips: Chips,
    /// Минимальная ставка за раунд.
    pub min_wager: Chips,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            min_wager: Chips(1),
        }
    }
}

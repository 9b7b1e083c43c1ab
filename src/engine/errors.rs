use crate::domain::Chips;
use crate::engine::game_loop::RoundPhase;

use thiserror::Error;

/// Ошибки движка блэкджека.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Недопустимая ставка {wager}: доступно {available} фишек")]
    InvalidWager { wager: Chips, available: Chips },

    #[error("В колоде не осталось карт")]
    EmptyDeck,

    #[error("Игрок не зарегистрирован")]
    PlayerNotRegistered,

    #[error("Действие `{action}` недопустимо в фазе {phase}")]
    IllegalAction {
        action: &'static str,
        phase: RoundPhase,
    },

    #[error("Рука казино ещё закрыта")]
    HouseHandHidden,

    #[error("Раунд уже рассчитан")]
    RoundAlreadySettled,

    #[error("У игрока закончились фишки, игра окончена")]
    GameOver,
}
